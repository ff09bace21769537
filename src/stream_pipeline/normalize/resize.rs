//! Area-averaging resize.
//!
//! Each destination pixel averages the source samples its footprint overlaps,
//! weighted by overlap area. For downscaling this is the anti-aliasing "area"
//! interpolation of the original tool; for a 1:1 scale it is an exact
//! identity, which the idempotence of normalization relies on.

use crate::stream_pipeline::raster::types::RasterImage;

pub(crate) fn resize_area(src: &RasterImage, dst_height: usize, dst_width: usize) -> RasterImage {
    let scale_y = src.height as f64 / dst_height as f64;
    let scale_x = src.width as f64 / dst_width as f64;

    let mut data = vec![0u8; dst_height * dst_width * src.channels];

    for oy in 0..dst_height {
        let y0 = oy as f64 * scale_y;
        let y1 = y0 + scale_y;
        for ox in 0..dst_width {
            let x0 = ox as f64 * scale_x;
            let x1 = x0 + scale_x;

            for channel in 0..src.channels {
                let mut acc = 0.0;
                let mut total_area = 0.0;

                let mut sy = y0.floor() as usize;
                while (sy as f64) < y1 && sy < src.height {
                    let wy = (y1.min((sy + 1) as f64) - y0.max(sy as f64)).max(0.0);
                    let mut sx = x0.floor() as usize;
                    while (sx as f64) < x1 && sx < src.width {
                        let wx = (x1.min((sx + 1) as f64) - x0.max(sx as f64)).max(0.0);
                        let weight = wy * wx;
                        acc += src.sample(sy, sx, channel) as f64 * weight;
                        total_area += weight;
                        sx += 1;
                    }
                    sy += 1;
                }

                let value = (acc / total_area).round() as u8;
                data[(oy * dst_width + ox) * src.channels + channel] = value;
            }
        }
    }

    RasterImage {
        height: dst_height,
        width: dst_width,
        channels: src.channels,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(height: usize, width: usize, data: Vec<u8>) -> RasterImage {
        RasterImage::from_samples(height, width, 1, data).unwrap()
    }

    #[test]
    fn identity_at_equal_size() {
        let src = raster(2, 2, vec![10, 20, 30, 40]);
        let out = resize_area(&src, 2, 2);
        assert_eq!(out, src);
    }

    #[test]
    fn integer_downscale_averages_blocks() {
        // 2x2 -> 1x1 averages all four samples.
        let src = raster(2, 2, vec![0, 10, 20, 30]);
        let out = resize_area(&src, 1, 1);
        assert_eq!(out.data, vec![15]);
    }

    #[test]
    fn fractional_downscale_weights_partial_pixels() {
        // 3 columns -> 2 columns: dest 0 covers col 0 fully and half of col 1.
        let src = raster(1, 3, vec![0, 90, 120]);
        let out = resize_area(&src, 1, 2);
        // (0*1 + 90*0.5) / 1.5 = 30, (90*0.5 + 120*1) / 1.5 = 110
        assert_eq!(out.data, vec![30, 110]);
    }

    #[test]
    fn upscale_replicates_source_samples() {
        let src = raster(1, 1, vec![200]);
        let out = resize_area(&src, 2, 2);
        assert_eq!(out.data, vec![200; 4]);
    }
}
