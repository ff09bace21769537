//! Test-bench runner configuration

use std::path::PathBuf;

/// Configuration handed to the hardware test-bench runner.
///
/// Passed by value to whoever drives the runner; there is no shared global
/// configuration. The runner forwards it to the VHDL test bench as a single
/// generics string (see [`TestbenchConfig::encode_generics`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestbenchConfig {
    /// BitStream the simulation consumes
    pub input_path: PathBuf,
    /// BitStream the simulation is expected to produce
    pub output_path: PathBuf,
}

impl TestbenchConfig {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input_path: P, output_path: Q) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Encodes the configuration as the flat `key:value` list the test
    /// bench's generics parser expects: `"key1:value1, key2:value2"`.
    pub fn encode_generics(&self) -> String {
        let pairs = [
            ("input_path", self.input_path.display().to_string()),
            ("output_path", self.output_path.display().to_string()),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
