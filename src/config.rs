use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for decant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecantConfig {
    /// Path to the PDF file to extract
    pub input: PathBuf,
    /// Path to the output text file; derived from the input name when unset
    pub output: Option<PathBuf>,
    /// Enable verbose per-page progress on stdout
    pub verbose: bool,
}

impl DecantConfig {
    /// Validates the configuration, ensuring an input path is set and exists.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.input.as_os_str().is_empty() {
            anyhow::bail!("No input PDF specified (pass a path or set `input` in decant.toml)");
        }
        if !self.input.exists() {
            anyhow::bail!("Input file does not exist: {:?}", self.input);
        }
        Ok(())
    }

    /// Attempts to load configuration from `decant.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("decant.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// Effective output path: the explicit override if set, otherwise the
    /// input file name with spaces replaced by underscores and a `.txt`
    /// extension, next to the input file.
    pub fn resolved_output(&self) -> PathBuf {
        if let Some(ref output) = self.output {
            return output.clone();
        }

        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().replace(' ', "_"))
            .unwrap_or_else(|| "output".to_string());

        self.input.with_file_name(format!("{}.txt", stem))
    }
}

impl Default for DecantConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            verbose: false,
        }
    }
}
