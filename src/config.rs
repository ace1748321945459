//! JSON configuration for the command-line tools.
//!
//! ```json
//! {
//!   "inputs": ["sheets/match-12.pdf"],
//!   "output": { "json": "out/match-12.json", "debug_dir": "out/debug" },
//!   "params": { "scale": 7, "peak_frac": 0.18, "debug": true },
//!   "tesseract": { "text_lang": "fra" }
//! }
//! ```
use crate::error::{Result, RosterError};
use crate::extractor::RosterParams;
use crate::ocr::TesseractCli;
use crate::rasterize::Pdftoppm;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Combined JSON report; stdout when absent.
    pub json: Option<PathBuf>,
    /// Root for overlays and cell dumps, one subdirectory per document.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub inputs: Vec<PathBuf>,
    pub output: OutputConfig,
    pub params: RosterParams,
    pub tesseract: TesseractCli,
    pub pdftoppm: Pdftoppm,
}

impl RuntimeConfig {
    /// Defaults with `inputs` taken from the command line.
    pub fn for_inputs(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        RosterError::InvalidOption(format!("failed to read config {}: {e}", path.display()))
    })?;
    let config: RuntimeConfig = serde_json::from_str(&contents).map_err(|e| {
        RosterError::InvalidOption(format!("failed to parse config {}: {e}", path.display()))
    })?;
    config.params.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tmp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_partial_config() {
        let path = write_tmp(
            "emarque-config",
            r#"{
                "inputs": ["a.pdf"],
                "params": {"peak_frac": 0.2},
                "tesseract": {"text_lang": "fra+eng"}
            }"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.inputs, vec![PathBuf::from("a.pdf")]);
        assert_eq!(config.params.peak_frac, 0.2);
        assert_eq!(config.params.scale, 7);
        assert_eq!(config.tesseract.text_lang, "fra+eng");
        assert_eq!(config.tesseract.digit_lang, "eng");
        assert_eq!(config.pdftoppm.binary, "pdftoppm");
        assert!(config.output.json.is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let path = write_tmp("emarque-config-bad", r#"{"params": {"scale": 1}}"#);
        assert!(matches!(load_config(&path), Err(RosterError::InvalidOption(_))));
        let _ = fs::remove_file(path);
        assert!(load_config(Path::new("/nonexistent/emarque.json")).is_err());
    }
}
