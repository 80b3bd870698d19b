use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    /// Images to process, in order.
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub detector: DetectorParams,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    /// Directory receiving one `<stem>.json` report per input.
    pub dir: PathBuf,
    /// Also write `<stem>.txt` with one `x1 y1 x2 y2` line per segment.
    #[serde(default)]
    pub segments_txt: bool,
}

impl DetectOutputConfig {
    fn stem(input: &Path) -> String {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    pub fn report_path(&self, input: &Path) -> PathBuf {
        self.dir.join(format!("{}.json", Self::stem(input)))
    }

    pub fn segments_path(&self, input: &Path) -> PathBuf {
        self.dir.join(format!("{}.txt", Self::stem(input)))
    }
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<DetectToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_detector_defaults() {
        let config = parse_config(
            r#"{ "inputs": ["a/b/house.png"], "output": { "dir": "out" } }"#,
        )
        .unwrap();
        assert_eq!(config.inputs.len(), 1);
        assert_eq!(config.detector, DetectorParams::default());
        assert!(!config.output.segments_txt);
        assert_eq!(
            config.output.report_path(&config.inputs[0]),
            Path::new("out").join("house.json")
        );
        assert_eq!(
            config.output.segments_path(&config.inputs[0]),
            Path::new("out").join("house.txt")
        );
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{ "inputs": [] }"#).is_err());
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/detect.json")).unwrap_err();
        assert!(err.contains("/nonexistent/detect.json"), "{err}");
    }
}
