use crate::dashboard::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

/// One survey export.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    /// Defaults to the stem of the file name.
    pub year: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// csv or xlsx. Defaults to the extension of the file.
    pub provider: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// The directory against which the file paths are resolved.
    #[serde(rename = "dataDirectory")]
    pub data_directory: Option<String>,
    #[serde(default)]
    pub sources: Vec<FileSource>,
    /// The charts to render. All of them when empty.
    #[serde(default)]
    pub charts: Vec<String>,
    pub year: Option<String>,
    #[serde(rename = "compareYear")]
    pub compare_year: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

pub fn parse_config(contents: &str) -> DashboardResult<DashboardConfig> {
    let config: DashboardConfig = serde_json::from_str(contents).context(ParsingJsonSnafu {})?;
    Ok(config)
}

/// Reads the configuration file. Relative data paths are resolved against the
/// directory of the file unless it names its own data directory.
pub fn read_config(path: &str) -> DashboardResult<DashboardConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let mut config = parse_config(&contents)?;
    debug!("read_config: {:?}", config);
    let parent = Path::new(path)
        .parent()
        .map(|p| p.display().to_string())
        .filter(|p| !p.is_empty());
    config.data_directory = match (config.data_directory.take(), parent) {
        (Some(dir), Some(parent)) if Path::new(&dir).is_relative() => {
            let p: PathBuf = [parent, dir].iter().collect();
            Some(p.display().to_string())
        }
        (Some(dir), _) => Some(dir),
        (None, parent) => parent,
    };
    Ok(config)
}

pub fn read_summary(path: &str) -> DashboardResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_summary: {} charts", js["charts"].as_array().map_or(0, |l| l.len()));
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"{
                "dataDirectory": "data",
                "sources": [
                    {"year": "2024", "filePath": "survey-2024.xlsx", "provider": "xlsx", "excelWorksheetName": "Results"},
                    {"filePath": "2025.csv"}
                ],
                "charts": ["age-group"],
                "year": "2025",
                "compareYear": "2024",
                "outputPath": "out.json"
            }"#,
        )
        .unwrap();
        assert_eq!(config.data_directory, Some("data".to_string()));
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].year, Some("2024".to_string()));
        assert_eq!(
            config.sources[0].excel_worksheet_name,
            Some("Results".to_string())
        );
        assert_eq!(config.sources[1].provider, None);
        assert_eq!(config.charts, vec!["age-group".to_string()]);
        assert_eq!(config.compare_year, Some("2024".to_string()));
        assert_eq!(config.output_path, Some("out.json".to_string()));
    }

    #[test]
    fn parse_minimal_config() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn parse_broken_config() {
        assert!(matches!(
            parse_config(r#"{"sources": 3}"#),
            Err(DashboardError::ParsingJson { .. })
        ));
    }
}
