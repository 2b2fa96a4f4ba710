use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use survey_charts::builder::DatasetBuilder;

use crate::dashboard::io_common::year_of_file;
use crate::dashboard::io_csv::read_csv_survey;
use crate::dashboard::io_xlsx::read_excel_survey;
use crate::dashboard::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Xlsx,
}

impl InputType {
    pub fn parse(input_type: &str) -> DashboardResult<InputType> {
        match input_type.to_lowercase().as_str() {
            "csv" => Ok(InputType::Csv),
            "xlsx" | "excel" => Ok(InputType::Xlsx),
            _ => UnknownInputTypeSnafu { input_type }.fail(),
        }
    }

    /// Guesses the type from the extension of the file, csv by default.
    fn of_file(path: &str) -> InputType {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => InputType::Xlsx,
            _ => InputType::Csv,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
struct YearSource {
    path: String,
    input_type: InputType,
    worksheet_name: Option<String>,
}

/// The survey exports, one per year. Each export is read at most once.
pub struct SurveyRepository {
    sources: BTreeMap<String, YearSource>,
    cache: HashMap<String, SurveyDataset>,
}

impl SurveyRepository {
    pub fn new(config: &DashboardConfig) -> DashboardResult<SurveyRepository> {
        let mut sources: BTreeMap<String, YearSource> = BTreeMap::new();
        for cfs in config.sources.iter() {
            let path = match &config.data_directory {
                Some(dir) => {
                    let p: PathBuf = [dir.as_str(), cfs.file_path.as_str()].iter().collect();
                    p.display().to_string()
                }
                None => cfs.file_path.clone(),
            };
            let year = match cfs.year.clone().or_else(|| year_of_file(&cfs.file_path)) {
                Some(year) => year,
                None => whatever!("Cannot find the year of {}", cfs.file_path),
            };
            let input_type = match &cfs.provider {
                Some(provider) => InputType::parse(provider)?,
                None => InputType::of_file(&path),
            };
            info!(
                "SurveyRepository: year {} from {} ({:?})",
                year, path, input_type
            );
            if sources.contains_key(&year) {
                warn!("SurveyRepository: year {} is listed twice, keeping the last source", year);
            }
            sources.insert(
                year,
                YearSource {
                    path,
                    input_type,
                    worksheet_name: cfs.excel_worksheet_name.clone(),
                },
            );
        }
        Ok(SurveyRepository {
            sources,
            cache: HashMap::new(),
        })
    }

    /// The configured years, in ascending order.
    pub fn available_years(&self) -> Vec<String> {
        self.sources.keys().cloned().collect()
    }

    /// The responses of a year. A year without a source has no responses.
    pub fn dataset(&mut self, year: &str) -> BDashboardResult<&SurveyDataset> {
        match self.cache.entry(year.to_string()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let dataset = load_year(&self.sources, year)?;
                Ok(e.insert(dataset))
            }
        }
    }
}

fn load_year(
    sources: &BTreeMap<String, YearSource>,
    year: &str,
) -> BDashboardResult<SurveyDataset> {
    let mut builder = DatasetBuilder::new(year);
    let source = match sources.get(year) {
        Some(source) => source,
        None => {
            warn!("load_year: no source for year {}", year);
            return Ok(builder.build());
        }
    };
    info!("load_year: reading {:?}", source.path);
    let rows = match source.input_type {
        InputType::Csv => read_csv_survey(&source.path)?,
        InputType::Xlsx => read_excel_survey(&source.path, source.worksheet_name.as_deref())?,
    };
    for fields in rows {
        builder.add_fields(fields);
    }
    let dataset = builder.build();
    info!("load_year: year {}: {} responses", year, dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(year: Option<&str>, file_path: &str) -> FileSource {
        FileSource {
            year: year.map(|y| y.to_string()),
            file_path: file_path.to_string(),
            provider: None,
            excel_worksheet_name: None,
        }
    }

    #[test]
    fn input_types() {
        assert_eq!(InputType::parse("CSV").unwrap(), InputType::Csv);
        assert_eq!(InputType::parse("xlsx").unwrap(), InputType::Xlsx);
        assert!(matches!(
            InputType::parse("ods"),
            Err(DashboardError::UnknownInputType { .. })
        ));
        assert_eq!(InputType::of_file("a/2024.XLSX"), InputType::Xlsx);
        assert_eq!(InputType::of_file("a/2024"), InputType::Csv);
    }

    #[test]
    fn years_are_sorted() {
        let config = DashboardConfig {
            sources: vec![
                source(None, "2025.csv"),
                source(None, "2023.csv"),
                source(Some("2024"), "export.xlsx"),
            ],
            ..Default::default()
        };
        let repo = SurveyRepository::new(&config).unwrap();
        assert_eq!(repo.available_years(), vec!["2023", "2024", "2025"]);
    }

    #[test]
    fn unknown_year_is_empty() {
        let mut repo = SurveyRepository::new(&DashboardConfig::default()).unwrap();
        let dataset = repo.dataset("2030").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.year(), "2030");
    }

    #[test]
    fn reads_and_caches_a_year() {
        let dir = std::env::temp_dir().join(format!("surveydash-repo-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("2025.csv");
        fs::write(
            &file,
            "Response ID,Which age group do you belong to?\n1,18 - 28\n,\n2,29 - 44\n",
        )
        .unwrap();
        let config = DashboardConfig {
            data_directory: Some(dir.display().to_string()),
            sources: vec![source(None, "2025.csv")],
            ..Default::default()
        };
        let mut repo = SurveyRepository::new(&config).unwrap();
        let fingerprint = {
            let dataset = repo.dataset("2025").unwrap();
            assert_eq!(dataset.len(), 2);
            assert_eq!(dataset.responses()[1].raw("ageGroup"), "29 - 44");
            dataset.fingerprint().to_string()
        };
        // Served from the cache even when the file is gone.
        fs::remove_file(&file).unwrap();
        assert_eq!(repo.dataset("2025").unwrap().fingerprint(), fingerprint);
        fs::remove_dir_all(&dir).unwrap();
    }
}
