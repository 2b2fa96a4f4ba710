use std::collections::HashMap;

pub use crate::config::*;

/// A builder for assembling the responses of one survey year.
///
/// Loaders and tests use it to create datasets without going through a file.
///
/// ```
/// pub use survey_charts::builder::DatasetBuilder;
///
/// let mut builder = DatasetBuilder::new("2025");
/// builder.add_response(&[("ageGroup", "18 - 28"), ("role", "Developer")]);
/// builder.add_response(&[("ageGroup", "29 - 44")]);
///
/// let dataset = builder.build();
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.responses()[1].raw("role"), "");
/// ```
pub struct DatasetBuilder {
    pub(crate) _year: String,
    pub(crate) _responses: Vec<SurveyResponse>,
}

impl DatasetBuilder {
    pub fn new(year: &str) -> DatasetBuilder {
        DatasetBuilder {
            _year: year.to_string(),
            _responses: Vec::new(),
        }
    }

    /// Adds a response given as (column key, raw answer) pairs.
    ///
    /// Columns that are not listed read as empty answers.
    pub fn add_response(&mut self, fields: &[(&str, &str)]) {
        let fields: HashMap<String, String> = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.add_fields(fields)
    }

    pub fn add_fields(&mut self, fields: HashMap<String, String>) {
        self._responses
            .push(SurveyResponse::new(&self._year, fields));
    }

    pub fn build(self) -> SurveyDataset {
        SurveyDataset::new(&self._year, self._responses)
    }
}
