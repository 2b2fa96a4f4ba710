use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::dashboard::columns::SURVEY_COLUMNS;

/// The year of a survey export named after its file: `data/2025.csv` is `2025`.
pub fn year_of_file(path: &str) -> Option<String> {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn normalize_cell(cell: &str) -> String {
    cell.replace('\u{a0}', " ").trim().to_string()
}

/// Finds, for each known column, the index of its header cell.
///
/// A header cell is used at most once, so repeated question texts are assigned
/// from left to right in the order of the column table.
pub fn map_header(header: &[String]) -> Vec<(usize, &'static str)> {
    let cells: Vec<String> = header.iter().map(|c| normalize_cell(c)).collect();
    let mut used: Vec<bool> = vec![false; cells.len()];
    let mut res: Vec<(usize, &'static str)> = Vec::new();
    for (key, text) in SURVEY_COLUMNS.iter() {
        let expected = normalize_cell(text);
        let found = cells
            .iter()
            .enumerate()
            .find(|(idx, cell)| !used[*idx] && **cell == expected)
            .map(|(idx, _)| idx);
        match found {
            Some(idx) => {
                used[idx] = true;
                res.push((idx, *key));
            }
            None => {
                debug!("map_header: no column for {}", key);
            }
        }
    }
    res
}

/// The fields of a data row, or None when the row is entirely empty.
///
/// Missing cells read as empty answers.
pub fn row_fields(
    mapping: &[(usize, &'static str)],
    row: &[String],
) -> Option<HashMap<String, String>> {
    let cells: Vec<String> = row.iter().map(|c| normalize_cell(c)).collect();
    if cells.iter().all(|c| c.is_empty()) {
        return None;
    }
    let fields: HashMap<String, String> = mapping
        .iter()
        .map(|(idx, key)| {
            let value = cells.get(*idx).cloned().unwrap_or_default();
            (key.to_string(), value)
        })
        .collect();
    Some(fields)
}
