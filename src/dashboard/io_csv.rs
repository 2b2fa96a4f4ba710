// Primitives for reading CSV exports.

use std::collections::HashMap;
use std::io::Read;

use crate::dashboard::io_common::{map_header, row_fields};
use crate::dashboard::*;

pub fn read_csv_survey(path: &str) -> BDashboardResult<Vec<HashMap<String, String>>> {
    let rdr = reader_builder()
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    read_records(rdr)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

fn read_records<R: Read>(rdr: csv::Reader<R>) -> BDashboardResult<Vec<HashMap<String, String>>> {
    let mut records = rdr.into_records();
    let header: Vec<String> = match records.next() {
        Some(line_r) => line_r
            .context(CsvLineParseSnafu { lineno: 1_usize })?
            .iter()
            .map(|s| s.to_string())
            .collect(),
        None => {
            return Err(Box::new(DashboardError::MissingHeader {}));
        }
    };
    let mapping = map_header(&header);
    debug!("read_records: {} mapped columns", mapping.len());

    let mut res: Vec<HashMap<String, String>> = Vec::new();
    for (idx, line_r) in records.enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        let row: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        match row_fields(&mapping, &row) {
            Some(fields) => res.push(fields),
            None => {
                debug!("read_records: skipping empty line {}", lineno);
            }
        }
    }
    Ok(res)
}
