// Primitives for reading Excel exports.

use std::collections::HashMap;

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};

use crate::dashboard::io_common::{map_header, row_fields};
use crate::dashboard::*;

pub fn read_excel_survey(
    path: &str,
    worksheet_name: Option<&str>,
) -> BDashboardResult<Vec<HashMap<String, String>>> {
    let wrange = get_range(path, worksheet_name)?;
    read_range(&wrange)
}

fn get_range(path: &str, worksheet_name: Option<&str>) -> BDashboardResult<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet_name {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name, path })?
            .context(OpeningExcelSnafu { path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(MissingWorksheetSnafu { name: "<first>", path })?
            .context(OpeningExcelSnafu { path })?,
    };
    Ok(wrange)
}

fn read_range(wrange: &Range<DataType>) -> BDashboardResult<Vec<HashMap<String, String>>> {
    let mut iter = wrange.rows();
    let header: Vec<String> = iter
        .next()
        .context(MissingHeaderSnafu {})?
        .iter()
        .map(cell_text)
        .collect();
    debug!("read_range: header: {:?}", header);
    let mapping = map_header(&header);

    let mut res: Vec<HashMap<String, String>> = Vec::new();
    for (idx, row) in iter.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        match row_fields(&mapping, &cells) {
            Some(fields) => res.push(fields),
            None => {
                debug!("read_range: skipping empty row {}", idx + 2);
            }
        }
    }
    Ok(res)
}

/// The text of a cell, as it would appear in a CSV export.
fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) | DataType::DateTime(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        DataType::Bool(true) => "Yes".to_string(),
        DataType::Bool(false) => "No".to_string(),
        DataType::Error(e) => {
            debug!("cell_text: error cell {:?}", e);
            "".to_string()
        }
        DataType::Empty => "".to_string(),
    }
}
