use log::{debug, info, warn};
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use survey_charts::catalog;
use survey_charts::host::{ChartHost, ChartView};
use survey_charts::*;
use text_diff::print_diff;

use crate::args::Args;
use crate::dashboard::config_reader::*;
use crate::dashboard::output::{build_summary_js, catalog_listing};
use crate::dashboard::repository::SurveyRepository;

mod columns;
mod config_reader;
mod io_common;
mod io_csv;
mod io_xlsx;
mod output;
mod repository;

#[derive(Debug, Snafu)]
pub enum DashboardError {
    #[snafu(display("Error opening JSON file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display("The survey export has no header row"))]
    MissingHeader {},
    #[snafu(display("Unknown input type {input_type}: expected csv or xlsx"))]
    UnknownInputType { input_type: String },
    #[snafu(display("Error writing output to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Cannot render chart: {source}"))]
    Render { source: ChartErrors },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DashboardResult<T> = Result<T, DashboardError>;
pub type BDashboardResult<T> = Result<T, Box<DashboardError>>;

/// The configuration file, if any, overridden by the command line.
fn merge_config(args: &Args) -> DashboardResult<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => DashboardConfig::default(),
    };
    if !args.input.is_empty() {
        // Paths from the command line are relative to the working directory.
        config.data_directory = None;
        config.sources = args
            .input
            .iter()
            .map(|path| FileSource {
                year: None,
                file_path: path.clone(),
                provider: args.input_type.clone(),
                excel_worksheet_name: args.excel_worksheet_name.clone(),
            })
            .collect();
    } else {
        for cfs in config.sources.iter_mut() {
            if args.input_type.is_some() {
                cfs.provider = args.input_type.clone();
            }
            if args.excel_worksheet_name.is_some() {
                cfs.excel_worksheet_name = args.excel_worksheet_name.clone();
            }
        }
    }
    if !args.chart.is_empty() {
        config.charts = args.chart.clone();
    }
    if args.year.is_some() {
        config.year = args.year.clone();
    }
    if args.compare_year.is_some() {
        config.compare_year = args.compare_year.clone();
    }
    if args.out.is_some() {
        config.output_path = args.out.clone();
    }
    Ok(config)
}

/// Renders the requested charts. When the whole catalog is rendered in comparison
/// mode, the charts that cannot be compared are left out.
fn render_charts(
    host: &mut ChartHost,
    chart_ids: &[String],
    year: &str,
    compare_year: Option<&str>,
) -> DashboardResult<Vec<ChartView>> {
    let whole_catalog = chart_ids.is_empty();
    let ids: Vec<String> = if whole_catalog {
        catalog::CHARTS.iter().map(|c| c.id.to_string()).collect()
    } else {
        chart_ids.to_vec()
    };
    let mut views: Vec<ChartView> = Vec::new();
    for id in ids.iter() {
        match host.render(id, year, compare_year) {
            Ok(view) => {
                debug!(
                    "render_charts: {}: {} traces, {} responses",
                    id,
                    view.traces.len(),
                    view.stats.number_of_responses
                );
                views.push(view);
            }
            Err(ChartErrors::NoComparison(_)) if whole_catalog => {
                info!("render_charts: skipping {}: no comparison available", id);
            }
            Err(source) => return Err(DashboardError::Render { source }),
        }
    }
    Ok(views)
}

fn write_output(output_path: Option<&str>, contents: &str) -> DashboardResult<()> {
    match output_path {
        None | Some("stdout") => {
            println!("{}", contents);
        }
        Some(path) => {
            info!("write_output: writing summary to {}", path);
            fs::write(path, contents).context(WritingOutputSnafu { path })?;
        }
    }
    Ok(())
}

/// Fails when the rendered summary differs from the reference, after printing the difference.
fn check_reference(reference_path: &str, pretty_js_stats: &str) -> DashboardResult<()> {
    let summary_ref = read_summary(reference_path)?;
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference summary");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        whatever!("Difference detected between calculated summary and reference summary")
    }
    info!("check_reference: summary matches {}", reference_path);
    Ok(())
}

/// The year to display: the configured one, or else the latest available.
fn select_year(config: &DashboardConfig, years: &[String]) -> DashboardResult<String> {
    let year = match config.year.clone().or_else(|| years.last().cloned()) {
        Some(year) => year,
        None => whatever!("No survey data: pass --input or --config"),
    };
    if config.compare_year.as_ref() == Some(&year) {
        whatever!("Cannot compare year {} with itself", year);
    }
    Ok(year)
}

pub fn run_dashboard(args: &Args) -> BDashboardResult<()> {
    if args.list {
        for line in catalog_listing() {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = merge_config(args)?;
    info!("config: {:?}", config);

    let mut repository = SurveyRepository::new(&config)?;
    let years = repository.available_years();
    let year = select_year(&config, &years)?;

    let mut host = ChartHost::new(Palette::DEFAULT);
    let mut loaded: Vec<&String> = vec![&year];
    loaded.extend(config.compare_year.iter());
    for y in loaded {
        if !years.contains(y) {
            warn!("run_dashboard: no survey data for year {}", y);
        }
        let dataset = repository.dataset(y)?;
        host.add_dataset(dataset.clone());
    }

    let views = render_charts(
        &mut host,
        &config.charts,
        &year,
        config.compare_year.as_deref(),
    )?;
    info!("run_dashboard: rendered {} charts", views.len());

    let result_js = build_summary_js(&years, &views);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;
    write_output(config.output_path.as_deref(), &pretty_js_stats)?;

    if let Some(reference_path) = &args.reference {
        check_reference(reference_path, &pretty_js_stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::columns::SURVEY_COLUMNS;
    use serde_json::Value as JSValue;

    fn header(keys: &[&str]) -> String {
        keys.iter()
            .map(|k| {
                let text = SURVEY_COLUMNS
                    .iter()
                    .find(|(key, _)| key == k)
                    .map(|(_, text)| *text)
                    .unwrap();
                format!("\"{}\"", text)
            })
            .collect::<Vec<String>>()
            .join(",")
    }

    fn args() -> Args {
        Args {
            config: None,
            input: Vec::new(),
            input_type: None,
            excel_worksheet_name: None,
            year: None,
            compare_year: None,
            chart: Vec::new(),
            out: None,
            reference: None,
            list: false,
            verbose: false,
        }
    }

    /// Two years of answers to the definition question, in a fresh directory.
    fn survey_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("surveydash-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let h = header(&["responseId", "heardOfDigitalSustainabilityDefinition"]);
        fs::write(
            dir.join("2024.csv"),
            format!("{}\n1,Yes\n2,No\n3,No\n", h),
        )
        .unwrap();
        fs::write(
            dir.join("2025.csv"),
            format!("{}\n1,Yes\n2,\u{a0}yes\u{a0}\n,\n3,No\n4,\n", h),
        )
        .unwrap();
        dir
    }

    fn read_json(path: &Path) -> JSValue {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn command_line_overrides_config() {
        let dir = survey_dir("merge");
        let config_path = dir.join("config.json");
        fs::write(
            &config_path,
            r#"{"sources": [{"filePath": "2024.csv"}], "year": "2024", "charts": ["age-group"]}"#,
        )
        .unwrap();
        let mut a = args();
        a.config = Some(config_path.display().to_string());
        a.chart = vec!["definition-awareness".to_string()];
        a.input_type = Some("csv".to_string());
        let config = merge_config(&a).unwrap();
        assert_eq!(config.data_directory, Some(dir.display().to_string()));
        assert_eq!(config.year, Some("2024".to_string()));
        assert_eq!(config.charts, vec!["definition-awareness".to_string()]);
        assert_eq!(config.sources[0].provider, Some("csv".to_string()));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn single_year_summary() {
        let dir = survey_dir("single");
        let out = dir.join("out.json");
        let mut a = args();
        a.input = vec![
            dir.join("2024.csv").display().to_string(),
            dir.join("2025.csv").display().to_string(),
        ];
        a.chart = vec!["definition-awareness".to_string()];
        a.out = Some(out.display().to_string());
        run_dashboard(&a).unwrap();

        let js = read_json(&out);
        assert_eq!(js["years"], serde_json::json!(["2024", "2025"]));
        let chart = &js["charts"][0];
        assert_eq!(chart["id"], "definition-awareness");
        assert_eq!(chart["mode"], "single");
        // The latest year by default. The empty line is skipped, the blank answer excluded.
        assert_eq!(chart["year"], "2025");
        assert_eq!(chart["stats"]["numberOfResponses"], 3);
        assert_eq!(chart["responseRate"], 75.0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn comparison_summary_and_reference() {
        let dir = survey_dir("compare");
        let out = dir.join("out.json");
        let mut a = args();
        a.input = vec![
            dir.join("2024.csv").display().to_string(),
            dir.join("2025.csv").display().to_string(),
        ];
        a.year = Some("2025".to_string());
        a.compare_year = Some("2024".to_string());
        a.chart = vec!["definition-awareness".to_string()];
        a.out = Some(out.display().to_string());
        run_dashboard(&a).unwrap();

        let js = read_json(&out);
        let chart = &js["charts"][0];
        assert_eq!(chart["mode"], "comparison");
        assert_eq!(chart["compareYear"], "2024");
        assert_eq!(chart["stats"]["numberOfResponses"], 6);

        // The output is its own reference.
        let reference = dir.join("reference.json");
        fs::copy(&out, &reference).unwrap();
        a.reference = Some(reference.display().to_string());
        assert!(run_dashboard(&a).is_ok());

        fs::write(&reference, r#"{"years": [], "charts": []}"#).unwrap();
        assert!(run_dashboard(&a).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn whole_catalog_comparison_skips_charts_without_comparison() {
        let dir = survey_dir("catalog");
        let out = dir.join("out.json");
        let mut a = args();
        a.input = vec![
            dir.join("2024.csv").display().to_string(),
            dir.join("2025.csv").display().to_string(),
        ];
        a.compare_year = Some("2024".to_string());
        a.out = Some(out.display().to_string());
        run_dashboard(&a).unwrap();

        let js = read_json(&out);
        let charts = js["charts"].as_array().unwrap();
        let comparable = catalog::CHARTS
            .iter()
            .filter(|c| c.comparison.is_some())
            .count();
        assert_eq!(charts.len(), comparable);
        assert!(charts.iter().all(|c| c["mode"] == "comparison"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn caller_mistakes() {
        let dir = survey_dir("errors");
        let mut a = args();
        a.input = vec![dir.join("2025.csv").display().to_string()];
        a.out = Some(dir.join("out.json").display().to_string());

        a.chart = vec!["no-such-chart".to_string()];
        assert!(matches!(
            run_dashboard(&a).map_err(|e| *e),
            Err(DashboardError::Render {
                source: ChartErrors::UnknownChart(_)
            })
        ));

        a.chart = vec!["discussion-frequency-by-age".to_string()];
        a.compare_year = Some("2024".to_string());
        assert!(matches!(
            run_dashboard(&a).map_err(|e| *e),
            Err(DashboardError::Render {
                source: ChartErrors::NoComparison(_)
            })
        ));

        a.compare_year = Some("2025".to_string());
        assert!(run_dashboard(&a).is_err());

        a.compare_year = None;
        a.input_type = Some("ods".to_string());
        assert!(matches!(
            run_dashboard(&a).map_err(|e| *e),
            Err(DashboardError::UnknownInputType { .. })
        ));
        assert!(run_dashboard(&args()).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
