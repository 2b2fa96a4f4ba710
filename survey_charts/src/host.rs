//! The chart host: picks between single-year display and year comparison.
//!
//! The host owns the datasets of all the loaded years. Results are memoized per
//! chart, year and dataset fingerprint, so rendering the same chart twice does
//! not run the aggregation again.

use std::collections::{BTreeMap, HashMap};

use log::{debug, info};

use crate::catalog;
use crate::compare::compare_years;
use crate::config::*;
use crate::{extract, process, single_year_layout};

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum RenderMode {
    SingleYear,
    Comparison,
}

/// A chart ready to hand over to the renderer.
#[derive(PartialEq, Debug, Clone)]
pub struct ChartView {
    pub chart: &'static ChartDefinition,
    pub mode: RenderMode,
    pub year: String,
    pub compare_year: Option<String>,
    pub traces: Vec<Trace>,
    pub layout: Layout,
    pub stats: ChartStats,
    /// In percent.
    pub response_rate: f64,
}

/// The share of respondents behind a chart, in percent.
///
/// Relative to the eligible population when it is known, otherwise to all the
/// responses of the dataset. An empty dataset gives 0.
pub fn response_rate(stats: &ChartStats, dataset_size: usize) -> f64 {
    match stats.response_rate() {
        Some(rate) => rate,
        None if dataset_size > 0 => {
            stats.number_of_responses as f64 / dataset_size as f64 * 100.0
        }
        None => 0.0,
    }
}

#[derive(Eq, PartialEq, Hash, Debug, Clone)]
struct MemoKey {
    chart: &'static str,
    year: String,
    fingerprint: String,
    mode: RenderMode,
}

#[derive(PartialEq, Debug, Clone)]
enum Memo {
    Payload(ChartPayload),
    Input(ComparisonInput),
}

pub struct ChartHost {
    datasets: BTreeMap<String, SurveyDataset>,
    palette: Palette,
    memoize: bool,
    cache: HashMap<MemoKey, Memo>,
}

impl ChartHost {
    pub fn new(palette: Palette) -> ChartHost {
        ChartHost {
            datasets: BTreeMap::new(),
            palette,
            memoize: true,
            cache: HashMap::new(),
        }
    }

    /// Registers the dataset of a year, replacing any previous one.
    pub fn add_dataset(&mut self, dataset: SurveyDataset) {
        info!(
            "add_dataset: year {}: {} responses",
            dataset.year(),
            dataset.len()
        );
        let year = dataset.year().to_string();
        // Entries of the replaced dataset can never be hit again.
        self.cache.retain(|k, _| k.year != year);
        self.datasets.insert(year, dataset);
    }

    /// The loaded years, in ascending order.
    pub fn years(&self) -> Vec<&str> {
        self.datasets.keys().map(|y| y.as_str()).collect()
    }

    pub fn dataset(&self, year: &str) -> Option<&SurveyDataset> {
        self.datasets.get(year)
    }

    pub fn set_memoize(&mut self, memoize: bool) {
        self.memoize = memoize;
        if !memoize {
            self.cache.clear();
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Renders a chart for a year, or compares it with another year when one is given.
    pub fn render(
        &mut self,
        chart_id: &str,
        year: &str,
        compare_year: Option<&str>,
    ) -> Result<ChartView, ChartErrors> {
        let chart =
            catalog::find(chart_id).ok_or_else(|| ChartErrors::UnknownChart(chart_id.to_string()))?;
        match compare_year {
            None => self.render_single(chart, year),
            Some(compare_year) => self.render_comparison(chart, year, compare_year),
        }
    }

    fn render_single(
        &mut self,
        chart: &'static ChartDefinition,
        year: &str,
    ) -> Result<ChartView, ChartErrors> {
        let payload = self.payload(chart, year)?;
        let size = self.dataset_size(year);
        Ok(ChartView {
            chart,
            mode: RenderMode::SingleYear,
            year: year.to_string(),
            compare_year: None,
            layout: single_year_layout(chart),
            response_rate: response_rate(&payload.stats, size),
            stats: payload.stats,
            traces: payload.traces,
        })
    }

    fn render_comparison(
        &mut self,
        chart: &'static ChartDefinition,
        year: &str,
        compare_year: &str,
    ) -> Result<ChartView, ChartErrors> {
        let kind = chart
            .comparison
            .ok_or_else(|| ChartErrors::NoComparison(chart.id.to_string()))?;
        let current = self.comparison_input(chart, year)?;
        let previous = self.comparison_input(chart, compare_year)?;
        let result = compare_years(kind, &current, &previous, year, compare_year, &self.palette)
            .ok_or_else(|| ChartErrors::NoComparison(chart.id.to_string()))?;
        let size = self.dataset_size(year) + self.dataset_size(compare_year);
        Ok(ChartView {
            chart,
            mode: RenderMode::Comparison,
            year: year.to_string(),
            compare_year: Some(compare_year.to_string()),
            response_rate: response_rate(&result.stats, size),
            stats: result.stats,
            layout: result.layout,
            traces: result.traces,
        })
    }

    fn dataset_size(&self, year: &str) -> usize {
        self.datasets.get(year).map(|d| d.len()).unwrap_or(0)
    }

    fn memo_key(
        &self,
        chart: &ChartDefinition,
        year: &str,
        mode: RenderMode,
    ) -> Result<MemoKey, ChartErrors> {
        let dataset = self
            .datasets
            .get(year)
            .ok_or_else(|| ChartErrors::UnknownYear(year.to_string()))?;
        Ok(MemoKey {
            chart: chart.id,
            year: year.to_string(),
            fingerprint: dataset.fingerprint().to_string(),
            mode,
        })
    }

    fn payload(
        &mut self,
        chart: &'static ChartDefinition,
        year: &str,
    ) -> Result<ChartPayload, ChartErrors> {
        let key = self.memo_key(chart, year, RenderMode::SingleYear)?;
        if let Some(Memo::Payload(payload)) = self.cache.get(&key) {
            debug!("payload: cache hit for {} {}", chart.id, year);
            return Ok(payload.clone());
        }
        let responses = self
            .datasets
            .get(year)
            .map(|d| d.responses())
            .unwrap_or(&[]);
        let payload = process(chart, responses, &self.palette);
        if self.memoize {
            self.cache.insert(key, Memo::Payload(payload.clone()));
        }
        Ok(payload)
    }

    fn comparison_input(
        &mut self,
        chart: &'static ChartDefinition,
        year: &str,
    ) -> Result<ComparisonInput, ChartErrors> {
        let key = self.memo_key(chart, year, RenderMode::Comparison)?;
        if let Some(Memo::Input(input)) = self.cache.get(&key) {
            debug!("comparison_input: cache hit for {} {}", chart.id, year);
            return Ok(input.clone());
        }
        let responses = self
            .datasets
            .get(year)
            .map(|d| d.responses())
            .unwrap_or(&[]);
        let input = extract(chart, responses);
        if self.memoize {
            self.cache.insert(key, Memo::Input(input.clone()));
        }
        Ok(input)
    }
}
