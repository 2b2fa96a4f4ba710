//! Comparison strategies: two years of extracted data into one comparative chart.
//!
//! The strategies hold no state. Labels present in only one year show up with a
//! zero value for the other year.

use log::debug;

use crate::config::*;

/// Turns the data of two years into traces and layout hints.
pub trait ComparisonStrategy {
    type Data;

    fn compare(
        &self,
        current: &Self::Data,
        compare: &Self::Data,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult;
}

/// Every label of both lists, once, current year first.
pub fn union_labels(current: &[AggregationItem], compare: &[AggregationItem]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for item in current.iter().chain(compare.iter()) {
        if !labels.contains(&item.label) {
            labels.push(item.label.clone());
        }
    }
    labels
}

fn value_of(items: &[AggregationItem], label: &str) -> f64 {
    items
        .iter()
        .find(|i| i.label == label)
        .map(|i| i.value)
        .unwrap_or(0.0)
}

// Share of the year's respondents. The divisor never goes below 1.
fn percent_of(value: f64, stats: &ChartStats) -> f64 {
    value / stats.number_of_responses.max(1) as f64 * 100.0
}

/// The height of a dumbbell chart holding `items` labels.
pub fn dumbbell_height(items: usize) -> u32 {
    std::cmp::max(520, items as u32 * 50 + 100)
}

#[derive(PartialEq, Debug, Clone)]
struct DumbbellRow {
    label: String,
    current: f64,
    compare: f64,
}

/// Connects the values of each label in both years with a line.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct DumbbellStrategy {
    pub options: DumbbellOptions,
}

impl DumbbellStrategy {
    pub fn new(options: DumbbellOptions) -> DumbbellStrategy {
        DumbbellStrategy { options }
    }

    fn rows(&self, current: &ItemData, compare: &ItemData) -> Vec<DumbbellRow> {
        let scale = |value: f64, stats: &ChartStats| -> f64 {
            if self.options.normalize_to_percentage {
                percent_of(value, stats)
            } else {
                value
            }
        };
        let mut rows: Vec<DumbbellRow> = union_labels(&current.items, &compare.items)
            .into_iter()
            .map(|label| DumbbellRow {
                current: scale(value_of(&current.items, &label), &current.stats),
                compare: scale(value_of(&compare.items, &label), &compare.stats),
                label,
            })
            .collect();
        match self.options.sort_by {
            SortBy::Value => rows.sort_by(|a, b| a.current.total_cmp(&b.current)),
            SortBy::Difference => {
                rows.sort_by(|a, b| (a.current - a.compare).total_cmp(&(b.current - b.compare)))
            }
            SortBy::AbsoluteDifference => rows.sort_by(|a, b| {
                (a.current - a.compare)
                    .abs()
                    .total_cmp(&(b.current - b.compare).abs())
            }),
        }
        rows
    }
}

impl ComparisonStrategy for DumbbellStrategy {
    type Data = ItemData;

    fn compare(
        &self,
        current: &ItemData,
        compare: &ItemData,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult {
        let rows = self.rows(current, compare);
        let labels: Vec<String> = rows.iter().map(|r| r.label.clone()).collect();
        debug!("compare: dumbbell over {} labels", rows.len());

        let mut line_x: Vec<Option<f64>> = Vec::new();
        let mut line_y: Vec<Option<String>> = Vec::new();
        for r in rows.iter() {
            line_x.extend([Some(r.compare), Some(r.current), None]);
            line_y.extend([Some(r.label.clone()), Some(r.label.clone()), None]);
        }
        let mut connector = Trace::new(
            TraceKind::Scatter(ScatterMode::Lines),
            Series::Values(line_x),
            Series::Labels(line_y),
        )
        .color(palette.grey02)
        .hidden_from_legend();
        connector.line_width = Some(2);

        let format = self.options.formats_as_percentage();
        let hover = |year: &str| -> String {
            if format {
                format!("<b>{}</b>: %{{x:.1f}}%<extra></extra>", year)
            } else {
                format!("<b>{}</b>: %{{x}}<extra></extra>", year)
            }
        };
        let markers = |year: &str, values: Vec<f64>, color: &str| -> Trace {
            let mut t = Trace::new(
                TraceKind::Scatter(ScatterMode::Markers),
                Series::values(&values),
                Series::labels(&labels),
            )
            .name(year)
            .color(color)
            .hover_template(&hover(year));
            t.marker_size = Some(10);
            t
        };
        let compare_trace = markers(
            compare_year,
            rows.iter().map(|r| r.compare).collect(),
            palette.spring,
        );
        let current_trace = markers(
            current_year,
            rows.iter().map(|r| r.current).collect(),
            palette.berry,
        );

        let x_axis = if format {
            AxisLayout {
                title: Some("% of Respondents".to_string()),
                tick_suffix: Some("%".to_string()),
                ..AxisLayout::default()
            }
        } else {
            AxisLayout {
                title: Some("Value".to_string()),
                ..AxisLayout::default()
            }
        };
        ComparisonResult {
            traces: vec![connector, compare_trace, current_trace],
            layout: Layout {
                x_axis,
                y_axis: AxisLayout {
                    category: true,
                    ..AxisLayout::default()
                },
                horizontal_legend: true,
                ..Layout::default()
            },
            stats: current.stats.combine(&compare.stats),
        }
    }
}

/// Two bar traces, one per year, over the labels of both years.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct HorizontalBarStrategy {}

impl ComparisonStrategy for HorizontalBarStrategy {
    type Data = ItemData;

    fn compare(
        &self,
        current: &ItemData,
        compare: &ItemData,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult {
        let mut labels = union_labels(&current.items, &compare.items);
        labels.sort_by(|a, b| {
            value_of(&current.items, a).total_cmp(&value_of(&current.items, b))
        });
        let bars = |items: &[AggregationItem], year: &str, color: &str| -> Trace {
            let values: Vec<f64> = labels.iter().map(|l| value_of(items, l)).collect();
            Trace::bar(Orientation::Horizontal, &labels, &values)
                .name(year)
                .color(color)
                .text(values.iter().map(|v| v.to_string()).collect())
        };
        ComparisonResult {
            traces: vec![
                bars(&current.items, current_year, palette.berry),
                bars(&compare.items, compare_year, palette.spring),
            ],
            layout: Layout {
                bar_mode: Some(BarMode::Group),
                y_axis: AxisLayout {
                    category: true,
                    ..AxisLayout::default()
                },
                horizontal_legend: true,
                ..Layout::default()
            },
            stats: current.stats.combine(&compare.stats),
        }
    }
}

pub const YES_NO_NOT_SURE: [&str; 3] = ["Yes", "No", "Not sure"];

/// Grouped vertical bars for a yes / no / not sure question.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct YesNoNotSureStrategy {}

impl ComparisonStrategy for YesNoNotSureStrategy {
    type Data = YesNoNotSureData;

    fn compare(
        &self,
        current: &YesNoNotSureData,
        compare: &YesNoNotSureData,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult {
        let labels: Vec<String> = YES_NO_NOT_SURE.iter().map(|l| l.to_string()).collect();
        let bars = |data: &YesNoNotSureData, year: &str, color: &str| -> Trace {
            let c = data.counts;
            let values = [c.yes as f64, c.no as f64, c.not_sure as f64];
            Trace::bar(Orientation::Vertical, &labels, &values)
                .name(year)
                .color(color)
                .text(values.iter().map(|v| v.to_string()).collect())
        };
        ComparisonResult {
            traces: vec![
                bars(current, current_year, palette.berry),
                bars(compare, compare_year, palette.spring),
            ],
            layout: Layout {
                bar_mode: Some(BarMode::Group),
                y_axis: AxisLayout {
                    title: Some("Number of Respondents".to_string()),
                    ..AxisLayout::default()
                },
                horizontal_legend: true,
                ..Layout::default()
            },
            stats: current.stats.combine(&compare.stats),
        }
    }
}

/// Both years' stacked bars next to each other, one pair per category.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct StackedBarStrategy {}

impl StackedBarStrategy {
    fn series_color(palette: &Palette, label: &str, index: usize) -> &'static str {
        match label.trim().to_lowercase().as_str() {
            "yes" => palette.spring,
            "no" => palette.mandarin,
            "not sure" => palette.grey02,
            _ => {
                let fallback = [
                    palette.berry,
                    palette.light_berry,
                    palette.light_spring,
                    palette.dark_spring,
                    palette.transport,
                    palette.grey,
                ];
                fallback[index % fallback.len()]
            }
        }
    }
}

/// The color carried by the series itself, current year first.
fn own_color<'a>(
    current: &'a StackedBarData,
    compare: &'a StackedBarData,
    series: &str,
) -> Option<&'a str> {
    current
        .series
        .iter()
        .chain(compare.series.iter())
        .filter(|s| s.label == series)
        .find_map(|s| s.color.as_deref())
}

fn series_value(data: &StackedBarData, series: &str, category: usize) -> f64 {
    data.series
        .iter()
        .find(|s| s.label == series)
        .and_then(|s| s.values.get(category))
        .copied()
        .unwrap_or(0.0)
}

impl ComparisonStrategy for StackedBarStrategy {
    type Data = StackedBarData;

    fn compare(
        &self,
        current: &StackedBarData,
        compare: &StackedBarData,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult {
        let mut categories: Vec<String> = current.categories.clone();
        for c in compare.categories.iter() {
            if !categories.contains(c) {
                categories.push(c.clone());
            }
        }
        let mut series_labels: Vec<String> = Vec::new();
        for s in current.series.iter().chain(compare.series.iter()) {
            if !series_labels.contains(&s.label) {
                series_labels.push(s.label.clone());
            }
        }

        // Each row: (label, data of the year and the category index, or None for a spacer).
        let mut rows: Vec<(String, Option<(&StackedBarData, Option<usize>, f64)>)> = Vec::new();
        for (i, cat) in categories.iter().enumerate() {
            let cur_idx = current.categories.iter().position(|c| c == cat);
            let cmp_idx = compare.categories.iter().position(|c| c == cat);
            rows.push((format!("{} ({})", cat, current_year), Some((current, cur_idx, 1.0))));
            rows.push((format!("{} ({})", cat, compare_year), Some((compare, cmp_idx, 0.65))));
            if i + 1 < categories.len() {
                rows.push((" ".repeat(i + 1), None));
            }
        }
        let labels: Vec<String> = rows.iter().map(|(l, _)| l.clone()).collect();
        let opacities: Vec<f64> = rows
            .iter()
            .map(|(_, r)| r.map(|(_, _, o)| o).unwrap_or(0.0))
            .collect();

        let traces: Vec<Trace> = series_labels
            .iter()
            .enumerate()
            .map(|(idx, series)| {
                let values: Vec<f64> = rows
                    .iter()
                    .map(|(_, r)| match r {
                        Some((data, Some(cat_idx), _)) => series_value(data, series, *cat_idx),
                        _ => 0.0,
                    })
                    .collect();
                let text: Vec<String> = values
                    .iter()
                    .map(|v| if *v > 0.0 { v.to_string() } else { String::new() })
                    .collect();
                let mut t = Trace::bar(Orientation::Horizontal, &labels, &values)
                    .name(series)
                    .color(
                        own_color(current, compare, series)
                            .unwrap_or_else(|| Self::series_color(palette, series, idx)),
                    )
                    .text(text);
                t.opacities = opacities.clone();
                t
            })
            .collect();

        ComparisonResult {
            traces,
            layout: Layout {
                bar_mode: Some(BarMode::Stack),
                y_axis: AxisLayout {
                    category: true,
                    ..AxisLayout::default()
                },
                height: Some(dumbbell_height(labels.len())),
                horizontal_legend: true,
                ..Layout::default()
            },
            stats: current.stats.combine(&compare.stats),
        }
    }
}

/// One point per label: the compare year on x, the current year on y.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct ScatterPlotStrategy {}

impl ComparisonStrategy for ScatterPlotStrategy {
    type Data = ItemData;

    fn compare(
        &self,
        current: &ItemData,
        compare: &ItemData,
        current_year: &str,
        compare_year: &str,
        palette: &Palette,
    ) -> ComparisonResult {
        let labels = union_labels(&current.items, &compare.items);
        let xs: Vec<f64> = labels
            .iter()
            .map(|l| percent_of(value_of(&compare.items, l), &compare.stats))
            .collect();
        let ys: Vec<f64> = labels
            .iter()
            .map(|l| percent_of(value_of(&current.items, l), &current.stats))
            .collect();
        let max = xs.iter().chain(ys.iter()).copied().fold(0.0, f64::max);
        let range_max = (max * 1.1).ceil();

        let mut diagonal = Trace::new(
            TraceKind::Scatter(ScatterMode::Lines),
            Series::values(&[0.0, range_max]),
            Series::values(&[0.0, range_max]),
        )
        .color(palette.grey02)
        .hidden_from_legend();
        diagonal.line_width = Some(2);
        diagonal.dashed = true;
        diagonal.opacity = Some(0.5);

        let mut points = Trace::new(
            TraceKind::Scatter(ScatterMode::MarkersText),
            Series::values(&xs),
            Series::values(&ys),
        )
        .name("Regions")
        .color(palette.berry)
        .text(labels.clone())
        .hover_template(&format!(
            "<b>%{{text}}</b><br>{}: %{{x:.1f}}%<br>{}: %{{y:.1f}}%<extra></extra>",
            compare_year, current_year
        ));
        points.marker_size = Some(12);

        let axis = |year: &str| AxisLayout {
            title: Some(format!("{} (%)", year)),
            range: Some((0.0, range_max)),
            dtick: Some(10.0),
            ..AxisLayout::default()
        };
        ComparisonResult {
            traces: vec![diagonal, points],
            layout: Layout {
                x_axis: axis(compare_year),
                y_axis: axis(current_year),
                square_axes: true,
                hide_legend: true,
                ..Layout::default()
            },
            stats: current.stats.combine(&compare.stats),
        }
    }
}

/// Runs the strategy of a comparison kind. Returns `None` when the inputs do not
/// have the shape the strategy expects.
pub fn compare_years(
    kind: ComparisonKind,
    current: &ComparisonInput,
    compare: &ComparisonInput,
    current_year: &str,
    compare_year: &str,
    palette: &Palette,
) -> Option<ComparisonResult> {
    use ComparisonInput::*;
    let res = match (kind, current, compare) {
        (ComparisonKind::Dumbbell(options), Items(cur), Items(cmp)) => {
            let mut res = DumbbellStrategy::new(options).compare(
                cur,
                cmp,
                current_year,
                compare_year,
                palette,
            );
            let items = res.traces.get(1).map(|t| t.x.len()).unwrap_or(0);
            res.layout.y_axis.dtick = Some(1.0);
            res.layout.x_axis.title_standoff = Some(20);
            res.layout.height = Some(dumbbell_height(items));
            res
        }
        (ComparisonKind::HorizontalBar, Items(cur), Items(cmp)) => {
            let mut res = HorizontalBarStrategy::default().compare(
                cur,
                cmp,
                current_year,
                compare_year,
                palette,
            );
            let items = res.traces.first().map(|t| t.y.len()).unwrap_or(0);
            res.layout.height = Some(dumbbell_height(items));
            res
        }
        (ComparisonKind::Scatter, Items(cur), Items(cmp)) => ScatterPlotStrategy::default()
            .compare(cur, cmp, current_year, compare_year, palette),
        (ComparisonKind::YesNoNotSure, YesNoNotSure(cur), YesNoNotSure(cmp)) => {
            YesNoNotSureStrategy::default().compare(cur, cmp, current_year, compare_year, palette)
        }
        (ComparisonKind::Stacked, Stacked(cur), Stacked(cmp)) => StackedBarStrategy::default()
            .compare(cur, cmp, current_year, compare_year, palette),
        _ => return None,
    };
    Some(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, f64)], responses: u64) -> ItemData {
        ItemData {
            items: pairs
                .iter()
                .map(|(l, v)| AggregationItem {
                    label: l.to_string(),
                    value: *v,
                })
                .collect(),
            stats: ChartStats {
                number_of_responses: responses,
                total_eligible: None,
            },
        }
    }

    fn labels_of(s: &Series) -> Vec<String> {
        match s {
            Series::Labels(l) => l.iter().flatten().cloned().collect(),
            Series::Values(_) => Vec::new(),
        }
    }

    fn values_of(s: &Series) -> Vec<f64> {
        match s {
            Series::Values(v) => v.iter().flatten().copied().collect(),
            Series::Labels(_) => Vec::new(),
        }
    }

    #[test]
    fn union_keeps_every_label_once() {
        let cur = items(&[("A", 1.0), ("B", 2.0)], 3);
        let cmp = items(&[("B", 5.0), ("C", 4.0)], 9);
        assert_eq!(union_labels(&cur.items, &cmp.items), vec!["A", "B", "C"]);

        let res = DumbbellStrategy::new(DumbbellOptions::PRECOMPUTED).compare(
            &cur,
            &cmp,
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        let mut labels = labels_of(&res.traces[2].y);
        labels.sort();
        assert_eq!(labels, vec!["A", "B", "C"]);
        // A exists only in the current year.
        let idx = labels_of(&res.traces[1].y)
            .iter()
            .position(|l| l == "A")
            .unwrap();
        assert_eq!(values_of(&res.traces[1].x)[idx], 0.0);
    }

    #[test]
    fn absolute_difference_sorts_ascending() {
        let cur = items(&[("B", 10.0), ("A", 10.0)], 1);
        let cmp = items(&[("A", 10.0), ("B", 90.0)], 1);
        let res = DumbbellStrategy::new(DumbbellOptions::PRECOMPUTED).compare(
            &cur,
            &cmp,
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(labels_of(&res.traces[2].y), vec!["A", "B"]);
        // Connector segments: compare, current, gap.
        assert_eq!(
            res.traces[0].x,
            Series::Values(vec![
                Some(10.0),
                Some(10.0),
                None,
                Some(90.0),
                Some(10.0),
                None
            ])
        );
        assert!(!res.traces[0].show_legend);
    }

    #[test]
    fn signed_difference_puts_drops_first() {
        let cur = items(&[("A", 10.0), ("B", 30.0)], 1);
        let cmp = items(&[("A", 60.0), ("B", 20.0)], 1);
        let by = |sort_by: SortBy| {
            let options = DumbbellOptions {
                sort_by,
                ..DumbbellOptions::PRECOMPUTED
            };
            let res = DumbbellStrategy::new(options).compare(
                &cur,
                &cmp,
                "2025",
                "2024",
                &Palette::DEFAULT,
            );
            labels_of(&res.traces[2].y)
        };
        assert_eq!(by(SortBy::Difference), vec!["A", "B"]);
        assert_eq!(by(SortBy::AbsoluteDifference), vec!["B", "A"]);
    }

    #[test]
    fn dumbbell_normalizes_against_own_year() {
        let cur = items(&[("A", 5.0)], 10);
        let cmp = items(&[("A", 0.0)], 0);
        let options = DumbbellOptions {
            sort_by: SortBy::Value,
            ..DumbbellOptions::DEFAULT
        };
        let res =
            DumbbellStrategy::new(options).compare(&cur, &cmp, "2025", "2024", &Palette::DEFAULT);
        assert_eq!(values_of(&res.traces[2].x), vec![50.0]);
        assert_eq!(values_of(&res.traces[1].x), vec![0.0]);
        assert_eq!(
            res.traces[2].hover_template.as_deref(),
            Some("<b>2025</b>: %{x:.1f}%<extra></extra>")
        );
        assert_eq!(res.layout.x_axis.tick_suffix.as_deref(), Some("%"));
    }

    #[test]
    fn stats_are_added() {
        let mut cur = items(&[], 3);
        cur.stats.total_eligible = Some(5);
        let cmp = items(&[], 4);
        let res = HorizontalBarStrategy::default().compare(
            &cur,
            &cmp,
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(res.stats.number_of_responses, 7);
        assert_eq!(res.stats.total_eligible, Some(5));

        let none = ChartStats::default().combine(&ChartStats::default());
        assert_eq!(none.total_eligible, None);
    }

    #[test]
    fn horizontal_bars_sort_by_current_value() {
        let cur = items(&[("A", 5.0), ("B", 1.0)], 6);
        let cmp = items(&[("C", 2.0)], 2);
        let res = HorizontalBarStrategy::default().compare(
            &cur,
            &cmp,
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(labels_of(&res.traces[0].y), vec!["C", "B", "A"]);
        assert_eq!(values_of(&res.traces[1].x), vec![2.0, 0.0, 0.0]);
    }

    #[test]
    fn yes_no_not_sure_bars() {
        let data = |yes, no, not_sure| YesNoNotSureData {
            counts: AnswerCounts { yes, no, not_sure },
            stats: ChartStats {
                number_of_responses: yes + no + not_sure,
                total_eligible: None,
            },
        };
        let res = YesNoNotSureStrategy::default().compare(
            &data(3, 2, 1),
            &data(1, 1, 0),
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(labels_of(&res.traces[0].x), vec!["Yes", "No", "Not sure"]);
        assert_eq!(values_of(&res.traces[0].y), vec![3.0, 2.0, 1.0]);
        assert_eq!(res.traces[1].color.as_deref(), Some(Palette::DEFAULT.spring));
        assert_eq!(res.stats.number_of_responses, 8);
    }

    #[test]
    fn stacked_bars_interleave_years() {
        let data = |cats: &[&str], yes: Vec<f64>| StackedBarData {
            categories: cats.iter().map(|c| c.to_string()).collect(),
            series: vec![StackedSeries {
                label: "Yes".to_string(),
                values: yes,
                color: None,
            }],
            stats: ChartStats::default(),
        };
        let res = StackedBarStrategy::default().compare(
            &data(&["Tech", "RE"], vec![2.0, 0.0]),
            &data(&["RE"], vec![4.0]),
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        let t = &res.traces[0];
        assert_eq!(
            labels_of(&t.y),
            vec!["Tech (2025)", "Tech (2024)", " ", "RE (2025)", "RE (2024)"]
        );
        assert_eq!(values_of(&t.x), vec![2.0, 0.0, 0.0, 0.0, 4.0]);
        assert_eq!(t.opacities, vec![1.0, 0.65, 0.0, 1.0, 0.65]);
        assert_eq!(t.text, vec!["2", "", "", "", "4"]);
        assert_eq!(t.color.as_deref(), Some(Palette::DEFAULT.spring));
    }

    #[test]
    fn stacked_series_keep_their_own_color() {
        let data = |color: Option<&str>| StackedBarData {
            categories: vec!["Tech".to_string()],
            series: vec![
                StackedSeries {
                    label: "Yes".to_string(),
                    values: vec![1.0],
                    color: color.map(|c| c.to_string()),
                },
                StackedSeries {
                    label: "Later".to_string(),
                    values: vec![2.0],
                    color: None,
                },
            ],
            stats: ChartStats::default(),
        };
        let res = StackedBarStrategy::default().compare(
            &data(Some("#123456")),
            &data(None),
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(res.traces[0].color.as_deref(), Some("#123456"));
        assert_eq!(res.traces[1].color.as_deref(), Some(Palette::DEFAULT.light_berry));

        // Only the older year knows the color.
        let res = StackedBarStrategy::default().compare(
            &data(None),
            &data(Some("#654321")),
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(res.traces[0].color.as_deref(), Some("#654321"));
    }

    #[test]
    fn scatter_range_and_points() {
        let cur = items(&[("DACH", 10.0), ("Asia", 10.0)], 40);
        let cmp = items(&[("DACH", 2.0)], 10);
        let res =
            ScatterPlotStrategy::default().compare(&cur, &cmp, "2025", "2024", &Palette::DEFAULT);
        let points = &res.traces[1];
        assert_eq!(points.text, vec!["DACH", "Asia"]);
        assert_eq!(values_of(&points.x), vec![20.0, 0.0]);
        assert_eq!(values_of(&points.y), vec![25.0, 25.0]);
        assert_eq!(res.layout.x_axis.range, Some((0.0, 28.0)));
        assert_eq!(res.layout.y_axis.title.as_deref(), Some("2025 (%)"));

        let empty = ScatterPlotStrategy::default().compare(
            &items(&[], 0),
            &items(&[], 0),
            "2025",
            "2024",
            &Palette::DEFAULT,
        );
        assert_eq!(empty.layout.x_axis.range, Some((0.0, 0.0)));
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let cur = ComparisonInput::Items(items(&[], 0));
        let cmp = ComparisonInput::YesNoNotSure(YesNoNotSureData::default());
        assert_eq!(
            compare_years(
                ComparisonKind::HorizontalBar,
                &cur,
                &cmp,
                "2025",
                "2024",
                &Palette::DEFAULT
            ),
            None
        );
    }

    #[test]
    fn dumbbell_height_is_clamped() {
        assert_eq!(dumbbell_height(0), 520);
        assert_eq!(dumbbell_height(10), 600);
    }
}
