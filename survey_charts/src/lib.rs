/*!
Aggregation and year-over-year comparison of survey responses.

Every chart of the dashboard is a [`ChartDefinition`] in the [`catalog`]. The
engine in this module runs a definition over the responses of one year and
produces either a [`ChartPayload`] (single-year display) or a
[`ComparisonInput`] that a strategy from [`compare`] turns into a
[`ComparisonResult`] for two years.

```
use survey_charts::builder::DatasetBuilder;
use survey_charts::{catalog, process, Palette};

let mut builder = DatasetBuilder::new("2025");
builder.add_response(&[("ageGroup", "18 - 28"), ("discussionFrequency", "Daily")]);
builder.add_response(&[("ageGroup", "29 - 44"), ("discussionFrequency", "n/a")]);
let dataset = builder.build();

let chart = catalog::find("discussion-frequency-by-age").unwrap();
let payload = process(chart, dataset.responses(), &Palette::DEFAULT);
assert_eq!(payload.stats.number_of_responses, 1);
```

See the [`manual`] for the list of charts and the input format.
*/

mod config;

pub mod builder;
pub mod catalog;
pub mod classify;
pub mod compare;
pub mod host;
pub mod manual;
pub mod normalize;
pub mod predicates;

use log::debug;

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign},
};

pub use crate::config::*;

use crate::classify::{compare_experience, compare_leading_number, Bucket};
use crate::predicates::eligible;

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct ResponseCount(u64);

impl ResponseCount {
    const EMPTY: ResponseCount = ResponseCount(0);
    const ONE: ResponseCount = ResponseCount(1);

    fn share_of(&self, total: ResponseCount) -> f64 {
        if total > ResponseCount::EMPTY {
            self.0 as f64 / total.0 as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl std::iter::Sum for ResponseCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        ResponseCount(iter.map(|c| c.0).sum())
    }
}

impl AddAssign for ResponseCount {
    fn add_assign(&mut self, rhs: ResponseCount) {
        self.0 += rhs.0;
    }
}

impl Add for ResponseCount {
    type Output = ResponseCount;
    fn add(self: ResponseCount, rhs: ResponseCount) -> ResponseCount {
        ResponseCount(self.0 + rhs.0)
    }
}

// The label used for the single group of a chart without dimension.
const ALL: &str = "All";

#[derive(PartialEq, Debug, Clone)]
struct AnswerTally {
    label: String,
    rank: Option<f64>,
    count: ResponseCount,
}

#[derive(PartialEq, Debug, Clone)]
struct GroupTally {
    label: String,
    rank: Option<f64>,
    eligible: ResponseCount,
    answered: ResponseCount,
    // In order of first appearance.
    counts: Vec<(String, ResponseCount)>,
}

impl GroupTally {
    fn count(&self, answer: &str) -> ResponseCount {
        self.counts
            .iter()
            .find(|(label, _)| label == answer)
            .map(|(_, c)| *c)
            .unwrap_or(ResponseCount::EMPTY)
    }
}

// The result of a single pass over the responses.
// Invariant: groups and answers are in display order.
#[derive(PartialEq, Debug, Clone)]
struct Tabulation {
    groups: Vec<GroupTally>,
    answers: Vec<AnswerTally>,
    total_eligible: ResponseCount,
    total_answered: ResponseCount,
}

impl Tabulation {
    fn stats(&self, def: &ChartDefinition) -> ChartStats {
        ChartStats {
            number_of_responses: self.total_answered.0,
            total_eligible: if def.report_eligible {
                Some(self.total_eligible.0)
            } else {
                None
            },
        }
    }

    fn group_labels(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.label.clone()).collect()
    }

    fn answer_total(&self, answer: &str) -> ResponseCount {
        self.groups.iter().map(|g| g.count(answer)).sum()
    }
}

// Sorting keys shared by groups and answers.
trait Ordered {
    fn label(&self) -> &str;
    fn rank(&self) -> Option<f64>;
    fn size(&self) -> ResponseCount;
    fn answered(&self) -> ResponseCount;
}

impl Ordered for GroupTally {
    fn label(&self) -> &str {
        self.label.as_str()
    }
    fn rank(&self) -> Option<f64> {
        self.rank
    }
    fn size(&self) -> ResponseCount {
        self.eligible
    }
    fn answered(&self) -> ResponseCount {
        self.answered
    }
}

impl Ordered for AnswerTally {
    fn label(&self) -> &str {
        self.label.as_str()
    }
    fn rank(&self) -> Option<f64> {
        self.rank
    }
    fn size(&self) -> ResponseCount {
        self.count
    }
    fn answered(&self) -> ResponseCount {
        self.count
    }
}

fn compare_rank(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// The sort is stable: ties keep the order of first appearance.
fn sort_buckets<T: Ordered>(buckets: &mut [T], order: BucketOrder) {
    match order {
        BucketOrder::FirstSeen => {}
        BucketOrder::Rank => buckets.sort_by(|a, b| compare_rank(a.rank(), b.rank())),
        BucketOrder::RankDescending => {
            buckets.sort_by(|a, b| compare_rank(b.rank(), a.rank()));
        }
        BucketOrder::CountAscending => buckets.sort_by_key(|b| b.size()),
        BucketOrder::AnsweredAscending => buckets.sort_by_key(|b| b.answered()),
        BucketOrder::Alphabetical => buckets.sort_by(|a, b| a.label().cmp(b.label())),
        BucketOrder::LeadingNumber => {
            buckets.sort_by(|a, b| compare_leading_number(a.label(), b.label()))
        }
        BucketOrder::Experience => {
            buckets.sort_by(|a, b| compare_experience(a.label(), b.label()))
        }
        BucketOrder::Listed(labels) => buckets.sort_by_key(|b| {
            labels
                .iter()
                .position(|l| *l == b.label())
                .unwrap_or(labels.len())
        }),
    }
}

// The answers of one response, or None if it did not validly answer.
fn answers_of(answers: &AnswerSet, response: &SurveyResponse) -> Option<Vec<Bucket>> {
    match answers {
        AnswerSet::Single(c) => c.classify(response).map(|b| vec![b]),
        AnswerSet::MultiSelect(q) => {
            let labels = q.labels();
            q.selected(response).map(|selected| {
                selected
                    .iter()
                    .map(|l| Bucket {
                        label: l.to_string(),
                        rank: labels.iter().position(|x| x == l).map(|p| p as f64),
                    })
                    .collect()
            })
        }
    }
}

fn answer_template(answers: &AnswerSet) -> Vec<String> {
    match answers {
        AnswerSet::Single(c) => c.template(),
        AnswerSet::MultiSelect(q) => q.labels(),
    }
}

fn tabulate(def: &ChartDefinition, responses: &[SurveyResponse]) -> Tabulation {
    let mut groups: Vec<GroupTally> = Vec::new();
    let mut seen_answers: Vec<AnswerTally> = Vec::new();
    let mut total_eligible = ResponseCount::EMPTY;
    let mut total_answered = ResponseCount::EMPTY;

    for r in responses.iter() {
        if !eligible(def.preconditions, r) {
            continue;
        }
        let group_bucket = match def.dimension {
            None => Bucket {
                label: ALL.to_string(),
                rank: None,
            },
            Some(c) => match c.classify(r) {
                Some(b) => b,
                None => continue,
            },
        };
        let idx = match groups.iter().position(|g| g.label == group_bucket.label) {
            Some(idx) => idx,
            None => {
                groups.push(GroupTally {
                    label: group_bucket.label,
                    rank: group_bucket.rank,
                    eligible: ResponseCount::EMPTY,
                    answered: ResponseCount::EMPTY,
                    counts: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[idx];
        group.eligible += ResponseCount::ONE;
        if eligible(def.eligibility, r) {
            total_eligible += ResponseCount::ONE;
        }

        let answers = match answers_of(&def.answers, r) {
            Some(answers) => answers,
            None => continue,
        };
        group.answered += ResponseCount::ONE;
        total_answered += ResponseCount::ONE;
        for a in answers {
            match group.counts.iter_mut().find(|(label, _)| *label == a.label) {
                Some((_, c)) => *c += ResponseCount::ONE,
                None => group.counts.push((a.label.clone(), ResponseCount::ONE)),
            }
            if !seen_answers.iter().any(|s| s.label == a.label) {
                seen_answers.push(AnswerTally {
                    label: a.label,
                    rank: a.rank,
                    count: ResponseCount::EMPTY,
                });
            }
        }
    }

    // Groups without any valid answer are not displayed.
    groups.retain(|g| g.answered > ResponseCount::EMPTY);
    sort_buckets(&mut groups, def.group_order);

    // The known answers come first, so that empty answers still get a trace.
    let template = answer_template(&def.answers);
    let mut answers: Vec<AnswerTally> = template
        .iter()
        .enumerate()
        .map(|(idx, label)| AnswerTally {
            label: label.clone(),
            rank: Some(idx as f64),
            count: ResponseCount::EMPTY,
        })
        .collect();
    for s in seen_answers {
        if !answers.iter().any(|a| a.label == s.label) {
            answers.push(s);
        }
    }
    let mut tab = Tabulation {
        groups,
        answers: Vec::new(),
        total_eligible,
        total_answered,
    };
    for a in answers.iter_mut() {
        a.count = tab.answer_total(&a.label);
    }
    sort_buckets(&mut answers, def.answer_order);
    tab.answers = answers;

    debug!(
        "tabulate: {}: {} groups, {} answers, eligible: {:?} answered: {:?}",
        def.id,
        tab.groups.len(),
        tab.answers.len(),
        total_eligible,
        total_answered
    );
    tab
}

fn count_text(count: ResponseCount) -> String {
    if count > ResponseCount::EMPTY {
        count.0.to_string()
    } else {
        String::new()
    }
}

fn bar_payload(
    tab: &Tabulation,
    orientation: Orientation,
    palette: &Palette,
) -> Vec<Trace> {
    let labels: Vec<String> = tab.answers.iter().map(|a| a.label.clone()).collect();
    let values: Vec<f64> = tab.answers.iter().map(|a| a.count.0 as f64).collect();
    let mut trace = Trace::bar(orientation, &labels, &values)
        .text(tab.answers.iter().map(|a| a.count.0.to_string()).collect());
    let yes_no = !labels.is_empty()
        && labels
            .iter()
            .all(|l| matches!(l.to_lowercase().as_str(), "yes" | "no" | "not sure"));
    if yes_no {
        trace.point_colors = labels
            .iter()
            .enumerate()
            .map(|(idx, l)| palette.series_color(l, idx).to_string())
            .collect();
    } else {
        trace = trace.color(palette.berry);
    }
    vec![trace]
}

fn series_payload(
    tab: &Tabulation,
    orientation: Orientation,
    palette: &Palette,
) -> Vec<Trace> {
    let groups = tab.group_labels();
    let value_axis = match orientation {
        Orientation::Horizontal => "x",
        Orientation::Vertical => "y",
    };
    tab.answers
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            let counts: Vec<ResponseCount> = tab.groups.iter().map(|g| g.count(&a.label)).collect();
            let values: Vec<f64> = counts.iter().map(|c| c.0 as f64).collect();
            let shares: Vec<String> = tab
                .groups
                .iter()
                .zip(counts.iter())
                .map(|(g, c)| format!("{:.1}%", c.share_of(g.answered)))
                .collect();
            let mut trace = Trace::bar(orientation, &groups, &values)
                .name(&a.label)
                .color(palette.series_color(&a.label, idx))
                .text(counts.iter().map(|c| count_text(*c)).collect())
                .hover_template(&format!(
                    "<b>{}</b><br>Count: %{{{}}}<br>Share in group: %{{customdata}}<extra></extra>",
                    a.label, value_axis
                ));
            trace.custom_data = shares;
            trace
        })
        .collect()
}

fn heatmap_payload(tab: &Tabulation, transposed: bool, palette: &Palette) -> Vec<Trace> {
    // Only the answers that were given at least once get a column.
    let answers: Vec<&AnswerTally> = tab
        .answers
        .iter()
        .filter(|a| a.count > ResponseCount::EMPTY)
        .collect();
    let answer_labels: Vec<String> = answers.iter().map(|a| a.label.clone()).collect();
    let group_labels = tab.group_labels();

    let by_group: Vec<Vec<ResponseCount>> = tab
        .groups
        .iter()
        .map(|g| answers.iter().map(|a| g.count(&a.label)).collect())
        .collect();
    let rows: Vec<Vec<ResponseCount>> = if transposed {
        (0..answers.len())
            .map(|a_idx| by_group.iter().map(|row| row[a_idx]).collect())
            .collect()
    } else {
        by_group
    };
    let max_z = rows
        .iter()
        .flatten()
        .max()
        .copied()
        .unwrap_or(ResponseCount::EMPTY);

    let z: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| row.iter().map(|c| c.0 as f64).collect())
        .collect();
    let text: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| count_text(*c)).collect())
        .collect();
    let text_colors: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| {
                    if max_z > ResponseCount::EMPTY && c.0 as f64 / max_z.0 as f64 > 0.4 {
                        "#FFFFFF".to_string()
                    } else {
                        palette.grey.to_string()
                    }
                })
                .collect()
        })
        .collect();

    let (x, y) = if transposed {
        (group_labels, answer_labels)
    } else {
        (answer_labels, group_labels)
    };
    let mut trace = Trace::new(TraceKind::Heatmap, Series::labels(&x), Series::labels(&y));
    trace.cells = Some(HeatmapCells {
        z,
        text,
        text_colors,
    });
    trace.color = Some(palette.berry.to_string());
    trace.show_legend = false;
    vec![trace]
}

/// Runs a chart over one year of responses, for single-year display.
///
/// Groups without any valid answer are left out of the axes. Every known answer
/// keeps its slot even when nobody gave it, except on heatmaps where only given
/// answers get a column. Empty input yields zero responses.
pub fn process(
    def: &ChartDefinition,
    responses: &[SurveyResponse],
    palette: &Palette,
) -> ChartPayload {
    let tab = tabulate(def, responses);
    let traces = match def.shape {
        ChartShape::Bar(orientation) => bar_payload(&tab, orientation, palette),
        ChartShape::Stacked => series_payload(&tab, Orientation::Horizontal, palette),
        ChartShape::Grouped => series_payload(&tab, Orientation::Vertical, palette),
        ChartShape::Heatmap { transposed } => heatmap_payload(&tab, transposed, palette),
    };
    ChartPayload {
        traces,
        stats: tab.stats(def),
    }
}

fn items_from(def: &ChartDefinition, tab: &Tabulation) -> Vec<AggregationItem> {
    let value = |count: ResponseCount, group: &GroupTally| -> f64 {
        match def.denominator {
            Denominator::Count => count.0 as f64,
            Denominator::Global => count.share_of(tab.total_answered),
            Denominator::GroupLocal => count.share_of(group.answered),
        }
    };
    let mut items: Vec<AggregationItem> = Vec::new();
    match def.dimension {
        None => {
            // A single distribution lists every known answer, even the empty ones.
            let empty = GroupTally {
                label: ALL.to_string(),
                rank: None,
                eligible: ResponseCount::EMPTY,
                answered: ResponseCount::EMPTY,
                counts: Vec::new(),
            };
            let group = tab.groups.first().unwrap_or(&empty);
            for a in tab.answers.iter() {
                items.push(AggregationItem {
                    label: a.label.clone(),
                    value: value(group.count(&a.label), group),
                });
            }
        }
        Some(_) => {
            for g in tab.groups.iter() {
                for a in tab.answers.iter() {
                    let count = g.count(&a.label);
                    if count > ResponseCount::EMPTY {
                        items.push(AggregationItem {
                            label: format!("{}<br>{}", g.label, a.label),
                            value: value(count, g),
                        });
                    }
                }
            }
        }
    }
    items
}

/// Runs a chart over one year of responses and flattens the result into items.
///
/// All the items of one chart share the chart's denominator convention.
pub fn extract_items(def: &ChartDefinition, responses: &[SurveyResponse]) -> ItemData {
    let tab = tabulate(def, responses);
    ItemData {
        items: items_from(def, &tab),
        stats: tab.stats(def),
    }
}

/// Runs a chart over one year of responses, in the form its comparison strategy expects.
pub fn extract(def: &ChartDefinition, responses: &[SurveyResponse]) -> ComparisonInput {
    let tab = tabulate(def, responses);
    let stats = tab.stats(def);
    match def.comparison {
        Some(ComparisonKind::YesNoNotSure) => {
            let count = |label: &str| -> u64 {
                tab.answers
                    .iter()
                    .filter(|a| a.label.eq_ignore_ascii_case(label))
                    .map(|a| a.count.0)
                    .sum()
            };
            ComparisonInput::YesNoNotSure(YesNoNotSureData {
                counts: AnswerCounts {
                    yes: count("yes"),
                    no: count("no"),
                    not_sure: count("not sure"),
                },
                stats,
            })
        }
        Some(ComparisonKind::Stacked) => ComparisonInput::Stacked(StackedBarData {
            categories: tab.group_labels(),
            series: tab
                .answers
                .iter()
                .map(|a| StackedSeries {
                    label: a.label.clone(),
                    values: tab
                        .groups
                        .iter()
                        .map(|g| g.count(&a.label).0 as f64)
                        .collect(),
                    color: None,
                })
                .collect(),
            stats,
        }),
        _ => ComparisonInput::Items(ItemData {
            items: items_from(def, &tab),
            stats,
        }),
    }
}

/// Layout hints for the single-year display of a chart.
pub fn single_year_layout(def: &ChartDefinition) -> Layout {
    let count_title = "Number of Respondents".to_string();
    match def.shape {
        ChartShape::Bar(Orientation::Horizontal) => Layout {
            x_axis: AxisLayout {
                title: Some(count_title),
                ..AxisLayout::default()
            },
            hide_legend: true,
            ..Layout::default()
        },
        ChartShape::Bar(Orientation::Vertical) => Layout {
            y_axis: AxisLayout {
                title: Some(count_title),
                ..AxisLayout::default()
            },
            hide_legend: true,
            ..Layout::default()
        },
        ChartShape::Stacked => Layout {
            bar_mode: Some(BarMode::Stack),
            x_axis: AxisLayout {
                title: Some(count_title),
                ..AxisLayout::default()
            },
            horizontal_legend: true,
            ..Layout::default()
        },
        ChartShape::Grouped => Layout {
            bar_mode: Some(BarMode::Group),
            y_axis: AxisLayout {
                title: Some(count_title),
                ..AxisLayout::default()
            },
            horizontal_legend: true,
            ..Layout::default()
        },
        ChartShape::Heatmap { .. } => Layout {
            x_axis: AxisLayout {
                on_top: true,
                ..AxisLayout::default()
            },
            hide_legend: true,
            ..Layout::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatasetBuilder;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const YES_NO: &[Choice] = &[
        Choice {
            token: "yes",
            label: "Yes",
        },
        Choice {
            token: "no",
            label: "No",
        },
    ];

    const BY_AGE: ChartDefinition = ChartDefinition {
        id: "test-by-age",
        title: "Test",
        page: Page::Explore,
        preconditions: &[],
        dimension: Some(Classifier::Field(columns::AGE_GROUP)),
        answers: AnswerSet::Single(Classifier::Choices {
            field: "q",
            choices: YES_NO,
            rule: MatchRule::Exact,
            unmatched: Unmatched::Exclude,
        }),
        denominator: Denominator::Global,
        group_order: BucketOrder::LeadingNumber,
        answer_order: BucketOrder::Rank,
        shape: ChartShape::Stacked,
        comparison: Some(ComparisonKind::Dumbbell(DumbbellOptions::PRECOMPUTED)),
        report_eligible: true,
        eligibility: &[],
    };

    fn dataset() -> Vec<SurveyResponse> {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("ageGroup", "45 - 59"), ("q", "Yes")]);
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "No")]);
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "")]);
        b.add_response(&[("ageGroup", "n/a"), ("q", "Yes")]);
        b.add_response(&[("ageGroup", "29 - 44"), ("q", "maybe")]);
        b.build().responses().to_vec()
    }

    #[test]
    fn tabulation_counts_eligible_and_answered() {
        init();
        let tab = tabulate(&BY_AGE, &dataset());
        assert_eq!(tab.total_eligible, ResponseCount(5));
        assert_eq!(tab.total_answered, ResponseCount(3));
        // 29 - 44 never answered validly.
        let labels = tab.group_labels();
        assert_eq!(labels, vec!["18 - 28", "45 - 59"]);
        assert_eq!(tab.groups[0].eligible, ResponseCount(3));
        assert_eq!(tab.groups[0].answered, ResponseCount(2));
    }

    #[test]
    fn global_denominator_sums_to_hundred() {
        let data = extract_items(&BY_AGE, &dataset());
        let total: f64 = data.items.iter().map(|i| i.value).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(data.stats.number_of_responses, 3);
        assert_eq!(data.stats.total_eligible, Some(5));
        assert_eq!(data.items[0].label, "18 - 28<br>Yes");
    }

    #[test]
    fn group_local_denominator() {
        let def = ChartDefinition {
            denominator: Denominator::GroupLocal,
            ..BY_AGE
        };
        let data = extract_items(&def, &dataset());
        let young: f64 = data
            .items
            .iter()
            .filter(|i| i.label.starts_with("18 - 28"))
            .map(|i| i.value)
            .sum();
        assert!((young - 100.0).abs() < 1e-9);
        assert!(data
            .items
            .iter()
            .any(|i| i.label == "45 - 59<br>Yes" && (i.value - 100.0).abs() < 1e-9));
    }

    #[test]
    fn stacked_traces_follow_group_order() {
        let payload = process(&BY_AGE, &dataset(), &Palette::DEFAULT);
        assert_eq!(payload.traces.len(), 2);
        let yes = &payload.traces[0];
        assert_eq!(yes.name.as_deref(), Some("Yes"));
        assert_eq!(yes.x, Series::Values(vec![Some(1.0), Some(1.0)]));
        assert_eq!(yes.custom_data, vec!["50.0%", "100.0%"]);
        assert_eq!(yes.color.as_deref(), Some(Palette::DEFAULT.spring));
    }

    #[test]
    fn empty_input_is_empty_chart() {
        let payload = process(&BY_AGE, &[], &Palette::DEFAULT);
        assert_eq!(payload.stats.number_of_responses, 0);
        assert_eq!(payload.stats.total_eligible, Some(0));
        assert!(payload
            .traces
            .iter()
            .all(|t| t.numbers().iter().all(|v| v.is_finite())));
        let data = extract_items(&BY_AGE, &[]);
        assert!(data.items.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let data = dataset();
        let a = process(&BY_AGE, &data, &Palette::DEFAULT);
        let b = process(&BY_AGE, &data, &Palette::DEFAULT);
        assert_eq!(a, b);
        assert_eq!(extract(&BY_AGE, &data), extract(&BY_AGE, &data));
    }

    #[test]
    fn answers_nobody_gave_keep_their_trace() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "29 - 44"), ("q", "")]);
        let payload = process(&BY_AGE, b.build().responses(), &Palette::DEFAULT);
        assert_eq!(payload.traces.len(), 2);
        let no = &payload.traces[1];
        assert_eq!(no.name.as_deref(), Some("No"));
        assert_eq!(no.x, Series::Values(vec![Some(0.0)]));
        // 29 - 44 has no valid answer.
        assert_eq!(no.y, Series::labels(&["18 - 28".to_string()]));
    }

    #[test]
    fn listed_groups_come_first() {
        let def = ChartDefinition {
            group_order: BucketOrder::Listed(&["45 - 59", "18 - 28"]),
            ..BY_AGE
        };
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("ageGroup", "29 - 44"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "60+"), ("q", "no")]);
        b.add_response(&[("ageGroup", "45 - 59"), ("q", "no")]);
        let tab = tabulate(&def, b.build().responses());
        assert_eq!(
            tab.group_labels(),
            vec!["45 - 59", "18 - 28", "29 - 44", "60+"]
        );
    }

    #[test]
    fn eligibility_does_not_filter_the_answers() {
        const ORG_YES: &[Condition] = &[Condition::Equals("org", "yes")];
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "yes"), ("org", "Yes")]);
        b.add_response(&[("ageGroup", "18 - 28"), ("q", "no"), ("org", "No")]);
        b.add_response(&[("ageGroup", "29 - 44"), ("q", "yes")]);
        let data = b.build();

        let def = ChartDefinition {
            eligibility: ORG_YES,
            ..BY_AGE
        };
        let tab = tabulate(&def, data.responses());
        assert_eq!(tab.total_answered, ResponseCount(3));
        assert_eq!(tab.total_eligible, ResponseCount(1));

        let filtered = ChartDefinition {
            preconditions: ORG_YES,
            ..BY_AGE
        };
        let tab = tabulate(&filtered, data.responses());
        assert_eq!(tab.total_answered, ResponseCount(1));
        assert_eq!(tab.total_eligible, ResponseCount(1));
    }

    #[test]
    fn ties_keep_first_appearance() {
        let def = ChartDefinition {
            group_order: BucketOrder::CountAscending,
            ..BY_AGE
        };
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("ageGroup", "b"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "a"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "c"), ("q", "yes")]);
        b.add_response(&[("ageGroup", "c"), ("q", "yes")]);
        let tab = tabulate(&def, b.build().responses());
        assert_eq!(tab.group_labels(), vec!["b", "a", "c"]);
    }
}
