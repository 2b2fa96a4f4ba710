// ********* Input data structures ***********

use std::collections::HashMap;
use std::error::Error;
use std::fmt::Display;

/// Column keys read by the catalog and the classifiers.
pub mod columns {
    pub const AGE_GROUP: &str = "ageGroup";
    pub const EXPERIENCE: &str = "professionalExperienceYears";
    pub const COUNTRY: &str = "countryOfResidence";
    pub const COUNTRY_ALT: [&str; 4] = [
        "countryOfResidenceAlt1",
        "countryOfResidenceAlt2",
        "countryOfResidenceAlt3",
        "countryOfResidenceAlt4",
    ];
    pub const ROLE: &str = "role";
    pub const ORGANIZATION_TYPE: &str = "organizationType";
    pub const APPLICATION_DOMAIN: &str = "primaryApplicationDomain";
    pub const HEARD_OF_DEFINITION: &str = "heardOfDigitalSustainabilityDefinition";
    pub const DISCUSSION_FREQUENCY: &str = "discussionFrequency";
    pub const PARTICIPATED_IN_TRAINING: &str = "participatedInTraining";
    pub const TRAINING_COUNT: &str = "trainingCount";
    pub const TRAINING_PRIVATE_CAPACITY: &str = "trainingPrivateCapacity";
    pub const TRAINING_SATISFACTION: &str = "trainingSatisfaction";
    pub const ORG_HAS_GOALS: &str = "organizationHasDigitalSustainabilityGoals";
    pub const ORG_HAS_TEAM: &str = "organizationHasSustainabilityTeam";
    pub const ORG_INCORPORATES_PRACTICES: &str = "organizationIncorporatesSustainablePractices";
    pub const ORG_DEPARTMENT_COORDINATION: &str = "organizationDepartmentCoordination";
    pub const ORG_REPORTS: &str = "organizationReportsOnSustainability";
    pub const ORG_OFFERS_TRAINING: &str = "organizationOffersTraining";
    pub const CUSTOMER_REQUIREMENT_FREQUENCY: &str = "customerRequirementFrequency";
    pub const PERSON_INCORPORATES: &str = "personIncorporatesSustainability";
    pub const USES_TOOLS: &str = "usesTools";

    /// The six organizational practices counted by the measure-count classifier.
    pub const MEASURES: [&str; 6] = [
        ORG_HAS_GOALS,
        ORG_HAS_TEAM,
        ORG_INCORPORATES_PRACTICES,
        ORG_DEPARTMENT_COORDINATION,
        ORG_REPORTS,
        ORG_OFFERS_TRAINING,
    ];
}

/// One respondent's answers for one survey year.
///
/// The answers are stored by column key (`ageGroup`, `participatedInTraining`, ...).
/// A response is never modified once built.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyResponse {
    year: String,
    fields: HashMap<String, String>,
}

impl SurveyResponse {
    pub fn new(year: &str, fields: HashMap<String, String>) -> SurveyResponse {
        SurveyResponse {
            year: year.to_string(),
            fields,
        }
    }

    pub fn year(&self) -> &str {
        self.year.as_str()
    }

    /// The raw answer for a column. Missing columns read as the empty string.
    pub fn raw(&self, key: &str) -> &str {
        self.fields.get(key).map(|s| s.as_str()).unwrap_or("")
    }

    /// The first non-empty of the main country column and its alternates.
    pub fn country_of_residence(&self) -> &str {
        std::iter::once(columns::COUNTRY)
            .chain(columns::COUNTRY_ALT)
            .map(|key| self.raw(key))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    pub(crate) fn sorted_fields(&self) -> Vec<(&String, &String)> {
        let mut fields: Vec<(&String, &String)> = self.fields.iter().collect();
        fields.sort();
        fields
    }
}

/// All the responses collected for one survey year.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyDataset {
    year: String,
    responses: Vec<SurveyResponse>,
    fingerprint: String,
}

impl SurveyDataset {
    pub fn new(year: &str, responses: Vec<SurveyResponse>) -> SurveyDataset {
        let mut buffer = String::new();
        for r in responses.iter() {
            for (key, value) in r.sorted_fields() {
                if !value.is_empty() {
                    buffer.push_str(key);
                    buffer.push('=');
                    buffer.push_str(value);
                    buffer.push('\u{1f}');
                }
            }
            buffer.push('\u{1e}');
        }
        SurveyDataset {
            year: year.to_string(),
            responses,
            fingerprint: sha256::digest(buffer),
        }
    }

    pub fn year(&self) -> &str {
        self.year.as_str()
    }

    pub fn responses(&self) -> &[SurveyResponse] {
        self.responses.as_slice()
    }

    /// A digest of the content, usable as a dataset version.
    pub fn fingerprint(&self) -> &str {
        self.fingerprint.as_str()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

// ******** Output data structures *********

/// A label and its value, as produced for year-over-year comparisons.
#[derive(PartialEq, Debug, Clone)]
pub struct AggregationItem {
    pub label: String,
    pub value: f64,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct ChartStats {
    /// The population that validly answered.
    pub number_of_responses: u64,
    /// The population that passed the preconditions, before checking the answer.
    pub total_eligible: Option<u64>,
}

impl ChartStats {
    /// Adds the statistics of two years.
    ///
    /// A missing eligible count is treated as zero, and the sum is only reported when positive.
    pub fn combine(&self, other: &ChartStats) -> ChartStats {
        let eligible = self.total_eligible.unwrap_or(0) + other.total_eligible.unwrap_or(0);
        ChartStats {
            number_of_responses: self.number_of_responses + other.number_of_responses,
            total_eligible: if eligible > 0 { Some(eligible) } else { None },
        }
    }

    /// The share of eligible respondents that answered, in percent.
    pub fn response_rate(&self) -> Option<f64> {
        match self.total_eligible {
            Some(total) if total > 0 => {
                Some(self.number_of_responses as f64 / total as f64 * 100.0)
            }
            _ => None,
        }
    }
}

/// The flat output of a chart in comparison mode.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ItemData {
    pub items: Vec<AggregationItem>,
    pub stats: ChartStats,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct AnswerCounts {
    pub yes: u64,
    pub no: u64,
    pub not_sure: u64,
}

/// The counts behind a yes / no / not sure question.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct YesNoNotSureData {
    pub counts: AnswerCounts,
    pub stats: ChartStats,
}

#[derive(PartialEq, Debug, Clone)]
pub struct StackedSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: Option<String>,
}

/// Per-category series, one value per category in each series.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct StackedBarData {
    pub categories: Vec<String>,
    pub series: Vec<StackedSeries>,
    pub stats: ChartStats,
}

/// What a chart hands over to its comparison strategy.
#[derive(PartialEq, Debug, Clone)]
pub enum ComparisonInput {
    Items(ItemData),
    YesNoNotSure(YesNoNotSureData),
    Stacked(StackedBarData),
}

impl ComparisonInput {
    pub fn stats(&self) -> ChartStats {
        match self {
            ComparisonInput::Items(d) => d.stats,
            ComparisonInput::YesNoNotSure(d) => d.stats,
            ComparisonInput::Stacked(d) => d.stats,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ScatterMode {
    Lines,
    Markers,
    MarkersText,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum TraceKind {
    Bar(Orientation),
    Scatter(ScatterMode),
    Heatmap,
}

/// The values along one axis of a trace. `None` breaks a line.
#[derive(PartialEq, Debug, Clone)]
pub enum Series {
    Labels(Vec<Option<String>>),
    Values(Vec<Option<f64>>),
}

impl Series {
    pub fn labels(labels: &[String]) -> Series {
        Series::Labels(labels.iter().map(|l| Some(l.clone())).collect())
    }

    pub fn values(values: &[f64]) -> Series {
        Series::Values(values.iter().map(|v| Some(*v)).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Labels(l) => l.len(),
            Series::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct HeatmapCells {
    pub z: Vec<Vec<f64>>,
    pub text: Vec<Vec<String>>,
    pub text_colors: Vec<Vec<String>>,
}

/// A named series handed to the renderer.
#[derive(PartialEq, Debug, Clone)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: Option<String>,
    pub x: Series,
    pub y: Series,
    pub cells: Option<HeatmapCells>,
    pub text: Vec<String>,
    pub custom_data: Vec<String>,
    pub color: Option<String>,
    pub point_colors: Vec<String>,
    pub opacities: Vec<f64>,
    pub opacity: Option<f64>,
    pub marker_size: Option<u32>,
    pub line_width: Option<u32>,
    pub dashed: bool,
    pub hover_template: Option<String>,
    pub show_legend: bool,
}

impl Trace {
    pub fn new(kind: TraceKind, x: Series, y: Series) -> Trace {
        Trace {
            kind,
            name: None,
            x,
            y,
            cells: None,
            text: Vec::new(),
            custom_data: Vec::new(),
            color: None,
            point_colors: Vec::new(),
            opacities: Vec::new(),
            opacity: None,
            marker_size: None,
            line_width: None,
            dashed: false,
            hover_template: None,
            show_legend: true,
        }
    }

    /// A bar trace over categories. Horizontal bars put the categories on the y axis.
    pub fn bar(orientation: Orientation, categories: &[String], values: &[f64]) -> Trace {
        let (x, y) = match orientation {
            Orientation::Horizontal => (Series::values(values), Series::labels(categories)),
            Orientation::Vertical => (Series::labels(categories), Series::values(values)),
        };
        Trace::new(TraceKind::Bar(orientation), x, y)
    }

    pub fn name(mut self, name: &str) -> Trace {
        self.name = Some(name.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Trace {
        self.color = Some(color.to_string());
        self
    }

    pub fn text(mut self, text: Vec<String>) -> Trace {
        self.text = text;
        self
    }

    pub fn hover_template(mut self, template: &str) -> Trace {
        self.hover_template = Some(template.to_string());
        self
    }

    pub fn hidden_from_legend(mut self) -> Trace {
        self.show_legend = false;
        self
    }

    /// All the numbers carried by this trace, for sanity checks.
    pub fn numbers(&self) -> Vec<f64> {
        let mut res: Vec<f64> = Vec::new();
        for s in [&self.x, &self.y] {
            if let Series::Values(vs) = s {
                res.extend(vs.iter().flatten());
            }
        }
        if let Some(cells) = &self.cells {
            res.extend(cells.z.iter().flatten());
        }
        res
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum BarMode {
    Stack,
    Group,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct AxisLayout {
    pub title: Option<String>,
    pub tick_suffix: Option<String>,
    pub category: bool,
    pub dtick: Option<f64>,
    pub range: Option<(f64, f64)>,
    pub title_standoff: Option<u32>,
    pub on_top: bool,
}

/// Renderer hints that go along the traces.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Layout {
    pub bar_mode: Option<BarMode>,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub height: Option<u32>,
    pub horizontal_legend: bool,
    pub hide_legend: bool,
    pub square_axes: bool,
}

/// The output of a chart for a single year.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ChartPayload {
    pub traces: Vec<Trace>,
    pub stats: ChartStats,
}

/// The output of a comparison strategy.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ComparisonResult {
    pub traces: Vec<Trace>,
    pub layout: Layout,
    pub stats: ChartStats,
}

/// Errors returned to callers that ask for something the catalog does not hold.
///
/// Survey data itself never produces an error: unreadable answers are excluded.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ChartErrors {
    UnknownChart(String),
    UnknownYear(String),
    NoComparison(String),
}

impl Error for ChartErrors {}

impl Display for ChartErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartErrors::UnknownChart(id) => write!(f, "unknown chart: {}", id),
            ChartErrors::UnknownYear(year) => write!(f, "no survey data for year {}", year),
            ChartErrors::NoComparison(id) => {
                write!(f, "chart {} does not support year comparisons", id)
            }
        }
    }
}

// ********* Configuration **********

/// The named colors threaded through every chart.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Palette {
    pub berry: &'static str,
    pub light_berry: &'static str,
    pub super_light_berry: &'static str,
    pub spring: &'static str,
    pub light_spring: &'static str,
    pub dark_spring: &'static str,
    pub mandarin: &'static str,
    pub transport: &'static str,
    pub grey: &'static str,
    pub grey02: &'static str,
    pub night: &'static str,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        berry: "#831E82",
        light_berry: "#A450A3",
        super_light_berry: "#E6B3E5",
        spring: "#79B928",
        light_spring: "#A8D26E",
        dark_spring: "#4F7A1A",
        mandarin: "#F18A00",
        transport: "#009BBB",
        grey: "#4F4F4F",
        grey02: "#9A9A9A",
        night: "#1E1E1E",
    };

    /// The color of an answer series: yes / no / not sure have fixed colors, the
    /// other answers cycle through the palette.
    pub fn series_color(&self, label: &str, index: usize) -> &'static str {
        match label.trim().to_lowercase().as_str() {
            "yes" => self.spring,
            "no" => self.mandarin,
            "not sure" => self.grey02,
            _ => {
                let cycle = [
                    self.berry,
                    self.light_berry,
                    self.grey02,
                    self.mandarin,
                    self.transport,
                    self.spring,
                    self.light_spring,
                    self.grey,
                ];
                cycle[index % cycle.len()]
            }
        }
    }
}

/// The page a chart belongs to.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Page {
    Demographic,
    GeneralAwareness,
    RoleOfDigitalSustainability,
    SustainabilityInTasks,
    Explore,
}

/// A filter applied before anything gets counted.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Condition {
    /// The lowercased answer equals the token.
    Equals(&'static str, &'static str),
    /// The lowercased answer is anything but the token, including no answer.
    NotEquals(&'static str, &'static str),
}

/// A fixed answer option: the lowercased token to match and the displayed label.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Choice {
    pub token: &'static str,
    pub label: &'static str,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MatchRule {
    Exact,
    Prefix,
}

/// What happens to an answer that matches none of the choices.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Unmatched {
    Exclude,
    Other(&'static str),
}

/// The free-text "other" field of a checkbox question.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct FreeText {
    pub key: &'static str,
    /// When set, a filled-in field also counts as an answer with this label.
    pub label: Option<&'static str>,
}

/// A checkbox question spread over one yes/no column per option.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct MultiSelectQuestion {
    pub options: &'static [(&'static str, &'static str)],
    pub other: Option<FreeText>,
}

/// Maps a response to a single bucket.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Classifier {
    /// The whitespace-normalized answer, as is.
    Field(&'static str),
    Region,
    DachCountry,
    RoleCategory(&'static str),
    MeasureCount,
    Frequency(&'static str),
    TrainingCount(&'static str),
    Choices {
        field: &'static str,
        choices: &'static [Choice],
        rule: MatchRule,
        unmatched: Unmatched,
    },
}

/// The answers counted for each group.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum AnswerSet {
    Single(Classifier),
    MultiSelect(&'static MultiSelectQuestion),
}

/// How percentages are derived from the counts when items are extracted.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Denominator {
    /// Raw counts.
    Count,
    /// Divided by everyone who answered, across all the groups.
    Global,
    /// Divided by the respondents who answered within the same group.
    GroupLocal,
}

/// Display order for groups and answers. Ties keep the order of first appearance.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum BucketOrder {
    FirstSeen,
    /// The rank given by the classifier: template position or parsed sort key.
    Rank,
    RankDescending,
    /// Ascending by eligible count for groups, by total count for answers.
    CountAscending,
    AnsweredAscending,
    Alphabetical,
    LeadingNumber,
    Experience,
    /// The listed labels first, in that order, then the others.
    Listed(&'static [&'static str]),
}

/// The shape of the single-year chart.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ChartShape {
    Bar(Orientation),
    Stacked,
    Grouped,
    /// Groups on the y axis, answers on the x axis, unless transposed.
    Heatmap { transposed: bool },
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SortBy {
    Value,
    Difference,
    AbsoluteDifference,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct DumbbellOptions {
    pub normalize_to_percentage: bool,
    /// Defaults to `normalize_to_percentage` when not set.
    pub format_as_percentage: Option<bool>,
    pub sort_by: SortBy,
}

impl DumbbellOptions {
    pub const DEFAULT: DumbbellOptions = DumbbellOptions {
        normalize_to_percentage: true,
        format_as_percentage: None,
        sort_by: SortBy::AbsoluteDifference,
    };

    /// For items that are already percentages.
    pub const PRECOMPUTED: DumbbellOptions = DumbbellOptions {
        normalize_to_percentage: false,
        format_as_percentage: Some(true),
        sort_by: SortBy::AbsoluteDifference,
    };

    pub fn formats_as_percentage(&self) -> bool {
        self.format_as_percentage
            .unwrap_or(self.normalize_to_percentage)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ComparisonKind {
    Dumbbell(DumbbellOptions),
    HorizontalBar,
    YesNoNotSure,
    Stacked,
    Scatter,
}

/// The full description of one chart.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ChartDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub page: Page,
    pub preconditions: &'static [Condition],
    /// The grouping dimension. `None` yields a single distribution.
    pub dimension: Option<Classifier>,
    pub answers: AnswerSet,
    pub denominator: Denominator,
    pub group_order: BucketOrder,
    pub answer_order: BucketOrder,
    pub shape: ChartShape,
    pub comparison: Option<ComparisonKind>,
    /// Whether the eligible population is reported next to the responses.
    pub report_eligible: bool,
    /// Conditions that only narrow the eligible population. Responses failing
    /// them are still tallied.
    pub eligibility: &'static [Condition],
}
