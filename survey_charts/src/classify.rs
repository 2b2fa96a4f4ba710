//! Classifiers: pure functions from raw answers to bucket labels.
//!
//! Every function here is total. `None` means the response does not belong to
//! the dimension and must be left out of the counts.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::*;
use crate::normalize::{answered, answered_token, is_answer, norm};

pub const DACH: &str = "DACH";
pub const OTHER: &str = "Other";

/// The regions, in display order.
pub const REGIONS: [&str; 8] = [
    DACH,
    "Rest of Europe",
    "North America",
    "Asia",
    "South America",
    "Africa",
    "Oceania",
    OTHER,
];

const DACH_COUNTRIES: &[&str] = &[
    "germany",
    "austria",
    "switzerland",
    "deutschland",
    "österreich",
    "schweiz",
];

const REST_OF_EUROPE: &[&str] = &[
    "united kingdom",
    "uk",
    "france",
    "italy",
    "spain",
    "netherlands",
    "belgium",
    "poland",
    "sweden",
    "norway",
    "denmark",
    "finland",
    "portugal",
    "greece",
    "ireland",
    "czech republic",
    "hungary",
    "romania",
    "bulgaria",
    "croatia",
    "slovakia",
    "slovenia",
    "estonia",
    "latvia",
    "lithuania",
    "luxembourg",
    "malta",
    "cyprus",
    "iceland",
];

const NORTH_AMERICA: &[&str] = &["usa", "united states", "canada", "mexico"];

const ASIA: &[&str] = &[
    "china",
    "india",
    "japan",
    "south korea",
    "singapore",
    "vietnam",
    "thailand",
    "indonesia",
    "philippines",
    "malaysia",
];

const SOUTH_AMERICA: &[&str] = &["brazil", "argentina", "colombia", "chile", "peru"];

const AFRICA: &[&str] = &["south africa", "nigeria", "egypt", "kenya", "morocco"];

const OCEANIA: &[&str] = &["australia", "new zealand"];

/// Maps a country name to its region. Unknown countries land in `Other`.
///
/// Callers are expected to leave out empty and "n/a" countries beforehand.
pub fn classify_region(country: &str) -> &'static str {
    let c = norm(country);
    let tables: [(&'static str, &[&str]); 7] = [
        (DACH, DACH_COUNTRIES),
        ("Rest of Europe", REST_OF_EUROPE),
        ("North America", NORTH_AMERICA),
        ("Asia", ASIA),
        ("South America", SOUTH_AMERICA),
        ("Africa", AFRICA),
        ("Oceania", OCEANIA),
    ];
    tables
        .iter()
        .find(|(_, names)| names.contains(&c.as_str()))
        .map(|(region, _)| *region)
        .unwrap_or(OTHER)
}

/// Splits the DACH region into its countries, accepting the local names.
pub fn classify_dach_country(country: &str) -> Option<&'static str> {
    match norm(country).as_str() {
        "germany" | "deutschland" => Some("Germany"),
        "austria" | "österreich" => Some("Austria"),
        "switzerland" | "schweiz" => Some("Switzerland"),
        _ => None,
    }
}

/// The canonical age range, e.g. "18 - 28".
pub fn classify_age_group(raw: &str) -> Option<String> {
    answered(raw)
}

pub const ROLE_CATEGORIES: [&str; 5] = ["RE", "Management", "Tech", "Research", OTHER];

// Checked in this order: a title can match several lists.
const ROLE_KEYWORDS: [(&str, &[&str]); 4] = [
    (
        "RE",
        &["requirements engineer", "business analyst", "product owner"],
    ),
    (
        "Management",
        &[
            "team lead",
            "project manager",
            "executive",
            "ceo",
            "owner",
            "cto",
        ],
    ),
    (
        "Tech",
        &[
            "devops",
            "developer",
            "software architect",
            "tester",
            "qa engineer",
        ],
    ),
    ("Research", &["researcher", "educator"]),
];

/// Buckets a free-text job title by keyword.
pub fn classify_role(raw: &str) -> Option<&'static str> {
    let role = answered_token(raw)?;
    let category = ROLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| role.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(OTHER);
    Some(category)
}

pub const NO_SUSTAINABILITY: &str = "No sustainability";
pub const UNCLEAR_COMMUNICATION: &str = "Unclear communication";

/// The measure-count buckets, in display order.
pub const MEASURE_COUNTS: [&str; 6] = [
    NO_SUSTAINABILITY,
    UNCLEAR_COMMUNICATION,
    "One measure",
    "Two measures",
    "Three measures",
    "Four measures",
];

/// Buckets a respondent by how many sustainability measures their organization takes.
pub fn classify_measure_count(response: &SurveyResponse) -> Option<&'static str> {
    let incorporates = norm(response.raw(columns::ORG_INCORPORATES_PRACTICES));
    match incorporates.as_str() {
        "no" => return Some(NO_SUSTAINABILITY),
        "not sure" => return Some(UNCLEAR_COMMUNICATION),
        _ => {}
    }
    let count = columns::MEASURES
        .iter()
        .filter(|key| is_answer(response.raw(key), "yes"))
        .count();
    match count {
        0 => None,
        1 => Some("One measure"),
        2 => Some("Two measures"),
        3 => Some("Three measures"),
        _ => Some("Four measures"),
    }
}

/// The frequency answers, in display order.
pub const FREQUENCIES: [&str; 6] = [
    "daily",
    "weekly",
    "monthly",
    "every few months",
    "never",
    "other",
];

/// Folds a free-text frequency into one of [`FREQUENCIES`].
pub fn classify_frequency(raw: &str) -> Option<&'static str> {
    let value = answered_token(raw)?;
    if value.contains("every few months") {
        return Some("every few months");
    }
    Some(
        FREQUENCIES
            .iter()
            .find(|f| **f == value)
            .copied()
            .unwrap_or("other"),
    )
}

pub fn frequency_label(frequency: &str) -> String {
    match frequency {
        "every few months" => "Every few<br>months".to_string(),
        f => {
            let mut chars = f.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// A training-count answer with a key that orders heterogeneous answers.
#[derive(PartialEq, Debug, Clone)]
pub struct CountBucket {
    pub label: String,
    pub sort_key: f64,
}

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static PLUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*\+").unwrap());
static MORE_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"more than\s*([0-9]+)").unwrap());
static GREATER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s*([0-9]+)").unwrap());
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*[-–]\s*([0-9]+)").unwrap());
static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").unwrap());
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)").unwrap());

fn capture_number(re: &Regex, value: &str, group: usize) -> Option<f64> {
    re.captures(value)
        .and_then(|c| c.get(group))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parses a free-text program count: "3", "5+", "more than 10", "> 4", "2-4".
///
/// Text without any number sorts last.
pub fn categorize_count(raw: &str) -> Option<CountBucket> {
    let value = answered(raw)?;

    if INTEGER.is_match(&value) {
        let label = match value.parse::<u64>() {
            Ok(n) => n.to_string(),
            Err(_) => value.clone(),
        };
        let sort_key = value.parse::<f64>().unwrap_or(f64::INFINITY);
        return Some(CountBucket { label, sort_key });
    }

    let lower = value.to_lowercase();
    let sort_key = if let Some(n) = capture_number(&PLUS, &value, 1) {
        n + 0.001
    } else if let Some(n) = capture_number(&MORE_THAN, &lower, 1) {
        n + 1.0 + 0.001
    } else if let Some(n) = capture_number(&GREATER_THAN, &value, 1) {
        n + 1.0 + 0.001
    } else if let (Some(a), Some(b)) = (
        capture_number(&RANGE, &value, 1),
        capture_number(&RANGE, &value, 2),
    ) {
        let (lo, hi) = (a.min(b), a.max(b));
        lo + (hi - lo) / 100.0
    } else if let Some(n) = capture_number(&FIRST_NUMBER, &value, 1) {
        n
    } else {
        f64::INFINITY
    };
    Some(CountBucket {
        label: value,
        sort_key,
    })
}

fn leading_number(value: &str) -> Option<u64> {
    LEADING_NUMBER
        .captures(value)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Labels starting with a number come first, by that number. The rest follow alphabetically.
pub fn compare_leading_number(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
    }
}

fn experience_class(value: &str) -> u8 {
    if value.starts_with("Less than") {
        0
    } else if value.starts_with("More than") {
        2
    } else {
        1
    }
}

/// "Less than ..." first, "More than ..." last, by leading number in between.
pub fn compare_experience(a: &str, b: &str) -> Ordering {
    experience_class(a)
        .cmp(&experience_class(b))
        .then_with(|| compare_leading_number(a, b))
}

/// A classified bucket and its rank, when the classifier defines one.
#[derive(PartialEq, Debug, Clone)]
pub struct Bucket {
    pub label: String,
    pub rank: Option<f64>,
}

impl Bucket {
    fn plain(label: &str) -> Bucket {
        Bucket {
            label: label.to_string(),
            rank: None,
        }
    }

    fn ranked(label: &str, rank: usize) -> Bucket {
        Bucket {
            label: label.to_string(),
            rank: Some(rank as f64),
        }
    }
}

fn to_strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn position(list: &[&str], label: &str) -> usize {
    list.iter().position(|l| *l == label).unwrap_or(list.len())
}

fn match_choice(answer: &str, choices: &[Choice], rule: MatchRule) -> Option<(usize, Choice)> {
    choices
        .iter()
        .enumerate()
        .find(|(_, c)| match rule {
            MatchRule::Exact => answer == c.token,
            MatchRule::Prefix => answer.starts_with(c.token),
        })
        .map(|(idx, c)| (idx, *c))
}

impl Classifier {
    /// Classifies one response.
    pub fn classify(&self, response: &SurveyResponse) -> Option<Bucket> {
        match self {
            Classifier::Field(key) => answered(response.raw(key)).map(|v| Bucket::plain(&v)),
            Classifier::Region => {
                let country = answered(response.country_of_residence())?;
                let region = classify_region(&country);
                Some(Bucket::ranked(region, position(&REGIONS, region)))
            }
            Classifier::DachCountry => {
                let country = answered(response.country_of_residence())?;
                let label = classify_dach_country(&country).unwrap_or(OTHER);
                let order = ["Germany", "Austria", "Switzerland", OTHER];
                Some(Bucket::ranked(label, position(&order, label)))
            }
            Classifier::RoleCategory(key) => {
                let category = classify_role(response.raw(key))?;
                Some(Bucket::ranked(category, position(&ROLE_CATEGORIES, category)))
            }
            Classifier::MeasureCount => {
                let bucket = classify_measure_count(response)?;
                Some(Bucket::ranked(bucket, position(&MEASURE_COUNTS, bucket)))
            }
            Classifier::Frequency(key) => {
                let frequency = classify_frequency(response.raw(key))?;
                Some(Bucket {
                    label: frequency_label(frequency),
                    rank: Some(position(&FREQUENCIES, frequency) as f64),
                })
            }
            Classifier::TrainingCount(key) => {
                let cb = categorize_count(response.raw(key))?;
                Some(Bucket {
                    label: cb.label,
                    rank: Some(cb.sort_key),
                })
            }
            Classifier::Choices {
                field,
                choices,
                rule,
                unmatched,
            } => {
                let answer = answered_token(response.raw(field))?;
                match (match_choice(&answer, choices, *rule), unmatched) {
                    (Some((idx, c)), _) => Some(Bucket::ranked(c.label, idx)),
                    (None, Unmatched::Other(label)) => Some(Bucket::ranked(label, choices.len())),
                    (None, Unmatched::Exclude) => None,
                }
            }
        }
    }

    /// The labels this classifier can produce, in display order, when they are known upfront.
    pub fn template(&self) -> Vec<String> {
        match self {
            Classifier::Field(_) | Classifier::TrainingCount(_) => Vec::new(),
            Classifier::Region => to_strings(&REGIONS),
            Classifier::DachCountry => to_strings(&["Germany", "Austria", "Switzerland", OTHER]),
            Classifier::RoleCategory(_) => to_strings(&ROLE_CATEGORIES),
            Classifier::MeasureCount => to_strings(&MEASURE_COUNTS),
            Classifier::Frequency(_) => FREQUENCIES.iter().map(|f| frequency_label(f)).collect(),
            Classifier::Choices {
                choices, unmatched, ..
            } => {
                let mut labels: Vec<String> = choices.iter().map(|c| c.label.to_string()).collect();
                if let Unmatched::Other(label) = unmatched {
                    labels.push(label.to_string());
                }
                labels
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(fields: &[(&str, &str)]) -> SurveyResponse {
        let m: HashMap<String, String> = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SurveyResponse::new("2025", m)
    }

    #[test]
    fn regions_by_country() {
        assert_eq!(classify_region("Deutschland"), DACH);
        assert_eq!(classify_region("Germany"), DACH);
        assert_eq!(classify_region("österreich"), DACH);
        assert_eq!(classify_region(" Schweiz "), DACH);
        assert_eq!(classify_region("Brazil"), "South America");
        assert_eq!(classify_region("UK"), "Rest of Europe");
        assert_eq!(classify_region("United States"), "North America");
        assert_eq!(classify_region("New Zealand"), "Oceania");
        assert_eq!(classify_region("Kenya"), "Africa");
        assert_eq!(classify_region("Japan"), "Asia");
        assert_eq!(classify_region("Atlantis"), OTHER);
    }

    #[test]
    fn regions_need_exact_names() {
        // Membership is exact: no substring matching.
        assert_eq!(classify_region("Germany (Berlin)"), OTHER);
        assert_eq!(classify_region("Republic of Ireland"), OTHER);
    }

    #[test]
    fn dach_countries() {
        assert_eq!(classify_dach_country("Österreich"), Some("Austria"));
        assert_eq!(classify_dach_country("deutschland"), Some("Germany"));
        assert_eq!(classify_dach_country("Schweiz"), Some("Switzerland"));
        assert_eq!(classify_dach_country("France"), None);
    }

    #[test]
    fn roles_first_match_wins() {
        assert_eq!(classify_role("Requirements Engineer"), Some("RE"));
        // "product owner" contains "owner" which is a management keyword, RE is checked first.
        assert_eq!(classify_role("Product Owner"), Some("RE"));
        assert_eq!(classify_role("CTO"), Some("Management"));
        assert_eq!(classify_role("Senior Developer"), Some("Tech"));
        assert_eq!(classify_role("Educator"), Some("Research"));
        assert_eq!(classify_role("Designer"), Some(OTHER));
        assert_eq!(classify_role("n/a"), None);
        assert_eq!(classify_role(""), None);
    }

    #[test]
    fn measure_counts() {
        let r = response(&[(columns::ORG_INCORPORATES_PRACTICES, "No")]);
        assert_eq!(classify_measure_count(&r), Some(NO_SUSTAINABILITY));
        let r = response(&[(columns::ORG_INCORPORATES_PRACTICES, "Not sure")]);
        assert_eq!(classify_measure_count(&r), Some(UNCLEAR_COMMUNICATION));
        let r = response(&[
            (columns::ORG_INCORPORATES_PRACTICES, "Yes"),
            (columns::ORG_HAS_TEAM, "Yes"),
        ]);
        assert_eq!(classify_measure_count(&r), Some("Two measures"));
        let r = response(&[
            (columns::ORG_INCORPORATES_PRACTICES, "Yes"),
            (columns::ORG_HAS_GOALS, "yes"),
            (columns::ORG_HAS_TEAM, "Yes"),
            (columns::ORG_REPORTS, "Yes"),
            (columns::ORG_OFFERS_TRAINING, "Yes"),
            (columns::ORG_DEPARTMENT_COORDINATION, "Yes"),
        ]);
        assert_eq!(classify_measure_count(&r), Some("Four measures"));
        let r = response(&[(columns::ORG_HAS_TEAM, "No")]);
        assert_eq!(classify_measure_count(&r), None);
    }

    #[test]
    fn count_categories() {
        assert_eq!(
            categorize_count("3"),
            Some(CountBucket {
                label: "3".to_string(),
                sort_key: 3.0
            })
        );
        assert_eq!(categorize_count("03").map(|c| c.label), Some("3".to_string()));
        let plus = categorize_count("5+").unwrap();
        assert_eq!(plus.label, "5+");
        assert!((plus.sort_key - 5.001).abs() < 1e-9);
        let more = categorize_count("more than 10").unwrap();
        assert!((more.sort_key - 11.001).abs() < 1e-9);
        let greater = categorize_count("> 4").unwrap();
        assert!((greater.sort_key - 5.001).abs() < 1e-9);
        let range = categorize_count("2-4").unwrap();
        assert!((range.sort_key - 2.02).abs() < 1e-9);
        let reversed = categorize_count("4 – 2").unwrap();
        assert!((reversed.sort_key - 2.02).abs() < 1e-9);
        let loose = categorize_count("about 7 times").unwrap();
        assert_eq!(loose.sort_key, 7.0);
        assert_eq!(categorize_count("many").unwrap().sort_key, f64::INFINITY);
        assert_eq!(categorize_count("n/a"), None);
        assert_eq!(categorize_count(""), None);
    }

    #[test]
    fn only_ascii_digits_are_numbers() {
        // U+0663 is the Arabic-Indic digit three.
        let mixed = categorize_count("12\u{663}").unwrap();
        assert_eq!(mixed.label, "12\u{663}");
        assert_eq!(mixed.sort_key, 12.0);
        assert_eq!(categorize_count("\u{663}").unwrap().sort_key, f64::INFINITY);
        assert_eq!(
            compare_leading_number("1\u{663} years", "2 years"),
            Ordering::Less
        );
    }

    #[test]
    fn frequencies() {
        assert_eq!(classify_frequency("Daily"), Some("daily"));
        assert_eq!(
            classify_frequency("Every few months or so"),
            Some("every few months")
        );
        assert_eq!(classify_frequency("Twice a year"), Some("other"));
        assert_eq!(classify_frequency("N/A"), None);
        assert_eq!(frequency_label("daily"), "Daily");
        assert_eq!(frequency_label("every few months"), "Every few<br>months");
    }

    #[test]
    fn age_groups_sort_by_leading_number() {
        let mut ages = vec!["45 - 59", "Prefer not to say", "18 - 28", "29 - 44"];
        ages.sort_by(|a, b| compare_leading_number(a, b));
        assert_eq!(ages, vec!["18 - 28", "29 - 44", "45 - 59", "Prefer not to say"]);
    }

    #[test]
    fn experience_sorting() {
        let mut exp = vec![
            "More than 20 years",
            "6-10 years",
            "Less than 1 year",
            "1-5 years",
            "11-20 years",
        ];
        exp.sort_by(|a, b| compare_experience(a, b));
        assert_eq!(
            exp,
            vec![
                "Less than 1 year",
                "1-5 years",
                "6-10 years",
                "11-20 years",
                "More than 20 years"
            ]
        );
    }

    #[test]
    fn choices_with_other_bucket() {
        const CHOICES: &[Choice] = &[
            Choice {
                token: "yes",
                label: "Yes",
            },
            Choice {
                token: "no",
                label: "No",
            },
        ];
        let c = Classifier::Choices {
            field: "q",
            choices: CHOICES,
            rule: MatchRule::Exact,
            unmatched: Unmatched::Other("Other"),
        };
        assert_eq!(c.classify(&response(&[("q", " YES ")])).unwrap().label, "Yes");
        assert_eq!(c.classify(&response(&[("q", "maybe")])).unwrap().label, "Other");
        assert_eq!(c.classify(&response(&[("q", "n/a")])), None);
        assert_eq!(c.template(), vec!["Yes", "No", "Other"]);
    }

    #[test]
    fn region_classifier_uses_alternate_country_columns() {
        let r = response(&[("countryOfResidenceAlt2", "Canada")]);
        let b = Classifier::Region.classify(&r).unwrap();
        assert_eq!(b.label, "North America");
        assert_eq!(Classifier::Region.classify(&response(&[(columns::COUNTRY, "N/A")])), None);
    }
}
