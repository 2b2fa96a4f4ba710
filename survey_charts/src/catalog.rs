//! The registry of every chart of the dashboard.
//!
//! A chart is data: adding one is adding a record to [`CHARTS`].

use crate::classify::OTHER;
use crate::config::columns::*;
use crate::config::*;

const fn choice(token: &'static str, label: &'static str) -> Choice {
    Choice { token, label }
}

const YES_NO: &[Choice] = &[choice("yes", "Yes"), choice("no", "No")];

const YES_NO_NOT_SURE: &[Choice] = &[
    choice("yes", "Yes"),
    choice("no", "No"),
    choice("not sure", "Not sure"),
];

const PRIVATE_CAPACITY: &[Choice] = &[
    choice("yes", "Yes"),
    choice("no", "No"),
    choice(
        "my organization paid it on some occasions, and i paid it myself on others.",
        "My organization paid it on some occasions, and i paid it myself on others.",
    ),
];

const CUSTOMER_FREQUENCY: &[Choice] = &[
    choice(
        "for every project or digital solution",
        "For every project or digital solution",
    ),
    choice(
        "for most projects or digital solutions",
        "For most projects or digital solutions",
    ),
    choice(
        "for some projects or digital solutions",
        "For some projects or digital solutions",
    ),
    choice("rarely, but it has happened", "Rarely, but it has happened"),
    choice("never", "Never"),
];

const TRAINING_GROUPS: &[Choice] = &[
    choice("yes", "With training"),
    choice("no", "Without training"),
];

const fn exact(field: &'static str, choices: &'static [Choice]) -> Classifier {
    Classifier::Choices {
        field,
        choices,
        rule: MatchRule::Exact,
        unmatched: Unmatched::Exclude,
    }
}

const fn yes_no(field: &'static str) -> AnswerSet {
    AnswerSet::Single(exact(field, YES_NO))
}

const fn yes_no_not_sure(field: &'static str) -> AnswerSet {
    AnswerSet::Single(exact(field, YES_NO_NOT_SURE))
}

const PARTICIPANTS: &[Condition] = &[Condition::Equals(PARTICIPATED_IN_TRAINING, "yes")];
const NON_PARTICIPANTS: &[Condition] = &[Condition::Equals(PARTICIPATED_IN_TRAINING, "no")];
const ORG_INCORPORATES: &[Condition] = &[Condition::Equals(ORG_INCORPORATES_PRACTICES, "yes")];
const PERSON_YES: &[Condition] = &[Condition::Equals(PERSON_INCORPORATES, "yes")];
const PERSON_NO: &[Condition] = &[Condition::Equals(PERSON_INCORPORATES, "no")];

// ********* Checkbox questions ***********

const TRAINING_REASONS: [&str; 5] = [
    "I was not aware such programs existed",
    "My organization does not offer such programs",
    "I have not had the opportunity to attend",
    "I don't see the need for such training",
    "The cost is too high",
];

pub static TRAINING_NO_REASONS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("trainingNotAware", TRAINING_REASONS[0]),
        ("trainingNoOrganizationOffer", TRAINING_REASONS[1]),
        ("trainingNoOpportunity", TRAINING_REASONS[2]),
        ("trainingNoNeed", TRAINING_REASONS[3]),
        ("trainingTooExpensive", TRAINING_REASONS[4]),
    ],
    other: Some(FreeText {
        key: "trainingOtherReason",
        label: Some(OTHER),
    }),
};

pub static NOT_MORE_TRAINING_REASONS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("notMoreTrainingNotAware", TRAINING_REASONS[0]),
        ("notMoreTrainingNoOrganization", TRAINING_REASONS[1]),
        ("notMoreTrainingNoOpportunity", TRAINING_REASONS[2]),
        ("notMoreTrainingNoNeed", TRAINING_REASONS[3]),
        ("notMoreTrainingTooExpensive", TRAINING_REASONS[4]),
    ],
    other: Some(FreeText {
        key: "notMoreTrainingOther",
        label: Some(OTHER),
    }),
};

pub static ORG_NO_TRAINING_REASONS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("orgNoTrainingLackAwareness", "Lack of awareness"),
        ("orgNoTrainingLackUnderstanding", "Lack of understanding"),
        ("orgNoTrainingNoDemand", "No demand from employees"),
        ("orgNoTrainingLimitedBudget", "Limited budget/resources"),
        ("orgNoTrainingNotPriority", "Not a priority"),
        ("orgNoTrainingNotSure", "Not sure"),
    ],
    other: Some(FreeText {
        key: "orgNoTrainingOther",
        label: Some(OTHER),
    }),
};

pub static CONSIDERED_DIMENSIONS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("considerEnvironmental", "Environmental"),
        ("considerSocial", "Social"),
        ("considerIndividual", "Individual"),
        ("considerEconomic", "Economic"),
        ("considerTechnical", "Technical"),
    ],
    other: Some(FreeText {
        key: "considerOther",
        label: Some(OTHER),
    }),
};

pub static DRIVERS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("driveOrganizationalPolicies", "Organizational policies"),
        ("drivePersonalBeliefs", "Personal beliefs"),
        ("driveClientRequirements", "Client requirements"),
        ("driveUserRequirements", "User requirements"),
        ("driveLegalRequirements", "Legal requirements"),
    ],
    other: Some(FreeText {
        key: "driveOther",
        label: Some(OTHER),
    }),
};

pub static TASK_DIMENSIONS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("roleConsiderEnvironmental", "Environmental"),
        ("roleConsiderSocial", "Social"),
        ("roleConsiderIndividual", "Individual"),
        ("roleConsiderEconomic", "Economic"),
        ("roleConsiderTechnical", "Technical"),
    ],
    other: Some(FreeText {
        key: "roleConsiderOther",
        label: Some(OTHER),
    }),
};

pub static HINDRANCES: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("hindranceLackInterest", "Lack of personal interest"),
        ("hindranceLackKnowledge", "Lack of knowledge or awareness"),
        ("hindranceLimitedResources", "Limited resources or budget"),
        ("hindranceFinancialConstraints", "Financial constraints"),
        (
            "hindranceInsufficientTime",
            "Insufficient time or competing priorities",
        ),
        (
            "hindranceLackSupport",
            "Lack of organizational or leadership support",
        ),
        (
            "hindranceComplexity",
            "Complexity or uncertainty of solutions",
        ),
        ("hindranceCulturalBarriers", "Cultural or social barriers"),
        ("hindranceStakeholderResistance", "Resistance from stakeholders"),
    ],
    other: Some(FreeText {
        key: "hindranceOther",
        label: Some(OTHER),
    }),
};

pub static KNOWLEDGE_GAPS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("lackKnowledgeEnvironmental", "Environmental"),
        ("lackKnowledgeSocial", "Social"),
        ("lackKnowledgeIndividual", "Individual"),
        ("lackKnowledgeEconomic", "Economic"),
        ("lackKnowledgeTechnical", "Technical"),
        ("lackKnowledgeNone", "Sufficient resources"),
    ],
    other: Some(FreeText {
        key: "lackKnowledgeOther",
        label: Some(OTHER),
    }),
};

// The free-text field makes an answer valid but is not a bar of its own.
pub static SUPPORT_NEEDS: MultiSelectQuestion = MultiSelectQuestion {
    options: &[
        ("supportNeedTheoretical", "Theoretical Knowledge"),
        ("supportNeedTutorials", "Tutorials"),
        ("supportNeedCurricula", "Curricula"),
        ("supportNeedPractical", "Practical Knowledge"),
        ("supportNeedCaseStudies", "Positive Case Studies"),
        ("supportNeedStructures", "Structures"),
        ("supportNeedTools", "Tools"),
        ("supportNeedNone", "None"),
    ],
    other: Some(FreeText {
        key: "supportNeedOther",
        label: None,
    }),
};

// ********* Chart templates ***********

const BASE: ChartDefinition = ChartDefinition {
    id: "",
    title: "",
    page: Page::Explore,
    preconditions: &[],
    dimension: None,
    answers: AnswerSet::Single(Classifier::Field("")),
    denominator: Denominator::Count,
    group_order: BucketOrder::FirstSeen,
    answer_order: BucketOrder::Rank,
    shape: ChartShape::Bar(Orientation::Vertical),
    comparison: Some(ComparisonKind::Dumbbell(DumbbellOptions::DEFAULT)),
    report_eligible: false,
    eligibility: &[],
};

// A single distribution shown as horizontal bars, smallest first.
const RANKING: ChartDefinition = ChartDefinition {
    answer_order: BucketOrder::CountAscending,
    shape: ChartShape::Bar(Orientation::Horizontal),
    ..BASE
};

const YES_NO_NOT_SURE_CHART: ChartDefinition = ChartDefinition {
    page: Page::RoleOfDigitalSustainability,
    comparison: Some(ComparisonKind::YesNoNotSure),
    ..BASE
};

// Explore charts: shares of everyone who answered, compared as precomputed percentages.
const CROSS_TAB: ChartDefinition = ChartDefinition {
    page: Page::Explore,
    denominator: Denominator::Global,
    shape: ChartShape::Stacked,
    comparison: Some(ComparisonKind::Dumbbell(DumbbellOptions::PRECOMPUTED)),
    report_eligible: true,
    ..BASE
};

// Single-year only.
const HEATMAP: ChartDefinition = ChartDefinition {
    shape: ChartShape::Heatmap { transposed: false },
    comparison: None,
    report_eligible: false,
    ..CROSS_TAB
};

// Reasons on the rows, groups on the columns.
const REASONS_HEATMAP: ChartDefinition = ChartDefinition {
    shape: ChartShape::Heatmap { transposed: true },
    ..CROSS_TAB
};

const BY_AGE: Option<Classifier> = Some(Classifier::Field(AGE_GROUP));
const BY_EXPERIENCE: Option<Classifier> = Some(Classifier::Field(EXPERIENCE));
const BY_ROLE: Option<Classifier> = Some(Classifier::Field(ROLE));
const BY_ROLE_CATEGORY: Option<Classifier> = Some(Classifier::RoleCategory(ROLE));
const BY_ORG_TYPE: Option<Classifier> = Some(Classifier::Field(ORGANIZATION_TYPE));
const BY_REGION: Option<Classifier> = Some(Classifier::Region);
const BY_MEASURE_COUNT: Option<Classifier> = Some(Classifier::MeasureCount);

const FREQUENCY: AnswerSet = AnswerSet::Single(Classifier::Frequency(DISCUSSION_FREQUENCY));
const TRAINING_PROGRAMS: AnswerSet = AnswerSet::Single(Classifier::TrainingCount(TRAINING_COUNT));

/// Every chart, in dashboard order.
pub static CHARTS: &[ChartDefinition] = &[
    // ********* Demographics ***********
    ChartDefinition {
        id: "age-group",
        title: "Which age group do you belong to?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Field(AGE_GROUP)),
        answer_order: BucketOrder::LeadingNumber,
        ..BASE
    },
    ChartDefinition {
        id: "professional-experience",
        title: "How many years of professional experience do you have in IT/software engineering?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Field(EXPERIENCE)),
        answer_order: BucketOrder::Experience,
        ..BASE
    },
    ChartDefinition {
        id: "region-distribution",
        title: "Where do the respondents live?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Region),
        ..RANKING
    },
    ChartDefinition {
        id: "dach-countries",
        title: "Respondents from the DACH region",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::DachCountry),
        answer_order: BucketOrder::Rank,
        ..RANKING
    },
    ChartDefinition {
        id: "organization-type",
        title: "Which of the following organizational types best describes your organization?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Field(ORGANIZATION_TYPE)),
        ..RANKING
    },
    ChartDefinition {
        id: "organizational-role",
        title: "Which of the following best describes your current role in the organization?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Field(ROLE)),
        ..RANKING
    },
    ChartDefinition {
        id: "organizational-role-other",
        title: "Other roles, by category",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::RoleCategory("roleOther")),
        answer_order: BucketOrder::Rank,
        ..RANKING
    },
    ChartDefinition {
        id: "application-domain",
        title: "In which application domain do you currently primarily work?",
        page: Page::Demographic,
        answers: AnswerSet::Single(Classifier::Field(APPLICATION_DOMAIN)),
        ..RANKING
    },
    // ********* General awareness ***********
    ChartDefinition {
        id: "definition-awareness",
        title: "Have you heard of this definition of digital sustainability before?",
        page: Page::GeneralAwareness,
        answers: yes_no(HEARD_OF_DEFINITION),
        ..BASE
    },
    ChartDefinition {
        id: "discussion-frequency",
        title: "How frequently do you encounter discussions about digital sustainability?",
        page: Page::GeneralAwareness,
        answers: FREQUENCY,
        ..RANKING
    },
    ChartDefinition {
        id: "training-participation",
        title: "Have you participated in training on digital sustainability?",
        page: Page::GeneralAwareness,
        answers: yes_no(PARTICIPATED_IN_TRAINING),
        ..BASE
    },
    ChartDefinition {
        id: "training-reasons-no",
        title: "Why haven't you participated in a training on digital sustainability?",
        page: Page::GeneralAwareness,
        preconditions: NON_PARTICIPANTS,
        answers: AnswerSet::MultiSelect(&TRAINING_NO_REASONS),
        comparison: Some(ComparisonKind::HorizontalBar),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "training-reasons-not-more",
        title: "Why haven't you participated in more trainings on digital sustainability?",
        page: Page::GeneralAwareness,
        preconditions: PARTICIPANTS,
        answers: AnswerSet::MultiSelect(&NOT_MORE_TRAINING_REASONS),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "training-programs-count",
        title: "How many trainings on digital sustainability have you participated in?",
        page: Page::GeneralAwareness,
        preconditions: PARTICIPANTS,
        answers: TRAINING_PROGRAMS,
        report_eligible: true,
        ..BASE
    },
    ChartDefinition {
        id: "training-private-capacity",
        title: "Did you participate in the trainings in your private capacity?",
        page: Page::GeneralAwareness,
        preconditions: PARTICIPANTS,
        answers: AnswerSet::Single(Classifier::Choices {
            field: TRAINING_PRIVATE_CAPACITY,
            choices: PRIVATE_CAPACITY,
            rule: MatchRule::Prefix,
            unmatched: Unmatched::Exclude,
        }),
        comparison: Some(ComparisonKind::HorizontalBar),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "training-satisfaction",
        title: "Are you satisfied with the number of trainings you participated in?",
        page: Page::GeneralAwareness,
        preconditions: PARTICIPANTS,
        answers: yes_no(TRAINING_SATISFACTION),
        report_eligible: true,
        ..BASE
    },
    // ********* Role of digital sustainability ***********
    ChartDefinition {
        id: "organization-has-goals",
        title: "Does your organization have specific digital sustainability goals?",
        answers: yes_no_not_sure(ORG_HAS_GOALS),
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-has-sustainability-team",
        title: "Does your organization have a dedicated sustainability team?",
        answers: yes_no_not_sure(ORG_HAS_TEAM),
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-incorporates-practices",
        title: "Does your organization incorporate sustainable development practices?",
        answers: yes_no_not_sure(ORG_INCORPORATES_PRACTICES),
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-department-coordination",
        title: "Do different departments in your organization coordinate on sustainability?",
        preconditions: ORG_INCORPORATES,
        answers: yes_no_not_sure(ORG_DEPARTMENT_COORDINATION),
        report_eligible: true,
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-reports-on-sustainability",
        title: "Does your organization report on sustainability practices?",
        answers: yes_no_not_sure(ORG_REPORTS),
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-offers-training",
        title: "Does your organization offer training on sustainability?",
        answers: yes_no_not_sure(ORG_OFFERS_TRAINING),
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "organization-no-training-reasons",
        title: "Why does your organization not offer any or more training?",
        page: Page::RoleOfDigitalSustainability,
        answers: AnswerSet::MultiSelect(&ORG_NO_TRAINING_REASONS),
        ..RANKING
    },
    ChartDefinition {
        id: "sustainability-dimensions",
        title: "Which dimensions of sustainability are considered in your organization?",
        page: Page::RoleOfDigitalSustainability,
        eligibility: ORG_INCORPORATES,
        answers: AnswerSet::MultiSelect(&CONSIDERED_DIMENSIONS),
        answer_order: BucketOrder::Rank,
        comparison: Some(ComparisonKind::Scatter),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "customer-requirement-frequency",
        title: "How often is sustainability an explicit requirement of your customers?",
        page: Page::RoleOfDigitalSustainability,
        answers: AnswerSet::Single(exact(CUSTOMER_REQUIREMENT_FREQUENCY, CUSTOMER_FREQUENCY)),
        answer_order: BucketOrder::Rank,
        ..RANKING
    },
    // ********* Sustainability in tasks ***********
    ChartDefinition {
        id: "person-incorporates-sustainability",
        title: "Do you incorporate digital sustainability in your role-specific tasks?",
        page: Page::SustainabilityInTasks,
        answers: yes_no(PERSON_INCORPORATES),
        ..BASE
    },
    ChartDefinition {
        id: "drivers-to-incorporate-sustainability",
        title: "What drives you to incorporate digital sustainability in your tasks?",
        page: Page::SustainabilityInTasks,
        preconditions: PERSON_YES,
        answers: AnswerSet::MultiSelect(&DRIVERS),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "sustainability-dimensions-in-tasks",
        title: "Which sustainability dimensions do you consider in your tasks?",
        page: Page::SustainabilityInTasks,
        preconditions: PERSON_YES,
        answers: AnswerSet::MultiSelect(&TASK_DIMENSIONS),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "uses-tools",
        title: "Do you use specific tools that help you incorporate sustainability?",
        page: Page::SustainabilityInTasks,
        preconditions: PERSON_YES,
        answers: yes_no_not_sure(USES_TOOLS),
        report_eligible: true,
        ..YES_NO_NOT_SURE_CHART
    },
    ChartDefinition {
        id: "hindrances-to-incorporate-sustainability",
        title: "What hinders you from incorporating sustainability in your tasks?",
        page: Page::SustainabilityInTasks,
        preconditions: PERSON_NO,
        answers: AnswerSet::MultiSelect(&HINDRANCES),
        report_eligible: true,
        ..RANKING
    },
    ChartDefinition {
        id: "knowledge-gaps-by-dimension",
        title: "Which sustainability dimensions do you lack knowledge or resources in?",
        page: Page::SustainabilityInTasks,
        answers: AnswerSet::MultiSelect(&KNOWLEDGE_GAPS),
        ..RANKING
    },
    ChartDefinition {
        id: "additional-support-resources",
        title: "What additional support would help you integrate digital sustainability?",
        page: Page::SustainabilityInTasks,
        answers: AnswerSet::MultiSelect(&SUPPORT_NEEDS),
        ..RANKING
    },
    // ********* Explore: awareness ***********
    ChartDefinition {
        id: "discussion-frequency-by-age",
        title: "Discussion frequency by age group",
        dimension: BY_AGE,
        answers: FREQUENCY,
        group_order: BucketOrder::LeadingNumber,
        ..HEATMAP
    },
    ChartDefinition {
        id: "discussion-frequency-by-role",
        title: "Discussion frequency by role",
        dimension: BY_ROLE,
        answers: FREQUENCY,
        group_order: BucketOrder::Alphabetical,
        ..HEATMAP
    },
    ChartDefinition {
        id: "discussion-frequency-by-experience",
        title: "Discussion frequency by professional experience",
        dimension: BY_EXPERIENCE,
        answers: FREQUENCY,
        group_order: BucketOrder::Experience,
        ..HEATMAP
    },
    ChartDefinition {
        id: "definition-awareness-by-age",
        title: "Definition awareness by age group",
        dimension: BY_AGE,
        answers: yes_no(HEARD_OF_DEFINITION),
        group_order: BucketOrder::LeadingNumber,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "definition-awareness-by-role",
        title: "Definition awareness by role",
        dimension: BY_ROLE,
        answers: yes_no(HEARD_OF_DEFINITION),
        group_order: BucketOrder::CountAscending,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "definition-awareness-by-experience",
        title: "Definition awareness by professional experience",
        dimension: BY_EXPERIENCE,
        answers: yes_no(HEARD_OF_DEFINITION),
        group_order: BucketOrder::Experience,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-participation-by-region",
        title: "Training participation by region",
        dimension: BY_REGION,
        answers: yes_no(PARTICIPATED_IN_TRAINING),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-participation-by-role",
        title: "Training participation by role",
        dimension: BY_ROLE,
        answers: yes_no(PARTICIPATED_IN_TRAINING),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-participation-by-training-offer",
        title: "Training participation by organizational training offer",
        dimension: Some(exact(ORG_OFFERS_TRAINING, YES_NO_NOT_SURE)),
        answers: yes_no(PARTICIPATED_IN_TRAINING),
        group_order: BucketOrder::Rank,
        denominator: Denominator::GroupLocal,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-satisfaction-by-region",
        title: "Training satisfaction by region",
        preconditions: PARTICIPANTS,
        dimension: BY_REGION,
        answers: yes_no(TRAINING_SATISFACTION),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-satisfaction-by-org-type",
        title: "Training satisfaction by organization type",
        preconditions: PARTICIPANTS,
        dimension: BY_ORG_TYPE,
        answers: yes_no(TRAINING_SATISFACTION),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-satisfaction-by-role",
        title: "Training satisfaction by role",
        preconditions: PARTICIPANTS,
        dimension: BY_ROLE,
        answers: yes_no(TRAINING_SATISFACTION),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-satisfaction-by-age",
        title: "Training satisfaction by age group",
        preconditions: PARTICIPANTS,
        dimension: BY_AGE,
        answers: yes_no(TRAINING_SATISFACTION),
        group_order: BucketOrder::LeadingNumber,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-satisfaction-by-experience",
        title: "Training satisfaction by professional experience",
        preconditions: PARTICIPANTS,
        dimension: BY_EXPERIENCE,
        answers: yes_no(TRAINING_SATISFACTION),
        group_order: BucketOrder::Experience,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-programs-count-by-region",
        title: "Number of trainings by region",
        preconditions: PARTICIPANTS,
        dimension: BY_REGION,
        answers: TRAINING_PROGRAMS,
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-programs-count-by-role",
        title: "Number of trainings by role",
        preconditions: PARTICIPANTS,
        dimension: BY_ROLE,
        answers: TRAINING_PROGRAMS,
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-private-capacity-by-region",
        title: "Private training capacity by region",
        preconditions: PARTICIPANTS,
        dimension: BY_REGION,
        answers: AnswerSet::Single(Classifier::Choices {
            field: TRAINING_PRIVATE_CAPACITY,
            choices: PRIVATE_CAPACITY,
            rule: MatchRule::Prefix,
            unmatched: Unmatched::Exclude,
        }),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-private-capacity-by-role",
        title: "Private training capacity by role",
        preconditions: PARTICIPANTS,
        dimension: BY_ROLE,
        answers: AnswerSet::Single(Classifier::Choices {
            field: TRAINING_PRIVATE_CAPACITY,
            choices: PRIVATE_CAPACITY,
            rule: MatchRule::Prefix,
            unmatched: Unmatched::Exclude,
        }),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "training-reasons-no-by-age",
        title: "Reasons for not participating in training by age group",
        preconditions: NON_PARTICIPANTS,
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&TRAINING_NO_REASONS),
        group_order: BucketOrder::LeadingNumber,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "training-reasons-no-by-experience",
        title: "Reasons for not participating in training by professional experience",
        preconditions: NON_PARTICIPANTS,
        dimension: BY_EXPERIENCE,
        answers: AnswerSet::MultiSelect(&TRAINING_NO_REASONS),
        group_order: BucketOrder::Experience,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "training-reasons-no-by-region",
        title: "Reasons for not participating in training by region",
        preconditions: NON_PARTICIPANTS,
        dimension: BY_REGION,
        answers: AnswerSet::MultiSelect(&TRAINING_NO_REASONS),
        group_order: BucketOrder::Rank,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "training-reasons-no-by-role",
        title: "Reasons for not participating in training by role",
        preconditions: NON_PARTICIPANTS,
        dimension: BY_ROLE,
        answers: AnswerSet::MultiSelect(&TRAINING_NO_REASONS),
        group_order: BucketOrder::Alphabetical,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "training-reasons-not-more-by-age",
        title: "Reasons for not participating in more training by age group",
        preconditions: PARTICIPANTS,
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&NOT_MORE_TRAINING_REASONS),
        group_order: BucketOrder::LeadingNumber,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "training-reasons-not-more-by-experience",
        title: "Reasons for not participating in more training by professional experience",
        preconditions: PARTICIPANTS,
        dimension: BY_EXPERIENCE,
        answers: AnswerSet::MultiSelect(&NOT_MORE_TRAINING_REASONS),
        group_order: BucketOrder::Experience,
        ..REASONS_HEATMAP
    },
    // ********* Explore: organizations ***********
    ChartDefinition {
        id: "organization-has-goals-by-age",
        title: "Organizational sustainability goals by age group",
        dimension: BY_AGE,
        answers: yes_no_not_sure(ORG_HAS_GOALS),
        group_order: BucketOrder::LeadingNumber,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-has-goals-by-role",
        title: "Organizational sustainability goals by role",
        dimension: BY_ROLE,
        answers: yes_no_not_sure(ORG_HAS_GOALS),
        group_order: BucketOrder::CountAscending,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-incorporates-practices-by-region",
        title: "Sustainable practices by region",
        dimension: BY_REGION,
        answers: yes_no_not_sure(ORG_INCORPORATES_PRACTICES),
        group_order: BucketOrder::CountAscending,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-incorporates-practices-by-age",
        title: "Sustainable practices by age group",
        dimension: BY_AGE,
        answers: yes_no_not_sure(ORG_INCORPORATES_PRACTICES),
        group_order: BucketOrder::LeadingNumber,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-incorporates-practices-by-org-type",
        title: "Sustainable practices by organization type",
        dimension: BY_ORG_TYPE,
        answers: yes_no_not_sure(ORG_INCORPORATES_PRACTICES),
        group_order: BucketOrder::CountAscending,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-department-coordination-by-org-type",
        title: "Department coordination by organization type",
        preconditions: ORG_INCORPORATES,
        dimension: BY_ORG_TYPE,
        answers: yes_no_not_sure(ORG_DEPARTMENT_COORDINATION),
        denominator: Denominator::Count,
        group_order: BucketOrder::CountAscending,
        comparison: Some(ComparisonKind::Stacked),
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-department-coordination-by-role",
        title: "Department coordination by role",
        preconditions: ORG_INCORPORATES,
        dimension: BY_ROLE,
        answers: yes_no_not_sure(ORG_DEPARTMENT_COORDINATION),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "organization-offers-training-by-region",
        title: "Organizational training offer by region",
        dimension: BY_REGION,
        answers: yes_no_not_sure(ORG_OFFERS_TRAINING),
        group_order: BucketOrder::CountAscending,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "sustainability-dimensions-by-org-type",
        title: "Dimensions considered by organization type",
        preconditions: ORG_INCORPORATES,
        dimension: BY_ORG_TYPE,
        answers: AnswerSet::MultiSelect(&CONSIDERED_DIMENSIONS),
        group_order: BucketOrder::Alphabetical,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "sustainability-dimensions-by-age",
        title: "Dimensions considered by age group",
        preconditions: ORG_INCORPORATES,
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&CONSIDERED_DIMENSIONS),
        group_order: BucketOrder::LeadingNumber,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "sustainability-dimensions-by-experience",
        title: "Dimensions considered by professional experience",
        preconditions: ORG_INCORPORATES,
        dimension: BY_EXPERIENCE,
        answers: AnswerSet::MultiSelect(&CONSIDERED_DIMENSIONS),
        group_order: BucketOrder::Experience,
        ..REASONS_HEATMAP
    },
    // ********* Explore: tasks ***********
    ChartDefinition {
        id: "person-incorporates-sustainability-by-age",
        title: "Incorporating sustainability by age group",
        dimension: BY_AGE,
        answers: yes_no(PERSON_INCORPORATES),
        group_order: BucketOrder::LeadingNumber,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "person-incorporates-sustainability-by-experience",
        title: "Incorporating sustainability by professional experience",
        dimension: BY_EXPERIENCE,
        answers: yes_no(PERSON_INCORPORATES),
        group_order: BucketOrder::Experience,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "person-incorporates-sustainability-by-role",
        title: "Incorporating sustainability by role",
        dimension: BY_ROLE_CATEGORY,
        answers: yes_no(PERSON_INCORPORATES),
        group_order: BucketOrder::Listed(&["Management", "RE", "Research", "Tech"]),
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "person-incorporates-sustainability-by-org-goals",
        title: "Incorporating sustainability by organizational goals",
        dimension: Some(exact(ORG_HAS_GOALS, YES_NO_NOT_SURE)),
        answers: yes_no(PERSON_INCORPORATES),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::Rank,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "person-incorporates-sustainability-by-measure-count",
        title: "Incorporating sustainability by organizational measures",
        dimension: BY_MEASURE_COUNT,
        answers: yes_no(PERSON_INCORPORATES),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::RankDescending,
        shape: ChartShape::Grouped,
        report_eligible: false,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "uses-tools-by-role",
        title: "Use of tools by role",
        preconditions: PERSON_YES,
        dimension: BY_ROLE,
        answers: yes_no_not_sure(USES_TOOLS),
        group_order: BucketOrder::CountAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "drivers-by-org-type",
        title: "Drivers by organization type",
        preconditions: PERSON_YES,
        dimension: BY_ORG_TYPE,
        answers: AnswerSet::MultiSelect(&DRIVERS),
        group_order: BucketOrder::Alphabetical,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "hindrances-by-role",
        title: "Hindrances by role",
        preconditions: PERSON_NO,
        dimension: BY_ROLE,
        answers: AnswerSet::MultiSelect(&HINDRANCES),
        group_order: BucketOrder::Alphabetical,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "hindrances-by-age",
        title: "Hindrances by age group",
        preconditions: PERSON_NO,
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&HINDRANCES),
        group_order: BucketOrder::LeadingNumber,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "hindrances-by-experience",
        title: "Hindrances by professional experience",
        preconditions: PERSON_NO,
        dimension: BY_EXPERIENCE,
        answers: AnswerSet::MultiSelect(&HINDRANCES),
        group_order: BucketOrder::Experience,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "sustainability-dimensions-in-tasks-by-region",
        title: "Dimensions considered in tasks by region",
        preconditions: PERSON_YES,
        dimension: BY_REGION,
        answers: AnswerSet::MultiSelect(&TASK_DIMENSIONS),
        group_order: BucketOrder::Rank,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "sustainability-dimensions-in-tasks-by-role",
        title: "Dimensions considered in tasks by role",
        preconditions: PERSON_YES,
        dimension: BY_ROLE,
        answers: AnswerSet::MultiSelect(&TASK_DIMENSIONS),
        group_order: BucketOrder::Alphabetical,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "sustainability-dimensions-in-tasks-by-measure-count",
        title: "Dimensions considered in tasks by organizational measures",
        preconditions: PERSON_YES,
        dimension: BY_MEASURE_COUNT,
        answers: AnswerSet::MultiSelect(&TASK_DIMENSIONS),
        group_order: BucketOrder::Rank,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "knowledge-gaps-by-age",
        title: "Knowledge gaps by age group",
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&KNOWLEDGE_GAPS),
        group_order: BucketOrder::LeadingNumber,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "knowledge-gaps-by-experience",
        title: "Knowledge gaps by professional experience",
        dimension: BY_EXPERIENCE,
        answers: AnswerSet::MultiSelect(&KNOWLEDGE_GAPS),
        group_order: BucketOrder::Experience,
        ..REASONS_HEATMAP
    },
    ChartDefinition {
        id: "additional-support-resources-by-role",
        title: "Support needs by role",
        dimension: BY_ROLE_CATEGORY,
        answers: AnswerSet::MultiSelect(&SUPPORT_NEEDS),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::AnsweredAscending,
        answer_order: BucketOrder::Rank,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "additional-support-resources-by-age",
        title: "Support needs by age group",
        dimension: BY_AGE,
        answers: AnswerSet::MultiSelect(&SUPPORT_NEEDS),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::LeadingNumber,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "additional-support-resources-by-org-type",
        title: "Support needs by organization type",
        dimension: BY_ORG_TYPE,
        answers: AnswerSet::MultiSelect(&SUPPORT_NEEDS),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::AnsweredAscending,
        ..CROSS_TAB
    },
    ChartDefinition {
        id: "additional-support-resources-by-training",
        title: "Support needs by training participation",
        dimension: Some(exact(PARTICIPATED_IN_TRAINING, TRAINING_GROUPS)),
        answers: AnswerSet::MultiSelect(&SUPPORT_NEEDS),
        denominator: Denominator::GroupLocal,
        group_order: BucketOrder::Rank,
        shape: ChartShape::Grouped,
        report_eligible: false,
        ..CROSS_TAB
    },
];

/// Looks up a chart by id.
pub fn find(id: &str) -> Option<&'static ChartDefinition> {
    CHARTS.iter().find(|c| c.id == id)
}

/// The charts of one page, in dashboard order.
pub fn by_page(page: Page) -> Vec<&'static ChartDefinition> {
    CHARTS.iter().filter(|c| c.page == page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatasetBuilder;
    use crate::compare::compare_years;
    use crate::{extract, process};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = CHARTS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHARTS.len());
        assert!(CHARTS.iter().all(|c| !c.id.is_empty() && !c.title.is_empty()));
    }

    #[test]
    fn every_page_has_charts() {
        for page in [
            Page::Demographic,
            Page::GeneralAwareness,
            Page::RoleOfDigitalSustainability,
            Page::SustainabilityInTasks,
            Page::Explore,
        ] {
            assert!(!by_page(page).is_empty(), "{:?}", page);
        }
        assert_eq!(find("age-group").map(|c| c.page), Some(Page::Demographic));
        assert_eq!(find("nope"), None);
    }

    #[test]
    fn every_chart_handles_empty_input() {
        for chart in CHARTS.iter() {
            let payload = process(chart, &[], &Palette::DEFAULT);
            assert_eq!(payload.stats.number_of_responses, 0, "{}", chart.id);
            for t in payload.traces.iter() {
                assert!(t.numbers().iter().all(|v| v.is_finite()), "{}", chart.id);
            }
            let input = extract(chart, &[]);
            assert_eq!(input.stats().number_of_responses, 0);
            if let Some(kind) = chart.comparison {
                let res = compare_years(kind, &input, &input, "2025", "2024", &Palette::DEFAULT);
                let res = res.unwrap_or_else(|| panic!("{} cannot be compared", chart.id));
                assert_eq!(res.stats.number_of_responses, 0);
                for t in res.traces.iter() {
                    assert!(t.numbers().iter().all(|v| v.is_finite()), "{}", chart.id);
                }
            }
        }
    }

    #[test]
    fn discussion_frequency_by_age_scenario() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[(AGE_GROUP, "18 - 28"), (DISCUSSION_FREQUENCY, "Daily")]);
        b.add_response(&[(AGE_GROUP, "18 - 28"), (DISCUSSION_FREQUENCY, "n/a")]);
        b.add_response(&[(AGE_GROUP, "29 - 44"), (DISCUSSION_FREQUENCY, "Weekly")]);
        let dataset = b.build();
        let chart = find("discussion-frequency-by-age").unwrap();

        let payload = process(chart, dataset.responses(), &Palette::DEFAULT);
        assert_eq!(payload.stats.number_of_responses, 2);
        let heatmap = &payload.traces[0];
        assert_eq!(
            heatmap.y,
            Series::labels(&["18 - 28".to_string(), "29 - 44".to_string()])
        );
        assert_eq!(
            heatmap.x,
            Series::labels(&["Daily".to_string(), "Weekly".to_string()])
        );
        let cells = heatmap.cells.as_ref().unwrap();
        assert_eq!(cells.z, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        assert_eq!(cells.text, vec![vec!["1", ""], vec!["", "1"]]);
        assert_eq!(cells.text_colors[0][0], "#FFFFFF");
        assert_eq!(cells.text_colors[0][1], Palette::DEFAULT.grey);

        let data = crate::extract_items(chart, dataset.responses());
        let labels: Vec<&str> = data.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["18 - 28<br>Daily", "29 - 44<br>Weekly"]);
        assert!(data.items.iter().all(|i| (i.value - 50.0).abs() < 1e-9));
    }

    #[test]
    fn training_reasons_validity() {
        let mut b = DatasetBuilder::new("2025");
        // Explicit "none of the above".
        b.add_response(&[
            (PARTICIPATED_IN_TRAINING, "No"),
            ("trainingNotAware", "No"),
            ("trainingNoOrganizationOffer", "No"),
            ("trainingNoOpportunity", "No"),
            ("trainingNoNeed", "No"),
            ("trainingTooExpensive", "No"),
        ]);
        // Blank: did not answer.
        b.add_response(&[(PARTICIPATED_IN_TRAINING, "No")]);
        b.add_response(&[
            (PARTICIPATED_IN_TRAINING, "No"),
            ("trainingTooExpensive", "Yes"),
            ("trainingOtherReason", "No time"),
        ]);
        // Not eligible.
        b.add_response(&[(PARTICIPATED_IN_TRAINING, "Yes"), ("trainingNoNeed", "Yes")]);
        let dataset = b.build();
        let chart = find("training-reasons-no").unwrap();
        let data = crate::extract_items(chart, dataset.responses());
        assert_eq!(data.stats.number_of_responses, 2);
        assert_eq!(data.stats.total_eligible, Some(3));
        let value = |label: &str| {
            data.items
                .iter()
                .find(|i| i.label == label)
                .map(|i| i.value)
                .unwrap()
        };
        assert_eq!(value("The cost is too high"), 1.0);
        assert_eq!(value("Other"), 1.0);
        assert_eq!(value("I don't see the need for such training"), 0.0);
    }

    #[test]
    fn support_needs_free_text_is_not_a_bar() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[("supportNeedOther", "mentoring")]);
        b.add_response(&[("supportNeedTools", "Yes")]);
        let dataset = b.build();
        let chart = find("additional-support-resources").unwrap();
        let data = crate::extract_items(chart, dataset.responses());
        assert_eq!(data.stats.number_of_responses, 2);
        assert!(data.items.iter().all(|i| i.label != OTHER));
        assert_eq!(data.items.iter().map(|i| i.value).sum::<f64>(), 1.0);
    }

    #[test]
    fn yes_no_not_sure_charts_extract_counts() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[(ORG_HAS_GOALS, "Yes")]);
        b.add_response(&[(ORG_HAS_GOALS, "not sure")]);
        b.add_response(&[(ORG_HAS_GOALS, "No")]);
        b.add_response(&[(ORG_HAS_GOALS, "Yes ")]);
        b.add_response(&[(ORG_HAS_GOALS, "n/a")]);
        let dataset = b.build();
        let chart = find("organization-has-goals").unwrap();
        match extract(chart, dataset.responses()) {
            ComparisonInput::YesNoNotSure(d) => {
                assert_eq!(
                    d.counts,
                    AnswerCounts {
                        yes: 2,
                        no: 1,
                        not_sure: 1
                    }
                );
                assert_eq!(d.stats.number_of_responses, 4);
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn roles_follow_the_listed_order() {
        let mut b = DatasetBuilder::new("2025");
        for role in ["Designer", "Developer", "Researcher", "Business Analyst", "CTO"] {
            b.add_response(&[(ROLE, role), (PERSON_INCORPORATES, "Yes")]);
        }
        let dataset = b.build();
        let chart = find("person-incorporates-sustainability-by-role").unwrap();
        let payload = process(chart, dataset.responses(), &Palette::DEFAULT);
        let roles: Vec<String> = ["Management", "RE", "Research", "Tech", OTHER]
            .iter()
            .map(|r| r.to_string())
            .collect();
        assert_eq!(payload.traces[0].y, Series::labels(&roles));
    }

    #[test]
    fn considered_dimensions_count_every_answer() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[(ORG_INCORPORATES_PRACTICES, "Yes"), ("considerSocial", "Yes")]);
        b.add_response(&[
            (ORG_INCORPORATES_PRACTICES, "No"),
            ("considerEnvironmental", "Yes"),
        ]);
        b.add_response(&[(ORG_INCORPORATES_PRACTICES, "Yes")]);
        let dataset = b.build();
        let chart = find("sustainability-dimensions").unwrap();
        let data = crate::extract_items(chart, dataset.responses());
        assert_eq!(data.stats.number_of_responses, 2);
        assert_eq!(data.stats.total_eligible, Some(2));
        let value = |label: &str| {
            data.items
                .iter()
                .find(|i| i.label == label)
                .map(|i| i.value)
                .unwrap()
        };
        assert_eq!(value("Environmental"), 1.0);
        assert_eq!(value("Social"), 1.0);
    }

    #[test]
    fn measure_count_groups_are_descending() {
        let mut b = DatasetBuilder::new("2025");
        b.add_response(&[
            (ORG_INCORPORATES_PRACTICES, "No"),
            (PERSON_INCORPORATES, "No"),
        ]);
        b.add_response(&[
            (ORG_INCORPORATES_PRACTICES, "Yes"),
            (ORG_HAS_TEAM, "Yes"),
            (PERSON_INCORPORATES, "Yes"),
        ]);
        let dataset = b.build();
        let chart = find("person-incorporates-sustainability-by-measure-count").unwrap();
        let payload = process(chart, dataset.responses(), &Palette::DEFAULT);
        assert_eq!(
            payload.traces[0].x,
            Series::labels(&["Two measures".to_string(), "No sustainability".to_string()])
        );
    }
}
