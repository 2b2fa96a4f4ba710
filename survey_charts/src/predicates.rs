//! Eligibility and validity predicates.

use crate::config::*;
use crate::normalize::{answered, is_answer, norm};

impl Condition {
    pub fn holds(&self, response: &SurveyResponse) -> bool {
        match self {
            Condition::Equals(key, token) => is_answer(response.raw(key), token),
            Condition::NotEquals(key, token) => !is_answer(response.raw(key), token),
        }
    }
}

/// Whether a response passes every precondition of a chart.
pub fn eligible(conditions: &[Condition], response: &SurveyResponse) -> bool {
    conditions.iter().all(|c| c.holds(response))
}

impl MultiSelectQuestion {
    fn other_filled(&self, response: &SurveyResponse) -> bool {
        self.other
            .map(|o| answered(response.raw(o.key)).is_some())
            .unwrap_or(false)
    }

    /// Whether the respondent answered the question at all.
    ///
    /// That is the case when any box is ticked, or when every box is explicitly
    /// unticked, or when the free-text field holds something. Blank boxes are not
    /// the same as unticked ones.
    pub fn has_valid_answer(&self, response: &SurveyResponse) -> bool {
        let any_yes = self
            .options
            .iter()
            .any(|(key, _)| is_answer(response.raw(key), "yes"));
        let all_no = !self.options.is_empty()
            && self
                .options
                .iter()
                .all(|(key, _)| norm(response.raw(key)) == "no");
        any_yes || all_no || self.other_filled(response)
    }

    /// The labels of the ticked options, in question order.
    ///
    /// Returns `None` when the question was not answered.
    pub fn selected(&self, response: &SurveyResponse) -> Option<Vec<&'static str>> {
        if !self.has_valid_answer(response) {
            return None;
        }
        let mut res: Vec<&'static str> = self
            .options
            .iter()
            .filter(|(key, _)| is_answer(response.raw(key), "yes"))
            .map(|(_, label)| *label)
            .collect();
        if let Some(FreeText {
            label: Some(label), ..
        }) = self.other
        {
            if self.other_filled(response) {
                res.push(label);
            }
        }
        Some(res)
    }

    /// All the labels this question can produce, in question order.
    pub fn labels(&self) -> Vec<String> {
        let mut res: Vec<String> = self.options.iter().map(|(_, l)| l.to_string()).collect();
        if let Some(FreeText {
            label: Some(label), ..
        }) = self.other
        {
            res.push(label.to_string());
        }
        res
    }
}
