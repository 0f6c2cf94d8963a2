//! Conditional logic rules attached to pages.
//!
//! A rule is a list of AND-combined conditions plus a pass/fail redirect
//! pair. Rules live on the page the respondent is leaving; the redirect
//! targets name the page to jump to.

use crate::answer::{AnswerValue, ResponseMap};
use crate::form::Form;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// An equality/containment test between a recorded answer and an expected
/// value authored in the builder (usually a choice option id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Question id whose answer is inspected.
    pub field_id: String,
    /// Expected answer, compared per [`AnswerValue::satisfies`].
    pub value: AnswerValue,
}

impl Condition {
    /// Whether this condition holds against the recorded answers.
    ///
    /// A condition referencing a question that no longer exists on the form
    /// is malformed: it is never satisfied, so a stale rule can redirect a
    /// respondent at worst onto the fail branch, never wedge them.
    pub fn is_met(&self, form: &Form, responses: &ResponseMap) -> bool {
        if form.question(&self.field_id).is_none() {
            warn!(
                field_id = %self.field_id,
                "condition references unknown question; treating as unmet"
            );
            return false;
        }
        match responses.get(&self.field_id) {
            Some(answer) => answer.satisfies(&self.value),
            None => false,
        }
    }
}

/// A pass/fail branch authored on a page.
///
/// `pass_redirect` applies when every condition is met; `fail_redirect`
/// when any is not. Either side may be absent, in which case that outcome
/// falls through to sequential order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogicRule {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub pass_redirect: Option<String>,
    #[serde(default)]
    pub fail_redirect: Option<String>,
}

impl LogicRule {
    /// A rule with no conditions is inert and skipped by the engine.
    pub fn is_evaluable(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// AND over every condition in the rule.
    pub fn all_conditions_met(&self, form: &Form, responses: &ResponseMap) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.is_met(form, responses))
    }
}
