//! Answer values and the per-session response map.
//!
//! The original form viewer stores answers as loosely-typed JSON (a string
//! for text and choice inputs, a list of strings for checkbox groups, a
//! number for scales and ratings). `AnswerValue` pins those shapes down as
//! an explicit tagged union with documented comparison semantics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A respondent's recorded answer to a single question.
///
/// Serialized untagged, so the wire shape is the plain JSON value the
/// builder and viewer exchange (`"yes"`, `["a","b"]`, `3`, `true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Boolean answer (toggle-style inputs).
    Bool(bool),
    /// Numeric answer (linear-scale, rating).
    Num(f64),
    /// Single string answer (text, textarea, multiple-choice, dropdown, date).
    Str(String),
    /// Multi-value answer (checkbox groups). Holds selected option ids.
    StrList(Vec<String>),
}

impl AnswerValue {
    /// Condition comparison: a multi-value answer satisfies an expected
    /// scalar by containment, every other pairing by exact equality.
    pub fn satisfies(&self, expected: &AnswerValue) -> bool {
        match (self, expected) {
            (AnswerValue::StrList(items), AnswerValue::Str(want)) => {
                items.iter().any(|item| item == want)
            }
            (actual, expected) => actual == expected,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Str(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Str(s)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        AnswerValue::StrList(items)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Num(n)
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        AnswerValue::Bool(b)
    }
}

/// Question id -> answer, owned by a single fill-out session.
///
/// Grows monotonically while the respondent moves through the form and is
/// discarded when the session ends. The navigation engine only ever reads
/// it; writes come from the session layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ResponseMap {
    entries: HashMap<String, AnswerValue>,
}

impl ResponseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer. Re-answering a question replaces the prior value.
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.entries.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate recorded (question id, answer) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_equality() {
        let answer = AnswerValue::from("A");
        assert!(answer.satisfies(&AnswerValue::from("A")));
        assert!(!answer.satisfies(&AnswerValue::from("B")));
    }

    #[test]
    fn list_containment() {
        let answer = AnswerValue::StrList(vec!["x".into(), "y".into()]);
        assert!(answer.satisfies(&AnswerValue::from("y")));
        assert!(!answer.satisfies(&AnswerValue::from("z")));
    }

    #[test]
    fn list_against_list_is_exact_equality() {
        let answer = AnswerValue::StrList(vec!["x".into(), "y".into()]);
        assert!(answer.satisfies(&AnswerValue::StrList(vec!["x".into(), "y".into()])));
        assert!(!answer.satisfies(&AnswerValue::StrList(vec!["y".into()])));
    }

    #[test]
    fn kinds_never_cross_match() {
        assert!(!AnswerValue::from("3").satisfies(&AnswerValue::from(3.0)));
        assert!(!AnswerValue::from(true).satisfies(&AnswerValue::from("true")));
    }

    #[test]
    fn record_replaces() {
        let mut responses = ResponseMap::new();
        responses.record("q1", "first");
        responses.record("q1", "second");
        assert_eq!(responses.get("q1"), Some(&AnswerValue::from("second")));
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn untagged_wire_shape() {
        let json = r#"{"q1":"yes","q2":["a","b"],"q3":4,"q4":true}"#;
        let map: ResponseMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.get("q1"), Some(&AnswerValue::from("yes")));
        assert_eq!(
            map.get("q2"),
            Some(&AnswerValue::StrList(vec!["a".into(), "b".into()]))
        );
        assert_eq!(map.get("q3"), Some(&AnswerValue::Num(4.0)));
        assert_eq!(map.get("q4"), Some(&AnswerValue::Bool(true)));
    }
}
