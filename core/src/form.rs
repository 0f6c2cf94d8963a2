//! The multi-page form model.
//!
//! Field names on the wire match the JSON the builder produces
//! (camelCase, kebab-case question types, layout arrays mixing bare
//! question-id strings with section-break objects). The model is
//! read-only at fill-out time; only the builder mutates it.

use crate::logic::LogicRule;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of question kinds the builder can author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Text,
    Textarea,
    MultipleChoice,
    Checkbox,
    Dropdown,
    Date,
    LinearScale,
    Rating,
    FileUpload,
    Image,
    Video,
}

impl QuestionType {
    /// Kinds that carry an authored option list.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            QuestionType::MultipleChoice | QuestionType::Checkbox | QuestionType::Dropdown
        )
    }
}

/// An authored option on a choice-type question.
///
/// `is_correct` is authoring-time metadata (quiz scoring, "pass" answers);
/// the navigation engine never reads it directly - conditions reference
/// option ids through [`crate::logic::Condition::value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A question, stored flat on the form and referenced by id from page
/// layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
}

/// Marker value for the `type` field of a section break object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SectionBreakKind {
    #[serde(rename = "section-break")]
    SectionBreak,
}

/// A visual divider carried inline in a page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionBreak {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionBreakKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One entry in a page layout: either a bare question-id string or a
/// section-break object. Untagged, matching the mixed array the builder
/// writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum PageElement {
    Question(String),
    SectionBreak(SectionBreak),
}

impl PageElement {
    pub fn question_id(&self) -> Option<&str> {
        match self {
            PageElement::Question(id) => Some(id),
            PageElement::SectionBreak(_) => None,
        }
    }
}

/// A navigable unit of the form.
///
/// A page with an empty `conditional_logic` list always advances to the
/// next page in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub layout: Vec<PageElement>,
    #[serde(default, deserialize_with = "rules_or_single")]
    pub conditional_logic: Vec<LogicRule>,
}

impl Page {
    /// Question ids referenced by this page's layout, in layout order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.layout.iter().filter_map(PageElement::question_id)
    }
}

/// A complete form definition: ordered pages plus the flat question set
/// they reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Post-submission redirect URL, if the author configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_redirect: Option<String>,
}

impl Form {
    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn page_index(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page_id)
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    pub fn is_last_page(&self, page_id: &str) -> bool {
        self.page_index(page_id)
            .is_some_and(|idx| idx + 1 == self.pages.len())
    }
}

/// The builder historically wrote `conditionalLogic` in three shapes: a
/// list of rules, a single bare rule object, or `null`. The list is
/// canonical; this accepts all three and normalizes.
fn rules_or_single<'de, D>(deserializer: D) -> Result<Vec<LogicRule>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        Many(Vec<LogicRule>),
        One(LogicRule),
    }

    Ok(match Option::<Shape>::deserialize(deserializer)? {
        Some(Shape::Many(rules)) => rules,
        Some(Shape::One(rule)) => vec![rule],
        None => Vec::new(),
    })
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub(crate) fn question(id: &str, question_type: QuestionType) -> Question {
        Question {
            id: id.into(),
            title: format!("Question {id}"),
            question_type,
            required: false,
            options: Vec::new(),
        }
    }

    pub(crate) fn page(id: &str, rules: Vec<LogicRule>) -> Page {
        Page {
            id: id.into(),
            name: id.to_uppercase(),
            layout: Vec::new(),
            conditional_logic: rules,
        }
    }

    pub(crate) fn two_question_form() -> Form {
        Form {
            id: "form-1".into(),
            title: "Fixture".into(),
            description: None,
            pages: vec![page("page-1", Vec::new()), page("page-2", Vec::new())],
            questions: vec![
                question("q1", QuestionType::MultipleChoice),
                question("q2", QuestionType::Checkbox),
            ],
            default_redirect: None,
        }
    }
}
