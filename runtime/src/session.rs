//! The fill-out session: one respondent moving through one form.
//!
//! The session is the state token of the navigation state machine. Its
//! state is the current page; transitions are computed by the pure engine
//! in `formflow-core`. The session owns the [`ResponseMap`] for its
//! lifetime and discards it when dropped - answers are never shared
//! across sessions.

use formflow_core::answer::{AnswerValue, ResponseMap};
use formflow_core::form::{Form, Page};
use formflow_core::navigation::{Advance, NavigationError, resolve_advance};
use thiserror::Error;
use tracing::debug;

/// What a call to [`FillSession::advance`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The session moved to this page.
    Page(String),
    /// The last page was completed with a sequential result; the caller
    /// should now submit the responses.
    Complete,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("form `{form_id}` has no pages")]
    EmptyForm { form_id: String },
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// A single respondent's traversal of a form.
pub struct FillSession {
    form: Form,
    /// Index into `form.pages`. Always valid: it only ever comes from
    /// `resolve_advance`, which derives it from the page list.
    current: usize,
    responses: ResponseMap,
    history: Vec<usize>,
    complete: bool,
}

impl FillSession {
    /// Start a session on the form's first page.
    pub fn new(form: Form) -> Result<Self, SessionError> {
        if form.pages.is_empty() {
            return Err(SessionError::EmptyForm {
                form_id: form.id.clone(),
            });
        }
        Ok(FillSession {
            form,
            current: 0,
            responses: ResponseMap::new(),
            history: Vec::new(),
            complete: false,
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn current_page(&self) -> &Page {
        &self.form.pages[self.current]
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    /// Whether the session has reached submission.
    pub fn is_terminal(&self) -> bool {
        self.complete
    }

    /// Record the respondent's answer to a question. Re-answering
    /// replaces the earlier value.
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.responses.record(question_id, value);
    }

    /// The respondent clicked "Next": evaluate the current page's logic
    /// and move. Once the session is terminal, further calls return
    /// [`Progress::Complete`] without moving.
    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        if self.complete {
            return Ok(Progress::Complete);
        }

        let page_id = self.current_page().id.clone();
        match resolve_advance(&self.form, &page_id, &self.responses)? {
            Advance::Goto(index) => {
                debug!(from = %page_id, to = %self.form.pages[index].id, "advancing");
                self.history.push(self.current);
                self.current = index;
                Ok(Progress::Page(self.current_page().id.clone()))
            }
            Advance::Complete => {
                debug!(from = %page_id, "form complete");
                self.complete = true;
                Ok(Progress::Complete)
            }
        }
    }

    /// The respondent clicked "Previous": walk back one visited page.
    /// No logic is evaluated on the way back. Returns the page moved to,
    /// or `None` at the start of the form.
    pub fn back(&mut self) -> Option<&Page> {
        let previous = self.history.pop()?;
        self.current = previous;
        self.complete = false;
        Some(self.current_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formflow_core::answer::AnswerValue;
    use formflow_core::form::{Form, Page, Question, QuestionType};
    use formflow_core::logic::{Condition, LogicRule};

    fn page(id: &str, rules: Vec<LogicRule>) -> Page {
        Page {
            id: id.into(),
            name: id.into(),
            layout: Vec::new(),
            conditional_logic: rules,
        }
    }

    fn question(id: &str) -> Question {
        Question {
            id: id.into(),
            title: id.into(),
            question_type: QuestionType::MultipleChoice,
            required: false,
            options: Vec::new(),
        }
    }

    /// Pages [P1, P2, P3]; P1 branches on q1 == "yes" to P3, else P2.
    fn branching_form() -> Form {
        Form {
            id: "form-1".into(),
            title: "Branching".into(),
            description: None,
            pages: vec![
                page(
                    "P1",
                    vec![LogicRule {
                        conditions: vec![Condition {
                            field_id: "q1".into(),
                            value: AnswerValue::from("yes"),
                        }],
                        pass_redirect: Some("P3".into()),
                        fail_redirect: Some("P2".into()),
                    }],
                ),
                page("P2", Vec::new()),
                page("P3", Vec::new()),
            ],
            questions: vec![question("q1")],
            default_redirect: None,
        }
    }

    #[test]
    fn starts_on_first_page() {
        let session = FillSession::new(branching_form()).unwrap();
        assert_eq!(session.current_page().id, "P1");
        assert!(!session.is_terminal());
    }

    #[test]
    fn empty_form_is_rejected() {
        let form = Form {
            id: "empty".into(),
            title: String::new(),
            description: None,
            pages: Vec::new(),
            questions: Vec::new(),
            default_redirect: None,
        };
        assert!(matches!(
            FillSession::new(form),
            Err(SessionError::EmptyForm { .. })
        ));
    }

    #[test]
    fn pass_branch_skips_to_p3() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "yes");
        assert_eq!(session.advance().unwrap(), Progress::Page("P3".into()));
        assert_eq!(session.advance().unwrap(), Progress::Complete);
        assert!(session.is_terminal());
    }

    #[test]
    fn fail_branch_goes_to_p2() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "no");
        assert_eq!(session.advance().unwrap(), Progress::Page("P2".into()));
    }

    #[test]
    fn unanswered_condition_takes_fail_branch() {
        let mut session = FillSession::new(branching_form()).unwrap();
        assert_eq!(session.advance().unwrap(), Progress::Page("P2".into()));
    }

    #[test]
    fn terminal_is_sticky() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "yes");
        session.advance().unwrap();
        assert_eq!(session.advance().unwrap(), Progress::Complete);
        assert_eq!(session.advance().unwrap(), Progress::Complete);
        assert_eq!(session.current_page().id, "P3");
    }

    #[test]
    fn back_walks_visit_history_not_document_order() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "yes");
        session.advance().unwrap();
        assert_eq!(session.current_page().id, "P3");

        // P1 -> P3 skipped P2; back returns to P1, not P2.
        assert_eq!(session.back().map(|p| p.id.clone()), Some("P1".into()));
        assert_eq!(session.back().map(|p| p.id.clone()), None);
    }

    #[test]
    fn back_reopens_a_terminal_session() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "yes");
        session.advance().unwrap();
        session.advance().unwrap();
        assert!(session.is_terminal());

        session.back();
        assert!(!session.is_terminal());
        assert_eq!(session.current_page().id, "P1");
    }

    #[test]
    fn answers_survive_navigation() {
        let mut session = FillSession::new(branching_form()).unwrap();
        session.record("q1", "no");
        session.advance().unwrap();
        session.record("q2", vec!["a".to_string()]);
        assert_eq!(session.responses().len(), 2);
    }
}
