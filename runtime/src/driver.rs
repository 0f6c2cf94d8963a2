//! End-to-end session driver: hydrate, fill, advance, submit.
//!
//! `run_session` wires the collaborators together the way the viewer page
//! does: fetch the form once, let the respondent answer page by page,
//! advance through the engine, and deliver the responses to the sink when
//! the terminal page completes.

use crate::repository::{FormRepository, SubmissionReceipt, SubmissionSink};
use crate::session::{FillSession, Progress};
use anyhow::bail;
use formflow_core::answer::AnswerValue;
use formflow_core::form::{Form, Page};
use tracing::info;

/// Redirect loops are authorable (a rule can point backwards), so a driven
/// session caps how often any page may be revisited before giving up.
const MAX_REVISITS: usize = 8;

/// Supplies answers for one page at a time during a driven session.
pub trait Respondent: Send {
    /// Answer the questions on `page`. Returned pairs are recorded before
    /// the session advances; an empty list leaves the page unanswered.
    fn fill_page(&mut self, page: &Page, form: &Form) -> Vec<(String, AnswerValue)>;
}

impl<F> Respondent for F
where
    F: FnMut(&Page, &Form) -> Vec<(String, AnswerValue)> + Send,
{
    fn fill_page(&mut self, page: &Page, form: &Form) -> Vec<(String, AnswerValue)> {
        self(page, form)
    }
}

/// Drive a complete fill-out session and submit the result.
///
/// The engine signals completion; submission is this driver's job, never
/// the engine's. Fails if the form cannot be hydrated, if navigation hits
/// an integration bug, or if redirects cycle past the revisit cap.
pub async fn run_session<R, S>(
    repository: &R,
    sink: &S,
    form_id: &str,
    respondent: &mut dyn Respondent,
) -> anyhow::Result<SubmissionReceipt>
where
    R: FormRepository + ?Sized,
    S: SubmissionSink + ?Sized,
{
    let form = repository.get_form(form_id).await?;
    let step_budget = form.pages.len().saturating_mul(MAX_REVISITS);
    let mut session = FillSession::new(form)?;
    let mut steps = 0usize;

    loop {
        let answers = respondent.fill_page(session.current_page(), session.form());
        for (question_id, value) in answers {
            session.record(question_id, value);
        }

        match session.advance()? {
            Progress::Complete => break,
            Progress::Page(_) => {
                steps += 1;
                if steps > step_budget {
                    bail!("form `{form_id}` navigation did not reach submission within {step_budget} steps");
                }
            }
        }
    }

    let receipt = sink.submit_responses(form_id, session.responses()).await?;
    info!(form_id = %form_id, submission = %receipt.id, "session submitted");
    Ok(receipt)
}
