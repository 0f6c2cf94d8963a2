//! The conditional navigation engine.
//!
//! `resolve_next_page` is the transition function of the fill-out state
//! machine: given the form, the page being left, and the answers recorded
//! so far, it decides where the respondent goes next. It is pure - no
//! mutation of its inputs, no hidden state - so the surrounding session
//! may re-invoke it freely on every "Next".

use crate::answer::ResponseMap;
use crate::form::Form;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// The engine's decision for a single "Next" click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NavigationResult {
    /// No rule applied: advance to the next page in document order, or
    /// finish the form if the current page is the last.
    Sequential,
    /// Every condition of the first evaluable rule was met. The redirect
    /// may be absent, in which case the caller advances sequentially.
    Pass { redirect_page_id: Option<String> },
    /// Conditions were not met and the rule names a fail target.
    Fail { redirect_page_id: String },
}

/// A [`NavigationResult`] resolved against the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Move to the page at this index in `form.pages`.
    Goto(usize),
    /// The form is finished; the caller triggers submission.
    Complete,
}

/// Navigation failures. Only integration bugs surface as errors; every
/// data-level problem (dangling redirect, malformed rule) degrades to
/// sequential advance so the respondent can always proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("page `{page_id}` is not part of the form")]
    InvalidPageReference { page_id: String },
}

/// Decide the next page when the respondent leaves `current_page_id`.
///
/// Rules are consulted in authoring order. Rules with no conditions are
/// inert and skipped; the first rule that has conditions is evaluated and
/// consultation stops there regardless of the outcome, mirroring the
/// one-rule-per-page model the builder exposes.
pub fn resolve_next_page(
    form: &Form,
    current_page_id: &str,
    responses: &ResponseMap,
) -> Result<NavigationResult, NavigationError> {
    let page = form
        .page(current_page_id)
        .ok_or_else(|| NavigationError::InvalidPageReference {
            page_id: current_page_id.to_string(),
        })?;

    for rule in &page.conditional_logic {
        if !rule.is_evaluable() {
            continue;
        }

        if rule.all_conditions_met(form, responses) {
            debug!(page_id = %page.id, redirect = ?rule.pass_redirect, "conditions met");
            return Ok(NavigationResult::Pass {
                redirect_page_id: rule.pass_redirect.clone(),
            });
        }
        if let Some(target) = &rule.fail_redirect {
            debug!(page_id = %page.id, redirect = %target, "conditions not met");
            return Ok(NavigationResult::Fail {
                redirect_page_id: target.clone(),
            });
        }
        debug!(page_id = %page.id, "conditions not met, no fail target; sequential");
        return Ok(NavigationResult::Sequential);
    }

    debug!(page_id = %page.id, "no evaluable rule; sequential");
    Ok(NavigationResult::Sequential)
}

/// Resolve the engine's decision to a concrete page index, degrading
/// dangling redirects to sequential order.
///
/// A redirect whose target page was deleted after the rule was authored
/// is logged and ignored; the respondent's progress never stalls on it.
pub fn resolve_advance(
    form: &Form,
    current_page_id: &str,
    responses: &ResponseMap,
) -> Result<Advance, NavigationError> {
    let current_index =
        form.page_index(current_page_id)
            .ok_or_else(|| NavigationError::InvalidPageReference {
                page_id: current_page_id.to_string(),
            })?;

    let redirect = match resolve_next_page(form, current_page_id, responses)? {
        NavigationResult::Sequential | NavigationResult::Pass {
            redirect_page_id: None,
        } => None,
        NavigationResult::Pass {
            redirect_page_id: Some(target),
        }
        | NavigationResult::Fail {
            redirect_page_id: target,
        } => Some(target),
    };

    if let Some(target) = redirect {
        match form.page_index(&target) {
            Some(index) => return Ok(Advance::Goto(index)),
            None => {
                warn!(
                    page_id = %current_page_id,
                    target = %target,
                    "dangling redirect; falling back to sequential advance"
                );
            }
        }
    }

    Ok(sequential_advance(form, current_index))
}

fn sequential_advance(form: &Form, current_index: usize) -> Advance {
    if current_index + 1 < form.pages.len() {
        Advance::Goto(current_index + 1)
    } else {
        Advance::Complete
    }
}
