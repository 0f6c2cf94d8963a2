//! Static analysis of a form's branch structure.
//!
//! `FlowSchematic` is the graph view the builder's flowchart screen renders:
//! pages as nodes, navigation outcomes as edges. `validate` is the
//! author-time companion - it reports the data problems the runtime engine
//! silently degrades around (dangling redirects, conditions on deleted
//! questions, inert rules).

use crate::form::Form;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How an edge is taken at fill-out time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Document-order advance.
    Sequential,
    /// Taken when the page's rule conditions are all met.
    Pass,
    /// Taken when they are not.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    /// Last page in document order; sequential advance from here ends the
    /// form.
    pub terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// The branch graph extracted from a form.
///
/// Edges mirror runtime behavior, including degradation: a redirect whose
/// target no longer exists is drawn as the sequential fallback the engine
/// would actually take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlowSchematic {
    pub form_id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowSchematic {
    pub fn from_form(form: &Form) -> Self {
        let last = form.pages.len().saturating_sub(1);
        let nodes = form
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| FlowNode {
                id: page.id.clone(),
                label: page.name.clone(),
                terminal: index == last && !form.pages.is_empty(),
            })
            .collect();

        let mut edges = Vec::new();
        for (index, page) in form.pages.iter().enumerate() {
            let next = form.pages.get(index + 1).map(|p| p.id.as_str());
            let rule = page.conditional_logic.iter().find(|r| r.is_evaluable());

            match rule {
                None => {
                    if let Some(next) = next {
                        edges.push(edge(&page.id, next, EdgeKind::Sequential));
                    }
                }
                Some(rule) => {
                    let pass = resolve_target(form, rule.pass_redirect.as_deref(), next);
                    let fail = resolve_target(form, rule.fail_redirect.as_deref(), next);
                    if let Some(to) = pass {
                        edges.push(edge(&page.id, to, EdgeKind::Pass));
                    }
                    if let Some(to) = fail {
                        edges.push(edge(&page.id, to, EdgeKind::Fail));
                    }
                }
            }
        }

        FlowSchematic {
            form_id: form.id.clone(),
            name: form.title.clone(),
            nodes,
            edges,
        }
    }
}

fn edge(from: &str, to: &str, kind: EdgeKind) -> FlowEdge {
    FlowEdge {
        from: from.to_string(),
        to: to.to_string(),
        kind,
    }
}

/// Redirect target as the runtime would resolve it: the named page if it
/// exists, otherwise the sequential fallback.
fn resolve_target<'a>(
    form: &'a Form,
    redirect: Option<&'a str>,
    next: Option<&'a str>,
) -> Option<&'a str> {
    match redirect {
        Some(target) if form.page(target).is_some() => Some(target),
        _ => next,
    }
}

/// An author-time problem found in a form's conditional logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FlowDiagnostic {
    /// A rule redirects to a page that is no longer part of the form.
    DanglingRedirect { page_id: String, target: String },
    /// A condition references a question that is no longer on the form.
    UnknownField { page_id: String, field_id: String },
    /// A rule with no conditions; it can never fire.
    EmptyRule { page_id: String },
}

/// Lint a form's conditional logic.
///
/// Diagnostics are advisory for the builder UI; the runtime already
/// degrades around each of these without stalling the respondent.
pub fn validate(form: &Form) -> Vec<FlowDiagnostic> {
    let mut diagnostics = Vec::new();

    for page in &form.pages {
        for rule in &page.conditional_logic {
            if !rule.is_evaluable() {
                diagnostics.push(FlowDiagnostic::EmptyRule {
                    page_id: page.id.clone(),
                });
            }

            for condition in &rule.conditions {
                if form.question(&condition.field_id).is_none() {
                    diagnostics.push(FlowDiagnostic::UnknownField {
                        page_id: page.id.clone(),
                        field_id: condition.field_id.clone(),
                    });
                }
            }

            for target in [&rule.pass_redirect, &rule.fail_redirect]
                .into_iter()
                .flatten()
            {
                if form.page(target).is_none() {
                    diagnostics.push(FlowDiagnostic::DanglingRedirect {
                        page_id: page.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
    }

    diagnostics
}
