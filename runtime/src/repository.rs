//! Collaborator seams: where forms come from and where responses go.
//!
//! The engine itself never performs IO. These traits are the two
//! interfaces it needs from the rest of the product: a read-only form
//! store consulted once per session, and a submission sink invoked by the
//! caller after the session completes.

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formflow_core::answer::ResponseMap;
use formflow_core::form::Form;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only form store. Hydrates the form once per fill-out session.
#[async_trait]
pub trait FormRepository: Send + Sync {
    async fn get_form(&self, form_id: &str) -> anyhow::Result<Form>;
}

/// Acknowledgement returned by a submission sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub form_id: String,
    pub submitted_at: DateTime<Utc>,
}

/// Where completed responses are delivered. Called by the session driver
/// after the terminal page, never by the engine.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit_responses(
        &self,
        form_id: &str,
        responses: &ResponseMap,
    ) -> anyhow::Result<SubmissionReceipt>;
}

/// In-memory repository and sink, for tests and embedded use.
#[derive(Default)]
pub struct MemoryRepository {
    forms: RwLock<HashMap<String, Form>>,
    submissions: RwLock<Vec<(String, ResponseMap)>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_form(&self, form: Form) {
        self.forms.write().insert(form.id.clone(), form);
    }

    /// Submissions received so far, oldest first.
    pub fn submissions(&self) -> Vec<(String, ResponseMap)> {
        self.submissions.read().clone()
    }
}

#[async_trait]
impl FormRepository for MemoryRepository {
    async fn get_form(&self, form_id: &str) -> anyhow::Result<Form> {
        self.forms
            .read()
            .get(form_id)
            .cloned()
            .ok_or_else(|| anyhow!("form `{form_id}` not found"))
    }
}

#[async_trait]
impl SubmissionSink for MemoryRepository {
    async fn submit_responses(
        &self,
        form_id: &str,
        responses: &ResponseMap,
    ) -> anyhow::Result<SubmissionReceipt> {
        self.submissions
            .write()
            .push((form_id.to_string(), responses.clone()));
        Ok(SubmissionReceipt {
            id: Uuid::new_v4(),
            form_id: form_id.to_string(),
            submitted_at: Utc::now(),
        })
    }
}
