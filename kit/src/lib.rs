//! FormFlow facade crate.
//!
//! This crate re-exports the core and runtime crates with a single entry
//! point. The core stays pure (no IO, no async); the runtime carries the
//! session state and the collaborator seams.

pub use formflow_core as core;
pub use formflow_runtime as runtime;

pub use formflow_core::{
    AnswerValue, Form, NavigationError, NavigationResult, Page, Question, ResponseMap,
    resolve_advance, resolve_next_page,
};
pub use formflow_runtime::{
    FillSession, FormRepository, MemoryRepository, Progress, SubmissionSink, run_session,
};

pub mod prelude {
    pub use formflow_core::prelude::*;
    pub use formflow_runtime::prelude::*;
}
