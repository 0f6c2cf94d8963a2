//! FormFlow Runtime - Fill-Out Session Layer
//!
//! The core crate decides transitions; this crate owns the state the
//! original viewer kept in component state (current page, recorded
//! answers, visit history) and the async seams to the outside world
//! (form hydration, submission).

pub mod driver;
pub mod repository;
pub mod session;

pub use driver::{Respondent, run_session};
pub use repository::{FormRepository, MemoryRepository, SubmissionReceipt, SubmissionSink};
pub use session::{FillSession, Progress, SessionError};

pub mod prelude {
    pub use crate::driver::{Respondent, run_session};
    pub use crate::repository::{
        FormRepository, MemoryRepository, SubmissionReceipt, SubmissionSink,
    };
    pub use crate::session::{FillSession, Progress, SessionError};
}
