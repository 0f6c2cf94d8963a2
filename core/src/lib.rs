//! FormFlow Core - Conditional Navigation Engine
//!
//! This crate defines the **pure** layer of FormFlow:
//! - `Form` / `Page` / `Question`: the multi-page form model
//! - `resolve_next_page`: the page-to-page decision function
//! - `FlowSchematic`: the static branch graph extracted from a form
//!
//! **IMPORTANT**: This layer is Pure Rust - no HTTP, no IO, no Async.
//! The engine never mutates the form or the respondent's answers; it is a
//! transition function from `(Form, PageId, ResponseMap)` to a
//! `NavigationResult`.

pub mod answer;
pub mod form;
pub mod logic;
pub mod navigation;
pub mod schematic;

pub use answer::{AnswerValue, ResponseMap};
pub use form::{ChoiceOption, Form, Page, PageElement, Question, QuestionType, SectionBreak};
pub use logic::{Condition, LogicRule};
pub use navigation::{
    Advance, NavigationError, NavigationResult, resolve_advance, resolve_next_page,
};
pub use schematic::{EdgeKind, FlowDiagnostic, FlowEdge, FlowNode, FlowSchematic, validate};

pub mod prelude {
    pub use crate::answer::{AnswerValue, ResponseMap};
    pub use crate::form::{Form, Page, PageElement, Question, QuestionType};
    pub use crate::logic::{Condition, LogicRule};
    pub use crate::navigation::{
        Advance, NavigationError, NavigationResult, resolve_advance, resolve_next_page,
    };
    pub use crate::schematic::{FlowDiagnostic, FlowSchematic, validate};
}
