//! Core domain types

pub mod candidate;
pub mod summary;
pub mod template;

pub use candidate::is_candidate;
pub use summary::{Disposition, Summary};
pub use template::{is_empty_sidecar, TemplateSet, BUILTIN_TEMPLATES};
