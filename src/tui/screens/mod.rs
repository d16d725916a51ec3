//! TUI screen implementations.

pub mod application;
pub mod help;
pub mod summary;

pub use application::{ApplicationFormState, draw_application};
pub use help::{HelpState, draw_help};
pub use summary::{ExportStatus, SummaryState, SummaryView, draw_summary};
