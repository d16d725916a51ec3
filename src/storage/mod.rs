//! JSON export of submitted applications.
//!
//! Nothing is persisted implicitly: a snapshot is only written when the
//! applicant asks for it from the summary screen or the `check` command.

mod error;
mod export;

pub use error::StorageError;
pub use export::{default_export_path, export_json, read_draft};
