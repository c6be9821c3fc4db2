pub mod client;
pub mod scribe;
pub mod types;

pub use client::GeminiClient;
pub use scribe::{FieldScribe, DEFAULT_MODEL};
pub use types::{MediaAttachment, ReportEvent};
