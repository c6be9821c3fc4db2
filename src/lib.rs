//! # Claim Scribe
//!
//! A library for turning an insurance adjuster's multimodal field notes
//! (audio, photos, guidelines) into structured claim reports via LLM
//! extraction.
//!
//! ## Core Concepts
//!
//! - **Raw response**: the unstructured text a generation call returns. No
//!   structure is guaranteed; markers may be missing, reordered, or noisy.
//! - **Narrative**: the adjuster-facing report body, fenced by
//!   `---NARRATIVE START---`/`---NARRATIVE END---` markers.
//! - **Scope table**: pipe-delimited estimating line items, fenced by
//!   `---SCOPE START---`/`---SCOPE END---` markers.
//! - **Soft failure**: the parsing core never errors on malformed input. A
//!   missing narrative marker falls back to the raw text; a missing or
//!   unterminated scope block yields an empty table.
//!
//! The parsers are pure functions over in-memory strings: no I/O, no shared
//! state, safe to call repeatedly and concurrently.
//!
//! ## Example
//!
//! ```rust
//! use claim_scribe::parse_field_report;
//!
//! let raw = "---NARRATIVE START---\nGENERAL OVERVIEW\nPipe burst in the \
//!            kitchen.\n---NARRATIVE END---\n\n---SCOPE START---\nWTR | \
//!            Extract water | 500 SF\n---SCOPE END---";
//!
//! let report = parse_field_report(raw);
//! assert!(report.narrative.starts_with("GENERAL OVERVIEW"));
//! assert_eq!(report.scope[0].code, "WTR");
//! ```
//!
//! The hosted-model integration (report generation, scope audit, contents
//! inventory, statement analysis, photo renaming) lives behind the `gemini`
//! feature.

pub mod error;
pub mod inventory;
pub mod markers;
pub mod narrative;
pub mod prompts;
pub mod report;
pub mod scope;

#[cfg(feature = "gemini")]
pub mod llm;

pub use error::{ClaimScribeError, Result};
pub use inventory::{parse_inventory, InventoryItem};
pub use markers::{NARRATIVE_END, NARRATIVE_START, SCOPE_END, SCOPE_START};
pub use narrative::extract_narrative;
pub use report::{parse_field_report, FieldReport, JobContext, LossType};
pub use scope::{extract_scope_items, scope_summary, ScopeItem};

#[cfg(feature = "gemini")]
pub use llm::{FieldScribe, GeminiClient, MediaAttachment, ReportEvent};
