//! Field report assembly and job context.

use crate::narrative::extract_narrative;
use crate::scope::{extract_scope_items, ScopeItem};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed field report: the narrative body plus the preliminary scope.
///
/// Both parts are independent pure projections of the same raw response, so
/// either may be degraded (raw fallback text, empty scope) without affecting
/// the other. After parsing, both are typically edited by the operator before
/// export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub narrative: String,
    pub scope: Vec<ScopeItem>,
}

impl FieldReport {
    /// Parses a raw model response into a report.
    ///
    /// Never fails: a response missing its markers degrades to the raw text
    /// as narrative and an empty scope.
    pub fn from_raw(raw: &str) -> Self {
        let narrative = extract_narrative(raw).to_string();
        let scope = extract_scope_items(raw);
        debug!(
            "parsed response: {} narrative chars, {} scope items",
            narrative.len(),
            scope.len()
        );
        Self { narrative, scope }
    }
}

/// The type of loss being documented, as selected in job setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossType {
    WaterPipeBurst,
    WaterFlood,
    FireSmoke,
    WindHail,
    TheftVandalism,
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LossType::WaterPipeBurst => "Water (Pipe Burst)",
            LossType::WaterFlood => "Water (Flood)",
            LossType::FireSmoke => "Fire/Smoke",
            LossType::WindHail => "Wind/Hail",
            LossType::TheftVandalism => "Theft/Vandalism",
        };
        f.write_str(label)
    }
}

/// Caller-owned job setup for one claim inspection.
///
/// The surrounding application accumulates this in its own session state; the
/// parsing core stays stateless and only ever receives it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    /// Carrier the report is written for, e.g. `State Farm`.
    pub carrier: String,
    pub loss_type: LossType,
    /// Optional carrier-specific reporting guidelines to follow verbatim.
    pub guidelines: Option<String>,
    /// Date of inspection, stamped on the exported report.
    pub date: NaiveDate,
}

impl JobContext {
    pub fn new(carrier: impl Into<String>, loss_type: LossType, date: NaiveDate) -> Self {
        Self {
            carrier: carrier.into(),
            loss_type,
            guidelines: None,
            date,
        }
    }

    pub fn with_guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.guidelines = Some(guidelines.into());
        self
    }
}

/// Parses a raw model response into a [`FieldReport`].
///
/// Convenience wrapper over [`FieldReport::from_raw`].
pub fn parse_field_report(raw: &str) -> FieldReport {
    info!("parsing field report from raw response");
    FieldReport::from_raw(raw)
}
