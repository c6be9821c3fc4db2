//! Prompt text for the generation calls.
//!
//! The report prompt fences its two sections with the markers the extractors
//! look for; the inventory prompt requests the bare `Item|Qty` line format
//! consumed by [`crate::inventory::parse_inventory`].

use crate::report::{JobContext, LossType};
use crate::scope::{scope_summary, ScopeItem};

/// Prompt for analyzing a recorded claimant interview.
pub const STATEMENT_PROMPT: &str =
    "Analyze this recorded statement for fraud indicators and coverage issues. \
     Summarize the claimant's account, note inconsistencies, and flag anything \
     that affects coverage.";

/// Prompt for listing personal property visible in room photos.
pub const INVENTORY_PROMPT: &str =
    "Identify the personal property items visible in these photos. \
     CSV format: Item|Qty. No header. One line per item.";

/// Builds the system prompt for the field-report generation call.
///
/// The OUTPUT STRUCTURE section is load-bearing: the extractors depend on the
/// literal markers it requests.
pub fn report_prompt(ctx: &JobContext) -> String {
    let guide_text = match &ctx.guidelines {
        Some(guidelines) => format!("STRICTLY FOLLOW: {}", guidelines),
        None => format!("Adopt the standard reporting style of {}.", ctx.carrier),
    };

    format!(
        "Role: Senior Adjuster for {carrier}.\n\
         Task: Write Xactimate F9 Note.\n\
         CONTEXT: Loss: {loss} | {guide}\n\
         \n\
         RULES:\n\
         1. NO MARKDOWN (No bold, italics).\n\
         2. UPPERCASE HEADERS.\n\
         3. PLAIN TEXT.\n\
         \n\
         OUTPUT STRUCTURE:\n\
         ---NARRATIVE START---\n\
         GENERAL OVERVIEW\n\
         [Details]\n\
         \n\
         ORIGIN AND CAUSE\n\
         [Details]\n\
         \n\
         RESULTING DAMAGES\n\
         [Details]\n\
         \n\
         RESTORATION RECOMMENDATIONS\n\
         [Details]\n\
         ---NARRATIVE END---\n\
         \n\
         ---SCOPE START---\n\
         Selector | Description | Qty\n\
         ---SCOPE END---",
        carrier = ctx.carrier,
        loss = ctx.loss_type,
        guide = guide_text,
    )
}

/// Builds the prompt for auditing an operator-edited scope for missing items.
pub fn audit_prompt(scope: &[ScopeItem], loss_type: LossType) -> String {
    format!(
        "Audit this scope for missing {} items: \n{}",
        loss_type,
        scope_summary(scope)
    )
}

/// Builds the prompt for renaming a site photo to a carrier-friendly name.
pub fn photo_rename_prompt(carrier: &str) -> String {
    format!("Rename for {} claim. Format: Room_Label.jpg", carrier)
}
