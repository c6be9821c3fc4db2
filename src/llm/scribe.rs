use crate::error::Result;
use crate::inventory::{parse_inventory, InventoryItem};
use crate::llm::client::GeminiClient;
use crate::llm::types::{Content, MediaAttachment, ReportEvent};
use crate::prompts;
use crate::report::{FieldReport, JobContext, LossType};
use crate::scope::ScopeItem;
use log::info;
use tokio::sync::mpsc::Sender;

/// Default generation model for all workflows.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The field-reporting assistant: one instance per operator session.
///
/// Every method sends one generation call and hands the returned text to the
/// pure parsing core. A failed call surfaces as `Err`; the parsers are only
/// ever given a best-effort string, never a null response.
pub struct FieldScribe {
    client: GeminiClient,
    model: String,
}

impl FieldScribe {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Generates a structured field report from recorded notes and photos.
    ///
    /// The narrative and scope are extracted independently from the same raw
    /// response; a malformed scope block never blocks narrative delivery.
    pub async fn generate_report(
        &self,
        ctx: &JobContext,
        attachments: &[MediaAttachment],
        progress: Option<Sender<ReportEvent>>,
    ) -> Result<FieldReport> {
        self.send_event(&progress, ReportEvent::Starting).await;
        info!(
            "generating report for {} ({}) with {} attachments",
            ctx.carrier,
            ctx.loss_type,
            attachments.len()
        );

        let system_prompt = prompts::report_prompt(ctx);
        let contents = vec![Content::user_with_media(
            "Write the field report from the attached notes and photos.",
            attachments,
        )];

        self.send_event(&progress, ReportEvent::Generating).await;
        let raw = match self
            .client
            .generate_content(&self.model, Some(&system_prompt), contents)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                self.send_event(
                    &progress,
                    ReportEvent::Failed {
                        reason: e.to_string(),
                    },
                )
                .await;
                return Err(e);
            }
        };

        self.send_event(&progress, ReportEvent::Parsing).await;
        let report = FieldReport::from_raw(&raw);

        self.send_event(&progress, ReportEvent::Success).await;
        Ok(report)
    }

    /// Asks the model to audit an operator-edited scope for missing items.
    /// Returns free text for display, not structured data.
    pub async fn audit_scope(&self, scope: &[ScopeItem], loss_type: LossType) -> Result<String> {
        let prompt = prompts::audit_prompt(scope, loss_type);
        self.client
            .generate_content(&self.model, None, vec![Content::user(prompt)])
            .await
    }

    /// Lists personal property visible in room photos.
    pub async fn inventory_from_photos(
        &self,
        photos: &[MediaAttachment],
    ) -> Result<Vec<InventoryItem>> {
        let contents = vec![Content::user_with_media(prompts::INVENTORY_PROMPT, photos)];
        let raw = self
            .client
            .generate_content(&self.model, None, contents)
            .await?;
        Ok(parse_inventory(&raw))
    }

    /// Analyzes a recorded claimant interview for fraud and coverage issues.
    pub async fn analyze_statement(&self, audio: &MediaAttachment) -> Result<String> {
        let contents = vec![Content::user_with_media(
            prompts::STATEMENT_PROMPT,
            std::slice::from_ref(audio),
        )];
        self.client
            .generate_content(&self.model, None, contents)
            .await
    }

    /// Proposes a carrier-friendly filename for a site photo.
    pub async fn rename_photo(&self, carrier: &str, photo: &MediaAttachment) -> Result<String> {
        let contents = vec![Content::user_with_media(
            prompts::photo_rename_prompt(carrier),
            std::slice::from_ref(photo),
        )];
        let name = self
            .client
            .generate_content(&self.model, None, contents)
            .await?;
        Ok(name.trim().to_string())
    }

    async fn send_event(&self, sender: &Option<Sender<ReportEvent>>, event: ReportEvent) {
        if let Some(tx) = sender {
            let _ = tx.send(event).await;
        }
    }
}
