use chrono::Local;
use claim_scribe::llm::{FieldScribe, GeminiClient, MediaAttachment, ReportEvent};
use claim_scribe::{scope_summary, JobContext, LossType};
use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY must be set")?;

    let mut args = std::env::args().skip(1);
    let audio_path = args
        .next()
        .context("usage: generate_report <note.wav> [photo.jpg ...]")?;

    let mut attachments = vec![MediaAttachment::from_path(&audio_path).await?];
    for photo_path in args {
        attachments.push(MediaAttachment::from_path(&photo_path).await?);
    }

    let ctx = JobContext::new("State Farm", LossType::WaterPipeBurst, Local::now().date_naive())
        .with_guidelines("Passive voice. No speculation on coverage.");

    let scribe = FieldScribe::new(GeminiClient::new(api_key));

    let (tx, mut rx) = mpsc::channel::<ReportEvent>(16);
    let progress = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            println!("  [{:?}]", event);
        }
    });

    println!("Generating report for {} ({})...", ctx.carrier, ctx.loss_type);
    let report = scribe.generate_report(&ctx, &attachments, Some(tx)).await?;
    let _ = progress.await;

    println!("\n=== NARRATIVE ===\n{}\n", report.narrative);
    println!("=== PRELIMINARY SCOPE ===\n{}\n", scope_summary(&report.scope));

    let audit = scribe.audit_scope(&report.scope, ctx.loss_type).await?;
    println!("=== AUDIT ===\n{}", audit);

    Ok(())
}
