use claim_scribe::llm::{FieldScribe, GeminiClient, MediaAttachment};
use dotenv::dotenv;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

    let photo_paths: Vec<String> = std::env::args().skip(1).collect();
    if photo_paths.is_empty() {
        eprintln!("usage: contents_inventory <room_photo.jpg> [...]");
        std::process::exit(1);
    }

    let mut photos = Vec::with_capacity(photo_paths.len());
    for path in &photo_paths {
        photos.push(MediaAttachment::from_path(path).await?);
    }

    let scribe = FieldScribe::new(GeminiClient::new(api_key));
    let items = scribe.inventory_from_photos(&photos).await?;

    println!("{:<40} Qty", "Item");
    for item in &items {
        println!("{:<40} {}", item.item, item.quantity);
    }
    println!("\n{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
