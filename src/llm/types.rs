use crate::error::{ClaimScribeError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Progress events emitted while a report is being generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportEvent {
    Starting,
    Generating,
    Parsing,
    Success,
    Failed { reason: String },
}

/// A binary capture attached to a generation call: a recorded field note or
/// a site photo. The bytes are sent inline; they are never parsed locally.
#[derive(Debug, Clone)]
pub struct MediaAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl MediaAttachment {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// A recorded audio note, as captured by the field recorder.
    pub fn audio_wav(data: Vec<u8>) -> Self {
        Self::new("audio/wav", data)
    }

    /// Reads an attachment from disk, guessing the MIME type from the
    /// extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string();
        let data = fs::read(path).await?;
        if data.is_empty() {
            return Err(ClaimScribeError::InvalidAttachment(format!(
                "{} is empty",
                path.display()
            )));
        }
        Ok(Self { mime_type, data })
    }

    pub(crate) fn to_part(&self) -> Part {
        Part::InlineData {
            inline_data: Blob {
                mime_type: self.mime_type.clone(),
                data: BASE64.encode(&self.data),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Blob {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// A user turn carrying a text instruction plus inline media.
    pub fn user_with_media(text: impl Into<String>, media: &[MediaAttachment]) -> Self {
        let mut parts = vec![Part::Text { text: text.into() }];
        parts.extend(media.iter().map(MediaAttachment::to_part));
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_part_serializes_to_gemini_shape() {
        let attachment = MediaAttachment::new("image/jpeg", vec![0xFF, 0xD8]);
        let json = serde_json::to_value(attachment.to_part()).unwrap();
        assert_eq!(json["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(json["inlineData"]["data"], BASE64.encode([0xFFu8, 0xD8]));
    }

    #[test]
    fn test_text_part_round_trips_from_response_json() {
        let part: Part = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        match part {
            Part::Text { text } => assert_eq!(text, "hello"),
            _ => panic!("expected text part"),
        }
    }

    #[test]
    fn test_user_with_media_keeps_instruction_first() {
        let content =
            Content::user_with_media("prompt", &[MediaAttachment::audio_wav(vec![1, 2, 3])]);
        assert_eq!(content.parts.len(), 2);
        assert!(matches!(content.parts[0], Part::Text { .. }));
    }
}
