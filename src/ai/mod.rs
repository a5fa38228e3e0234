//! Portfolio summary prompts
//!
//! Builds the chat messages that a language-model collaborator sends to
//! summarize an extracted statement. No network access happens here.

pub mod prompts;

use serde::Serialize;

/// Fallback text shown when the model returns nothing usable
pub const SUMMARY_FALLBACK: &str = "Unable to generate summary.";

/// Text shown when the summary request itself failed
pub const SUMMARY_ERROR: &str = "Error generating summary.";

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// System and user messages for one summary request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPrompt {
    pub messages: Vec<ChatMessage>,
}

impl SummaryPrompt {
    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// Trimmed model output, or the fallback text when it is missing or blank
pub fn summary_or_fallback(response: Option<&str>) -> String {
    response
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| SUMMARY_FALLBACK.to_string())
}

/// Summary text for a finished request: the model output (or the empty-reply
/// fallback) on success, [`SUMMARY_ERROR`] when the request failed.
pub fn summary_from_response<E: std::fmt::Display>(response: Result<Option<&str>, E>) -> String {
    match response {
        Ok(content) => summary_or_fallback(content),
        Err(e) => {
            log::error!("AI summary error: {}", e);
            SUMMARY_ERROR.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_or_fallback() {
        assert_eq!(summary_or_fallback(Some("  Well diversified.\n")), "Well diversified.");
        assert_eq!(summary_or_fallback(Some("   ")), SUMMARY_FALLBACK);
        assert_eq!(summary_or_fallback(None), SUMMARY_FALLBACK);
    }

    #[test]
    fn test_summary_from_response() {
        let ok: Result<Option<&str>, String> = Ok(Some("Concentrated in tech."));
        assert_eq!(summary_from_response(ok), "Concentrated in tech.");

        let empty: Result<Option<&str>, String> = Ok(None);
        assert_eq!(summary_from_response(empty), SUMMARY_FALLBACK);

        let failed: Result<Option<&str>, String> = Err("connection reset".to_string());
        assert_eq!(summary_from_response(failed), SUMMARY_ERROR);
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_value(ChatMessage::system("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "hi"}));
    }
}
