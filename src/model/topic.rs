use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single topic that can appear on a bingo card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
}

impl Topic {
    pub fn new(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.trim().to_string(),
            short_text: None,
        }
    }

    pub fn with_short_text(text: &str, short_text: &str) -> Self {
        let mut topic = Self::new(text);
        topic.short_text = Some(short_text.trim().to_string());
        topic
    }

    /// Best available display text: the short label when present and
    /// non-empty, otherwise the full text.
    pub fn display_text(&self) -> &str {
        match &self.short_text {
            Some(short) if !short.is_empty() => short,
            _ => &self.text,
        }
    }
}

/// Trim a raw line and strip a leading "- " list marker if one is present.
/// Returns an empty string for lines that should be discarded.
pub fn sanitize_topic_text(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("- ") {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}
