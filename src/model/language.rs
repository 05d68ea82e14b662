use serde::{Deserialize, Serialize};

/// Target language for AI-shortened tile labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicLanguage {
    English,
    German,
    Swedish,
}

impl TopicLanguage {
    pub const ALL: [TopicLanguage; 3] = [
        TopicLanguage::English,
        TopicLanguage::German,
        TopicLanguage::Swedish,
    ];

    /// Native-language name shown to the player.
    pub fn display_name(&self) -> &'static str {
        match self {
            TopicLanguage::English => "English",
            TopicLanguage::German => "Deutsch",
            TopicLanguage::Swedish => "Svenska",
        }
    }
}
