use uuid::Uuid;

use crate::error::BingoError;
use crate::model::card::BingoCard;
use crate::model::language::TopicLanguage;
use crate::model::topic::Topic;

/// Commands accepted by the engine loop.
pub enum EngineCommand {
    AddTopics(String),
    RemoveTopic(Uuid),
    ClearTopics,
    UpdateShortText {
        id: Uuid,
        short_text: Option<String>,
    },
    GenerateCard,
    ToggleTile {
        row: usize,
        col: usize,
    },
    ResetCard,
    SaveApiKey(String),
    ShortenTopics(TopicLanguage),
}

/// State-change notifications sent back to whoever drives the engine. Every
/// payload is a snapshot; the engine never shares live state.
pub enum EngineResponse {
    TopicsChanged(Vec<Topic>),
    CardChanged(BingoCard),
    KeySaved { has_saved_key: bool },
    OperationFailed(BingoError),
}
