use crate::engine::llm_client::LlmClient;
use crate::engine::normalize::normalize_short_labels;
use crate::engine::prompt_builder::build_shortening_prompt;
use crate::error::BingoError;
use crate::model::language::TopicLanguage;
use crate::model::topic::Topic;
use crate::storage::key_store::KeyStore;

/// Converts topic text into short tile labels through the AI provider, one
/// batch request per conversion. Failures are recorded in `last_error` and
/// the caller always gets its original topics back.
pub struct TopicShortener<K: KeyStore> {
    key_store: K,
    endpoint: Option<String>,
    is_converting: bool,
    last_error: Option<BingoError>,
}

impl<K: KeyStore> TopicShortener<K> {
    pub fn new(key_store: K) -> Self {
        Self {
            key_store,
            endpoint: None,
            is_converting: false,
            last_error: None,
        }
    }

    /// Point the client at a different chat-completions endpoint.
    pub fn with_endpoint(key_store: K, endpoint: String) -> Self {
        let mut shortener = Self::new(key_store);
        shortener.endpoint = Some(endpoint);
        shortener
    }

    pub fn is_converting(&self) -> bool {
        self.is_converting
    }

    pub fn last_error(&self) -> Option<&BingoError> {
        self.last_error.as_ref()
    }

    pub fn has_saved_key(&self) -> bool {
        self.key_store.has_saved_key()
    }

    pub fn save_api_key(&mut self, key: &str) -> Result<(), BingoError> {
        self.key_store.save(key)
    }

    /// Shorten every topic in one batch. On any failure the original topics
    /// come back unchanged and the error is kept in `last_error`.
    pub fn convert_topics(&mut self, topics: &[Topic], language: TopicLanguage) -> Vec<Topic> {
        if self.is_converting {
            log::warn!("rejecting overlapping shortening request");
            return topics.to_vec();
        }
        let key = match self.key_store.current_key() {
            Some(key) if !key.is_empty() => key,
            _ => {
                self.last_error = Some(BingoError::MissingApiKey);
                return topics.to_vec();
            }
        };
        if topics.is_empty() {
            return topics.to_vec();
        }

        self.is_converting = true;
        self.last_error = None;
        let result = self.convert_batch(&key, topics, language);
        self.is_converting = false;

        match result {
            Ok(converted) => converted,
            Err(err) => {
                log::error!("topic shortening failed: {err}");
                self.last_error = Some(err);
                topics.to_vec()
            }
        }
    }

    fn convert_batch(
        &self,
        api_key: &str,
        topics: &[Topic],
        language: TopicLanguage,
    ) -> Result<Vec<Topic>, BingoError> {
        let prompt = build_shortening_prompt(topics, language);
        let client = match &self.endpoint {
            Some(endpoint) => LlmClient::with_endpoint(api_key.to_string(), endpoint.clone()),
            None => LlmClient::new(api_key.to_string()),
        };

        let labels = client.request_short_labels(prompt, language, topics.len())?;
        let labels = normalize_short_labels(&labels, topics.len())?;
        Ok(merge_short_labels(topics, labels))
    }
}

/// Zip normalized labels back onto copies of the source topics, preserving
/// order and identity.
fn merge_short_labels(topics: &[Topic], labels: Vec<String>) -> Vec<Topic> {
    topics
        .iter()
        .zip(labels)
        .map(|(topic, label)| {
            let mut topic = topic.clone();
            topic.short_text = Some(label);
            topic
        })
        .collect()
}
