use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::BingoError;
use crate::model::language::TopicLanguage;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-5";
const MAX_LABEL_LENGTH: usize = 40;

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: Value,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ShortTopicsPayload {
    topics: Vec<String>,
}

/// Thin wrapper around the chat-completions endpoint of the shortening
/// provider. One request per conversion batch, strict JSON-schema output.
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Send one shortening prompt and return the raw candidate labels, in
    /// the order the provider produced them.
    pub fn request_short_labels(
        &self,
        prompt: String,
        language: TopicLanguage,
        expected_count: usize,
    ) -> Result<Vec<String>, BingoError> {
        let req = ChatCompletionRequest {
            model: MODEL.into(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: "You reply with JSON that matches the provided schema.".into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt,
                },
            ],
            response_format: short_topics_response_format(language, expected_count),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| BingoError::MalformedResponse(err.to_string()))?
            .json::<ChatCompletionResponse>()
            .map_err(|err| BingoError::MalformedResponse(err.to_string()))?;

        let content = resp
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                BingoError::MalformedResponse("response contained no choices".to_string())
            })?;

        decode_short_topics(content)
    }
}

/// Decode the provider's JSON content into the expected label list.
fn decode_short_topics(content: &str) -> Result<Vec<String>, BingoError> {
    let payload: ShortTopicsPayload = serde_json::from_str(content)
        .map_err(|err| BingoError::MalformedResponse(format!("invalid provider output: {err}")))?;
    Ok(payload.topics)
}

fn short_topics_response_format(language: TopicLanguage, expected_count: usize) -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "shorttopics",
            "description": format!("Short bingo topics in {}", language.display_name()),
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "topics": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "minLength": 1,
                            "maxLength": MAX_LABEL_LENGTH,
                        },
                        "minItems": expected_count,
                        "maxItems": expected_count,
                    }
                },
                "required": ["topics"],
                "additionalProperties": false,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_topics_payload() {
        let labels = decode_short_topics(r#"{"topics": ["Read Book", "Long Walk"]}"#).unwrap();
        assert_eq!(labels, ["Read Book", "Long Walk"]);
    }

    #[test]
    fn rejects_non_schema_content() {
        assert!(matches!(
            decode_short_topics("not json"),
            Err(BingoError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_short_topics(r#"{"labels": []}"#),
            Err(BingoError::MalformedResponse(_))
        ));
    }

    #[test]
    fn schema_pins_the_batch_size() {
        let format = short_topics_response_format(TopicLanguage::Swedish, 7);
        let schema = &format["json_schema"]["schema"]["properties"]["topics"];
        assert_eq!(schema["minItems"], 7);
        assert_eq!(schema["maxItems"], 7);
        assert_eq!(
            format["json_schema"]["description"],
            "Short bingo topics in Svenska"
        );
    }
}
