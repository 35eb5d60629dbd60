//! Builds the canned completion payloads.

use crate::{
    error::ApiError,
    utils::{ChatMessage, ChatRequest, ChatResponse, Choice, TokenCounter, Usage},
};
use axum::body::Bytes;
use chrono::Utc;

pub const COMPLETION_OBJECT: &str = "chat.completion";
pub const ASSISTANT_ROLE: &str = "assistant";
pub const FINISH_REASON: &str = "stop";
pub const REPLY_SUFFIX: &str = "Hello, how can I help you today?";

/// Decodes a request body regardless of the declared content type.
pub fn decode_request(body: &Bytes) -> Result<ChatRequest, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Full reply for the synchronous endpoint: the first message echoed back
/// with the fixed suffix appended.
pub fn assemble_completion(
    id: String,
    model: &str,
    req: &ChatRequest,
    counter: &dyn TokenCounter,
) -> Result<ChatResponse, ApiError> {
    let first = req.messages.first().ok_or(ApiError::EmptyMessages)?;
    let content = format!("{}{}", first.content, REPLY_SUFFIX);

    let usage = Usage::new(
        counter.count_prompt(&req.messages),
        counter.count_completion(&content),
    );

    Ok(ChatResponse {
        id,
        object: COMPLETION_OBJECT.to_owned(),
        created: Utc::now().timestamp(),
        model: model.to_owned(),
        usage,
        choices: vec![assistant_choice(content)],
    })
}

/// Opening frame of a stream: prompt usage only, no choices yet.
pub fn assemble_stream_head(
    id: String,
    model: &str,
    req: &ChatRequest,
    counter: &dyn TokenCounter,
) -> ChatResponse {
    ChatResponse {
        id,
        object: COMPLETION_OBJECT.to_owned(),
        created: Utc::now().timestamp(),
        model: model.to_owned(),
        usage: Usage::new(counter.count_prompt(&req.messages), 0),
        choices: vec![],
    }
}

/// Scripted fragment `part`. Every fragment reports index 0.
pub fn stream_fragment(part: usize) -> Choice {
    assistant_choice(format!("Streamed response part {}", part))
}

fn assistant_choice(content: String) -> Choice {
    Choice {
        message: ChatMessage {
            role: ASSISTANT_ROLE.to_owned(),
            content,
        },
        logprobs: None,
        finish_reason: FINISH_REASON.to_owned(),
        index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MessageCounter;

    fn request(contents: &[&str]) -> ChatRequest {
        ChatRequest {
            model: "whatever".into(),
            messages: contents
                .iter()
                .map(|c| ChatMessage {
                    role: "user".into(),
                    content: c.to_string(),
                })
                .collect(),
            temperature: 0.5,
            streaming: None,
        }
    }

    #[test]
    fn completion_echoes_first_message_with_suffix() {
        let req = request(&["Say hi. ", "ignored"]);
        let res =
            assemble_completion("id-1".into(), "gpt-3.5-turbo", &req, &MessageCounter::new(100))
                .unwrap();

        assert_eq!(res.id, "id-1");
        assert_eq!(res.object, COMPLETION_OBJECT);
        assert_eq!(res.model, "gpt-3.5-turbo");
        assert_eq!(res.choices.len(), 1);

        let choice = &res.choices[0];
        assert_eq!(choice.message.role, ASSISTANT_ROLE);
        assert_eq!(
            choice.message.content,
            "Say hi. Hello, how can I help you today?"
        );
        assert_eq!(choice.finish_reason, "stop");
        assert_eq!(choice.index, 0);
        assert!(choice.logprobs.is_none());
    }

    #[test]
    fn usage_counts_messages() {
        let req = request(&["a", "b", "c"]);
        let res = assemble_completion("id".into(), "m", &req, &MessageCounter::new(100)).unwrap();
        assert_eq!(res.usage, Usage::new(3, 100));
        assert_eq!(res.usage.total_tokens, 103);
    }

    #[test]
    fn empty_messages_is_a_validation_error() {
        let req = request(&[]);
        let err = assemble_completion("id".into(), "m", &req, &MessageCounter::new(100))
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyMessages));
    }

    #[test]
    fn stream_head_has_no_choices_and_no_completion_tokens() {
        let counter = MessageCounter::new(100);
        let head = assemble_stream_head("id".into(), "m", &request(&["hi"]), &counter);
        assert!(head.choices.is_empty());
        assert_eq!(head.usage, Usage::new(1, 0));

        let empty = assemble_stream_head("id".into(), "m", &request(&[]), &counter);
        assert_eq!(empty.usage.prompt_tokens, 0);
    }

    #[test]
    fn fragments_keep_index_zero() {
        for part in 0..10 {
            let fragment = stream_fragment(part);
            assert_eq!(fragment.index, 0);
            assert_eq!(fragment.finish_reason, "stop");
            assert_eq!(
                fragment.message.content,
                format!("Streamed response part {part}")
            );
        }
    }

    #[test]
    fn logprobs_serialize_as_null() {
        let value = serde_json::to_value(stream_fragment(0)).unwrap();
        assert!(value["logprobs"].is_null());
        assert!(value.as_object().unwrap().contains_key("logprobs"));
    }

    #[test]
    fn decode_tolerates_missing_optional_fields() {
        let body = Bytes::from_static(br#"{"messages":[{"role":"user","content":"hi"}]}"#);
        let req = decode_request(&body).unwrap();
        assert_eq!(req.model, "");
        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.streaming, None);
        assert_eq!(req.messages.len(), 1);
    }

    #[test]
    fn decode_treats_null_as_missing() {
        let body = Bytes::from_static(
            br#"{"model":null,"messages":[{"role":null,"content":null}],"temperature":null,"streaming":null}"#,
        );
        let req = decode_request(&body).unwrap();
        assert_eq!(req.model, "");
        assert_eq!(req.temperature, 0.0);
        assert_eq!(req.streaming, None);
        assert_eq!(req.messages, vec![ChatMessage::default()]);

        let body = Bytes::from_static(br#"{"messages":null}"#);
        assert!(decode_request(&body).unwrap().messages.is_empty());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let body = Bytes::from_static(b"{\"messages\": [");
        assert!(matches!(decode_request(&body), Err(ApiError::Decode(_))));
    }
}
