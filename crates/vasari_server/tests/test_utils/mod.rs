//! Scripted completion backend for exercising the HTTP surface.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use vasari_client::{
    ChatCompletionRequest, ChatCompletionResponse, Choice, ChoiceMessage, CompletionBackend,
};
use vasari_error::{ClientError, ClientErrorKind};

/// Backend that replays a queue of canned outcomes, one per call.
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, String>>>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    pub fn replying(contents: &[String]) -> Self {
        Self::new(contents.iter().map(|c| Ok(c.clone())).collect())
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(
        &self,
        _request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ClientError> {
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted backend ran out of responses");
        match next {
            Ok(content) => Ok(ChatCompletionResponse {
                id: "scripted".to_string(),
                object: "chat.completion".to_string(),
                created: 0,
                model: "scripted".to_string(),
                choices: vec![Choice {
                    index: 0,
                    message: ChoiceMessage {
                        role: "assistant".to_string(),
                        content,
                    },
                    finish_reason: "stop".to_string(),
                }],
                usage: None,
            }),
            Err(message) => Err(ClientError::new(ClientErrorKind::Http(message))),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
