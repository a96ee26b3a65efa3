use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompletionConfig;

/// Text-completion capability. Production code talks to an OpenAI-style
/// chat-completions endpoint; tests substitute a deterministic fake.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Runs one prompt through the provider and returns the first
    /// completion's text, or `None` if the provider returned no content.
    async fn complete(&self, prompt: &str) -> anyhow::Result<Option<String>>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// First choice's message content, if any.
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
    }
}

#[derive(Clone)]
pub struct OpenAiCompletions {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompletions {
    pub fn new(config: &CompletionConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("build completion http client")?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletions {
    async fn complete(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("completion request")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            anyhow::bail!("completion provider returned {status}: {detail}");
        }

        let parsed: ChatResponse = response.json().await.context("completion response body")?;
        debug!(model = %self.model, "completion call succeeded");
        Ok(parsed.text())
    }
}
