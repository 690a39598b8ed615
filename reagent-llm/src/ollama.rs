use futures::stream::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use reagent_core::{LlmRequest, LlmResponse, Message, ReagentError, Runnable, StreamEvent};

#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    http: Client,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Result<Self, ReagentError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|err| ReagentError::LlmProvider(err.to_string()))?;
        Ok(Self {
            base_url,
            model,
            http,
        })
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    stop: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

#[async_trait::async_trait]
impl Runnable<LlmRequest, LlmResponse> for OllamaClient {
    async fn invoke(&self, input: LlmRequest) -> Result<LlmResponse, ReagentError> {
        let LlmRequest {
            model,
            messages,
            stop,
        } = input;
        let model = if model.is_empty() {
            self.model.clone()
        } else {
            model
        };
        let options = if stop.is_empty() {
            None
        } else {
            Some(OllamaOptions { stop })
        };
        let request = OllamaChatRequest {
            model,
            messages,
            stream: false,
            options,
        };

        let url = format!("{}/api/chat", self.base_url);
        let response: OllamaChatResponse = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ReagentError::LlmProvider(err.to_string()))?
            .error_for_status()
            .map_err(|err| ReagentError::LlmProvider(err.to_string()))?
            .json()
            .await
            .map_err(|err| ReagentError::LlmProvider(err.to_string()))?;

        Ok(LlmResponse {
            content: response.message.content,
        })
    }

    fn stream(
        &self,
        input: LlmRequest,
    ) -> futures::stream::BoxStream<'_, Result<StreamEvent, ReagentError>> {
        futures::stream::once(async move {
            let response = self.invoke(input).await?;
            Ok(StreamEvent::FinalAnswer(response.content))
        })
        .boxed()
    }
}
