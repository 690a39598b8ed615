use std::sync::Arc;

use async_trait::async_trait;

use crate::{AgentFinish, AgentStep, Value};

/// LLM call parameters captured at start time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LlmInput {
    pub model: String,
    /// Rendered prompt (after template expansion), not the template itself
    pub prompt: String,
    pub stop_sequences: Vec<String>,
}

/// LLM call results captured at end time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LlmResult {
    pub completion: String,
}

#[async_trait]
pub trait CallbackHandler: Send + Sync {
    async fn on_llm_start(&self, _input: &LlmInput) {}
    async fn on_llm_end(&self, _result: &LlmResult) {}
    async fn on_tool_start(&self, _name: &str, _input: &str) {}
    async fn on_tool_end(&self, _name: &str, _output: &Value) {}
    async fn on_agent_step(&self, _step: &AgentStep) {}
    async fn on_agent_finish(&self, _finish: &AgentFinish) {}
}

#[derive(Clone, Default)]
pub struct CallbackManager {
    handlers: Vec<Arc<dyn CallbackHandler>>,
}

impl std::fmt::Debug for CallbackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackManager")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl CallbackManager {
    pub fn new(handlers: Vec<Arc<dyn CallbackHandler>>) -> Self {
        Self { handlers }
    }

    pub fn noop() -> Self {
        Self { handlers: vec![] }
    }

    pub fn is_noop(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn on_llm_start(&self, input: &LlmInput) {
        for handler in &self.handlers {
            handler.on_llm_start(input).await;
        }
    }

    pub async fn on_llm_end(&self, result: &LlmResult) {
        for handler in &self.handlers {
            handler.on_llm_end(result).await;
        }
    }

    pub async fn on_tool_start(&self, name: &str, input: &str) {
        for handler in &self.handlers {
            handler.on_tool_start(name, input).await;
        }
    }

    pub async fn on_tool_end(&self, name: &str, output: &Value) {
        for handler in &self.handlers {
            handler.on_tool_end(name, output).await;
        }
    }

    pub async fn on_agent_step(&self, step: &AgentStep) {
        for handler in &self.handlers {
            handler.on_agent_step(step).await;
        }
    }

    pub async fn on_agent_finish(&self, finish: &AgentFinish) {
        for handler in &self.handlers {
            handler.on_agent_finish(finish).await;
        }
    }
}
