mod ollama;

pub use ollama::OllamaClient;
pub use reagent_core::{LlmRequest, LlmResponse, Message, Role};

use reagent_core::Runnable;

pub trait Llm: Runnable<LlmRequest, LlmResponse> {}

impl<T> Llm for T where T: Runnable<LlmRequest, LlmResponse> {}
