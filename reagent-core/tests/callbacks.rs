use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reagent_core::{
    AgentFinish, AgentStep, CallbackHandler, CallbackManager, LlmInput, LlmResult, Value,
};

#[derive(Default)]
struct CountingHandler {
    llm_starts: AtomicUsize,
    llm_ends: AtomicUsize,
    tool_ends: AtomicUsize,
    finishes: AtomicUsize,
}

#[async_trait]
impl CallbackHandler for CountingHandler {
    async fn on_llm_start(&self, _input: &LlmInput) {
        self.llm_starts.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_llm_end(&self, _result: &LlmResult) {
        self.llm_ends.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_tool_end(&self, _name: &str, _output: &Value) {
        self.tool_ends.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_agent_finish(&self, _finish: &AgentFinish) {
        self.finishes.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn manager_fans_out_to_all_handlers() {
    let first = Arc::new(CountingHandler::default());
    let second = Arc::new(CountingHandler::default());
    let manager = CallbackManager::new(vec![first.clone(), second.clone()]);

    let input = LlmInput {
        model: "mistral".to_string(),
        prompt: "Question: hi".to_string(),
        stop_sequences: vec!["Observation".to_string()],
    };
    manager.on_llm_start(&input).await;
    manager
        .on_llm_end(&LlmResult {
            completion: "Final Answer: hi".to_string(),
        })
        .await;
    manager
        .on_tool_end("text_length", &Value::from(3))
        .await;

    assert_eq!(first.llm_starts.load(Ordering::SeqCst), 1);
    assert_eq!(second.llm_starts.load(Ordering::SeqCst), 1);
    assert_eq!(first.llm_ends.load(Ordering::SeqCst), 1);
    assert_eq!(first.tool_ends.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn default_handler_methods_are_noops() {
    struct Silent;

    #[async_trait]
    impl CallbackHandler for Silent {}

    let manager = CallbackManager::new(vec![Arc::new(Silent)]);
    assert!(!manager.is_noop());

    let finish = AgentFinish {
        return_values: Default::default(),
        log: String::new(),
    };
    manager.on_agent_finish(&finish).await;
    manager
        .on_agent_step(&AgentStep::Finish(finish.clone()))
        .await;
}

#[test]
fn noop_manager_reports_empty() {
    assert!(CallbackManager::noop().is_noop());
}
