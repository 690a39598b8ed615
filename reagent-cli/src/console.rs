use async_trait::async_trait;
use reagent_core::{AgentFinish, AgentStep, CallbackHandler, LlmInput, LlmResult, Value};

/// Prints the agent's full trace to stdout: every rendered prompt, every
/// raw completion, every parsed step, and every tool observation.
pub struct ConsoleCallbackHandler;

#[async_trait]
impl CallbackHandler for ConsoleCallbackHandler {
    async fn on_llm_start(&self, input: &LlmInput) {
        println!("*** Prompt to LLM ({}): ***", input.model);
        println!("{}", input.prompt);
    }

    async fn on_llm_end(&self, result: &LlmResult) {
        println!("*** LLM response: ***");
        println!("{}", result.completion);
    }

    async fn on_tool_start(&self, name: &str, input: &str) {
        println!("> invoking {name} with input {input:?}");
    }

    async fn on_tool_end(&self, name: &str, output: &Value) {
        println!("> {name} observation: {output}");
    }

    async fn on_agent_step(&self, step: &AgentStep) {
        println!("{step:?}");
    }

    async fn on_agent_finish(&self, finish: &AgentFinish) {
        println!("*** Final answer reached ***");
        println!("{:?}", finish.return_values);
    }
}
