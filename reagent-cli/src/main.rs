mod config;
mod console;
mod tools;

use std::sync::Arc;

use reagent_agent::{AgentExecutor, ToolRegistry};
use reagent_core::{CallbackManager, ReActOutputParser, ReagentError, RunnableExt, Value};
use reagent_llm::OllamaClient;
use reagent_prompt::PromptTemplate;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::console::ConsoleCallbackHandler;
use crate::tools::TextLength;

const REACT_TEMPLATE: &str = "\
Answer the following questions as best you can. You have access to the following tools:

{{tools}}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{{tool_names}}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {{input}}
Thought: {{agent_scratchpad}}
";

const QUESTION: &str = "What is the length of the word: DOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ReagentError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CliConfig::from_env();
    tracing::debug!(base_url = %config.base_url, model = %config.model, "configured");

    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(TextLength));

    let prompt = PromptTemplate::new(REACT_TEMPLATE.to_string())
        .partial("tools", Value::String(tools.render_descriptions()))
        .partial("tool_names", Value::String(tools.names().join(", ")));

    let llm = OllamaClient::new(config.base_url, config.model.clone())?;
    let pipeline = llm.then(ReActOutputParser::new());

    let mut agent = AgentExecutor::new(pipeline, prompt, tools, config.model)
        .stop_sequences(vec!["\nObservation".to_string(), "Observation".to_string()])
        .callbacks(CallbackManager::new(vec![Arc::new(
            ConsoleCallbackHandler,
        )]));

    let outputs = agent.run(QUESTION).await?;
    for (key, value) in &outputs {
        println!("{key}: {value}");
    }

    Ok(())
}
