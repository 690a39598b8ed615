use std::collections::HashMap;

use reagent_core::{
    format_scratchpad, AgentAction, AgentStep, CallbackManager, LlmInput, LlmRequest, LlmResult,
    Message, ReagentError, Role, Runnable, Value,
};
use reagent_prompt::PromptTemplate;

use crate::ToolRegistry;

/// The ReAct control loop.
///
/// Each iteration renders the prompt with the question and the scratchpad,
/// runs the model pipeline (LLM chained with the output parser), and either
/// returns the finish record's values or dispatches the requested tool and
/// appends its observation. The loop exits exactly when the parsed output is
/// a finish decision; every failure propagates as an error instead.
pub struct AgentExecutor<P> {
    pipeline: P,
    prompt: PromptTemplate,
    tools: ToolRegistry,
    model: String,
    stop: Vec<String>,
    callbacks: CallbackManager,
}

impl<P> AgentExecutor<P>
where
    P: Runnable<LlmRequest, AgentStep> + Send + Sync,
{
    pub fn new(pipeline: P, prompt: PromptTemplate, tools: ToolRegistry, model: String) -> Self {
        Self {
            pipeline,
            prompt,
            tools,
            model,
            stop: Vec::new(),
            callbacks: CallbackManager::noop(),
        }
    }

    pub fn stop_sequences(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }

    pub fn callbacks(mut self, callbacks: CallbackManager) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub async fn run(&mut self, input: &str) -> Result<HashMap<String, Value>, ReagentError> {
        let mut scratchpad: Vec<(AgentAction, String)> = Vec::new();

        loop {
            let mut vars = HashMap::new();
            vars.insert("input".to_string(), Value::String(input.to_string()));
            vars.insert(
                "agent_scratchpad".to_string(),
                Value::String(format_scratchpad(&scratchpad)),
            );
            let rendered = self.prompt.render(&vars)?;

            self.callbacks
                .on_llm_start(&LlmInput {
                    model: self.model.clone(),
                    prompt: rendered.clone(),
                    stop_sequences: self.stop.clone(),
                })
                .await;

            let step = self
                .pipeline
                .invoke(LlmRequest {
                    model: self.model.clone(),
                    messages: vec![Message {
                        role: Role::User,
                        content: rendered,
                    }],
                    stop: self.stop.clone(),
                })
                .await?;

            self.callbacks
                .on_llm_end(&LlmResult {
                    completion: step.log().to_string(),
                })
                .await;
            self.callbacks.on_agent_step(&step).await;

            match step {
                AgentStep::Finish(finish) => {
                    tracing::debug!(steps = scratchpad.len(), "agent finished");
                    self.callbacks.on_agent_finish(&finish).await;
                    return Ok(finish.return_values);
                }
                AgentStep::Action(action) => {
                    tracing::debug!(tool = %action.tool, "agent requested tool");
                    let tool = self.tools.lookup(&action.tool)?;
                    self.callbacks
                        .on_tool_start(&action.tool, &action.tool_input)
                        .await;
                    let observation = tool
                        .invoke(Value::String(action.tool_input.clone()))
                        .await
                        .map_err(|err| ReagentError::ToolCallFailed {
                            tool_name: action.tool.clone(),
                            reason: err.to_string(),
                        })?;
                    self.callbacks.on_tool_end(&action.tool, &observation).await;
                    scratchpad.push((action, observation_text(observation)));
                }
            }
        }
    }
}

// Observations render into the prompt the way the model expects to read
// them: bare text for strings, JSON otherwise.
fn observation_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
