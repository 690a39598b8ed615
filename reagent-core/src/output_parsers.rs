use std::collections::HashMap;
use std::sync::OnceLock;

use futures::stream::{self, BoxStream, StreamExt};
use regex::Regex;

use crate::{
    AgentAction, AgentFinish, AgentStep, LlmResponse, ReagentError, Runnable, StreamEvent, Value,
};

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

fn action_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)Action\s*\d*\s*:\s*(.*?)\s*Action\s*\d*\s*Input\s*\d*\s*:\s*(.*)")
            .expect("action regex is valid")
    })
}

fn action_head_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Action\s*\d*\s*:").expect("action head regex is valid"))
}

/// Classifies a raw ReAct completion as either a tool invocation or a final
/// answer.
///
/// The model is expected to emit either an `Action:` / `Action Input:` pair
/// or a `Final Answer:` line; anything else (or both at once) is a parse
/// failure carrying the offending output.
#[derive(Clone, Debug, Default)]
pub struct ReActOutputParser;

impl ReActOutputParser {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, text: &str) -> Result<AgentStep, ReagentError> {
        let includes_answer = text.contains(FINAL_ANSWER_MARKER);
        let action_match = action_regex().captures(text);

        if let Some(caps) = action_match {
            if includes_answer {
                return Err(ReagentError::ParseFailed {
                    output: text.to_string(),
                    reason: "output contained both a final answer and a parse-able action"
                        .to_string(),
                });
            }
            let tool = caps[1].trim().to_string();
            let tool_input = caps[2].trim_matches(' ').trim_matches('"').to_string();
            return Ok(AgentStep::Action(AgentAction {
                tool,
                tool_input,
                log: text.to_string(),
            }));
        }

        if includes_answer {
            let answer = text
                .rsplit(FINAL_ANSWER_MARKER)
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            let mut return_values = HashMap::new();
            return_values.insert("output".to_string(), Value::String(answer));
            return Ok(AgentStep::Finish(AgentFinish {
                return_values,
                log: text.to_string(),
            }));
        }

        let reason = if action_head_regex().is_match(text) {
            "missing 'Action Input:' after 'Action:'"
        } else {
            "missing 'Action:' after 'Thought:'"
        };
        Err(ReagentError::ParseFailed {
            output: text.to_string(),
            reason: reason.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Runnable<String, AgentStep> for ReActOutputParser {
    async fn invoke(&self, input: String) -> Result<AgentStep, ReagentError> {
        self.parse(&input)
    }

    fn stream(&self, input: String) -> BoxStream<'_, Result<StreamEvent, ReagentError>> {
        stream::once(async move {
            let step = self.parse(&input)?;
            Ok(StreamEvent::FinalAnswer(step.log().to_string()))
        })
        .boxed()
    }
}

#[async_trait::async_trait]
impl Runnable<LlmResponse, AgentStep> for ReActOutputParser {
    async fn invoke(&self, input: LlmResponse) -> Result<AgentStep, ReagentError> {
        self.parse(&input.content)
    }

    fn stream(&self, input: LlmResponse) -> BoxStream<'_, Result<StreamEvent, ReagentError>> {
        Runnable::<String, AgentStep>::stream(self, input.content)
    }
}
