use reagent_core::ReagentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no tool registered under '{0}'")]
    ToolNotFound(String),
}

impl From<AgentError> for ReagentError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::ToolNotFound(name) => ReagentError::ToolCallFailed {
                tool_name: name,
                reason: "not found".to_string(),
            },
        }
    }
}
