mod callbacks;
mod chain;
mod error;
mod llm;
mod output_parsers;
mod react;
mod runnable;
mod tool;

pub use callbacks::{CallbackHandler, CallbackManager, LlmInput, LlmResult};
pub use chain::{Chain, RunnableExt};
pub use error::ReagentError;
pub use llm::{LlmRequest, LlmResponse, Message, Role};
pub use output_parsers::ReActOutputParser;
pub use react::{format_scratchpad, AgentAction, AgentFinish, AgentStep};
pub use runnable::{Runnable, StreamEvent};
pub use tool::{Tool, ToolError};

pub type Value = serde_json::Value;
