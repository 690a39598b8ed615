use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Value;

/// A parsed request to invoke one tool. `log` keeps the raw model text the
/// action was parsed from so the scratchpad can replay it verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentAction {
    pub tool: String,
    pub tool_input: String,
    pub log: String,
}

/// The terminal decision: named output values plus the raw model text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentFinish {
    pub return_values: HashMap<String, Value>,
    pub log: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum AgentStep {
    Action(AgentAction),
    Finish(AgentFinish),
}

impl AgentStep {
    pub fn log(&self) -> &str {
        match self {
            AgentStep::Action(action) => &action.log,
            AgentStep::Finish(finish) => &finish.log,
        }
    }
}

/// Renders the accumulated (action, observation) pairs into the text the
/// model sees after `Thought:` on the next iteration. Entries are appended
/// in full; there is no truncation or windowing.
pub fn format_scratchpad(steps: &[(AgentAction, String)]) -> String {
    let mut thoughts = String::new();
    for (action, observation) in steps {
        thoughts.push_str(&action.log);
        thoughts.push_str("\nObservation: ");
        thoughts.push_str(observation);
        thoughts.push_str("\nThought: ");
    }
    thoughts
}
