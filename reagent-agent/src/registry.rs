use std::sync::Arc;

use reagent_core::Tool;

use crate::AgentError;

struct RegistryEntry {
    name: String,
    description: String,
    tool: Arc<dyn Tool>,
}

/// Ordered collection of the tools the model may request.
///
/// Entries keep their own copy of the tool's name: lookup mutates that copy
/// when it contains a parenthesis (see [`ToolRegistry::lookup`]), so the
/// name rendered into later prompts is the registry's, not the tool's.
pub struct ToolRegistry {
    entries: Vec<RegistryEntry>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.entries.push(RegistryEntry {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            tool,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// One `name: description` line per tool, in registration order. This is
    /// the text embedded into the prompt under `{{tools}}`.
    pub fn render_descriptions(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Finds a tool by exact name match, scanning in registration order.
    ///
    /// Quirk: when the matched entry's stored name contains `(`, the name is
    /// truncated at the parenthesis in place before the tool is returned.
    /// The entry is shared with every later lookup, so a second lookup under
    /// the full name fails.
    pub fn lookup(&mut self, name: &str) -> Result<Arc<dyn Tool>, AgentError> {
        for entry in &mut self.entries {
            if entry.name == name {
                if let Some(idx) = entry.name.find('(') {
                    entry.name.truncate(idx);
                }
                return Ok(Arc::clone(&entry.tool));
            }
        }
        Err(AgentError::ToolNotFound(name.to_string()))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
