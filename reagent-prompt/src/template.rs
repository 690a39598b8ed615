use std::collections::HashMap;

use reagent_core::{ReagentError, Value};
use regex::Regex;

/// `{{var}}` substitution over a fixed template string.
///
/// Variables that are constant for a run (the rendered tool descriptions,
/// the tool-name list) can be bound up front with [`PromptTemplate::partial`];
/// per-iteration variables are supplied to [`PromptTemplate::render`], which
/// wins on collision. Unknown keys render as the empty string.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    partials: HashMap<String, Value>,
}

impl PromptTemplate {
    pub fn new(template: String) -> Self {
        Self {
            template,
            partials: HashMap::new(),
        }
    }

    pub fn partial(mut self, key: &str, value: Value) -> Self {
        self.partials.insert(key.to_string(), value);
        self
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> Result<String, ReagentError> {
        let pattern = Regex::new(r"\{\{\s*(\w+)\s*\}\}")
            .map_err(|e| ReagentError::InvalidConfig(e.to_string()))?;
        let rendered = pattern.replace_all(&self.template, |caps: &regex::Captures| {
            let key = &caps[1];
            match vars.get(key).or_else(|| self.partials.get(key)) {
                Some(value) => value
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| value.to_string()),
                None => "".to_string(),
            }
        });
        Ok(rendered.to_string())
    }
}
