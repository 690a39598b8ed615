use async_trait::async_trait;
use reagent_core::{Tool, ToolError, Value};

/// The one tool the demo exposes: character count of a string.
///
/// Inputs arrive exactly as the model wrote them after `Action Input:`, so
/// leading/trailing newlines and surrounding double quotes are stripped
/// before counting. Non-string inputs are coerced through their JSON text.
pub struct TextLength;

#[async_trait]
impl Tool for TextLength {
    fn name(&self) -> &str {
        "text_length"
    }

    fn description(&self) -> &str {
        "Calculate length of the string by characters."
    }

    async fn invoke(&self, input: Value) -> Result<Value, ToolError> {
        let text = match input {
            Value::String(text) => text,
            other => other.to_string(),
        };
        let stripped = text.trim_matches('\n').trim_matches('"');
        Ok(Value::from(stripped.chars().count()))
    }
}
