use std::borrow::Cow;

use rmcp::model::{CallToolResult, Content, ToolAnnotations};
use schemars::{JsonSchema, Schema, SchemaGenerator};

use super::{
    Tool,
    schema::{self, Parameter, ParameterType},
};
use crate::arguments::{FromArguments, ToolArguments};

/// Connectivity probe: echoes its message back without touching the network.
pub(crate) struct HealthTool;

#[derive(Debug)]
pub(crate) struct HealthParameters {
    message: String,
}

impl FromArguments for HealthParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            message: arguments.string("message").unwrap_or_else(|| "ok".to_string()),
        }
    }
}

impl JsonSchema for HealthParameters {
    fn schema_name() -> Cow<'static, str> {
        "HealthParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[Parameter::required("message", ParameterType::String, "Message to echo")])
    }
}

impl Tool for HealthTool {
    type Parameters = HealthParameters;

    fn name() -> &'static str {
        "health"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Health check - echo back a message")
    }

    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations::new()
            .read_only(true)
            .destructive(false)
            .idempotent(true)
            .open_world(false)
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        CallToolResult::success(vec![Content::text(format!("Echo: {}", parameters.message))])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::HealthTool;
    use crate::{tool::RmcpTool, upstream::tests::text};

    #[tokio::test]
    async fn echoes_the_message() {
        let arguments = json!({ "message": "ping" }).as_object().cloned();
        let result = RmcpTool::call(&HealthTool, arguments).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(text(&result), "Echo: ping");
    }

    #[tokio::test]
    async fn missing_message_echoes_ok() {
        let result = RmcpTool::call(&HealthTool, None).await;
        assert_eq!(text(&result), "Echo: ok");
    }

    #[test]
    fn definition() {
        let tool = HealthTool.to_tool();

        assert_eq!(tool.name, "health");
        assert_eq!(tool.input_schema["required"], json!(["message"]));
        assert_eq!(tool.annotations.and_then(|a| a.open_world_hint), Some(false));
    }
}
