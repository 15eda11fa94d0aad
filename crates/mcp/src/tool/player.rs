use std::{borrow::Cow, sync::Arc};

use rmcp::model::{CallToolResult, ToolAnnotations};
use schemars::{JsonSchema, Schema, SchemaGenerator};

use super::{
    Tool,
    schema::{self, LANGUAGE, Parameter, ParameterType},
    upstream_annotations,
};
use crate::{
    arguments::{FromArguments, Locale, ToolArguments},
    upstream::UpstreamClient,
};

pub(crate) struct PlayerTool {
    upstream: Arc<UpstreamClient>,
}

impl PlayerTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct PlayerParameters {
    id: String,
    locale: Locale,
}

impl FromArguments for PlayerParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            id: arguments.string("id").unwrap_or_default(),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for PlayerParameters {
    fn schema_name() -> Cow<'static, str> {
        "PlayerParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required("id", ParameterType::String, "Player ID (e.g. 474972)"),
            LANGUAGE,
        ])
    }
}

impl Tool for PlayerTool {
    type Parameters = PlayerParameters;

    fn name() -> &'static str {
        "get_player"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get detailed player information (stats, career) by player ID")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let file = format!("{}.json", parameters.id);
        let url = self.upstream.build_url(&["players", &file], &parameters.locale, &[]);

        let title = format!("Player info for ID {}", parameters.id);
        self.upstream.fetch(url, &title).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::PlayerTool;
    use crate::{
        tool::RmcpTool,
        upstream::tests::{echo_client, echoed, text},
    };

    #[tokio::test]
    async fn numeric_id_falls_back_to_empty() {
        let tool = PlayerTool::new(Arc::new(echo_client().await));
        let result = tool.call(json!({ "id": 474972 }).as_object().cloned()).await;

        assert_eq!(
            text(&result),
            echoed("Player info for ID ", "/footapi/players/.json?lang=en&version=2800")
        );
    }

    #[tokio::test]
    async fn missing_id_still_calls_upstream() {
        let tool = PlayerTool::new(Arc::new(echo_client().await));
        let result = tool.call(None).await;

        assert_eq!(
            text(&result),
            echoed("Player info for ID ", "/footapi/players/.json?lang=en&version=2800")
        );
    }
}
