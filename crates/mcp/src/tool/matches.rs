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

/// Match details, with head-to-head history unless asked not to.
pub(crate) struct MatchTool {
    upstream: Arc<UpstreamClient>,
}

impl MatchTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct MatchParameters {
    id: String,
    h2h: i64,
    locale: Locale,
}

impl FromArguments for MatchParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            id: arguments.string("id").unwrap_or_default(),
            h2h: arguments.number("h2h").unwrap_or(1),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for MatchParameters {
    fn schema_name() -> Cow<'static, str> {
        "MatchParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required("id", ParameterType::String, "Match ID from live scores or fixtures"),
            LANGUAGE,
            Parameter::optional(
                "h2h",
                ParameterType::Number,
                "Include head-to-head data: 1=yes, 0=no. Default: 1",
            ),
        ])
    }
}

impl Tool for MatchTool {
    type Parameters = MatchParameters;

    fn name() -> &'static str {
        "get_match"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get detailed match information (events, lineups, stats) with optional head-to-head data")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let file = format!("{}.json", parameters.id);
        let extra = [("h2h", parameters.h2h.to_string())];
        let url = self.upstream.build_url(&["matches", &file], &parameters.locale, &extra);

        let title = format!("Match info for ID {}", parameters.id);
        self.upstream.fetch(url, &title).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::MatchTool;
    use crate::{
        tool::RmcpTool,
        upstream::tests::{echo_client, echoed, text},
    };

    #[tokio::test]
    async fn head_to_head_by_default() {
        let tool = MatchTool::new(Arc::new(echo_client().await));
        let result = tool.call(json!({ "id": "4321" }).as_object().cloned()).await;

        assert_eq!(
            text(&result),
            echoed(
                "Match info for ID 4321",
                "/footapi/matches/4321.json?h2h=1&lang=en&version=2800"
            )
        );
    }

    #[tokio::test]
    async fn head_to_head_can_be_disabled() {
        let tool = MatchTool::new(Arc::new(echo_client().await));
        let result = tool.call(json!({ "id": "4321", "h2h": 0 }).as_object().cloned()).await;

        assert_eq!(
            text(&result),
            echoed(
                "Match info for ID 4321",
                "/footapi/matches/4321.json?h2h=0&lang=en&version=2800"
            )
        );
    }

    #[tokio::test]
    async fn string_h2h_uses_the_default() {
        let tool = MatchTool::new(Arc::new(echo_client().await));
        let result = tool.call(json!({ "id": "4321", "h2h": "0" }).as_object().cloned()).await;

        assert_eq!(
            text(&result),
            echoed(
                "Match info for ID 4321",
                "/footapi/matches/4321.json?h2h=1&lang=en&version=2800"
            )
        );
    }
}
