mod fixtures;
mod health;
mod matches;
mod player;
mod schema;
mod search;
mod team;

pub(crate) use fixtures::{DayFixturesTool, FixturesTool, LeagueFixturesTool, LiveScoresTool};
pub(crate) use health::HealthTool;
pub(crate) use matches::MatchTool;
pub(crate) use player::PlayerTool;
pub(crate) use search::SearchTool;
pub(crate) use team::{TeamImageTool, TeamTool};

use std::borrow::Cow;

use futures_util::future::BoxFuture;
use rmcp::model::{CallToolResult, JsonObject, ToolAnnotations};
use schemars::{JsonSchema, SchemaGenerator};
use serde_json::Value;

use crate::arguments::{FromArguments, ToolArguments};

pub(crate) trait Tool: Send + Sync + 'static {
    type Parameters: FromArguments + JsonSchema + Send;

    fn name() -> &'static str;
    fn description(&self) -> Cow<'_, str>;
    fn annotations(&self) -> ToolAnnotations;

    /// Run the tool. Failures are reported inside the result, never as a protocol error.
    fn call(&self, parameters: Self::Parameters) -> impl Future<Output = CallToolResult> + Send;
}

pub(crate) trait RmcpTool: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn to_tool(&self) -> rmcp::model::Tool;
    fn call(&self, arguments: Option<JsonObject>) -> BoxFuture<'_, CallToolResult>;
}

impl<T: Tool> RmcpTool for T {
    fn name(&self) -> &str {
        T::name()
    }

    fn to_tool(&self) -> rmcp::model::Tool {
        let schema = T::Parameters::json_schema(&mut SchemaGenerator::default());

        let Value::Object(schema) = schema.to_value() else {
            unreachable!()
        };

        rmcp::model::Tool::new(self.name().to_string(), self.description().into_owned(), schema)
            .annotate(self.annotations())
    }

    fn call(&self, arguments: Option<JsonObject>) -> BoxFuture<'_, CallToolResult> {
        let parameters = T::Parameters::from_arguments(&ToolArguments::new(arguments));

        Box::pin(Tool::call(self, parameters))
    }
}

/// Annotations shared by every tool reading from the football-data API.
fn upstream_annotations() -> ToolAnnotations {
    ToolAnnotations::new()
        .read_only(true)
        .destructive(false)
        .idempotent(true)
        .open_world(true)
}
