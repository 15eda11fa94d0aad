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

/// Free-text search over teams, players and competitions.
pub(crate) struct SearchTool {
    upstream: Arc<UpstreamClient>,
}

impl SearchTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct SearchParameters {
    q: String,
    country: Option<String>,
    locale: Locale,
}

impl FromArguments for SearchParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            q: arguments.string("q").unwrap_or_default(),
            country: arguments.string("country"),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for SearchParameters {
    fn schema_name() -> Cow<'static, str> {
        "SearchParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required(
                "q",
                ParameterType::String,
                "Search term (team, player, or competition name)",
            ),
            LANGUAGE,
            Parameter::optional(
                "country",
                ParameterType::String,
                "Country filter (e.g. Netherlands, England)",
            ),
        ])
    }
}

impl Tool for SearchTool {
    type Parameters = SearchParameters;

    fn name() -> &'static str {
        "search"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Search for teams, players, or competitions by name")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let SearchParameters { q, country, locale } = parameters;

        let mut extra = vec![("q", q.clone())];

        // An empty country was already read as absent.
        if let Some(country) = country {
            extra.push(("country", country));
        }

        let url = self.upstream.build_url(&["search_v3"], &locale, &extra);

        self.upstream.fetch(url, &format!("Search results for '{q}'")).await
    }
}
