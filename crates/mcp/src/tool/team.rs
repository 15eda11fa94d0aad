//! Team details and the team logo check.

use std::{borrow::Cow, sync::Arc};

use rmcp::model::{CallToolResult, Content, ToolAnnotations};
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

pub(crate) struct TeamTool {
    upstream: Arc<UpstreamClient>,
}

impl TeamTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct TeamParameters {
    id: String,
    locale: Locale,
}

impl FromArguments for TeamParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            id: arguments.string("id").unwrap_or_default(),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for TeamParameters {
    fn schema_name() -> Cow<'static, str> {
        "TeamParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required(
                "id",
                ParameterType::String,
                "Team ID from search results (e.g. 13183 for Ajax)",
            ),
            LANGUAGE,
        ])
    }
}

impl Tool for TeamTool {
    type Parameters = TeamParameters;

    fn name() -> &'static str {
        "get_team"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get detailed team information (squad, stats) by team ID")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let file = format!("{}.json", parameters.id);
        let url = self.upstream.build_url(&["team_gs", &file], &parameters.locale, &[]);

        let title = format!("Team info for ID {}", parameters.id);
        self.upstream.fetch(url, &title).await
    }
}

/// Confirms a team logo exists and hands back its URL. The image itself is never downloaded.
pub(crate) struct TeamImageTool {
    upstream: Arc<UpstreamClient>,
}

impl TeamImageTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct TeamImageParameters {
    id: String,
}

impl FromArguments for TeamImageParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            id: arguments.string("id").unwrap_or_default(),
        }
    }
}

impl JsonSchema for TeamImageParameters {
    fn schema_name() -> Cow<'static, str> {
        "TeamImageParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[Parameter::required("id", ParameterType::String, "Team ID")])
    }
}

impl Tool for TeamImageTool {
    type Parameters = TeamImageParameters;

    fn name() -> &'static str {
        "get_team_image"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get team logo PNG URL by team ID")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let TeamImageParameters { id } = parameters;

        let file = format!("{id}.png");
        let url = self.upstream.join(&["images", "teams_gs", &file]);

        log::debug!("Checking team logo at {url}");

        match self.upstream.head(url.clone()).await {
            Ok(status) if status.is_success() => {
                CallToolResult::success(vec![Content::text(format!("Team logo URL for ID {id}:\n{url}"))])
            }
            Ok(status) => CallToolResult::error(vec![Content::text(format!(
                "image not available (status {}) for team ID {id}",
                status.as_u16()
            ))]),
            Err(error) => {
                log::warn!("Team logo check for ID {id} failed: {error}");
                CallToolResult::error(vec![Content::text(format!("error checking image: {error}"))])
            }
        }
    }
}
