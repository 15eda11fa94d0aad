//! Live scores and fixture listings.

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

pub(crate) struct LiveScoresTool {
    upstream: Arc<UpstreamClient>,
}

impl LiveScoresTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct LiveScoresParameters {
    locale: Locale,
}

impl FromArguments for LiveScoresParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for LiveScoresParameters {
    fn schema_name() -> Cow<'static, str> {
        "LiveScoresParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[LANGUAGE])
    }
}

impl Tool for LiveScoresTool {
    type Parameters = LiveScoresParameters;

    fn name() -> &'static str {
        "get_live_scores"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get currently live football matches and scores. All timestamps are GMT/UTC.")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let url = self
            .upstream
            .build_url(&["fixtures", "feed_livenow.json"], &parameters.locale, &[]);

        self.upstream.fetch(url, "Live Scores").await
    }
}

pub(crate) struct FixturesTool {
    upstream: Arc<UpstreamClient>,
}

impl FixturesTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct FixturesParameters {
    competition: String,
    locale: Locale,
}

impl FromArguments for FixturesParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            competition: arguments.string("competition").unwrap_or_default(),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for FixturesParameters {
    fn schema_name() -> Cow<'static, str> {
        "FixturesParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required("competition", ParameterType::String, "Competition identifier"),
            LANGUAGE,
        ])
    }
}

impl Tool for FixturesTool {
    type Parameters = FixturesParameters;

    fn name() -> &'static str {
        "get_fixtures"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed(
            "Get fixtures for a specific competition (e.g. EurocupsUEFAChampionsLeague_small). All timestamps are GMT/UTC.",
        )
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let file = format!("{}.json", parameters.competition);
        let url = self.upstream.build_url(&["fixtures_v2", &file], &parameters.locale, &[]);

        let title = format!("Fixtures for {}", parameters.competition);
        self.upstream.fetch(url, &title).await
    }
}

pub(crate) struct LeagueFixturesTool {
    upstream: Arc<UpstreamClient>,
}

impl LeagueFixturesTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct LeagueFixturesParameters {
    league_key: String,
    locale: Locale,
}

impl FromArguments for LeagueFixturesParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            league_key: arguments.string("league_key").unwrap_or_default(),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for LeagueFixturesParameters {
    fn schema_name() -> Cow<'static, str> {
        "LeagueFixturesParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required("league_key", ParameterType::String, "League key from search results"),
            LANGUAGE,
        ])
    }
}

impl Tool for LeagueFixturesTool {
    type Parameters = LeagueFixturesParameters;

    fn name() -> &'static str {
        "get_league_fixtures"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get fixtures for a specific league (e.g. NetherlandsEredivisie). All timestamps are GMT/UTC.")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let file = format!("{}_small.json", parameters.league_key);
        let url = self.upstream.build_url(&["fixtures_v2", &file], &parameters.locale, &[]);

        let title = format!("League fixtures for {}", parameters.league_key);
        self.upstream.fetch(url, &title).await
    }
}

pub(crate) struct DayFixturesTool {
    upstream: Arc<UpstreamClient>,
}

impl DayFixturesTool {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[derive(Debug)]
pub(crate) struct DayFixturesParameters {
    date: String,
    /// Minutes east of UTC.
    tzoffset: i64,
    locale: Locale,
}

impl FromArguments for DayFixturesParameters {
    fn from_arguments(arguments: &ToolArguments) -> Self {
        Self {
            date: arguments.string("date").unwrap_or_default(),
            tzoffset: arguments.number("tzoffset").unwrap_or(0),
            locale: Locale::from_arguments(arguments),
        }
    }
}

impl JsonSchema for DayFixturesParameters {
    fn schema_name() -> Cow<'static, str> {
        "DayFixturesParameters".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        schema::object(&[
            Parameter::required(
                "date",
                ParameterType::String,
                "Date in DD/MM/YYYY format (e.g. 30/08/2025)",
            ),
            LANGUAGE,
            Parameter::optional(
                "tzoffset",
                ParameterType::Number,
                "Timezone offset in minutes (e.g. 120 for UTC+2). Default: 0",
            ),
        ])
    }
}

impl Tool for DayFixturesTool {
    type Parameters = DayFixturesParameters;

    fn name() -> &'static str {
        "get_day_fixtures"
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Get all fixtures for a specific date. All timestamps are GMT/UTC.")
    }

    fn annotations(&self) -> ToolAnnotations {
        upstream_annotations()
    }

    async fn call(&self, parameters: Self::Parameters) -> CallToolResult {
        let extra = [
            ("date", parameters.date.clone()),
            ("tzoffset", parameters.tzoffset.to_string()),
        ];

        let url = self.upstream.build_url(
            &["fixtures", "feed_matches_aggregated.json"],
            &parameters.locale,
            &extra,
        );

        let title = format!("Fixtures for {}", parameters.date);
        self.upstream.fetch(url, &title).await
    }
}
