use std::{ops::Deref, sync::Arc};

use config::UpstreamConfig;
use indoc::indoc;
use rmcp::{
    RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorCode, ErrorData, Implementation, ListResourcesResult,
        ListToolsResult, PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use crate::{
    resource,
    tool::{
        DayFixturesTool, FixturesTool, HealthTool, LeagueFixturesTool, LiveScoresTool, MatchTool, PlayerTool,
        RmcpTool, SearchTool, TeamImageTool, TeamTool,
    },
    upstream::UpstreamClient,
};

#[derive(Clone)]
pub(crate) struct McpServer(Arc<McpServerInner>);

pub(crate) struct McpServerInner {
    info: ServerInfo,
    tools: Vec<Box<dyn RmcpTool>>,
}

impl Deref for McpServer {
    type Target = McpServerInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl McpServer {
    pub(crate) fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let upstream = Arc::new(UpstreamClient::new(config)?);

        let server_info = Implementation {
            name: crate::SERVER_NAME.to_string(),
            version: crate::SERVER_VERSION.to_string(),
        };

        let inner = McpServerInner {
            info: ServerInfo {
                protocol_version: ProtocolVersion::V_2024_11_05,
                capabilities: ServerCapabilities::builder().enable_tools().enable_resources().build(),
                server_info,
                instructions: Some(INSTRUCTIONS.to_string()),
            },
            tools: vec![
                Box::new(HealthTool),
                Box::new(LiveScoresTool::new(upstream.clone())),
                Box::new(FixturesTool::new(upstream.clone())),
                Box::new(SearchTool::new(upstream.clone())),
                Box::new(LeagueFixturesTool::new(upstream.clone())),
                Box::new(TeamTool::new(upstream.clone())),
                Box::new(PlayerTool::new(upstream.clone())),
                Box::new(MatchTool::new(upstream.clone())),
                Box::new(DayFixturesTool::new(upstream.clone())),
                Box::new(TeamImageTool::new(upstream)),
            ],
        };

        Ok(Self(Arc::new(inner)))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        self.info.clone()
    }

    async fn list_tools(
        &self,
        _: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tools.iter().map(|tool| tool.to_tool()).collect(),
        })
    }

    async fn call_tool(
        &self,
        CallToolRequestParam { name, arguments }: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Some(tool) = self.tools.iter().find(|tool| tool.name() == name) {
            log::debug!("Calling tool '{name}'");
            return Ok(tool.call(arguments).await);
        }

        Err(ErrorData::new(
            ErrorCode::INVALID_PARAMS,
            format!("Unknown tool '{name}'"),
            None,
        ))
    }

    async fn list_resources(
        &self,
        _: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            next_cursor: None,
            resources: vec![resource::info()],
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        if uri == resource::INFO_URI {
            return Ok(ReadResourceResult {
                contents: vec![resource::info_contents()],
            });
        }

        Err(ErrorData::resource_not_found(format!("Unknown resource '{uri}'"), None))
    }
}

const INSTRUCTIONS: &str = indoc! {r#"
    Football data from LiveScore: live scores, fixtures, teams, players and matches.

    Use `search` to find team, player and league identifiers by name, then pass them to
    `get_team`, `get_player` or `get_league_fixtures`. Match identifiers come from
    `get_live_scores`, `get_fixtures` and `get_day_fixtures`, and `get_match` returns the
    events, lineups and statistics of one match.

    Every data tool accepts an optional `language` code (en, nl, de, fr, es, pt, it, ...).
    All timestamps are GMT/UTC. The `server://info` resource lists the full tool catalog.
"#};
