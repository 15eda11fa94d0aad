//! The static `server://info` document.

use indoc::indoc;
use rmcp::model::{RawResource, Resource, ResourceContents};

pub(crate) const INFO_URI: &str = "server://info";

const INFO_NAME: &str = "LiveScore MCP Server Info";
const MIME_TYPE: &str = "text/plain";

const INFO: &str = indoc! {r#"
    LiveScore MCP Server v1.0.0

    A football livescore MCP providing real-time data about matches, teams, players, fixtures, standings, goals, events, lineups, and stats.

    Available Tools:
    - health: Echo test for connectivity check
    - get_live_scores: Currently live matches with real-time scores
    - get_fixtures: Competition fixtures (e.g. Champions League)
    - search: Search teams, players, or competitions by name
    - get_league_fixtures: League fixtures by league key (e.g. NetherlandsEredivisie)
    - get_team: Detailed team info (squad, stats) by team ID
    - get_player: Detailed player info (career, stats) by player ID
    - get_match: Match details (events, lineups, stats, h2h) by match ID
    - get_day_fixtures: All fixtures for a specific date
    - get_team_image: Team logo PNG URL by team ID

    All timestamps are in GMT/UTC - convert to local timezone as needed.
    Supports multiple languages: en, nl, de, fr, es, pt, it, etc.

    Example Queries:
    - "Show me live football matches right now"
    - "Get Champions League fixtures"
    - "Search for Ajax"
    - "Get Eredivisie fixtures"
    - "Show matches for today"
    - "Get detailed info about player 474972""#};

/// The listing entry of the info resource.
pub(crate) fn info() -> Resource {
    let mut resource = RawResource::new(INFO_URI, INFO_NAME);
    resource.description = Some("Server version, tool catalog and example queries".to_string());
    resource.mime_type = Some(MIME_TYPE.to_string());

    Resource::new(resource, None)
}

/// The contents of the info resource.
pub(crate) fn info_contents() -> ResourceContents {
    let mut contents = ResourceContents::text(INFO, INFO_URI);

    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(MIME_TYPE.to_string());
    }

    contents
}

#[cfg(test)]
mod tests {
    use rmcp::model::ResourceContents;

    use super::{info, info_contents};

    #[test]
    fn listing() {
        let resource = info();

        assert_eq!(resource.uri, "server://info");
        assert_eq!(resource.name, "LiveScore MCP Server Info");
        assert_eq!(resource.mime_type.as_deref(), Some("text/plain"));
    }

    #[test]
    fn contents_list_every_tool() {
        let ResourceContents::TextResourceContents { uri, mime_type, text, .. } = info_contents() else {
            unreachable!()
        };

        assert_eq!(uri, "server://info");
        assert_eq!(mime_type.as_deref(), Some("text/plain"));
        assert!(text.starts_with("LiveScore MCP Server v1.0.0\n\n"));

        for tool in [
            "health",
            "get_live_scores",
            "get_fixtures",
            "search",
            "get_league_fixtures",
            "get_team",
            "get_player",
            "get_match",
            "get_day_fixtures",
            "get_team_image",
        ] {
            assert!(text.contains(&format!("- {tool}: ")), "{tool} is not listed");
        }
    }
}
