use std::sync::OnceLock;

use gloo::console::error;

use crate::error::ContentError;
use crate::model::{SiteInfo, TeamMember};

const SITE_SOURCE: &str = include_str!("../content/site.json");
const TEAM_SOURCE: &str = include_str!("../content/team.json");

static SITE: OnceLock<SiteInfo> = OnceLock::new();
static TEAM: OnceLock<Vec<TeamMember>> = OnceLock::new();

pub fn load_site() -> Result<SiteInfo, ContentError> {
    serde_json::from_str(SITE_SOURCE).map_err(|error| ContentError::Parse {
        source_name: "site",
        error,
    })
}

pub fn load_team() -> Result<Vec<TeamMember>, ContentError> {
    serde_json::from_str(TEAM_SOURCE).map_err(|error| ContentError::Parse {
        source_name: "team",
        error,
    })
}

pub fn site_info() -> &'static SiteInfo {
    SITE.get_or_init(|| {
        load_site().unwrap_or_else(|e| {
            error!(format!("{e}"));
            SiteInfo {
                title: "Bitácora".into(),
                ..SiteInfo::default()
            }
        })
    })
}

pub fn team() -> &'static [TeamMember] {
    TEAM.get_or_init(|| {
        load_team().unwrap_or_else(|e| {
            error!(format!("{e}"));
            Vec::new()
        })
    })
}
