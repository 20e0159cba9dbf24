use serde::{Deserialize, Serialize};

use super::ApiObject;

// Summoner V4 response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub puuid: String,
    pub name: String,
    pub profile_icon_id: i32,
    /// Unix milliseconds of the last profile change.
    pub revision_date: i64,
    pub summoner_level: i32,
}

impl ApiObject for SummonerDto {
    const CLASS: &'static str = "SummonerDto";
}
