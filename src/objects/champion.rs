use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::linkable::{self, Linkable, Linked, StaticAccessor, StaticDataSource, STATIC_CHAMPION};
use super::static_data::StaticChampionDto;
use super::ApiObject;

// Champion V3 response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ChampionInfo {
    pub max_new_player_level: i32,
    pub free_champion_ids_for_new_players: Vec<i64>,
    pub free_champion_ids: Vec<i64>,
}

impl ApiObject for ChampionInfo {
    const CLASS: &'static str = "ChampionInfo";
}

// Champion Mastery V4 response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ChampionMasteryDto {
    pub puuid: String,
    pub summoner_id: String,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
    pub champion_points_since_last_level: i64,
    /// Zero once the maximum level is reached.
    pub champion_points_until_next_level: i64,
    pub chest_granted: bool,
    /// Unix milliseconds.
    pub last_play_time: i64,
    pub tokens_earned: i32,

    #[serde(skip)]
    pub static_data: Linked<StaticChampionDto>,
}

impl ApiObject for ChampionMasteryDto {
    const CLASS: &'static str = "ChampionMasteryDto";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link(self, data, source);
    }
}

impl Linkable for ChampionMasteryDto {
    type Static = StaticChampionDto;
    const LINKED_FIELD: &'static str = "championId";

    fn accessor() -> StaticAccessor<StaticChampionDto> {
        STATIC_CHAMPION
    }

    fn linked(&self) -> &Linked<StaticChampionDto> {
        &self.static_data
    }

    fn linked_mut(&mut self) -> &mut Linked<StaticChampionDto> {
        &mut self.static_data
    }
}
