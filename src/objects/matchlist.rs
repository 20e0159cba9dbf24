use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::linkable::{self, Linkable, Linked, StaticAccessor, StaticDataSource, STATIC_CHAMPION};
use super::static_data::StaticChampionDto;
use super::{strict, ApiObject};

// Match V4 matchlist
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchlistDto {
    pub start_index: i32,
    pub total_games: i32,
    pub end_index: i32,
    #[serde(deserialize_with = "strict::list")]
    pub matches: Vec<MatchReferenceDto>,
}

impl ApiObject for MatchlistDto {
    const CLASS: &'static str = "MatchlistDto";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link_each(&mut self.matches, data, "matches", source);
    }
}

impl<'a> IntoIterator for &'a MatchlistDto {
    type Item = &'a MatchReferenceDto;
    type IntoIter = std::slice::Iter<'a, MatchReferenceDto>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchReferenceDto {
    pub game_id: i64,
    pub role: String,
    pub season: i32,
    pub platform_id: String,
    pub champion: i64,
    pub queue: i32,
    pub lane: String,
    pub timestamp: i64,

    #[serde(skip)]
    pub static_data: Linked<StaticChampionDto>,
}

impl ApiObject for MatchReferenceDto {
    const CLASS: &'static str = "MatchReferenceDto";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link(self, data, source);
    }
}

impl Linkable for MatchReferenceDto {
    type Static = StaticChampionDto;
    const LINKED_FIELD: &'static str = "champion";

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
