use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::linkable::{self, Linkable, Linked, StaticAccessor, StaticDataSource, STATIC_CHAMPION};
use super::static_data::StaticChampionDto;
use super::{strict, ApiObject};

// Spectator V4 active game
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CurrentGameInfo {
    pub game_id: i64,
    pub game_type: String,
    /// Unix milliseconds.
    pub game_start_time: i64,
    pub map_id: i64,
    /// Seconds.
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    #[serde(deserialize_with = "strict::list")]
    pub banned_champions: Vec<BannedChampion>,
    pub game_queue_config_id: Option<i64>,
    #[serde(deserialize_with = "strict::optional")]
    pub observers: Option<Observer>,
    #[serde(deserialize_with = "strict::list")]
    pub participants: Vec<CurrentGameParticipant>,
}

impl ApiObject for CurrentGameInfo {
    const CLASS: &'static str = "CurrentGameInfo";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link_each(&mut self.participants, data, "participants", source);
    }
}

impl<'a> IntoIterator for &'a CurrentGameInfo {
    type Item = &'a CurrentGameParticipant;
    type IntoIter = std::slice::Iter<'a, CurrentGameParticipant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CurrentGameParticipant {
    pub champion_id: i64,
    #[serde(deserialize_with = "strict::optional")]
    pub perks: Option<Perks>,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub team_id: i64,
    pub summoner_name: String,
    pub summoner_id: String,
    pub puuid: String,
    pub riot_id: String,
    pub spell1_id: i64,
    pub spell2_id: i64,
    #[serde(deserialize_with = "strict::list")]
    pub game_customization_objects: Vec<GameCustomizationObject>,

    #[serde(skip)]
    pub static_data: Linked<StaticChampionDto>,
}

impl ApiObject for CurrentGameParticipant {
    const CLASS: &'static str = "CurrentGameParticipant";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link(self, data, source);
    }
}

impl Linkable for CurrentGameParticipant {
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

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Perks {
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

impl ApiObject for Perks {
    const CLASS: &'static str = "Perks";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameCustomizationObject {
    pub category: String,
    pub content: String,
}

impl ApiObject for GameCustomizationObject {
    const CLASS: &'static str = "GameCustomizationObject";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

impl ApiObject for BannedChampion {
    const CLASS: &'static str = "BannedChampion";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Observer {
    pub encryption_key: String,
}

impl ApiObject for Observer {
    const CLASS: &'static str = "Observer";
}

// Spectator V4 featured games
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FeaturedGames {
    #[serde(deserialize_with = "strict::list")]
    pub game_list: Vec<FeaturedGameInfo>,
    /// Suggested seconds to wait before polling again.
    pub client_refresh_interval: Option<i64>,
}

impl ApiObject for FeaturedGames {
    const CLASS: &'static str = "FeaturedGames";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FeaturedGameInfo {
    pub game_mode: String,
    pub game_length: i64,
    pub map_id: i64,
    pub game_type: String,
    #[serde(deserialize_with = "strict::list")]
    pub banned_champions: Vec<BannedChampion>,
    pub game_id: i64,
    #[serde(deserialize_with = "strict::optional")]
    pub observers: Option<Observer>,
    pub game_queue_config_id: Option<i64>,
    pub game_start_time: i64,
    #[serde(deserialize_with = "strict::list")]
    pub participants: Vec<Participant>,
    pub platform_id: String,
}

impl ApiObject for FeaturedGameInfo {
    const CLASS: &'static str = "FeaturedGameInfo";
}

impl<'a> IntoIterator for &'a FeaturedGameInfo {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Participant {
    pub bot: bool,
    pub spell2_id: i64,
    pub profile_icon_id: i64,
    pub summoner_name: String,
    pub riot_id: String,
    pub puuid: String,
    pub champion_id: i64,
    pub team_id: i64,
    pub spell1_id: i64,
}

impl ApiObject for Participant {
    const CLASS: &'static str = "Participant";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::from_value;
    use serde_json::json;

    #[test]
    fn iterates_over_participants() {
        let game: CurrentGameInfo = from_value(
            json!({
                "gameId": 1,
                "participants": [
                    { "championId": 1, "teamId": 100 },
                    { "championId": 2, "teamId": 200, "perks": { "perkIds": [8005], "perkStyle": 8000, "perkSubStyle": 8100 } }
                ],
                "observers": { "encryptionKey": "abc" }
            }),
            None,
        )
        .unwrap();

        let ids: Vec<i64> = game.into_iter().map(|p| p.champion_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(game.participants[1].perks.as_ref().unwrap().perk_style, 8000);
    }

    #[test]
    fn spell_ids_keep_their_api_names() {
        let featured: FeaturedGames = from_value(
            json!({
                "gameList": [{ "participants": [{ "spell1Id": 4, "spell2Id": 14 }] }],
                "clientRefreshInterval": 300
            }),
            None,
        )
        .unwrap();

        let participant = featured.game_list[0].into_iter().next().unwrap();
        assert_eq!(participant.spell1_id, 4);
        assert_eq!(participant.spell2_id, 14);
    }
}
