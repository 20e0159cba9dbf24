use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::linkable::{self, Linkable, Linked, StaticAccessor, StaticDataSource, STATIC_CHAMPION};
use super::static_data::StaticChampionDto;
use super::{strict, ApiObject};

// Match V4 match detail
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchDto {
    pub game_id: i64,
    #[serde(deserialize_with = "strict::list")]
    pub participant_identities: Vec<ParticipantIdentityDto>,
    pub queue_id: i32,
    pub game_type: String,
    /// Seconds.
    pub game_duration: i64,
    #[serde(deserialize_with = "strict::list")]
    pub teams: Vec<TeamStatsDto>,
    pub platform_id: String,
    /// Unix milliseconds, taken when champion select ended.
    pub game_creation: i64,
    pub season_id: i32,
    pub game_version: String,
    pub map_id: i32,
    pub game_mode: String,
    #[serde(deserialize_with = "strict::list")]
    pub participants: Vec<ParticipantDto>,
}

impl ApiObject for MatchDto {
    const CLASS: &'static str = "MatchDto";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link_each(&mut self.participants, data, "participants", source);
    }
}

impl<'a> IntoIterator for &'a MatchDto {
    type Item = &'a ParticipantDto;
    type IntoIter = std::slice::Iter<'a, ParticipantDto>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

impl MatchDto {
    /// Player behind `participant_id`. Custom games without player data yield `None`.
    pub fn player(&self, participant_id: i32) -> Option<&PlayerDto> {
        self.participant_identities
            .iter()
            .find(|identity| identity.participant_id == participant_id)
            .and_then(|identity| identity.player.as_ref())
    }

    /// The team that won, if the match was decided.
    pub fn winner(&self) -> Option<&TeamStatsDto> {
        self.teams.iter().find(|team| team.win == "Win")
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    #[serde(deserialize_with = "strict::optional")]
    pub player: Option<PlayerDto>,
}

impl ApiObject for ParticipantIdentityDto {
    const CLASS: &'static str = "ParticipantIdentityDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PlayerDto {
    pub summoner_id: String,
    pub profile_icon: i32,
    pub account_id: String,
    pub match_history_uri: String,
    pub current_account_id: String,
    pub current_platform_id: String,
    pub summoner_name: String,
    pub platform_id: String,
}

impl ApiObject for PlayerDto {
    const CLASS: &'static str = "PlayerDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamStatsDto {
    pub tower_kills: i32,
    pub rift_herald_kills: i32,
    pub first_blood: bool,
    pub inhibitor_kills: i32,
    #[serde(deserialize_with = "strict::list")]
    pub bans: Vec<TeamBansDto>,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub dominion_victory_score: i32,
    pub dragon_kills: i32,
    pub baron_kills: i32,
    pub first_inhibitor: bool,
    pub first_tower: bool,
    pub vilemaw_kills: i32,
    pub first_rift_herald: bool,
    /// 100 for blue side, 200 for red side.
    pub team_id: i32,
    /// `Win` or `Fail`.
    pub win: String,
}

impl ApiObject for TeamStatsDto {
    const CLASS: &'static str = "TeamStatsDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TeamBansDto {
    pub champion_id: i64,
    pub pick_turn: i32,
}

impl ApiObject for TeamBansDto {
    const CLASS: &'static str = "TeamBansDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub champion_id: i64,
    #[serde(deserialize_with = "strict::list")]
    pub runes: Vec<RuneDto>,
    #[serde(deserialize_with = "strict::optional")]
    pub stats: Option<ParticipantStatsDto>,
    pub team_id: i32,
    #[serde(deserialize_with = "strict::optional")]
    pub timeline: Option<ParticipantTimelineDto>,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub highest_achieved_season_tier: Option<String>,
    #[serde(deserialize_with = "strict::list")]
    pub masteries: Vec<MasteryDto>,

    #[serde(skip)]
    pub static_data: Linked<StaticChampionDto>,
}

impl ApiObject for ParticipantDto {
    const CLASS: &'static str = "ParticipantDto";

    fn link_static_data(&mut self, data: &Value, source: &dyn StaticDataSource) {
        linkable::link(self, data, source);
    }
}

impl Linkable for ParticipantDto {
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

// Pre-2018 rune and mastery pages, still present on old matches.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RuneDto {
    pub rune_id: i32,
    pub rank: i32,
}

impl ApiObject for RuneDto {
    const CLASS: &'static str = "RuneDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MasteryDto {
    pub mastery_id: i32,
    pub rank: i32,
}

impl ApiObject for MasteryDto {
    const CLASS: &'static str = "MasteryDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParticipantStatsDto {
    pub participant_id: i32,
    pub win: bool,

    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,

    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub champ_level: i32,
    pub largest_multi_kill: i32,
    pub largest_killing_spree: i32,
    pub killing_sprees: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub unreal_kills: i32,
    pub first_blood_kill: bool,
    pub first_blood_assist: bool,
    pub first_tower_kill: bool,
    pub first_tower_assist: bool,
    pub first_inhibitor_kill: bool,
    pub first_inhibitor_assist: bool,
    pub inhibitor_kills: i32,
    pub turret_kills: i32,
    pub longest_time_spent_living: i32,

    pub total_damage_dealt: i64,
    pub total_damage_dealt_to_champions: i64,
    pub physical_damage_dealt: i64,
    pub physical_damage_dealt_to_champions: i64,
    pub magic_damage_dealt: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub true_damage_dealt: i64,
    pub true_damage_dealt_to_champions: i64,
    pub largest_critical_strike: i32,
    pub damage_dealt_to_objectives: i64,
    pub damage_dealt_to_turrets: i64,
    pub damage_self_mitigated: i64,
    pub total_damage_taken: i64,
    pub physical_damage_taken: i64,
    pub magical_damage_taken: i64,
    pub true_damage_taken: i64,
    pub total_heal: i64,
    pub total_units_healed: i32,
    pub total_time_crowd_control_dealt: i32,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i32,

    pub gold_earned: i32,
    pub gold_spent: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub neutral_minions_killed_team_jungle: i32,
    pub neutral_minions_killed_enemy_jungle: i32,

    pub vision_score: i64,
    pub wards_placed: i32,
    pub wards_killed: i32,
    pub vision_wards_bought_in_game: i32,
    pub sight_wards_bought_in_game: i32,

    // Dominion and Twisted Treeline
    pub node_capture: i32,
    pub node_capture_assist: i32,
    pub node_neutralize: i32,
    pub node_neutralize_assist: i32,
    pub altars_captured: i32,
    pub altars_neutralized: i32,
    pub team_objective: i32,
    pub total_player_score: i32,
    pub total_score_rank: i32,
    pub objective_player_score: i32,
    pub combat_player_score: i32,
    pub player_score0: i32,
    pub player_score1: i32,
    pub player_score2: i32,
    pub player_score3: i32,
    pub player_score4: i32,
    pub player_score5: i32,
    pub player_score6: i32,
    pub player_score7: i32,
    pub player_score8: i32,
    pub player_score9: i32,

    pub perk0: i32,
    pub perk0_var1: i32,
    pub perk0_var2: i32,
    pub perk0_var3: i32,
    pub perk1: i32,
    pub perk1_var1: i32,
    pub perk1_var2: i32,
    pub perk1_var3: i32,
    pub perk2: i32,
    pub perk2_var1: i32,
    pub perk2_var2: i32,
    pub perk2_var3: i32,
    pub perk3: i32,
    pub perk3_var1: i32,
    pub perk3_var2: i32,
    pub perk3_var3: i32,
    pub perk4: i32,
    pub perk4_var1: i32,
    pub perk4_var2: i32,
    pub perk4_var3: i32,
    pub perk5: i32,
    pub perk5_var1: i32,
    pub perk5_var2: i32,
    pub perk5_var3: i32,
    pub perk_primary_style: i32,
    pub perk_sub_style: i32,
    pub stat_perk0: i32,
    pub stat_perk1: i32,
    pub stat_perk2: i32,
}

impl ApiObject for ParticipantStatsDto {
    const CLASS: &'static str = "ParticipantStatsDto";
}

impl ParticipantStatsDto {
    /// Kills plus assists over deaths, with zero deaths counted as one.
    pub fn kda(&self) -> f64 {
        (self.kills + self.assists) as f64 / self.deaths.max(1) as f64
    }

    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

/// Per-minute deltas keyed by game phase, e.g. `0-10` or `10-20`.
pub type Deltas = HashMap<String, f64>;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParticipantTimelineDto {
    pub participant_id: i32,
    pub role: String,
    pub lane: String,
    pub creeps_per_min_deltas: Deltas,
    pub xp_per_min_deltas: Deltas,
    pub gold_per_min_deltas: Deltas,
    pub cs_diff_per_min_deltas: Deltas,
    pub xp_diff_per_min_deltas: Deltas,
    pub damage_taken_per_min_deltas: Deltas,
    pub damage_taken_diff_per_min_deltas: Deltas,
}

impl ApiObject for ParticipantTimelineDto {
    const CLASS: &'static str = "ParticipantTimelineDto";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::from_value;
    use serde_json::json;

    fn game() -> MatchDto {
        from_value(
            json!({
                "gameId": 4242,
                "queueId": 420,
                "participantIdentities": [
                    { "participantId": 1, "player": { "summonerName": "Kalturi", "accountId": "acc-1" } },
                    { "participantId": 2 }
                ],
                "teams": [
                    { "teamId": 100, "win": "Fail", "bans": [{ "championId": 157, "pickTurn": 1 }] },
                    { "teamId": 200, "win": "Win", "bans": [] }
                ],
                "participants": [
                    {
                        "participantId": 1,
                        "championId": 266,
                        "teamId": 100,
                        "stats": { "kills": 7, "deaths": 0, "assists": 5, "timeCCingOthers": 31, "item0": 3071 },
                        "timeline": { "lane": "TOP", "creepsPerMinDeltas": { "0-10": 7.4 } }
                    },
                    { "participantId": 2, "championId": 103, "teamId": 200 }
                ]
            }),
            None,
        )
        .unwrap()
    }

    #[test]
    fn players_are_found_by_participant_id() {
        let game = game();

        assert_eq!(game.player(1).map(|p| p.summoner_name.as_str()), Some("Kalturi"));
        assert!(game.player(2).is_none());
        assert!(game.player(3).is_none());
    }

    #[test]
    fn winner_and_bans() {
        let game = game();

        assert_eq!(game.winner().map(|t| t.team_id), Some(200));
        assert_eq!(game.teams[0].bans[0].champion_id, 157);
    }

    #[test]
    fn participant_stats_keep_api_names() {
        let game = game();
        let stats = game.participants[0].stats.as_ref().unwrap();

        assert_eq!(stats.time_ccing_others, 31);
        assert_eq!(stats.items()[0], 3071);
        assert!((stats.kda() - 12.0).abs() < f64::EPSILON);

        let timeline = game.participants[0].timeline.as_ref().unwrap();
        assert_eq!(timeline.creeps_per_min_deltas["0-10"], 7.4);
    }

    #[test]
    fn unknown_stat_names_the_stats_type() {
        let err = from_value::<MatchDto>(
            json!({ "participants": [{ "championId": 1, "stats": { "kills": 1, "visionWards": 2 } }] }),
            None,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed processing property visionWards of ParticipantStatsDto"
        );
    }
}
