use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{strict, ApiObject};

// Match V4 timeline
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchTimelineDto {
    #[serde(deserialize_with = "strict::list")]
    pub frames: Vec<MatchFrameDto>,
    /// Milliseconds between frames.
    pub frame_interval: i64,
}

impl ApiObject for MatchTimelineDto {
    const CLASS: &'static str = "MatchTimelineDto";
}

impl MatchTimelineDto {
    /// Events of every frame, in order.
    pub fn events(&self) -> impl Iterator<Item = &MatchEventDto> {
        self.frames.iter().flat_map(|frame| frame.events.iter())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchFrameDto {
    /// Keyed by participant id as a string.
    #[serde(deserialize_with = "strict::map")]
    pub participant_frames: HashMap<String, MatchParticipantFrameDto>,
    #[serde(deserialize_with = "strict::list")]
    pub events: Vec<MatchEventDto>,
    pub timestamp: i64,
}

impl ApiObject for MatchFrameDto {
    const CLASS: &'static str = "MatchFrameDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchParticipantFrameDto {
    pub participant_id: i32,
    pub minions_killed: i32,
    pub team_score: i32,
    pub dominion_score: i32,
    pub total_gold: i32,
    pub level: i32,
    pub xp: i32,
    pub current_gold: i32,
    #[serde(deserialize_with = "strict::optional")]
    pub position: Option<MatchPositionDto>,
    pub jungle_minions_killed: i32,
}

impl ApiObject for MatchParticipantFrameDto {
    const CLASS: &'static str = "MatchParticipantFrameDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchPositionDto {
    pub x: i32,
    pub y: i32,
}

impl ApiObject for MatchPositionDto {
    const CLASS: &'static str = "MatchPositionDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MatchEventDto {
    /// e.g. `CHAMPION_KILL`, `ITEM_PURCHASED`, `WARD_PLACED`.
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
    pub participant_id: Option<i32>,
    pub team_id: Option<i32>,
    #[serde(deserialize_with = "strict::optional")]
    pub position: Option<MatchPositionDto>,

    pub killer_id: Option<i32>,
    pub victim_id: Option<i32>,
    pub assisting_participant_ids: Vec<i32>,
    pub creator_id: Option<i32>,

    pub item_id: Option<i32>,
    pub before_id: Option<i32>,
    pub after_id: Option<i32>,
    pub skill_slot: Option<i32>,
    pub level_up_type: Option<String>,
    pub ward_type: Option<String>,

    pub building_type: Option<String>,
    pub lane_type: Option<String>,
    pub tower_type: Option<String>,
    pub monster_type: Option<String>,
    pub monster_sub_type: Option<String>,

    pub event_type: Option<String>,
    pub ascended_type: Option<String>,
    pub point_captured: Option<String>,
}

impl ApiObject for MatchEventDto {
    const CLASS: &'static str = "MatchEventDto";
}
