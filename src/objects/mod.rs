//! Typed response objects.
//!
//! Every DTO is decoded strictly: a key in the response that the type does not
//! declare is reported as [`LeagueApiError::SchemaError`] instead of being dropped,
//! so upstream contract changes surface on the first response that carries them.

pub mod champion;
pub mod league;
pub mod linkable;
pub mod matches;
pub mod matchlist;
pub mod spectator;
pub mod static_data;
pub mod status;
pub mod strict;
pub mod summoner;
pub mod timeline;
pub mod tournament;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiResult, LeagueApiError};
use linkable::StaticDataSource;

pub use champion::{ChampionInfo, ChampionMasteryDto};
pub use league::{LeagueEntryDto, LeagueItemDto, LeagueListDto, MiniSeriesDto};
pub use linkable::{Linkable, Linked, UnresolvedReason};
pub use matches::{
    MasteryDto, MatchDto, ParticipantDto, ParticipantIdentityDto, ParticipantStatsDto,
    ParticipantTimelineDto, PlayerDto, RuneDto, TeamBansDto, TeamStatsDto,
};
pub use matchlist::{MatchReferenceDto, MatchlistDto};
pub use spectator::{
    BannedChampion, CurrentGameInfo, CurrentGameParticipant, FeaturedGameInfo, FeaturedGames,
    GameCustomizationObject, Observer, Participant, Perks,
};
pub use static_data::{StaticChampionDto, StaticChampionListDto};
pub use status::{ContentDto, PlatformDataDto, StatusDto, UpdateDto};
pub use summoner::SummonerDto;
pub use timeline::{MatchEventDto, MatchFrameDto, MatchParticipantFrameDto, MatchPositionDto, MatchTimelineDto};
pub use tournament::{
    LobbyEventDto, LobbyEventDtoWrapper, MapType, PickType, ProviderRegistrationParameters,
    SpectatorType, TournamentCodeDto, TournamentCodeParameters, TournamentCodeUpdateParameters,
    TournamentRegistrationParameters,
};

pub trait ApiObject: DeserializeOwned {
    /// Name used when reporting schema or link errors.
    const CLASS: &'static str;

    /// Resolves static-data links of this object and its children.
    ///
    /// `data` is the raw JSON the object was decoded from.
    fn link_static_data(&mut self, _data: &Value, _source: &dyn StaticDataSource) {}
}

/// Builds `T` from decoded JSON, linking static data through `source` when given.
pub fn from_value<T: ApiObject>(data: Value, source: Option<&dyn StaticDataSource>) -> ApiResult<T> {
    let mut object = strict::decode::<T>(&data).map_err(|e| schema_error(T::CLASS, e))?;

    if let Some(source) = source {
        object.link_static_data(&data, source);
    }

    Ok(object)
}

/// Builds every element of a JSON array. `null` is treated as an empty list.
pub fn from_value_list<T: ApiObject>(
    data: Value,
    source: Option<&dyn StaticDataSource>,
) -> ApiResult<Vec<T>> {
    match data {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| from_value(item, source))
            .collect(),
        other => Err(LeagueApiError::JsonError(format!(
            "expected a list of {}, got {}",
            T::CLASS,
            type_name(&other)
        ))),
    }
}

fn schema_error(class: &'static str, err: serde_json::Error) -> LeagueApiError {
    let message = err.to_string();

    match strict::undeclared(&message) {
        Some((field, nested)) => LeagueApiError::SchemaError {
            field: field.to_string(),
            class: nested.unwrap_or(class).to_string(),
        },
        None => LeagueApiError::JsonError(format!("{} ({})", message, class)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subset_of_declared_fields_is_accepted() {
        let summoner: SummonerDto = from_value(
            json!({ "name": "Kalturi", "summonerLevel": 412 }),
            None,
        )
        .unwrap();

        assert_eq!(summoner.name, "Kalturi");
        assert_eq!(summoner.summoner_level, 412);
        assert_eq!(summoner.puuid, "");
    }

    #[test]
    fn unknown_field_names_key_and_class() {
        let err = from_value::<SummonerDto>(json!({ "name": "x", "x": 1 }), None).unwrap_err();

        match &err {
            LeagueApiError::SchemaError { field, class } => {
                assert_eq!(field, "x");
                assert_eq!(class, "SummonerDto");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Failed processing property x of SummonerDto");
    }

    #[test]
    fn nested_objects_are_checked_too() {
        let err = from_value::<LeagueEntryDto>(
            json!({ "tier": "GOLD", "miniSeries": { "wins": 1, "draws": 0 } }),
            None,
        )
        .unwrap_err();

        match &err {
            LeagueApiError::SchemaError { field, class } => {
                assert_eq!(field, "draws");
                assert_eq!(class, "MiniSeriesDto");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Failed processing property draws of MiniSeriesDto");
    }

    #[test]
    fn unknown_key_wins_over_a_wrong_typed_sibling() {
        let err = from_value::<SummonerDto>(json!({ "name": 5, "zzz": 1 }), None).unwrap_err();

        assert!(matches!(
            err,
            LeagueApiError::SchemaError { ref field, ref class } if field == "zzz" && class == "SummonerDto"
        ));
    }

    #[test]
    fn nested_unknown_key_wins_over_a_wrong_typed_outer_field() {
        let err = from_value::<LeagueEntryDto>(
            json!({ "leagueId": 5, "miniSeries": { "wins": "two", "ties": 0 } }),
            None,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed processing property ties of MiniSeriesDto");
    }

    #[test]
    fn nested_list_of_wrong_type_is_a_json_error() {
        let err = from_value::<LeagueListDto>(json!({ "entries": 3 }), None).unwrap_err();
        assert!(matches!(err, LeagueApiError::JsonError(ref m) if m.contains("LeagueItemDto")));
    }

    #[test]
    fn nested_arrays_are_built_recursively() {
        let list: LeagueListDto = from_value(
            json!({
                "tier": "CHALLENGER",
                "entries": [
                    { "summonerName": "a", "leaguePoints": 1200 },
                    { "summonerName": "b", "leaguePoints": 900, "miniSeries": null }
                ]
            }),
            None,
        )
        .unwrap();

        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[1].league_points, 900);
        assert!(list.entries[1].mini_series.is_none());
    }

    #[test]
    fn wrong_value_type_is_a_json_error() {
        let err = from_value::<SummonerDto>(json!({ "summonerLevel": "high" }), None).unwrap_err();
        assert!(matches!(err, LeagueApiError::JsonError(ref m) if m.contains("SummonerDto")));
    }

    #[test]
    fn null_list_is_empty() {
        let list: Vec<ChampionMasteryDto> = from_value_list(Value::Null, None).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn non_array_list_is_rejected() {
        let err = from_value_list::<ChampionMasteryDto>(json!({}), None).unwrap_err();
        assert!(matches!(err, LeagueApiError::JsonError(_)));
    }
}
