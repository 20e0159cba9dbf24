use serde::{Deserialize, Serialize, Serializer};

use super::{strict, ApiObject};
use crate::error::LeagueApiError;
use crate::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    BlindPick,
    DraftMode,
    AllRandom,
    TournamentDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    SummonersRift,
    TwistedTreeline,
    HowlingAbyss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectatorType {
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "LOBBYONLY")]
    LobbyOnly,
    #[serde(rename = "ALL")]
    All,
}

// Tournament V4 request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    /// When empty, anyone may join the lobby.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_summoner_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub team_size: i32,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
}

impl TournamentCodeParameters {
    pub fn new(team_size: i32) -> Self {
        TournamentCodeParameters {
            allowed_summoner_ids: Vec::new(),
            metadata: None,
            team_size,
            pick_type: PickType::TournamentDraft,
            map_type: MapType::SummonersRift,
            spectator_type: SpectatorType::All,
        }
    }

    pub fn validate(&self) -> Result<(), LeagueApiError> {
        if self.team_size <= 0 {
            return Err(LeagueApiError::InvalidParameter(
                "Team size (teamSize) must be greater than or equal to 1.".to_string(),
            ));
        }
        if self.team_size >= 6 {
            return Err(LeagueApiError::InvalidParameter(
                "Team size (teamSize) must be less than or equal to 5.".to_string(),
            ));
        }
        if !self.allowed_summoner_ids.is_empty()
            && (self.team_size as usize) * 2 > self.allowed_summoner_ids.len()
        {
            return Err(LeagueApiError::InvalidParameter(
                "Not enough players to fill teams. Leave allowedSummonerIds empty to allow anyone."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeUpdateParameters {
    pub allowed_summoner_ids: Vec<String>,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderRegistrationParameters {
    #[serde(serialize_with = "upper_region")]
    pub region: Region,
    /// Callback URL for game results.
    pub url: String,
}

impl ProviderRegistrationParameters {
    pub fn validate(&self) -> Result<(), LeagueApiError> {
        if self.url.trim().is_empty() {
            return Err(LeagueApiError::InvalidParameter(
                "Callback URL (url) may not be empty.".to_string(),
            ));
        }
        if !self.region.is_tournament_region() {
            return Err(LeagueApiError::InvalidParameter(format!(
                "Value of region (region) is invalid: {}",
                self.region.short_name()
            )));
        }
        Ok(())
    }
}

fn upper_region<S: Serializer>(region: &Region, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&region.short_name().to_uppercase())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistrationParameters {
    pub name: String,
    pub provider_id: i64,
}

impl TournamentRegistrationParameters {
    pub fn validate(&self) -> Result<(), LeagueApiError> {
        if self.name.trim().is_empty() {
            return Err(LeagueApiError::InvalidParameter(
                "Tournament name (name) may not be empty.".to_string(),
            ));
        }
        if self.provider_id <= 0 {
            return Err(LeagueApiError::InvalidParameter(
                "ProviderID (providerId) must be greater than or equal to 1.".to_string(),
            ));
        }
        Ok(())
    }
}

// Tournament V4 responses
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TournamentCodeDto {
    pub code: String,
    pub spectators: String,
    pub lobby_name: String,
    pub meta_data: String,
    pub password: String,
    pub team_size: i32,
    pub provider_id: i64,
    pub pick_type: String,
    pub tournament_id: i64,
    pub id: i64,
    pub region: String,
    pub map: String,
    pub participants: Vec<String>,
}

impl ApiObject for TournamentCodeDto {
    const CLASS: &'static str = "TournamentCodeDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LobbyEventDtoWrapper {
    #[serde(deserialize_with = "strict::list")]
    pub event_list: Vec<LobbyEventDto>,
}

impl ApiObject for LobbyEventDtoWrapper {
    const CLASS: &'static str = "LobbyEventDtoWrapper";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LobbyEventDto {
    pub summoner_id: String,
    pub puuid: String,
    pub event_type: String,
    pub timestamp: String,
}

impl ApiObject for LobbyEventDto {
    const CLASS: &'static str = "LobbyEventDto";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_size_must_be_between_one_and_five() {
        assert!(TournamentCodeParameters::new(0).validate().is_err());
        assert!(TournamentCodeParameters::new(6).validate().is_err());
        assert!(TournamentCodeParameters::new(5).validate().is_ok());
    }

    #[test]
    fn allowed_summoners_must_fill_both_teams() {
        let mut params = TournamentCodeParameters::new(2);
        params.allowed_summoner_ids = vec!["a".into(), "b".into(), "c".into()];
        assert!(params.validate().is_err());

        params.allowed_summoner_ids.push("d".into());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn empty_allowed_summoners_are_left_out_of_the_body() {
        let body = serde_json::to_value(TournamentCodeParameters::new(5)).unwrap();

        assert_eq!(
            body,
            json!({
                "teamSize": 5,
                "pickType": "TOURNAMENT_DRAFT",
                "mapType": "SUMMONERS_RIFT",
                "spectatorType": "ALL"
            })
        );
    }

    #[test]
    fn spectator_types_use_official_names() {
        assert_eq!(serde_json::to_value(SpectatorType::LobbyOnly).unwrap(), json!("LOBBYONLY"));
        assert_eq!(serde_json::to_value(PickType::BlindPick).unwrap(), json!("BLIND_PICK"));
    }

    #[test]
    fn provider_region_is_sent_upper_case() {
        let params = ProviderRegistrationParameters {
            region: Region::EuropeWest,
            url: "https://example.com/callback".to_string(),
        };

        assert!(params.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "region": "EUW", "url": "https://example.com/callback" })
        );
    }

    #[test]
    fn provider_rejects_non_tournament_region_and_empty_url() {
        let korea = ProviderRegistrationParameters {
            region: Region::Korea,
            url: "https://example.com".to_string(),
        };
        assert!(korea.validate().is_err());

        let no_url = ProviderRegistrationParameters {
            region: Region::NorthAmerica,
            url: " ".to_string(),
        };
        assert!(no_url.validate().is_err());
    }

    #[test]
    fn tournament_needs_name_and_provider() {
        let mut params = TournamentRegistrationParameters {
            name: "".to_string(),
            provider_id: 1,
        };
        assert!(params.validate().is_err());

        params.name = "Spring Cup".to_string();
        params.provider_id = 0;
        assert!(params.validate().is_err());

        params.provider_id = 12;
        assert!(params.validate().is_ok());
    }
}
