// Tournament V4 and its interim stub.

use serde::Serialize;
use serde_json::Value;
use urlencoding::encode;

use super::client::LeagueApiClient;
use super::endpoints::{Request, Resource, Route, TOURNAMENT, TOURNAMENT_STUB};
use crate::error::{ApiResult, LeagueApiError};
use crate::objects::{
    LobbyEventDtoWrapper, ProviderRegistrationParameters, TournamentCodeDto,
    TournamentCodeParameters, TournamentCodeUpdateParameters, TournamentRegistrationParameters,
};

const MAX_CODES_PER_CALL: u32 = 1000;

impl LeagueApiClient {
    fn tournament_resource(&self) -> Resource {
        if self.config.interim {
            TOURNAMENT_STUB
        } else {
            TOURNAMENT
        }
    }

    fn tournament_path(&self, rest: &str) -> String {
        let resource = self.tournament_resource();
        format!("/lol/{}/{}/{}", resource.name, resource.version, rest)
    }

    fn require_live(&self) -> ApiResult<()> {
        if self.config.interim {
            return Err(LeagueApiError::InvalidParameter(
                "This endpoint is not available in interim mode.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn create_tournament_codes(
        &self,
        tournament_id: i64,
        count: u32,
        params: &TournamentCodeParameters,
    ) -> ApiResult<Vec<String>> {
        params.validate()?;
        if count == 0 || count > MAX_CODES_PER_CALL {
            return Err(LeagueApiError::InvalidParameter(format!(
                "Code count (count) must be between 1 and {}.",
                MAX_CODES_PER_CALL
            )));
        }

        let request = Request::post(
            self.tournament_resource(),
            Route::Americas,
            self.tournament_path("codes"),
            to_body(params)?,
        )
        .query("tournamentId", tournament_id)
        .query("count", count)
        .tournament_key();

        self.fetch_raw(&request)
    }

    pub fn edit_tournament_code(
        &self,
        tournament_code: &str,
        params: &TournamentCodeUpdateParameters,
    ) -> ApiResult<()> {
        self.require_live()?;

        let path = self.tournament_path(&format!("codes/{}", encode(tournament_code)));
        let request = Request::put(TOURNAMENT, Route::Americas, path, to_body(params)?).tournament_key();

        self.execute(&request).map(|_| ())
    }

    pub fn get_tournament_code_data(&self, tournament_code: &str) -> ApiResult<TournamentCodeDto> {
        self.require_live()?;

        let path = self.tournament_path(&format!("codes/{}", encode(tournament_code)));
        self.fetch(&Request::get(TOURNAMENT, Route::Americas, path).tournament_key())
    }

    pub fn get_tournament_lobby_events(&self, tournament_code: &str) -> ApiResult<LobbyEventDtoWrapper> {
        let path = self.tournament_path(&format!("lobby-events/by-code/{}", encode(tournament_code)));
        self.fetch(&Request::get(self.tournament_resource(), Route::Americas, path).tournament_key())
    }

    /// Registers a provider and returns its id.
    pub fn create_tournament_provider(&self, params: &ProviderRegistrationParameters) -> ApiResult<i64> {
        params.validate()?;

        let request = Request::post(
            self.tournament_resource(),
            Route::Americas,
            self.tournament_path("providers"),
            to_body(params)?,
        )
        .tournament_key();

        self.fetch_raw(&request)
    }

    /// Registers a tournament and returns its id.
    pub fn create_tournament(&self, params: &TournamentRegistrationParameters) -> ApiResult<i64> {
        params.validate()?;

        let request = Request::post(
            self.tournament_resource(),
            Route::Americas,
            self.tournament_path("tournaments"),
            to_body(params)?,
        )
        .tournament_key();

        self.fetch_raw(&request)
    }
}

fn to_body<T: Serialize>(params: &T) -> ApiResult<Value> {
    serde_json::to_value(params).map_err(|e| LeagueApiError::JsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::objects::{MapType, PickType, SpectatorType};

    fn interim_client() -> LeagueApiClient {
        LeagueApiClient::new(Config::new("k").with_tournament_key("t").with_interim(true))
    }

    #[test]
    fn interim_mode_uses_the_stub_resource() {
        let client = interim_client();
        assert_eq!(client.tournament_path("codes"), "/lol/tournament-stub/v4/codes");

        let live = LeagueApiClient::new(Config::new("k"));
        assert_eq!(live.tournament_path("codes"), "/lol/tournament/v4/codes");
    }

    #[test]
    fn code_data_and_edit_are_unavailable_in_interim_mode() {
        let client = interim_client();
        let update = TournamentCodeUpdateParameters {
            allowed_summoner_ids: Vec::new(),
            pick_type: PickType::TournamentDraft,
            map_type: MapType::SummonersRift,
            spectator_type: SpectatorType::All,
        };

        assert!(matches!(
            client.get_tournament_code_data("NA-CODE"),
            Err(LeagueApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            client.edit_tournament_code("NA-CODE", &update),
            Err(LeagueApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn invalid_parameters_fail_before_any_request() {
        let client = interim_client();

        assert!(client
            .create_tournament_codes(1, 5, &TournamentCodeParameters::new(7))
            .is_err());
        assert!(client
            .create_tournament_codes(1, 0, &TournamentCodeParameters::new(5))
            .is_err());
        assert!(client
            .create_tournament(&TournamentRegistrationParameters {
                name: String::new(),
                provider_id: 1,
            })
            .is_err());
        assert!(client.usage().is_empty());
    }
}
