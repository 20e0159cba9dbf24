// Riot platform endpoints, grouped by resource.

use urlencoding::encode;

use super::client::LeagueApiClient;
use super::endpoints::{
    Request, Route, CHAMPION, CHAMPION_MASTERY, LEAGUE, LEAGUE_EXP, MATCH, SPECTATOR, STATUS,
    SUMMONER, THIRD_PARTY_CODE,
};
use crate::error::{ApiResult, LeagueApiError};
use crate::objects::*;
use crate::region::Region;

/// Optional filters of the matchlist endpoint. List fields may hold several values.
#[derive(Debug, Clone, Default)]
pub struct MatchlistFilter {
    pub queue: Vec<i32>,
    pub season: Vec<i32>,
    pub champion: Vec<i64>,
    pub begin_time: Option<i64>,
    pub end_time: Option<i64>,
    pub begin_index: Option<i64>,
    pub end_index: Option<i64>,
}

impl LeagueApiClient {
    // Champion V3

    pub fn get_champion_rotations(&self) -> ApiResult<ChampionInfo> {
        let path = format!("/lol/platform/{}/champion-rotations", CHAMPION.version);
        self.fetch(&Request::get(CHAMPION, self.platform(), path))
    }

    // Champion Mastery V4

    pub fn get_champion_mastery(&self, summoner_id: &str, champion_id: i64) -> ApiResult<ChampionMasteryDto> {
        let path = format!(
            "/lol/champion-mastery/{}/champion-masteries/by-summoner/{}/by-champion/{}",
            CHAMPION_MASTERY.version,
            encode(summoner_id),
            champion_id
        );
        self.fetch(&Request::get(CHAMPION_MASTERY, self.platform(), path))
    }

    /// Sorted by champion points, descending.
    pub fn get_champion_masteries(&self, summoner_id: &str) -> ApiResult<Vec<ChampionMasteryDto>> {
        let path = format!(
            "/lol/champion-mastery/{}/champion-masteries/by-summoner/{}",
            CHAMPION_MASTERY.version,
            encode(summoner_id)
        );
        self.fetch_list(&Request::get(CHAMPION_MASTERY, self.platform(), path))
    }

    /// Sum of all champion mastery levels.
    pub fn get_champion_mastery_score(&self, summoner_id: &str) -> ApiResult<i64> {
        let path = format!(
            "/lol/champion-mastery/{}/scores/by-summoner/{}",
            CHAMPION_MASTERY.version,
            encode(summoner_id)
        );
        self.fetch_raw(&Request::get(CHAMPION_MASTERY, self.platform(), path))
    }

    // Spectator V4

    pub fn get_current_game_info(&self, summoner_id: &str) -> ApiResult<CurrentGameInfo> {
        let path = format!(
            "/lol/spectator/{}/active-games/by-summoner/{}",
            SPECTATOR.version,
            encode(summoner_id)
        );
        self.fetch(&Request::get(SPECTATOR, self.platform(), path))
    }

    pub fn get_featured_games(&self) -> ApiResult<FeaturedGames> {
        let path = format!("/lol/spectator/{}/featured-games", SPECTATOR.version);
        self.fetch(&Request::get(SPECTATOR, self.platform(), path))
    }

    // League V4

    pub fn get_league_by_id(&self, league_id: &str) -> ApiResult<LeagueListDto> {
        let path = format!("/lol/league/{}/leagues/{}", LEAGUE.version, encode(league_id));
        self.fetch(&Request::get(LEAGUE, self.platform(), path))
    }

    pub fn get_league_entries_for_summoner(&self, summoner_id: &str) -> ApiResult<Vec<LeagueEntryDto>> {
        let path = format!(
            "/lol/league/{}/entries/by-summoner/{}",
            LEAGUE.version,
            encode(summoner_id)
        );
        self.fetch_list(&Request::get(LEAGUE, self.platform(), path))
    }

    /// `page` starts at 1.
    pub fn get_league_entries(
        &self,
        queue: &str,
        tier: &str,
        division: &str,
        page: u32,
    ) -> ApiResult<Vec<LeagueEntryDto>> {
        let path = format!(
            "/lol/league/{}/entries/{}/{}/{}",
            LEAGUE.version,
            encode(queue),
            encode(tier),
            encode(division)
        );
        self.fetch_list(&Request::get(LEAGUE, self.platform(), path).query("page", page.max(1)))
    }

    pub fn get_league_challenger(&self, queue: &str) -> ApiResult<LeagueListDto> {
        self.get_apex_league("challengerleagues", queue)
    }

    pub fn get_league_grandmaster(&self, queue: &str) -> ApiResult<LeagueListDto> {
        self.get_apex_league("grandmasterleagues", queue)
    }

    pub fn get_league_master(&self, queue: &str) -> ApiResult<LeagueListDto> {
        self.get_apex_league("masterleagues", queue)
    }

    fn get_apex_league(&self, tier: &str, queue: &str) -> ApiResult<LeagueListDto> {
        let path = format!("/lol/league/{}/{}/by-queue/{}", LEAGUE.version, tier, encode(queue));
        self.fetch(&Request::get(LEAGUE, self.platform(), path))
    }

    // League Exp V4

    pub fn get_league_entries_exp(
        &self,
        queue: &str,
        tier: &str,
        division: &str,
        page: u32,
    ) -> ApiResult<Vec<LeagueEntryDto>> {
        let path = format!(
            "/lol/league-exp/{}/entries/{}/{}/{}",
            LEAGUE_EXP.version,
            encode(queue),
            encode(tier),
            encode(division)
        );
        self.fetch_list(&Request::get(LEAGUE_EXP, self.platform(), path).query("page", page.max(1)))
    }

    // Status V4

    /// Shard status of the configured region, or of `override_region`.
    pub fn get_platform_data(&self, override_region: Option<Region>) -> ApiResult<PlatformDataDto> {
        let route = Route::Platform(override_region.unwrap_or(self.config.region));
        let path = format!("/lol/status/{}/platform-data", STATUS.version);
        self.fetch(&Request::get(STATUS, route, path))
    }

    // Match V4

    pub fn get_matchlist_by_account(
        &self,
        account_id: &str,
        filter: &MatchlistFilter,
    ) -> ApiResult<MatchlistDto> {
        let path = format!(
            "/lol/match/{}/matchlists/by-account/{}",
            MATCH.version,
            encode(account_id)
        );
        let request = Request::get(MATCH, self.platform(), path)
            .query_list("queue", &filter.queue)
            .query_list("season", &filter.season)
            .query_list("champion", &filter.champion)
            .query_opt("beginTime", filter.begin_time)
            .query_opt("endTime", filter.end_time)
            .query_opt("beginIndex", filter.begin_index)
            .query_opt("endIndex", filter.end_index);

        self.fetch(&request)
    }

    pub fn get_match(&self, match_id: i64) -> ApiResult<MatchDto> {
        let path = format!("/lol/match/{}/matches/{}", MATCH.version, match_id);
        self.fetch(&Request::get(MATCH, self.platform(), path))
    }

    /// Match played under `tournament_code`. Uses the tournament key.
    pub fn get_match_by_tournament_code(
        &self,
        match_id: i64,
        tournament_code: &str,
    ) -> ApiResult<MatchDto> {
        let path = format!(
            "/lol/match/{}/matches/{}/by-tournament-code/{}",
            MATCH.version,
            match_id,
            encode(tournament_code)
        );
        self.fetch(&Request::get(MATCH, self.platform(), path).tournament_key())
    }

    pub fn get_match_timeline(&self, match_id: i64) -> ApiResult<MatchTimelineDto> {
        let path = format!("/lol/match/{}/timelines/by-match/{}", MATCH.version, match_id);
        self.fetch(&Request::get(MATCH, self.platform(), path))
    }

    pub fn get_match_ids_by_tournament_code(&self, tournament_code: &str) -> ApiResult<Vec<i64>> {
        let path = format!(
            "/lol/match/{}/matches/by-tournament-code/{}/ids",
            MATCH.version,
            encode(tournament_code)
        );
        self.fetch_raw(&Request::get(MATCH, self.platform(), path).tournament_key())
    }

    // Summoner V4

    pub fn get_summoner(&self, summoner_id: &str) -> ApiResult<SummonerDto> {
        self.get_summoner_at(&format!("summoners/{}", encode(summoner_id)))
    }

    /// Spaces in `name` are ignored.
    pub fn get_summoner_by_name(&self, name: &str) -> ApiResult<SummonerDto> {
        let name: String = name.chars().filter(|c| *c != ' ').collect();
        if name.trim().is_empty() {
            return Err(LeagueApiError::InvalidParameter(
                "Provided summoner name must not be empty".to_string(),
            ));
        }

        self.get_summoner_at(&format!("summoners/by-name/{}", encode(&name)))
    }

    pub fn get_summoner_by_account_id(&self, account_id: &str) -> ApiResult<SummonerDto> {
        self.get_summoner_at(&format!("summoners/by-account/{}", encode(account_id)))
    }

    pub fn get_summoner_by_puuid(&self, puuid: &str) -> ApiResult<SummonerDto> {
        self.get_summoner_at(&format!("summoners/by-puuid/{}", encode(puuid)))
    }

    fn get_summoner_at(&self, rest: &str) -> ApiResult<SummonerDto> {
        let path = format!("/lol/summoner/{}/{}", SUMMONER.version, rest);
        self.fetch(&Request::get(SUMMONER, self.platform(), path))
    }

    // Third Party Code V4

    pub fn get_third_party_code_by_summoner_id(&self, summoner_id: &str) -> ApiResult<String> {
        let path = format!(
            "/lol/platform/{}/third-party-code/by-summoner/{}",
            THIRD_PARTY_CODE.version,
            encode(summoner_id)
        );
        self.fetch_raw(&Request::get(THIRD_PARTY_CODE, self.platform(), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn blank_summoner_name_is_rejected_before_any_call() {
        let client = LeagueApiClient::new(Config::new("k"));

        let err = client.get_summoner_by_name("   ").unwrap_err();
        assert!(matches!(err, LeagueApiError::InvalidParameter(_)));
        assert!(client.usage().is_empty());
    }
}
