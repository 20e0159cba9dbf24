use serde::{Deserialize, Serialize};

use super::{strict, ApiObject};

// League V4 responses
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LeagueListDto {
    pub league_id: String,
    #[serde(deserialize_with = "strict::list")]
    pub entries: Vec<LeagueItemDto>,
    pub tier: String,
    pub name: String,
    pub queue: String,
}

impl ApiObject for LeagueListDto {
    const CLASS: &'static str = "LeagueListDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LeagueItemDto {
    pub fresh_blood: bool,
    pub wins: i32,
    pub summoner_name: String,
    #[serde(deserialize_with = "strict::optional")]
    pub mini_series: Option<MiniSeriesDto>,
    pub inactive: bool,
    pub veteran: bool,
    pub hot_streak: bool,
    pub rank: String,
    pub league_points: i32,
    pub losses: i32,
    pub summoner_id: String,
    pub puuid: String,
}

impl ApiObject for LeagueItemDto {
    const CLASS: &'static str = "LeagueItemDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LeagueEntryDto {
    pub league_id: String,
    pub summoner_id: String,
    pub summoner_name: String,
    pub puuid: String,
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    pub hot_streak: bool,
    pub veteran: bool,
    pub fresh_blood: bool,
    pub inactive: bool,
    #[serde(deserialize_with = "strict::optional")]
    pub mini_series: Option<MiniSeriesDto>,
}

impl ApiObject for LeagueEntryDto {
    const CLASS: &'static str = "LeagueEntryDto";
}

impl LeagueEntryDto {
    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            return 0.0;
        }
        self.wins as f64 / games as f64
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MiniSeriesDto {
    pub losses: i32,
    /// One character per game: W, L or N (not played).
    pub progress: String,
    pub target: i32,
    pub wins: i32,
}

impl ApiObject for MiniSeriesDto {
    const CLASS: &'static str = "MiniSeriesDto";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_handles_no_games() {
        let entry = LeagueEntryDto::default();
        assert_eq!(entry.win_rate(), 0.0);
    }

    #[test]
    fn win_rate_is_a_fraction() {
        let entry = LeagueEntryDto {
            wins: 30,
            losses: 10,
            ..Default::default()
        };
        assert!((entry.win_rate() - 0.75).abs() < f64::EPSILON);
    }
}
