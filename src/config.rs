use crate::error::LeagueApiError;
use crate::region::Region;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DDRAGON_URL: &str = "https://ddragon.leagueoflegends.com";

/// Settings consumed by static-data linking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDataSettings {
    pub linking: bool,
    pub locale: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub tournament_key: Option<String>,
    pub region: Region,
    /// Route tournament calls to the stub resource.
    pub interim: bool,
    pub static_data: StaticDataSettings,
    pub cache_calls: bool,
    pub cache_dir: PathBuf,
    pub base_url: Option<String>,
    pub ddragon_url: String,
    pub rate_per_second: u32,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            tournament_key: None,
            region: Region::NorthAmerica,
            interim: false,
            static_data: StaticDataSettings::default(),
            cache_calls: true,
            cache_dir: default_cache_dir(),
            base_url: None,
            ddragon_url: DEFAULT_DDRAGON_URL.to_string(),
            rate_per_second: 20,
        }
    }

    pub fn from_env() -> Result<Self, LeagueApiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LeagueApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY").ok_or_else(|| {
            LeagueApiError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
        })?;

        let mut config = Config::new(api_key);
        config.tournament_key = lookup("RIOT_TOURNAMENT_KEY");

        if let Some(region) = lookup("RIOT_REGION") {
            config.region = region.parse()?;
        }

        config.interim = parse_flag(lookup("RIOT_INTERIM").as_deref(), false);
        config.static_data = StaticDataSettings {
            linking: parse_flag(lookup("RIOT_STATICDATA_LINKING").as_deref(), false),
            locale: lookup("RIOT_STATICDATA_LOCALE"),
            version: lookup("RIOT_STATICDATA_VERSION"),
        };
        config.cache_calls = parse_flag(lookup("RIOT_CACHE_CALLS").as_deref(), true);

        if let Some(dir) = lookup("RIOT_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        config.base_url = lookup("RIOT_BASE_URL");
        if let Some(url) = lookup("DDRAGON_URL") {
            config.ddragon_url = url;
        }

        if let Some(rate) = lookup("RIOT_RATE_PER_SECOND") {
            config.rate_per_second = rate
                .parse()
                .ok()
                .filter(|r: &u32| *r > 0)
                .ok_or_else(|| {
                    LeagueApiError::ConfigError(format!("RIOT_RATE_PER_SECOND is not a positive number: {}", rate))
                })?;
        }

        Ok(config)
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_tournament_key(mut self, key: impl Into<String>) -> Self {
        self.tournament_key = Some(key.into());
        self
    }

    pub fn with_interim(mut self, interim: bool) -> Self {
        self.interim = interim;
        self
    }

    pub fn with_static_data(mut self, static_data: StaticDataSettings) -> Self {
        self.static_data = static_data;
        self
    }

    pub fn with_cache_calls(mut self, cache_calls: bool) -> Self {
        self.cache_calls = cache_calls;
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_ddragon_url(mut self, url: impl Into<String>) -> Self {
        self.ddragon_url = url.into();
        self
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".league_api")
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, LeagueApiError::ConfigError(_)));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = Config::from_lookup(lookup(&[("RIOT_API_KEY", "RGAPI-test")])).unwrap();

        assert_eq!(config.api_key, "RGAPI-test");
        assert_eq!(config.region, Region::NorthAmerica);
        assert!(!config.static_data.linking);
        assert!(config.cache_calls);
        assert_eq!(config.ddragon_url, DEFAULT_DDRAGON_URL);
        assert_eq!(config.rate_per_second, 20);
    }

    #[test]
    fn reads_static_data_settings() {
        let config = Config::from_lookup(lookup(&[
            ("RIOT_API_KEY", "k"),
            ("RIOT_REGION", "euw"),
            ("RIOT_STATICDATA_LINKING", "Yes"),
            ("RIOT_STATICDATA_LOCALE", "cs_CZ"),
            ("RIOT_STATICDATA_VERSION", "14.1.1"),
            ("RIOT_CACHE_CALLS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.region, Region::EuropeWest);
        assert_eq!(
            config.static_data,
            StaticDataSettings {
                linking: true,
                locale: Some("cs_CZ".to_string()),
                version: Some("14.1.1".to_string()),
            }
        );
        assert!(!config.cache_calls);
    }

    #[test]
    fn rejects_zero_rate() {
        let err = Config::from_lookup(lookup(&[("RIOT_API_KEY", "k"), ("RIOT_RATE_PER_SECOND", "0")]))
            .unwrap_err();
        assert!(matches!(err, LeagueApiError::ConfigError(_)));
    }
}
