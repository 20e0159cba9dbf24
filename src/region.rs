use std::fmt;
use std::str::FromStr;

use crate::error::LeagueApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Brasil,
    EuropeEast,
    EuropeWest,
    Japan,
    Korea,
    LamericaNorth,
    LamericaSouth,
    NorthAmerica,
    Oceania,
    Turkey,
    Russia,
    Philippines,
    Singapore,
    Thailand,
    Taiwan,
    Vietnam,
}

/// Regions allowed when registering a tournament provider.
pub const TOURNAMENT_REGIONS: [Region; 10] = [
    Region::Brasil,
    Region::EuropeEast,
    Region::EuropeWest,
    Region::Japan,
    Region::LamericaSouth,
    Region::LamericaNorth,
    Region::NorthAmerica,
    Region::Oceania,
    Region::Russia,
    Region::Turkey,
];

const ALL: [Region; 16] = [
    Region::Brasil,
    Region::EuropeEast,
    Region::EuropeWest,
    Region::Japan,
    Region::Korea,
    Region::LamericaNorth,
    Region::LamericaSouth,
    Region::NorthAmerica,
    Region::Oceania,
    Region::Turkey,
    Region::Russia,
    Region::Philippines,
    Region::Singapore,
    Region::Thailand,
    Region::Taiwan,
    Region::Vietnam,
];

impl Region {
    pub fn short_name(&self) -> &'static str {
        match self {
            Region::Brasil => "br",
            Region::EuropeEast => "eune",
            Region::EuropeWest => "euw",
            Region::Japan => "jp",
            Region::Korea => "kr",
            Region::LamericaNorth => "lan",
            Region::LamericaSouth => "las",
            Region::NorthAmerica => "na",
            Region::Oceania => "oce",
            Region::Turkey => "tr",
            Region::Russia => "ru",
            Region::Philippines => "ph",
            Region::Singapore => "sg",
            Region::Thailand => "th",
            Region::Taiwan => "tw",
            Region::Vietnam => "vn",
        }
    }

    /// Platform id used as the host prefix of platform-scoped endpoints.
    pub fn platform(&self) -> &'static str {
        match self {
            Region::Brasil => "br1",
            Region::EuropeEast => "eun1",
            Region::EuropeWest => "euw1",
            Region::Japan => "jp1",
            Region::Korea => "kr",
            Region::LamericaNorth => "la1",
            Region::LamericaSouth => "la2",
            Region::NorthAmerica => "na1",
            Region::Oceania => "oc1",
            Region::Turkey => "tr1",
            Region::Russia => "ru",
            Region::Philippines => "ph2",
            Region::Singapore => "sg2",
            Region::Thailand => "th2",
            Region::Taiwan => "tw2",
            Region::Vietnam => "vn2",
        }
    }

    pub fn regional_routing(&self) -> &'static str {
        match self {
            Region::NorthAmerica | Region::Brasil | Region::LamericaNorth | Region::LamericaSouth => {
                "americas"
            }
            Region::EuropeWest | Region::EuropeEast | Region::Turkey | Region::Russia => "europe",
            Region::Korea | Region::Japan => "asia",
            Region::Oceania
            | Region::Philippines
            | Region::Singapore
            | Region::Thailand
            | Region::Taiwan
            | Region::Vietnam => "sea",
        }
    }

    pub fn is_tournament_region(&self) -> bool {
        TOURNAMENT_REGIONS.contains(self)
    }
}

impl FromStr for Region {
    type Err = LeagueApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL.iter()
            .copied()
            .find(|r| r.short_name() == wanted || r.platform() == wanted)
            .ok_or_else(|| LeagueApiError::ConfigError(format!("Unknown region: {}", s)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_names_and_platform_ids() {
        assert_eq!("euw".parse::<Region>().unwrap(), Region::EuropeWest);
        assert_eq!("EUW1".parse::<Region>().unwrap(), Region::EuropeWest);
        assert_eq!(" na1 ".parse::<Region>().unwrap(), Region::NorthAmerica);
        assert_eq!("kr".parse::<Region>().unwrap(), Region::Korea);
    }

    #[test]
    fn unknown_region_is_a_config_error() {
        let err = "atlantis".parse::<Region>().unwrap_err();
        assert!(matches!(err, LeagueApiError::ConfigError(_)));
    }

    #[test]
    fn routes_platforms_to_regional_clusters() {
        assert_eq!(Region::LamericaSouth.regional_routing(), "americas");
        assert_eq!(Region::Russia.regional_routing(), "europe");
        assert_eq!(Region::Japan.regional_routing(), "asia");
        assert_eq!(Region::Oceania.regional_routing(), "sea");
    }

    #[test]
    fn korea_is_not_a_tournament_region() {
        assert!(!Region::Korea.is_tournament_region());
        assert!(Region::Oceania.is_tournament_region());
    }
}
