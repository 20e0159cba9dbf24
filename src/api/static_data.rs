// Static data served by the Data Dragon CDN.

use serde_json::Value;

use super::client::LeagueApiClient;
use super::endpoints::{Method, STATIC_DATA};
use crate::config::StaticDataSettings;
use crate::error::{ApiResult, LeagueApiError};
use crate::objects::linkable::StaticDataSource;
use crate::objects::{self, StaticChampionDto, StaticChampionListDto};

impl LeagueApiClient {
    /// Every published version, latest first.
    pub fn get_static_versions(&self) -> ApiResult<Vec<String>> {
        let doc = self.ddragon_get("/api/versions.json", None)?;
        serde_json::from_value(doc).map_err(|e| LeagueApiError::JsonError(e.to_string()))
    }

    pub fn get_static_champions(
        &self,
        data_by_key: bool,
        locale: &str,
        version: Option<&str>,
    ) -> ApiResult<StaticChampionListDto> {
        let version = self.resolve_version(version)?;
        let path = format!("/cdn/{}/data/{}/champion.json", version, locale);
        let key = format!("ddragon/{}/{}/champion", version, locale);

        let list: StaticChampionListDto = objects::from_value(self.ddragon_get(&path, Some(&key))?, None)?;
        Ok(if data_by_key { list.into_data_by_key() } else { list })
    }

    /// Looks a champion up by numeric key. `-1` is the "no champion" placeholder
    /// used in ban lists.
    pub fn get_static_champion(
        &self,
        champion_id: i64,
        extended: bool,
        locale: &str,
        version: Option<&str>,
    ) -> ApiResult<StaticChampionDto> {
        if champion_id == -1 {
            return Ok(StaticChampionDto::none());
        }

        let version = self.resolve_version(version)?;
        let list = self.get_static_champions(false, locale, Some(&version))?;
        let champion = list.find_by_key(champion_id).cloned().ok_or_else(|| {
            LeagueApiError::StaticDataError(format!(
                "no champion with key {} in {} ({})",
                champion_id, version, locale
            ))
        })?;

        if !extended {
            return Ok(champion);
        }

        let path = format!("/cdn/{}/data/{}/champion/{}.json", version, locale, champion.id);
        let key = format!("ddragon/{}/{}/champion/{}", version, locale, champion.id);
        let doc = self.ddragon_get(&path, Some(&key))?;

        let detail = doc
            .get("data")
            .and_then(|data| data.get(&champion.id))
            .cloned()
            .ok_or_else(|| {
                LeagueApiError::StaticDataError(format!("{} is missing from its detail document", champion.id))
            })?;

        let mut detail: StaticChampionDto = objects::from_value(detail, None)?;
        if detail.version.is_empty() {
            detail.version = version;
        }
        Ok(detail)
    }

    fn resolve_version(&self, version: Option<&str>) -> ApiResult<String> {
        if let Some(version) = version {
            return Ok(version.to_string());
        }

        self.get_static_versions()?
            .into_iter()
            .next()
            .ok_or_else(|| LeagueApiError::StaticDataError("Data Dragon lists no versions".to_string()))
    }

    /// GETs a Data Dragon document. Versioned documents pass a `disk_key` and
    /// are kept on disk as well as in memory.
    fn ddragon_get(&self, path: &str, disk_key: Option<&str>) -> ApiResult<Value> {
        let url = format!("{}{}", self.config.ddragon_url.trim_end_matches('/'), path);
        let caching = self.config.cache_calls;

        if caching {
            if let Some(hit) = self.calls.get(&url) {
                return Ok(hit);
            }
            if let Some(doc) = disk_key.and_then(|key| self.documents.load(key)) {
                tracing::debug!("[LEAGUE_API] disk cache hit {}", path);
                self.calls.put(&url, doc.clone(), STATIC_DATA.cache_ttl);
                return Ok(doc);
            }
        }

        self.limits.record(STATIC_DATA.name);
        tracing::trace!("[LEAGUE_API] GET {}", url);
        let doc = self.send(Method::Get, &url, None, None)?;

        if caching {
            self.calls.put(&url, doc.clone(), STATIC_DATA.cache_ttl);
            if let Some(key) = disk_key {
                if let Err(e) = self.documents.save(key, &doc) {
                    tracing::warn!("could not persist {}: {}", key, e);
                }
            }
        }

        Ok(doc)
    }
}

impl StaticDataSource for LeagueApiClient {
    fn static_data_settings(&self) -> &StaticDataSettings {
        &self.config.static_data
    }

    fn static_champion(
        &self,
        champion_id: i64,
        extended: bool,
        locale: &str,
        version: Option<&str>,
    ) -> ApiResult<StaticChampionDto> {
        self.get_static_champion(champion_id, extended, locale, version)
    }
}
