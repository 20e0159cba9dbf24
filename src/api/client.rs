use crate::cache::{CallCache, DiskCache};
use crate::config::Config;
use crate::error::{ApiResult, LeagueApiError};
use crate::objects::linkable::StaticDataSource;
use crate::objects::{self, ApiObject};
use crate::rate_limit::RateLimits;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use super::endpoints::{KeyKind, Method, Request, Route};

const MAX_RETRIES: u32 = 3;
const USER_AGENT: &str = concat!("league_api/", env!("CARGO_PKG_VERSION"));

pub struct LeagueApiClient {
    pub(crate) config: Config,
    agent: ureq::Agent,
    pub(crate) limits: RateLimits,
    pub(crate) calls: CallCache,
    pub(crate) documents: DiskCache,
}

impl LeagueApiClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build();

        LeagueApiClient {
            limits: RateLimits::new(config.rate_per_second),
            calls: CallCache::new(),
            documents: DiskCache::new(config.cache_dir.clone()),
            agent,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Requests made so far, per resource.
    pub fn usage(&self) -> BTreeMap<&'static str, u32> {
        self.limits.usage()
    }

    pub fn clear_cache(&self) {
        self.calls.clear();
    }

    pub(crate) fn platform(&self) -> Route {
        Route::Platform(self.config.region)
    }

    pub fn url(&self, request: &Request) -> String {
        let base = match &self.config.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.riotgames.com", request.route.host()),
        };
        format!("{}{}", base, request.target())
    }

    fn key_for(&self, kind: KeyKind) -> ApiResult<&str> {
        match kind {
            KeyKind::Standard => Ok(&self.config.api_key),
            KeyKind::Tournament => self.config.tournament_key.as_deref().ok_or_else(|| {
                LeagueApiError::ConfigError("RIOT_TOURNAMENT_KEY is required for tournament endpoints".to_string())
            }),
        }
    }

    /// Executes `request`, serving cacheable GETs from the call cache.
    pub fn execute(&self, request: &Request) -> ApiResult<Value> {
        let key = self.key_for(request.key)?;
        let url = self.url(request);
        let cacheable = self.config.cache_calls && request.is_cacheable();

        if cacheable {
            if let Some(hit) = self.calls.get(&url) {
                tracing::debug!("[LEAGUE_API] cache hit {}", url);
                return Ok(hit);
            }
        }

        self.limits.wait(request.resource.name);
        tracing::trace!("[LEAGUE_API] {} {}", request.method.as_str(), url);

        let body = self.send(request.method, &url, Some(key), request.body.as_ref())?;

        if cacheable {
            self.calls.put(&url, body.clone(), request.resource.cache_ttl);
        }

        Ok(body)
    }

    pub(crate) fn send(
        &self,
        method: Method,
        url: &str,
        key: Option<&str>,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let mut retry_count = 0;

        loop {
            let mut request = self.agent.request(method.as_str(), url);
            if let Some(key) = key {
                request = request.set("X-Riot-Token", key);
            }

            let response = match body {
                Some(body) => request.send_json(body),
                None => request.call(),
            };

            match response {
                Ok(resp) => return read_body(resp),
                Err(ureq::Error::Status(429, resp)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(LeagueApiError::RateLimited);
                    }
                    let wait = retry_after(&resp)
                        .unwrap_or_else(|| Duration::from_millis(2000 * (retry_count + 1) as u64));
                    tracing::warn!("rate limited on {}, waiting {:?} before retry", url, wait);
                    thread::sleep(wait);
                    retry_count += 1;
                }
                Err(ureq::Error::Status(status, resp)) => {
                    let message = error_message(resp.into_string().unwrap_or_default());
                    return Err(status_error(status, url, message));
                }
                Err(e) => return Err(LeagueApiError::HttpError(e.to_string())),
            }
        }
    }

    fn source(&self) -> &dyn StaticDataSource {
        self
    }

    pub fn fetch<T: ApiObject>(&self, request: &Request) -> ApiResult<T> {
        let data = self.execute(request)?;
        if data.is_null() {
            return Err(LeagueApiError::NotFound(format!("no content at {}", request.path)));
        }
        objects::from_value(data, Some(self.source()))
    }

    pub fn fetch_list<T: ApiObject>(&self, request: &Request) -> ApiResult<Vec<T>> {
        let data = self.execute(request)?;
        objects::from_value_list(data, Some(self.source()))
    }

    /// For scalars and id lists that are not API objects.
    pub fn fetch_raw<T: DeserializeOwned>(&self, request: &Request) -> ApiResult<T> {
        let data = self.execute(request)?;
        serde_json::from_value(data).map_err(|e| LeagueApiError::JsonError(e.to_string()))
    }
}

fn read_body(resp: ureq::Response) -> ApiResult<Value> {
    let text = resp
        .into_string()
        .map_err(|e| LeagueApiError::HttpError(e.to_string()))?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| LeagueApiError::JsonError(e.to_string()))
}

fn retry_after(resp: &ureq::Response) -> Option<Duration> {
    resp.header("Retry-After")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Pulls `status.message` out of a Riot error body, if it has one.
fn error_message(body: String) -> String {
    serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| {
            v.pointer("/status/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or(body)
}

fn status_error(status: u16, url: &str, message: String) -> LeagueApiError {
    match status {
        404 => LeagueApiError::NotFound(url.to_string()),
        500..=599 => LeagueApiError::ServerError { status, message },
        _ => LeagueApiError::RequestError { status, message },
    }
}
