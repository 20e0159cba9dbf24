// Resource definitions and the request builder shared by every endpoint.

use serde_json::Value;

use crate::region::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub version: &'static str,
    /// Seconds a GET response may be served from the call cache. Zero disables caching.
    pub cache_ttl: i64,
}

pub const CHAMPION: Resource = Resource { name: "champion", version: "v3", cache_ttl: 60 * 10 };
pub const CHAMPION_MASTERY: Resource = Resource { name: "champion-mastery", version: "v4", cache_ttl: 60 * 60 };
pub const LEAGUE: Resource = Resource { name: "league", version: "v4", cache_ttl: 60 * 10 };
pub const LEAGUE_EXP: Resource = Resource { name: "league-exp", version: "v4", cache_ttl: 60 * 10 };
pub const STATIC_DATA: Resource = Resource { name: "static-data", version: "", cache_ttl: 60 * 60 * 24 };
pub const STATUS: Resource = Resource { name: "status", version: "v4", cache_ttl: 60 };
pub const MATCH: Resource = Resource { name: "match", version: "v4", cache_ttl: 0 };
pub const SPECTATOR: Resource = Resource { name: "spectator", version: "v4", cache_ttl: 0 };
pub const SUMMONER: Resource = Resource { name: "summoner", version: "v4", cache_ttl: 60 * 60 };
pub const THIRD_PARTY_CODE: Resource = Resource { name: "third-party-code", version: "v4", cache_ttl: 0 };
pub const TOURNAMENT: Resource = Resource { name: "tournament", version: "v4", cache_ttl: 0 };
pub const TOURNAMENT_STUB: Resource = Resource { name: "tournament-stub", version: "v4", cache_ttl: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Platform host of the region, e.g. `euw1`.
    Platform(Region),
    /// Tournament endpoints always live on `americas`.
    Americas,
}

impl Route {
    pub fn host(&self) -> &'static str {
        match self {
            Route::Platform(region) => region.platform(),
            Route::Americas => "americas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Standard,
    Tournament,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub resource: Resource,
    pub route: Route,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub key: KeyKind,
}

impl Request {
    pub fn get(resource: Resource, route: Route, path: impl Into<String>) -> Self {
        Request {
            method: Method::Get,
            resource,
            route,
            path: path.into(),
            query: Vec::new(),
            body: None,
            key: KeyKind::Standard,
        }
    }

    pub fn post(resource: Resource, route: Route, path: impl Into<String>, body: Value) -> Self {
        Request {
            method: Method::Post,
            body: Some(body),
            ..Request::get(resource, route, path)
        }
    }

    pub fn put(resource: Resource, route: Route, path: impl Into<String>, body: Value) -> Self {
        Request {
            method: Method::Put,
            body: Some(body),
            ..Request::get(resource, route, path)
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Repeats `name` once per value.
    pub fn query_list<T: ToString>(mut self, name: &str, values: &[T]) -> Self {
        for value in values {
            self = self.query(name, value.to_string());
        }
        self
    }

    pub fn tournament_key(mut self) -> Self {
        self.key = KeyKind::Tournament;
        self
    }

    pub fn is_cacheable(&self) -> bool {
        self.method == Method::Get && self.resource.cache_ttl > 0
    }

    /// Path plus encoded query string.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query: Vec<String> = self
            .query
            .iter()
            .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_query_values_are_skipped() {
        let request = Request::get(MATCH, Route::Platform(Region::EuropeWest), "/lol/match/v4/matchlists/by-account/abc")
            .query_opt("beginIndex", Some(0))
            .query_opt::<i64>("endIndex", None);

        assert_eq!(request.target(), "/lol/match/v4/matchlists/by-account/abc?beginIndex=0");
    }

    #[test]
    fn list_values_repeat_the_key() {
        let request = Request::get(MATCH, Route::Platform(Region::Korea), "/m").query_list("queue", &[420, 440]);

        assert_eq!(request.target(), "/m?queue=420&queue=440");
    }

    #[test]
    fn query_values_are_encoded() {
        let request = Request::get(LEAGUE, Route::Platform(Region::Korea), "/x").query("name", "a b&c");
        assert_eq!(request.target(), "/x?name=a%20b%26c");
    }

    #[test]
    fn only_gets_with_ttl_are_cacheable() {
        let route = Route::Platform(Region::NorthAmerica);

        assert!(Request::get(SUMMONER, route, "/s").is_cacheable());
        assert!(!Request::get(SPECTATOR, route, "/s").is_cacheable());
        assert!(!Request::post(TOURNAMENT, Route::Americas, "/t", json!({})).is_cacheable());
    }

    #[test]
    fn routes_pick_hosts() {
        assert_eq!(Route::Platform(Region::EuropeEast).host(), "eun1");
        assert_eq!(Route::Americas.host(), "americas");
    }
}
