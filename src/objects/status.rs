use serde::{Deserialize, Serialize};

use super::{strict, ApiObject};

// LoL Status V4 response. Field names are snake_case on the wire.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformDataDto {
    pub id: String,
    pub name: String,
    pub locales: Vec<String>,
    #[serde(deserialize_with = "strict::list")]
    pub maintenances: Vec<StatusDto>,
    #[serde(deserialize_with = "strict::list")]
    pub incidents: Vec<StatusDto>,
}

impl ApiObject for PlatformDataDto {
    const CLASS: &'static str = "PlatformDataDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusDto {
    pub id: i64,
    pub maintenance_status: Option<String>,
    pub incident_severity: Option<String>,
    #[serde(deserialize_with = "strict::list")]
    pub titles: Vec<ContentDto>,
    #[serde(deserialize_with = "strict::list")]
    pub updates: Vec<UpdateDto>,
    pub created_at: String,
    pub archive_at: Option<String>,
    pub updated_at: Option<String>,
    pub platforms: Vec<String>,
}

impl ApiObject for StatusDto {
    const CLASS: &'static str = "StatusDto";
}

impl StatusDto {
    /// Title in `locale`, falling back to the first available one.
    pub fn title(&self, locale: &str) -> Option<&str> {
        self.titles
            .iter()
            .find(|t| t.locale == locale)
            .or_else(|| self.titles.first())
            .map(|t| t.content.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentDto {
    pub locale: String,
    pub content: String,
}

impl ApiObject for ContentDto {
    const CLASS: &'static str = "ContentDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateDto {
    pub id: i64,
    pub author: String,
    pub publish: bool,
    pub publish_locations: Vec<String>,
    #[serde(deserialize_with = "strict::list")]
    pub translations: Vec<ContentDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl ApiObject for UpdateDto {
    const CLASS: &'static str = "UpdateDto";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::from_value;
    use serde_json::json;

    #[test]
    fn title_falls_back_to_first_locale() {
        let data: PlatformDataDto = from_value(
            json!({
                "id": "EUW1",
                "incidents": [{
                    "id": 7,
                    "incident_severity": "warning",
                    "titles": [
                        { "locale": "de_DE", "content": "Probleme" },
                        { "locale": "en_US", "content": "Issues" }
                    ]
                }]
            }),
            None,
        )
        .unwrap();

        let incident = &data.incidents[0];
        assert_eq!(incident.title("en_US"), Some("Issues"));
        assert_eq!(incident.title("cs_CZ"), Some("Probleme"));
    }
}
