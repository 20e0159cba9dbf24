//! Data Dragon static data.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{strict, ApiObject};

// champion.json
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticChampionListDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    pub version: String,
    #[serde(deserialize_with = "strict::map")]
    pub data: HashMap<String, StaticChampionDto>,
}

impl ApiObject for StaticChampionListDto {
    const CLASS: &'static str = "StaticChampionListDto";
}

impl StaticChampionListDto {
    pub fn find_by_key(&self, champion_id: i64) -> Option<&StaticChampionDto> {
        self.data
            .values()
            .find(|champion| champion.numeric_key() == Some(champion_id))
    }

    /// Re-keys `data` by numeric champion key instead of champion id.
    pub fn into_data_by_key(mut self) -> Self {
        self.data = self
            .data
            .into_values()
            .map(|champion| (champion.key.clone(), champion))
            .collect();
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StaticChampionDto {
    pub version: String,
    pub id: String,
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    #[serde(deserialize_with = "strict::optional")]
    pub info: Option<StaticChampionInfoDto>,
    #[serde(deserialize_with = "strict::optional")]
    pub image: Option<StaticImageDto>,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: HashMap<String, f64>,

    // champion/{id}.json only
    pub lore: Option<String>,
    pub allytips: Vec<String>,
    pub enemytips: Vec<String>,
    #[serde(deserialize_with = "strict::list")]
    pub skins: Vec<StaticSkinDto>,
    #[serde(deserialize_with = "strict::list")]
    pub spells: Vec<StaticChampionSpellDto>,
    #[serde(deserialize_with = "strict::optional")]
    pub passive: Option<StaticPassiveDto>,
    pub recommended: Vec<Value>,
}

impl ApiObject for StaticChampionDto {
    const CLASS: &'static str = "StaticChampionDto";
}

impl StaticChampionDto {
    /// Stand-in for champion id `-1`, used by the API for "no champion".
    pub fn none() -> Self {
        StaticChampionDto {
            key: "-1".to_string(),
            name: "None".to_string(),
            ..Default::default()
        }
    }

    pub fn numeric_key(&self) -> Option<i64> {
        self.key.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticChampionInfoDto {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

impl ApiObject for StaticChampionInfoDto {
    const CLASS: &'static str = "StaticChampionInfoDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticImageDto {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl ApiObject for StaticImageDto {
    const CLASS: &'static str = "StaticImageDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticSkinDto {
    pub id: String,
    pub num: i32,
    pub name: String,
    pub chromas: bool,
}

impl ApiObject for StaticSkinDto {
    const CLASS: &'static str = "StaticSkinDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticPassiveDto {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "strict::optional")]
    pub image: Option<StaticImageDto>,
}

impl ApiObject for StaticPassiveDto {
    const CLASS: &'static str = "StaticPassiveDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StaticChampionSpellDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    #[serde(deserialize_with = "strict::optional")]
    pub leveltip: Option<StaticLevelTipDto>,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<f64>,
    pub cost_burn: String,
    pub datavalues: HashMap<String, Value>,
    pub effect: Vec<Option<Vec<f64>>>,
    pub effect_burn: Vec<Option<String>>,
    pub vars: Vec<Value>,
    pub cost_type: String,
    pub maxammo: String,
    pub range: Vec<f64>,
    pub range_burn: String,
    #[serde(deserialize_with = "strict::optional")]
    pub image: Option<StaticImageDto>,
    pub resource: Option<String>,
}

impl ApiObject for StaticChampionSpellDto {
    const CLASS: &'static str = "StaticChampionSpellDto";
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticLevelTipDto {
    pub label: Vec<String>,
    pub effect: Vec<String>,
}

impl ApiObject for StaticLevelTipDto {
    const CLASS: &'static str = "StaticLevelTipDto";
}
