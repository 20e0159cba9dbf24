//! Static-data linking.
//!
//! A [`Linkable`] object names one of its JSON fields as a foreign key into
//! static data and the accessor that resolves it. When the client has linking
//! enabled, the related object is fetched once while the response is being
//! built and kept in the object's own [`Linked`] slot.

use serde::Serialize;
use serde_json::Value;

use super::static_data::StaticChampionDto;
use super::ApiObject;
use crate::config::StaticDataSettings;
use crate::error::{ApiResult, LeagueApiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// The object was built without a client.
    NoClient,
    LinkingDisabled,
    /// The foreign-key field was not part of the response.
    FieldAbsent,
    /// The accessor could not be called or returned an error.
    ResolverFailed(String),
}

#[derive(Debug, Clone)]
pub enum Linked<T> {
    Resolved(T),
    Unresolved(UnresolvedReason),
}

impl<T> Default for Linked<T> {
    fn default() -> Self {
        Linked::Unresolved(UnresolvedReason::NoClient)
    }
}

impl<T> Linked<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Linked::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Linked::Resolved(data) => Some(data),
            Linked::Unresolved(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&UnresolvedReason> {
        match self {
            Linked::Resolved(_) => None,
            Linked::Unresolved(reason) => Some(reason),
        }
    }
}

/// Parameters an accessor may declare besides the foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticParam {
    Extended,
    DataByKey,
    Locale,
    Version,
}

/// Arguments handed to an accessor.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticArgs {
    pub key: Value,
    pub extended: bool,
    pub data_by_key: bool,
    pub locale: Option<String>,
    pub version: Option<String>,
}

pub type Invoke<T> = fn(&dyn StaticDataSource, &StaticArgs) -> ApiResult<T>;

pub struct StaticAccessor<T> {
    pub name: &'static str,
    pub params: &'static [StaticParam],
    pub default_locale: &'static str,
    pub default_version: Option<&'static str>,
    pub invoke: Invoke<T>,
}

impl<T> StaticAccessor<T> {
    /// Fills in the declared parameters from `settings`, falling back to the
    /// accessor defaults for locale and version.
    pub fn assemble(&self, key: Value, settings: &StaticDataSettings) -> StaticArgs {
        let mut args = StaticArgs {
            key,
            extended: false,
            data_by_key: false,
            locale: None,
            version: None,
        };

        for param in self.params {
            match param {
                StaticParam::Extended => args.extended = true,
                StaticParam::DataByKey => args.data_by_key = true,
                StaticParam::Locale => {
                    args.locale = Some(
                        settings
                            .locale
                            .clone()
                            .unwrap_or_else(|| self.default_locale.to_string()),
                    )
                }
                StaticParam::Version => {
                    args.version = settings
                        .version
                        .clone()
                        .or_else(|| self.default_version.map(str::to_string))
                }
            }
        }

        args
    }
}

/// Where linked static data comes from. Implemented by the API client.
pub trait StaticDataSource {
    fn static_data_settings(&self) -> &StaticDataSettings;

    fn static_champion(
        &self,
        champion_id: i64,
        extended: bool,
        locale: &str,
        version: Option<&str>,
    ) -> ApiResult<StaticChampionDto>;
}

pub const DEFAULT_LOCALE: &str = "en_US";

pub const STATIC_CHAMPION: StaticAccessor<StaticChampionDto> = StaticAccessor {
    name: "get_static_champion",
    params: &[StaticParam::Extended, StaticParam::Locale, StaticParam::Version],
    default_locale: DEFAULT_LOCALE,
    default_version: None,
    invoke: invoke_static_champion,
};

fn invoke_static_champion(
    source: &dyn StaticDataSource,
    args: &StaticArgs,
) -> ApiResult<StaticChampionDto> {
    let champion_id = args.key.as_i64().ok_or_else(|| {
        LeagueApiError::InvalidParameter(format!("champion id must be an integer, got {}", args.key))
    })?;
    let locale = args.locale.as_deref().unwrap_or(DEFAULT_LOCALE);

    source.static_champion(champion_id, args.extended, locale, args.version.as_deref())
}

pub trait Linkable: ApiObject {
    type Static: Serialize;

    /// JSON key holding the foreign key.
    const LINKED_FIELD: &'static str;

    fn accessor() -> StaticAccessor<Self::Static>;

    fn linked(&self) -> &Linked<Self::Static>;

    fn linked_mut(&mut self) -> &mut Linked<Self::Static>;

    /// Reads from the linked object, failing loudly when it was never resolved.
    fn linked_property<'a, R, F>(&'a self, property: &str, read: F) -> ApiResult<R>
    where
        F: FnOnce(&'a Self::Static) -> R,
    {
        match self.linked() {
            Linked::Resolved(data) => Ok(read(data)),
            Linked::Unresolved(_) => Err(unresolved::<Self>(property)),
        }
    }

    /// Reads the field called `property` on the linked object.
    fn get_linked(&self, property: &str) -> ApiResult<Value> {
        let data = self
            .linked()
            .resolved()
            .ok_or_else(|| unresolved::<Self>(property))?;

        let value = serde_json::to_value(data).map_err(|e| LeagueApiError::JsonError(e.to_string()))?;
        value
            .get(property)
            .cloned()
            .ok_or_else(|| unresolved::<Self>(property))
    }
}

fn unresolved<L: Linkable + ?Sized>(property: &str) -> LeagueApiError {
    LeagueApiError::UnresolvedLink {
        property: property.to_string(),
        class: L::CLASS,
    }
}

/// Runs the resolution for one object built from `data`.
pub fn resolve<L: Linkable>(data: &Value, source: Option<&dyn StaticDataSource>) -> Linked<L::Static> {
    let Some(source) = source else {
        return Linked::Unresolved(UnresolvedReason::NoClient);
    };

    let settings = source.static_data_settings();
    if !settings.linking {
        return Linked::Unresolved(UnresolvedReason::LinkingDisabled);
    }

    let Some(key) = data.get(L::LINKED_FIELD) else {
        tracing::debug!("{} has no {} field, not linking", L::CLASS, L::LINKED_FIELD);
        return Linked::Unresolved(UnresolvedReason::FieldAbsent);
    };

    let accessor = L::accessor();
    let args = accessor.assemble(key.clone(), settings);

    match (accessor.invoke)(source, &args) {
        Ok(linked) => Linked::Resolved(linked),
        Err(e) => {
            tracing::warn!(
                "linking {} through {}({}) failed: {}",
                L::CLASS,
                accessor.name,
                args.key,
                e
            );
            Linked::Unresolved(UnresolvedReason::ResolverFailed(e.to_string()))
        }
    }
}

pub fn link<L: Linkable>(object: &mut L, data: &Value, source: &dyn StaticDataSource) {
    *object.linked_mut() = resolve::<L>(data, Some(source));
}

/// Links every element of `items` against the matching entry of `data[field]`.
pub fn link_each<L: Linkable>(
    items: &mut [L],
    data: &Value,
    field: &str,
    source: &dyn StaticDataSource,
) {
    let Some(raw) = data.get(field).and_then(Value::as_array) else {
        return;
    };

    for (item, item_data) in items.iter_mut().zip(raw) {
        link(item, item_data, source);
    }
}
