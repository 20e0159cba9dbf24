use std::cell::RefCell;

use league_api::objects::linkable::StaticDataSource;
use league_api::objects::{
    from_value, ChampionMasteryDto, CurrentGameInfo, Linkable, Linked, MatchDto, MatchlistDto,
    StaticChampionDto, UnresolvedReason,
};
use league_api::{ApiResult, LeagueApiError, StaticDataSettings};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
struct Call {
    champion_id: i64,
    extended: bool,
    locale: String,
    version: Option<String>,
}

/// Serves champions from a fixed roster and records every call.
struct StubSource {
    settings: StaticDataSettings,
    calls: RefCell<Vec<Call>>,
}

impl StubSource {
    fn new(linking: bool) -> Self {
        StubSource {
            settings: StaticDataSettings {
                linking,
                ..Default::default()
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    fn with_locale(mut self, locale: &str, version: &str) -> Self {
        self.settings.locale = Some(locale.to_string());
        self.settings.version = Some(version.to_string());
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl StaticDataSource for StubSource {
    fn static_data_settings(&self) -> &StaticDataSettings {
        &self.settings
    }

    fn static_champion(
        &self,
        champion_id: i64,
        extended: bool,
        locale: &str,
        version: Option<&str>,
    ) -> ApiResult<StaticChampionDto> {
        self.calls.borrow_mut().push(Call {
            champion_id,
            extended,
            locale: locale.to_string(),
            version: version.map(str::to_string),
        });

        let (id, name, title) = match champion_id {
            266 => ("Aatrox", "Aatrox", "the Darkin Blade"),
            103 => ("Ahri", "Ahri", "the Nine-Tailed Fox"),
            _ => {
                return Err(LeagueApiError::StaticDataError(format!(
                    "no champion with key {}",
                    champion_id
                )))
            }
        };

        Ok(StaticChampionDto {
            id: id.to_string(),
            key: champion_id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            ..Default::default()
        })
    }
}

fn mastery(champion_id: Option<i64>) -> Value {
    let mut data = json!({
        "championLevel": 7,
        "championPoints": 250000,
        "chestGranted": true
    });
    if let Some(id) = champion_id {
        data["championId"] = json!(id);
    }
    data
}

#[test]
fn linking_disabled_leaves_link_unresolved() {
    let source = StubSource::new(false);

    let dto: ChampionMasteryDto = from_value(mastery(Some(266)), Some(&source)).unwrap();

    assert_eq!(dto.champion_points, 250000);
    assert_eq!(dto.static_data.reason(), Some(&UnresolvedReason::LinkingDisabled));
    assert!(source.calls().is_empty());

    let err = dto.get_linked("name").unwrap_err();
    assert_eq!(err.to_string(), "name not found on ChampionMasteryDto");
}

#[test]
fn no_source_means_no_client() {
    let dto: ChampionMasteryDto = from_value(mastery(Some(266)), None).unwrap();

    assert_eq!(dto.static_data.reason(), Some(&UnresolvedReason::NoClient));
    assert!(dto.linked_property("title", |c| c.title.clone()).is_err());
}

#[test]
fn linking_enabled_calls_resolver_once_with_the_foreign_key() {
    let source = StubSource::new(true);

    let dto: ChampionMasteryDto = from_value(mastery(Some(266)), Some(&source)).unwrap();

    assert_eq!(
        source.calls(),
        vec![Call {
            champion_id: 266,
            extended: true,
            locale: "en_US".to_string(),
            version: None,
        }]
    );
    assert!(dto.static_data.is_resolved());
    assert_eq!(dto.get_linked("name").unwrap(), json!("Aatrox"));
    assert_eq!(
        dto.linked_property("title", |c| c.title.clone()).unwrap(),
        "the Darkin Blade"
    );
}

#[test]
fn absent_foreign_key_skips_the_resolver() {
    let source = StubSource::new(true);

    let dto: ChampionMasteryDto = from_value(mastery(None), Some(&source)).unwrap();

    assert!(source.calls().is_empty());
    assert_eq!(dto.static_data.reason(), Some(&UnresolvedReason::FieldAbsent));
    assert!(dto.get_linked("name").is_err());
}

#[test]
fn configured_locale_and_version_are_passed_through() {
    let source = StubSource::new(true).with_locale("ko_KR", "14.3.1");

    let _: ChampionMasteryDto = from_value(mastery(Some(103)), Some(&source)).unwrap();

    assert_eq!(
        source.calls(),
        vec![Call {
            champion_id: 103,
            extended: true,
            locale: "ko_KR".to_string(),
            version: Some("14.3.1".to_string()),
        }]
    );
}

#[test]
fn instances_from_the_same_input_resolve_independently() {
    let source = StubSource::new(true);

    let first: ChampionMasteryDto = from_value(mastery(Some(266)), Some(&source)).unwrap();
    let mut second: ChampionMasteryDto = from_value(mastery(Some(266)), Some(&source)).unwrap();

    assert_eq!(source.calls().len(), 2);

    if let Linked::Resolved(champion) = second.linked_mut() {
        champion.name = "Changed".to_string();
    }

    assert_eq!(first.get_linked("name").unwrap(), json!("Aatrox"));
    assert_eq!(second.get_linked("name").unwrap(), json!("Changed"));
}

#[test]
fn resolver_failure_is_swallowed() {
    let source = StubSource::new(true);

    let dto: ChampionMasteryDto = from_value(mastery(Some(9999)), Some(&source)).unwrap();

    assert_eq!(source.calls().len(), 1);
    match dto.static_data.reason() {
        Some(UnresolvedReason::ResolverFailed(message)) => assert!(message.contains("9999")),
        other => panic!("unexpected link state: {:?}", other),
    }
}

#[test]
fn iterable_containers_link_each_element() {
    let source = StubSource::new(true);

    let game: CurrentGameInfo = from_value(
        json!({
            "gameId": 1,
            "participants": [
                { "championId": 266, "teamId": 100, "summonerName": "a" },
                { "championId": 103, "teamId": 200, "summonerName": "b" },
                { "teamId": 200, "summonerName": "c" }
            ]
        }),
        Some(&source),
    )
    .unwrap();

    let names: Vec<Option<String>> = game
        .into_iter()
        .map(|p| p.static_data.resolved().map(|c| c.name.clone()))
        .collect();

    assert_eq!(names, vec![Some("Aatrox".to_string()), Some("Ahri".to_string()), None]);
    assert_eq!(source.calls().len(), 2);
}

#[test]
fn matchlist_links_through_the_champion_field() {
    let source = StubSource::new(true);

    let matchlist: MatchlistDto = from_value(
        json!({
            "totalGames": 1,
            "matches": [{ "gameId": 42, "champion": 103, "queue": 420 }]
        }),
        Some(&source),
    )
    .unwrap();

    let reference = matchlist.into_iter().next().unwrap();
    assert_eq!(reference.get_linked("title").unwrap(), json!("the Nine-Tailed Fox"));
}

#[test]
fn match_participants_link_through_champion_id() {
    let source = StubSource::new(true);

    let game: MatchDto = from_value(
        json!({
            "gameId": 4242,
            "participants": [
                { "participantId": 1, "championId": 103, "teamId": 100 },
                { "participantId": 2, "championId": 9999, "teamId": 200 }
            ],
            "teams": [{ "teamId": 100, "win": "Win", "bans": [{ "championId": 266, "pickTurn": 1 }] }]
        }),
        Some(&source),
    )
    .unwrap();

    assert_eq!(source.calls().len(), 2);
    assert_eq!(game.participants[0].get_linked("name").unwrap(), json!("Ahri"));
    assert!(matches!(
        game.participants[1].static_data.reason(),
        Some(UnresolvedReason::ResolverFailed(_))
    ));
    assert_eq!(
        game.participants[1].get_linked("name").unwrap_err().to_string(),
        "name not found on ParticipantDto"
    );
}

#[test]
fn unknown_key_still_fails_with_linking_enabled() {
    let source = StubSource::new(true);

    let mut data = mastery(Some(266));
    data["favourite"] = json!(true);

    let err = from_value::<ChampionMasteryDto>(data, Some(&source)).unwrap_err();

    assert_eq!(err.to_string(), "Failed processing property favourite of ChampionMasteryDto");
    assert!(source.calls().is_empty());
}
