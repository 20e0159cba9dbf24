use colored::*;
use league_api::objects::{
    ChampionInfo, ChampionMasteryDto, CurrentGameInfo, FeaturedGames, LeagueEntryDto,
    LeagueListDto, Linked, MatchDto, MatchTimelineDto, PlatformDataDto, StaticChampionDto,
    SummonerDto,
};
use std::collections::BTreeMap;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MasteryRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    level: String,
    points: String,
    chest: String,
}

#[derive(Tabled)]
struct EntryRow {
    queue: String,
    rank: String,
    lp: String,
    record: String,
    win_rate: String,
}

#[derive(Tabled)]
struct LadderRow {
    #[tabled(rename = "#")]
    position: String,
    summoner: String,
    lp: String,
    record: String,
}

#[derive(Tabled)]
struct ParticipantRow {
    team: String,
    summoner: String,
    champion: String,
}

#[derive(Tabled)]
struct ScoreRow {
    team: String,
    summoner: String,
    champion: String,
    kda: String,
    gold: String,
}

#[derive(Tabled)]
struct EventRow {
    time: String,
    event: String,
    detail: String,
}

#[derive(Tabled)]
struct FeaturedRow {
    game: String,
    mode: String,
    length: String,
    players: String,
}

#[derive(Tabled)]
struct UsageRow {
    resource: String,
    requests: String,
}

fn print_header(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

/// Champion name when linked, the raw id otherwise.
fn champion_label(champion_id: i64, linked: &Linked<StaticChampionDto>) -> String {
    match linked.resolved() {
        Some(champion) => champion.name.clone(),
        None => champion_id.to_string(),
    }
}

fn team_label(team_id: i64) -> String {
    match team_id {
        100 => "Blue".blue().to_string(),
        200 => "Red".red().to_string(),
        other => other.to_string(),
    }
}

pub fn display_summoner(summoner: &SummonerDto) {
    print_header(&format!("Summoner {}", summoner.name), 60);
    println!("{} {}", "Level:".bold(), summoner.summoner_level);
    println!("{} {}", "Summoner id:".bold(), summoner.id);
    println!("{} {}", "Account id:".bold(), summoner.account_id);
    println!("{} {}", "PUUID:".bold(), summoner.puuid);
    println!("{} {}\n", "Profile icon:".bold(), summoner.profile_icon_id);
}

pub fn display_masteries(masteries: &[ChampionMasteryDto]) {
    print_header("Champion Mastery", 60);

    if masteries.is_empty() {
        println!("{}", "No champion mastery recorded".yellow());
        return;
    }

    let rows: Vec<MasteryRow> = masteries
        .iter()
        .enumerate()
        .map(|(idx, mastery)| MasteryRow {
            rank: format!("#{}", idx + 1),
            champion: champion_label(mastery.champion_id, &mastery.static_data),
            level: mastery.champion_level.to_string(),
            points: mastery.champion_points.to_string(),
            chest: if mastery.chest_granted {
                "yes".green().to_string()
            } else {
                "no".to_string()
            },
        })
        .collect();

    print_table(rows);
}

pub fn display_mastery_score(summoner_id: &str, score: i64) {
    println!("{} {} for {}", "Mastery score:".bold(), score.to_string().green(), summoner_id);
}

pub fn display_league_entries(entries: &[LeagueEntryDto]) {
    print_header("Ranked Entries", 60);

    if entries.is_empty() {
        println!("{}", "Unranked".yellow());
        return;
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|entry| EntryRow {
            queue: entry.queue_type.clone(),
            rank: format!("{} {}", entry.tier, entry.rank),
            lp: entry.league_points.to_string(),
            record: format!("{}W / {}L", entry.wins, entry.losses),
            win_rate: format!("{:.1}%", entry.win_rate() * 100.0),
        })
        .collect();

    print_table(rows);
}

pub fn display_league(league: &LeagueListDto, top_n: usize) {
    print_header(&format!("{} {} ({})", league.tier, league.name, league.queue), 60);

    let mut entries: Vec<_> = league.entries.iter().collect();
    entries.sort_by(|a, b| b.league_points.cmp(&a.league_points));

    let rows: Vec<LadderRow> = entries
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(idx, item)| LadderRow {
            position: format!("#{}", idx + 1),
            summoner: item.summoner_name.clone(),
            lp: item.league_points.to_string(),
            record: format!("{}W / {}L", item.wins, item.losses),
        })
        .collect();

    print_table(rows);
}

pub fn display_current_game(game: &CurrentGameInfo) {
    print_header(
        &format!("Live game {} ({}, {}s)", game.game_id, game.game_mode, game.game_length),
        60,
    );

    let rows: Vec<ParticipantRow> = game
        .into_iter()
        .map(|participant| ParticipantRow {
            team: team_label(participant.team_id),
            summoner: participant.summoner_name.clone(),
            champion: champion_label(participant.champion_id, &participant.static_data),
        })
        .collect();

    print_table(rows);
}

pub fn display_match(game: &MatchDto) {
    print_header(
        &format!("Match {} ({}, {}s)", game.game_id, game.game_mode, game.game_duration),
        60,
    );

    let rows: Vec<ScoreRow> = game
        .into_iter()
        .map(|participant| {
            let stats = participant.stats.clone().unwrap_or_default();
            ScoreRow {
                team: team_label(participant.team_id as i64),
                summoner: game
                    .player(participant.participant_id)
                    .map(|p| p.summoner_name.clone())
                    .unwrap_or_else(|| format!("#{}", participant.participant_id)),
                champion: champion_label(participant.champion_id, &participant.static_data),
                kda: format!("{}/{}/{}", stats.kills, stats.deaths, stats.assists),
                gold: stats.gold_earned.to_string(),
            }
        })
        .collect();

    print_table(rows);

    if let Some(winner) = game.winner() {
        display_success(&format!("Winner: {}", team_label(winner.team_id as i64)));
    }
}

pub fn display_timeline(timeline: &MatchTimelineDto) {
    print_header(&format!("Timeline ({} frames)", timeline.frames.len()), 60);

    let rows: Vec<EventRow> = timeline
        .events()
        .filter(|event| event.kind == "CHAMPION_KILL" || event.kind == "ELITE_MONSTER_KILL" || event.kind == "BUILDING_KILL")
        .map(|event| EventRow {
            time: format!("{}:{:02}", event.timestamp / 60_000, event.timestamp / 1000 % 60),
            event: event.kind.clone(),
            detail: match (event.killer_id, event.victim_id) {
                (Some(killer), Some(victim)) => format!("{} killed {}", killer, victim),
                (Some(killer), None) => {
                    let target = event
                        .monster_type
                        .as_deref()
                        .or(event.building_type.as_deref())
                        .unwrap_or("objective");
                    format!("{} took {}", killer, target)
                }
                _ => String::new(),
            },
        })
        .collect();

    if rows.is_empty() {
        display_info("No kills recorded");
        return;
    }

    print_table(rows);
}

pub fn display_featured_games(featured: &FeaturedGames) {
    print_header("Featured Games", 60);

    let rows: Vec<FeaturedRow> = featured
        .game_list
        .iter()
        .map(|game| FeaturedRow {
            game: game.game_id.to_string(),
            mode: game.game_mode.clone(),
            length: format!("{}s", game.game_length),
            players: game
                .into_iter()
                .map(|p| p.summoner_name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    print_table(rows);
}

pub fn display_rotations(info: &ChampionInfo) {
    print_header("Free Champion Rotation", 60);
    println!("{} {:?}", "Everyone:".bold(), info.free_champion_ids);
    println!(
        "{} {:?} (up to level {})\n",
        "New players:".bold(),
        info.free_champion_ids_for_new_players,
        info.max_new_player_level
    );
}

pub fn display_platform_status(status: &PlatformDataDto, locale: &str) {
    print_header(&format!("{} ({})", status.name, status.id), 60);

    if status.maintenances.is_empty() && status.incidents.is_empty() {
        display_success("No maintenances or incidents");
        return;
    }

    for maintenance in &status.maintenances {
        println!(
            "{} {}",
            "Maintenance:".yellow().bold(),
            maintenance.title(locale).unwrap_or("(untitled)")
        );
    }
    for incident in &status.incidents {
        println!(
            "{} {}",
            "Incident:".red().bold(),
            incident.title(locale).unwrap_or("(untitled)")
        );
    }
    println!();
}

pub fn display_static_champion(champion: &StaticChampionDto) {
    print_header(&format!("{}, {}", champion.name, champion.title), 60);
    println!("{} {}", "Key:".bold(), champion.key);
    println!("{} {}", "Tags:".bold(), champion.tags.join(", "));
    if !champion.partype.is_empty() {
        println!("{} {}", "Resource:".bold(), champion.partype);
    }
    if !champion.blurb.is_empty() {
        println!("\n{}", champion.blurb);
    }
    if !champion.spells.is_empty() {
        println!("\n{}", "Spells".bold().yellow());
        for spell in &champion.spells {
            println!("• {}", spell.name);
        }
    }
    println!();
}

pub fn display_versions(versions: &[String], limit: usize) {
    print_header("Data Dragon Versions", 40);
    for version in versions.iter().take(limit) {
        println!("• {}", version);
    }
    println!();
}

/// Per-resource request counts of this session.
pub fn display_usage(usage: &BTreeMap<&'static str, u32>) {
    let total: u32 = usage.values().sum();
    if total == 0 {
        display_info("No requests made");
        return;
    }

    let rows: Vec<UsageRow> = usage
        .iter()
        .map(|(resource, count)| UsageRow {
            resource: resource.to_string(),
            requests: count.to_string(),
        })
        .collect();

    println!("\n{}", "API usage".bold());
    print_table(rows);
    println!("{} {}\n", "Total:".bold(), total);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
