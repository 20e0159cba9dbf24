mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use display::output::*;
use indicatif::ProgressBar;
use league_api::objects::linkable::DEFAULT_LOCALE;
use league_api::{ApiResult, Config, LeagueApiClient};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "league_api")]
#[command(about = "Query the League of Legends API from the command line", long_about = None)]
struct Args {
    /// Region short name or platform id (default: RIOT_REGION, then na)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Link champion ids to their Data Dragon records
    #[arg(long, global = true)]
    link: bool,

    /// Static data locale, e.g. ko_KR
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Data Dragon version (default: latest)
    #[arg(long = "static-version", global = true)]
    static_version: Option<String>,

    /// Print per-resource request counts afterwards
    #[arg(long, global = true)]
    usage: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(subcommand)]
    Summoner(SummonerCommand),
    #[command(subcommand)]
    Champion(ChampionCommand),
    #[command(subcommand)]
    ChampionMastery(MasteryCommand),
    #[command(subcommand)]
    League(LeagueCommand),
    #[command(subcommand)]
    Match(MatchCommand),
    #[command(subcommand)]
    Spectator(SpectatorCommand),
    #[command(subcommand)]
    Status(StatusCommand),
    #[command(subcommand)]
    StaticData(StaticDataCommand),
}

#[derive(Subcommand, Debug)]
enum SummonerCommand {
    GetByName { name: String },
    GetByPuuid { puuid: String },
    Get { summoner_id: String },
}

#[derive(Subcommand, Debug)]
enum ChampionCommand {
    /// Free champion rotation
    GetRotations,
}

#[derive(Subcommand, Debug)]
enum MasteryCommand {
    GetMasteries {
        summoner_id: String,
        /// Number of champions to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
    GetMastery {
        summoner_id: String,
        champion_id: i64,
    },
    GetMasteryScore {
        summoner_id: String,
    },
}

#[derive(Subcommand, Debug)]
enum LeagueCommand {
    GetEntriesForSummoner {
        summoner_id: String,
    },
    GetChallenger {
        #[arg(default_value = "RANKED_SOLO_5x5")]
        queue: String,
        /// Number of players to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

#[derive(Subcommand, Debug)]
enum MatchCommand {
    Get { match_id: i64 },
    /// Kill and objective events of a match
    GetTimeline { match_id: i64 },
}

#[derive(Subcommand, Debug)]
enum SpectatorCommand {
    GetCurrentGameInfo { summoner_id: String },
    GetFeaturedGames,
}

#[derive(Subcommand, Debug)]
enum StatusCommand {
    /// Shard status of the region
    Get,
}

#[derive(Subcommand, Debug)]
enum StaticDataCommand {
    GetChampion {
        /// Numeric champion key, -1 for none
        #[arg(allow_hyphen_values = true)]
        champion_id: i64,
        /// Include lore, tips and spells
        #[arg(long)]
        extended: bool,
    },
    GetVersions {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}

fn main() {
    league_api::logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_env().context("Could not load configuration")?;
    if let Some(region) = &args.region {
        config.region = region.parse()?;
    }
    if args.link {
        config.static_data.linking = true;
    }
    if args.locale.is_some() {
        config.static_data.locale = args.locale.clone();
    }
    if args.static_version.is_some() {
        config.static_data.version = args.static_version.clone();
    }

    display_info(&format!("Region {}", config.region));
    let client = LeagueApiClient::new(config);

    dispatch(&client, args.command)?;

    if args.usage {
        display_usage(&client.usage());
    }

    Ok(())
}

fn dispatch(client: &LeagueApiClient, command: Command) -> Result<()> {
    let static_data = &client.config().static_data;
    let locale = static_data.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
    let version = static_data.version.as_deref();

    match command {
        Command::Summoner(command) => {
            let summoner = match command {
                SummonerCommand::GetByName { name } => {
                    with_spinner("Looking up summoner", || client.get_summoner_by_name(&name))?
                }
                SummonerCommand::GetByPuuid { puuid } => {
                    with_spinner("Looking up summoner", || client.get_summoner_by_puuid(&puuid))?
                }
                SummonerCommand::Get { summoner_id } => {
                    with_spinner("Looking up summoner", || client.get_summoner(&summoner_id))?
                }
            };
            display_summoner(&summoner);
        }
        Command::Champion(ChampionCommand::GetRotations) => {
            let info = with_spinner("Fetching rotation", || client.get_champion_rotations())?;
            display_rotations(&info);
        }
        Command::ChampionMastery(command) => match command {
            MasteryCommand::GetMasteries { summoner_id, top } => {
                let masteries = with_spinner("Fetching champion mastery", || {
                    client.get_champion_masteries(&summoner_id)
                })?;
                let shown = &masteries[..top.min(masteries.len())];
                display_masteries(shown);
            }
            MasteryCommand::GetMastery {
                summoner_id,
                champion_id,
            } => {
                let mastery = with_spinner("Fetching champion mastery", || {
                    client.get_champion_mastery(&summoner_id, champion_id)
                })?;
                display_masteries(std::slice::from_ref(&mastery));
            }
            MasteryCommand::GetMasteryScore { summoner_id } => {
                let score = with_spinner("Fetching mastery score", || {
                    client.get_champion_mastery_score(&summoner_id)
                })?;
                display_mastery_score(&summoner_id, score);
            }
        },
        Command::League(command) => match command {
            LeagueCommand::GetEntriesForSummoner { summoner_id } => {
                let entries = with_spinner("Fetching ranked entries", || {
                    client.get_league_entries_for_summoner(&summoner_id)
                })?;
                display_league_entries(&entries);
            }
            LeagueCommand::GetChallenger { queue, top } => {
                let league = with_spinner("Fetching challenger league", || {
                    client.get_league_challenger(&queue)
                })?;
                display_league(&league, top);
            }
        },
        Command::Match(command) => match command {
            MatchCommand::Get { match_id } => {
                let game = with_spinner("Fetching match", || client.get_match(match_id))?;
                display_match(&game);
            }
            MatchCommand::GetTimeline { match_id } => {
                let timeline = with_spinner("Fetching timeline", || client.get_match_timeline(match_id))?;
                display_timeline(&timeline);
            }
        },
        Command::Spectator(command) => match command {
            SpectatorCommand::GetCurrentGameInfo { summoner_id } => {
                let game = with_spinner("Fetching live game", || {
                    client.get_current_game_info(&summoner_id)
                })?;
                display_current_game(&game);
            }
            SpectatorCommand::GetFeaturedGames => {
                let featured = with_spinner("Fetching featured games", || client.get_featured_games())?;
                display_featured_games(&featured);
            }
        },
        Command::Status(StatusCommand::Get) => {
            let status = with_spinner("Fetching shard status", || client.get_platform_data(None))?;
            display_platform_status(&status, locale);
        }
        Command::StaticData(command) => match command {
            StaticDataCommand::GetChampion {
                champion_id,
                extended,
            } => {
                let champion = with_spinner("Fetching champion", || {
                    client.get_static_champion(champion_id, extended, locale, version)
                })?;
                display_static_champion(&champion);
            }
            StaticDataCommand::GetVersions { limit } => {
                let versions = with_spinner("Fetching versions", || client.get_static_versions())?;
                display_versions(&versions, limit);
            }
        },
    }

    Ok(())
}

fn with_spinner<T>(message: &str, call: impl FnOnce() -> ApiResult<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = call();
    spinner.finish_and_clear();

    result.with_context(|| format!("{} failed", message))
}
