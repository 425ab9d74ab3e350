use anyhow::Result;
use bet365_rs::{
    mnemonic, Bet365ApiClient, Config, Envelope, ResultFields, SportId, UpcomingEventsResponse,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bet365")]
#[command(about = "Bet365 sports odds CLI", long_about = None)]
struct Cli {
    /// Path to a config.toml (defaults to ./config.toml, then BET365_* env vars)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Result for a single event
    Result {
        event_id: String,
    },
    /// Events currently in play
    InPlayFilter {
        /// Sport slug or code, e.g. `soccer` or `1`
        #[arg(short, long)]
        sport: Option<SportId>,
        #[arg(short, long)]
        league_id: Option<String>,
    },
    /// In-play odds for a fixture
    InPlayOdds {
        fi: String,
        #[arg(long)]
        raw: bool,
        #[arg(long)]
        lineup: bool,
        #[arg(long)]
        stats: bool,
    },
    /// Pre-match odds for a fixture
    PreMatchOdds {
        fi: String,
        #[arg(long)]
        raw: bool,
    },
    /// The full in-play tree
    InPlay {
        #[arg(long)]
        raw: bool,
    },
    /// Upcoming events for a sport
    Upcoming {
        sport: SportId,
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(long)]
        lng_id: Option<String>,
        /// Forward-only date, e.g. 20201124
        #[arg(short, long)]
        day: Option<String>,
        #[arg(short, long)]
        league_id: Option<String>,
        /// One line per event instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// List sport codes
    Sports,
    /// Look up a field code (`NA`) or name (`NAME`)
    Mnemonic {
        code: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sports => list_sports(),
        Commands::Mnemonic { code } => lookup_mnemonic(&code),
        command => {
            let config = match cli.config {
                Some(path) => Config::from_file(path)?,
                None => Config::load()?,
            };
            let client = Bet365ApiClient::new(config)?;
            run(&client, command)
        }
    }
}

fn run(client: &Bet365ApiClient, command: Commands) -> Result<()> {
    let flag = |set: bool| set.then_some("1");

    match command {
        Commands::Result { event_id } => print_json(&client.result(&event_id)?),
        Commands::InPlayFilter { sport, league_id } => print_json(
            &client.in_play_filter(sport.map(|s| s.code()), league_id.as_deref())?,
        ),
        Commands::InPlayOdds {
            fi,
            raw,
            lineup,
            stats,
        } => print_json(&client.in_play_odds(&fi, flag(raw), flag(lineup), flag(stats))?),
        Commands::PreMatchOdds { fi, raw } => print_json(&client.pre_match_odds(&fi, flag(raw))?),
        Commands::InPlay { raw } => print_json(&client.in_play_events(flag(raw))?),
        Commands::Upcoming {
            sport,
            page,
            lng_id,
            day,
            league_id,
            summary,
        } => {
            let page = page.map(|p| p.to_string());
            let response = client.upcoming_events(
                sport.code(),
                page.as_deref(),
                lng_id.as_deref(),
                day.as_deref(),
                league_id.as_deref(),
            )?;
            if summary {
                print_upcoming_summary(sport, &response);
                Ok(())
            } else {
                print_json(&response)
            }
        }
        Commands::Sports => list_sports(),
        Commands::Mnemonic { code } => lookup_mnemonic(&code),
    }
}

fn list_sports() -> Result<()> {
    for (code, slug) in SportId::list() {
        println!("{code:>4}  {slug}");
    }
    Ok(())
}

fn lookup_mnemonic(query: &str) -> Result<()> {
    let upper = query.to_ascii_uppercase();
    if let Some(name) = mnemonic::describe(&upper) {
        println!("{upper}  {name}");
        return Ok(());
    }
    if let Some(code) = mnemonic::code_for(query) {
        println!("{code}  {upper}");
        return Ok(());
    }
    anyhow::bail!("unknown field code or name: {query}")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_upcoming_summary(sport: SportId, response: &UpcomingEventsResponse) {
    if response.success() != Some(1) {
        warn!("Provider reported success = {:?}", response.success());
    }
    if let Some(pager) = response.pager() {
        info!(
            "{}: page {:?} of {:?} events ({:?} per page)",
            sport,
            pager.page(),
            pager.total(),
            pager.per_page()
        );
    }

    let Some(events) = response.results() else {
        println!("No upcoming {sport} events");
        return;
    };

    println!("{}", "=".repeat(80));
    for event in events {
        let kickoff = event
            .time_utc()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".repeat(16));
        let league = event.league().and_then(|l| l.name()).unwrap_or("?");
        let home = event.home().and_then(|t| t.name()).unwrap_or("?");
        let away = event.away().and_then(|t| t.name()).unwrap_or("?");
        println!(
            "{kickoff} | {:>10} | {league}: {home} v {away}",
            event.id().unwrap_or("")
        );
    }

    if response.has_next_page() {
        println!("{}", "-".repeat(80));
        println!("More events available; pass --page to continue");
    }
}
