// noizb command line
// Renders the couple's calendar and shopping list from exported JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use noizb::models::category::CategoryFilter;
use noizb::models::event::Event;
use noizb::models::identity::IdentityContext;
use noizb::models::settings::Settings;
use noizb::models::shopping::ShoppingItem;
use noizb::models::ui::CalendarViewState;
use noizb::render::{agenda_line, days_together_line, render_agenda, render_month};
use noizb::services::calendar::{classify, upcoming_events};
use noizb::services::settings::SettingsService;
use noizb::services::shopping::group_items;
use noizb::services::store::{resolve_identity, EventStore, InMemoryEventStore, StaticSession};
use noizb::utils::date::parse_date_input;

#[derive(Parser)]
#[command(name = "noizb")]
#[command(about = "Shared calendar and shopping list for couples")]
struct Cli {
    /// Settings file (defaults to NOIZB_CONFIG or the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with presence dots and the selected day's events
    Month {
        #[command(flatten)]
        source: EventSource,

        /// Month to show as YYYY-MM (defaults to the selected day's month)
        #[arg(long)]
        month: Option<String>,

        /// Selected day as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        day: Option<String>,

        /// all, mine, partner or shared (defaults to the settings)
        #[arg(long)]
        filter: Option<CategoryFilter>,
    },
    /// List the next events from today on
    Upcoming {
        #[command(flatten)]
        source: EventSource,

        /// How many events to show (defaults to the settings)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the shopping list grouped by category
    Shopping {
        /// JSON array of shopping items
        #[arg(long)]
        items: PathBuf,

        /// Include items already bought
        #[arg(long)]
        show_done: bool,
    },
}

#[derive(clap::Args)]
struct EventSource {
    /// JSON array of event rows as exported from the backend
    #[arg(long)]
    events: PathBuf,

    /// Id of the signed-in user
    #[arg(long)]
    me: String,

    /// Id of the linked partner
    #[arg(long)]
    partner: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = match cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_environment(),
    };
    let settings = settings_service.load_or_default();
    log::info!("Using settings from {}", settings_service.path().display());

    let today = Local::now().date_naive();

    match cli.command {
        Commands::Month {
            source,
            month,
            day,
            filter,
        } => {
            let (identity, events) = load_events(&source, &settings)?;
            let selected = match day {
                Some(raw) => parse_day(&raw)?,
                None => today,
            };

            let mut state = CalendarViewState::new(selected)
                .with_filter(filter.unwrap_or(settings.default_filter));
            if let Some(raw) = month {
                state.view_month = parse_day(&format!("{}-01", raw.trim()))?;
            }

            let grid = state.grid();
            print!(
                "{}",
                render_month(&grid, &events, &identity, Some(state.selected_date), settings.language)
            );
            println!();
            print!(
                "{}",
                render_agenda(&events, state.selected_date, state.filter, &identity, settings.language)
            );
        }
        Commands::Upcoming { source, limit } => {
            let (identity, events) = load_events(&source, &settings)?;
            let limit = limit.unwrap_or(settings.upcoming_limit);
            if identity.has_partner() {
                println!(
                    "{}",
                    days_together_line(settings.days_together(today), settings.language)
                );
            }
            for event in upcoming_events(&events, today, limit) {
                println!(
                    "{} {}",
                    event.date,
                    agenda_line(event, classify(event, &identity), settings.language)
                );
            }
        }
        Commands::Shopping { items, show_done } => {
            let data = std::fs::read_to_string(&items)
                .with_context(|| format!("failed to read items from {}", items.display()))?;
            let items: Vec<ShoppingItem> = serde_json::from_str(&data)
                .with_context(|| format!("failed to parse items from {}", items.display()))?;

            for group in group_items(&items, show_done || settings.show_done_items) {
                println!("{} ({})", group.name, group.pending_count());
                for item in group.items {
                    let mark = if item.done { "x" } else { " " };
                    let urgent = if item.urgent { " !" } else { "" };
                    println!("  [{}] {}{}", mark, item.label, urgent);
                }
            }
        }
    }

    Ok(())
}

fn load_events(source: &EventSource, settings: &Settings) -> Result<(IdentityContext, Vec<Event>)> {
    let session = StaticSession::signed_in(IdentityContext::new(
        source.me.clone(),
        source.partner.clone(),
    ));
    let identity = resolve_identity(&session)?;

    let timezone = settings.parsed_timezone().map_err(anyhow::Error::msg)?;
    let store = match timezone {
        Some(tz) => InMemoryEventStore::load_json(&source.events, &tz)?,
        None => InMemoryEventStore::load_json(&source.events, &Local)?,
    };

    Ok((identity, store.list()?))
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    parse_date_input(raw).with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}
