//! ESG Terminal
//!
//! Command-line front end for the emission record store: filters,
//! leaderboards, breakdowns and map markers as text tables or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rusqlite::Connection;
use serde::Serialize;

use esg_terminal::config;
use esg_terminal::filter::{FilterSpec, ScopeFilter};
use esg_terminal::models::{
    BreakdownEntry, EmissionRecord, Facility, FacilityWithTotals, PeriodChange, PeriodTotal,
    TrendDirection,
};
use esg_terminal::{aggregate, db, filter, import, map, views};

const DEFAULT_DATABASE: &str = "esg_data.db";

#[derive(Parser)]
#[command(name = "esg-terminal")]
#[command(about = "Greenhouse-gas emission explorer for corporate facilities")]
struct Cli {
    /// Path to the SQLite database
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Config file (defaults to the nearest .esg-terminal.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Free-text search over facility names and descriptions
    #[arg(short, long, default_value = "")]
    search: String,

    /// Restrict to a company (repeatable)
    #[arg(long = "company")]
    companies: Vec<String>,

    /// Scope filter: all, "Scope 1", "Scope 2" or "Scope 3"
    #[arg(long, default_value = "all")]
    scope: String,
}

impl FilterArgs {
    fn to_spec(&self) -> FilterSpec {
        FilterSpec::new(
            &self.search,
            self.companies.iter().cloned(),
            ScopeFilter::parse_lenient(&self.scope),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize empty database with schema
    Init,

    /// Load the built-in sample dataset
    LoadSample,

    /// Import facility and emission record CSV files from a directory
    Import {
        /// Directory to scan for *.csv files
        source_dir: PathBuf,

        /// Clear existing data before importing
        #[arg(long)]
        clear: bool,
    },

    /// Totals for the whole store
    Summary {
        #[arg(long)]
        json: bool,
    },

    /// List companies
    Companies {
        #[arg(long)]
        json: bool,
    },

    /// Facilities matching a search, with their totals
    Facilities {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        json: bool,
    },

    /// Leaderboard and scope/gas breakdowns
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of leaderboard rows
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Emission breakdown for one facility
    Facility {
        /// Facility ID
        id: String,

        /// Scope filter: all, "Scope 1", "Scope 2" or "Scope 3"
        #[arg(long, default_value = "all")]
        scope: String,

        #[arg(long)]
        json: bool,
    },

    /// Totals per reporting period
    Trend {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        json: bool,
    },

    /// Map markers for the matching facilities
    Markers {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        json: bool,
    },

    /// Facilities and statistics for one filter, as JSON
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref())?;
    let database = cli
        .database
        .clone()
        .or_else(|| config.database.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

    let mut conn = Connection::open(&database)
        .with_context(|| format!("Failed to open database {}", database.display()))?;
    db::init_schema(&conn)?;

    match cli.command {
        Commands::Init => {
            println!("Database initialized at: {}", database.display());
        }

        Commands::LoadSample => {
            let count = db::load_sample_data(&mut conn)?;
            println!("Loaded {} sample emission records", count);
        }

        Commands::Import { source_dir, clear } => {
            if !source_dir.is_dir() {
                bail!("{} is not a directory", source_dir.display());
            }
            if clear {
                println!("Clearing existing data...");
            }
            let stats = import::import_directory(&mut conn, &source_dir, clear)?;
            println!("{}", stats);
        }

        Commands::Summary { json } => {
            let (facilities, records) = load_store(&conn)?;
            let summary = views::dashboard_summary(&facilities, &records);
            if json {
                print_json(&summary)?;
            } else {
                println!("=== Emission Summary ===");
                println!("Total emissions: {:.2} tCO₂e", summary.total_emissions);
                println!("Records:         {}", summary.record_count);
                println!("Facilities:      {}", summary.facility_count);
                println!("Companies:       {}", summary.company_count);
            }
        }

        Commands::Companies { json } => {
            let (_, records) = load_store(&conn)?;
            let companies = views::unique_companies(&records);
            if json {
                print_json(&companies)?;
            } else {
                println!("{:<20} {:>12} {:>8}", "Company", "tCO₂e", "Records");
                println!("{}", "-".repeat(42));
                for company in companies {
                    let own = views::records_for_company(&records, &company);
                    println!(
                        "{:<20} {:>12.2} {:>8}",
                        company,
                        aggregate::total(&own),
                        own.len()
                    );
                }
            }
        }

        Commands::Facilities { filter: args, json } => {
            let (facilities, records) = load_store(&conn)?;
            let visible = views::dashboard(&facilities, &records, &args.to_spec(), None).facilities;
            if json {
                print_json(&visible)?;
            } else {
                print_facilities(&visible);
            }
        }

        Commands::Stats {
            filter: args,
            limit,
            json,
        } => {
            let (facilities, records) = load_store(&conn)?;
            let limit = limit.or(config.leaderboard_limit);
            let panel = views::stats_panel(&facilities, &records, &args.to_spec(), limit);
            if json {
                print_json(&panel)?;
            } else {
                println!("TOTAL EMISSIONS TRACKED: {:.2} tCO₂e", panel.summary.total_emissions);
                println!();
                println!("TOP EMITTERS");
                for entry in &panel.top_emitters {
                    println!(
                        "  {:>2}. {:<20} {:>12.2} t {:>6.1}%",
                        entry.rank, entry.name, entry.total, entry.share_percent
                    );
                }
                println!();
                println!("SCOPE DISTRIBUTION");
                print_breakdown(&panel.scopes);
                println!();
                println!("GHG TYPES");
                print_breakdown(&panel.gases);
            }
        }

        Commands::Facility { id, scope, json } => {
            let (facilities, records) = load_store(&conn)?;
            let Some(facility) = facilities.iter().find(|f| f.id == id) else {
                bail!("Facility '{}' not found", id);
            };
            let scope = ScopeFilter::parse_lenient(&scope);
            let detail = views::facility_detail(facility, &records, scope);
            if json {
                print_json(&detail)?;
            } else {
                let f = &detail.facility.facility;
                println!("Facility: {} ({})", f.description, f.id);
                println!("  Company:  {}", f.name);
                println!("  Industry: {}", f.industry);
                println!("  Location: {:.4}, {:.4}", f.latitude, f.longitude);
                println!(
                    "  Emissions ({}): {:.2} tCO₂e over {} records",
                    scope, detail.filtered_total, detail.filtered_count
                );
                if let Some(trend) = &detail.trend {
                    println!("  Trend: {}", format_trend(trend));
                }
                println!();
                println!("By scope:");
                print_breakdown(&detail.scopes);
                println!("By gas:");
                print_breakdown(&detail.gases);
                println!("By period:");
                print_periods(&detail.periods);
            }
        }

        Commands::Trend { filter: args, json } => {
            let (_, records) = load_store(&conn)?;
            let filtered = filter::filter_records(&records, &args.to_spec());
            let periods = views::period_trend(&filtered);
            if json {
                print_json(&periods)?;
            } else {
                print_periods(&periods);
                if let Some(trend) = views::period_change(&periods) {
                    println!("Trend: {}", format_trend(&trend));
                }
            }
        }

        Commands::Markers { filter: args, json } => {
            let (facilities, records) = load_store(&conn)?;
            let view = views::dashboard(&facilities, &records, &args.to_spec(), None);
            let markers = map::markers(&view.facilities, &config.map, &config.tiers);
            if json {
                print_json(&markers)?;
            } else {
                println!("{:<6} {:<14} {:>7} {:>7} {:>12} {:<8}", "ID", "Company", "x%", "y%", "tCO₂e", "Tier");
                println!("{}", "-".repeat(60));
                for m in markers {
                    println!(
                        "{:<6} {:<14} {:>7.1} {:>7.1} {:>12.2} {:<8}",
                        m.facility_id,
                        m.name,
                        m.position.x,
                        m.position.y,
                        m.total_emissions,
                        format!("{:?}", m.tier)
                    );
                }
            }
        }

        Commands::Dashboard { filter: args, limit } => {
            let (facilities, records) = load_store(&conn)?;
            let limit = limit.or(config.leaderboard_limit);
            print_json(&views::dashboard(&facilities, &records, &args.to_spec(), limit))?;
        }
    }

    Ok(())
}

fn load_store(conn: &Connection) -> Result<(Vec<Facility>, Vec<EmissionRecord>)> {
    let facilities = db::load_facilities(conn)?;
    let records = db::load_records(conn)?;
    if facilities.is_empty() && records.is_empty() {
        eprintln!("No data in database. Run 'import' or 'load-sample' first.");
    }
    Ok((facilities, records))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_facilities(facilities: &[FacilityWithTotals]) {
    println!("{:<6} {:<14} {:<32} {:>12} {:>7}", "ID", "Company", "Description", "tCO₂e", "Records");
    println!("{}", "-".repeat(75));
    for f in facilities {
        println!(
            "{:<6} {:<14} {:<32} {:>12.2} {:>7}",
            f.facility.id, f.facility.name, f.facility.description, f.total_emissions, f.record_count
        );
    }
}

fn print_breakdown<K: std::fmt::Display>(entries: &[BreakdownEntry<K>]) {
    for entry in entries {
        println!(
            "  {:<8} {:>12.2} t ({:.1}%)",
            entry.key.to_string(),
            entry.value,
            entry.percentage
        );
    }
}

fn print_periods(periods: &[PeriodTotal]) {
    for p in periods {
        println!("  {}  {:>12.2} t", p.period, p.value);
    }
}

fn format_trend(trend: &PeriodChange) -> String {
    let arrow = match trend.direction {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
        TrendDirection::Flat => "flat",
    };
    format!(
        "{} {:.1}% ({} vs {})",
        arrow, trend.percent, trend.latest_period, trend.previous_period
    )
}
