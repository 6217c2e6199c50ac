#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use semainier::{
    aggregator::{BookingAggregator, LayoutConfig, Rejected},
    config::ProjectionConfig,
    io,
    model::{Booking, Slot},
    week::{bucket, shift, window_for, WeekStart},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de projection hebdomadaire des réservations
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration (fuseau, début de semaine, géométrie)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Fuseau d'affichage IANA (remplace celui de la configuration)
    #[arg(long, global = true)]
    zone: Option<String>,

    /// Premier jour de semaine : 0..6 ou nom anglais
    #[arg(long, global = true)]
    week_start: Option<WeekStart>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher la fenêtre de 7 jours d'une date
    Window {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Décalage en semaines (négatif = passé)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift: i64,
    },

    /// Lister les slots agrégés (ordre de première apparition)
    Slots {
        /// Fichier de réservations (.json ou .csv)
        #[arg(long)]
        bookings: String,
        /// Ne garder que ce statut (ex. "Booked")
        #[arg(long)]
        status: Option<String>,
    },

    /// Projeter les réservations sur la grille d'une semaine
    Week {
        #[arg(long)]
        bookings: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift: i64,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut config = match &cli.config {
        Some(path) => ProjectionConfig::load(path)?,
        None => ProjectionConfig::default(),
    };
    if let Some(zone) = cli.zone {
        config.display_zone = zone;
    }
    if let Some(week_start) = cli.week_start {
        config.week_starts_on = week_start;
    }
    let aggregator = BookingAggregator::from_config(&config)?;

    let code = match cli.cmd {
        Commands::Window { date, shift: delta } => {
            let window = shift(&window_for(date, config.week_starts_on), delta);
            println!("{}", window.label());
            for day in window.days {
                println!("{} {}", day.format("%a"), day);
            }
            0
        }
        Commands::Slots { bookings, status } => {
            let bookings = load_bookings(&bookings, status.as_deref())?;
            let aggregation = aggregator.aggregate(&bookings);
            for slot in &aggregation.slots {
                print_slot(slot);
            }
            report_rejected(&aggregation.rejected)
        }
        Commands::Week {
            bookings,
            date,
            shift: delta,
            status,
            out_json,
            out_csv,
        } => {
            let bookings = load_bookings(&bookings, status.as_deref())?;
            let aggregation = aggregator.aggregate(&bookings);
            let window = shift(&window_for(date, config.week_starts_on), delta);
            let grid = bucket(&window, aggregation.slots);

            if let Some(path) = out_json {
                io::export_grid_json(path, &grid)?;
            }
            if let Some(path) = out_csv {
                io::export_grid_csv(path, &grid)?;
            }

            println!(
                "{} ({}, {})",
                window.label(),
                aggregator.zone().name(),
                describe_hours(aggregator.layout())
            );
            for column in &grid.columns {
                println!("{} {}", column.date.format("%a"), column.date);
                for slot in &column.slots {
                    print!("  ");
                    print_slot(slot);
                }
            }
            report_rejected(&aggregation.rejected)
        }
    };

    std::process::exit(code);
}

fn load_bookings(path: &str, status: Option<&str>) -> Result<Vec<Booking>> {
    let mut bookings =
        io::read_bookings(path).with_context(|| format!("loading bookings from {path}"))?;
    if let Some(status) = status {
        io::retain_status(&mut bookings, status);
    }
    Ok(bookings)
}

fn print_slot(slot: &Slot) {
    let primary = slot.primary();
    println!(
        "{} | {:>5}px | {} | {}",
        slot.key.format("%Y-%m-%d %H:%M"),
        slot.top_offset_px,
        slot.display_label,
        primary.booking.assignee()
    );
    for name in slot.preview() {
        println!("      + {name}");
    }
}

fn describe_hours(layout: &LayoutConfig) -> String {
    let hours = layout.hours();
    match (hours.first(), hours.last()) {
        (Some(&first), Some(&last)) => format!(
            "{} - {}",
            LayoutConfig::row_label(first),
            LayoutConfig::row_label(last)
        ),
        _ => String::from("-"),
    }
}

// Code 2 = WARNING : au moins une réservation écartée
fn report_rejected(rejected: &[Rejected]) -> i32 {
    if rejected.is_empty() {
        return 0;
    }
    eprintln!("Skipped {} booking(s) with malformed timestamps", rejected.len());
    for r in rejected {
        eprintln!("  {} [{}]: {}", r.id.as_str(), r.error.code(), r.error);
    }
    2
}
