//! Command-line entry point: plan delivery routes from a CSV stop list.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use u_savings::config::PlannerConfig;
use u_savings::constructive::MergePolicy;
use u_savings::io::{load_point_set, route_records, RouteHistory, RouteRecord};
use u_savings::models::Capacity;
use u_savings::planner::plan_routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Plan capacity-constrained delivery routes with the Clarke-Wright savings heuristic.
#[derive(Debug, Parser)]
#[command(name = "u-savings", version, about)]
struct Cli {
    /// CSV file with columns id, name, latitude, longitude, demand, delivery_date.
    #[arg(short, long)]
    input: PathBuf,

    /// Vehicle capacity in demand units.
    #[arg(short, long, env = "U_SAVINGS_CAPACITY", default_value_t = 25)]
    capacity: u32,

    /// Endpoint rule used when merging routes.
    #[arg(long, default_value_t = MergePolicy::TailToHead)]
    merge_policy: MergePolicy,

    /// Append the planned routes to this cumulative CSV history.
    #[arg(long, env = "U_SAVINGS_HISTORY")]
    history: Option<PathBuf>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render_table(records: &[RouteRecord]) -> String {
    let headers = ["Date", "Route", "Clients", "Load", "Fill (%)", "Distance (km)"];
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.date.clone(),
                r.route.to_string(),
                r.clients.clone(),
                r.load.clone(),
                format!("{:.1}", r.utilization_pct),
                format!("{:.2}", r.distance_km),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = line(headers.map(String::from).as_slice());
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row.as_slice()));
        out.push('\n');
    }
    out
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let capacity = Capacity::try_from(cli.capacity)?;
    let config = PlannerConfig::new(capacity).with_merge_policy(cli.merge_policy);

    let points = load_point_set(&cli.input)?;
    let plan = plan_routes(&points, &config)?;
    let records = route_records(&plan, &points);

    match cli.format {
        OutputFormat::Table => {
            print!("{}", render_table(&records));
            println!(
                "{} routes, {} clients, {:.2} km",
                plan.num_routes(),
                plan.num_served(),
                plan.total_distance()
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    if let Some(path) = cli.history {
        let saved = RouteHistory::new(path).append(&records)?;
        eprintln!("{} routes saved to {}", records.len(), saved.display());
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("u-savings: {err}");
        std::process::exit(1);
    }
}
