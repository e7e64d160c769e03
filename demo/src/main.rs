//! VIGIL Patient Monitor — Headless Demo CLI
//!
//! Exercises the store, scheduler, and simulation transforms without a
//! terminal UI.
//!
//! Usage:
//!   cargo run -p demo -- overview
//!   cargo run -p demo -- watch --ticks 5 --interval-ms 500
//!   cargo run -p demo -- acknowledge ICU-2024-001
//!   cargo run -p demo -- history ICU-2024-001

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vigil_contracts::{Patient, VigilResult};
use vigil_sim::history::risk_history;
use vigil_store::{sorted_by_risk, MonitorConfig, PatientStore, Ticker};

// ── CLI definition ────────────────────────────────────────────────────────────

/// VIGIL — simulated ICU patient monitor demo.
///
/// Each subcommand runs one slice of the monitor headlessly: the risk-sorted
/// overview, a live fluctuation watch, the acknowledge operation, or the
/// synthetic risk-history series.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "VIGIL patient monitor headless demo",
    long_about = "Runs the VIGIL monitor's store and simulation transforms headlessly:\n\
                  risk-sorted roster overview, timed vitals fluctuation, alert\n\
                  acknowledgment, and risk-history generation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the roster ordered by risk level.
    Overview,
    /// Run the fluctuation tick N times and print the moving vitals.
    Watch {
        /// Number of ticks to run before exiting.
        #[arg(long, default_value_t = 5)]
        ticks: u32,
        /// Tick interval in milliseconds (defaults to the monitor's 3000).
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Acknowledge one patient's alert and print the before/after flags.
    Acknowledge {
        /// Patient id, e.g. ICU-2024-001.
        id: String,
    },
    /// Print the 48-hour mortality-risk series for one patient as JSON lines.
    History {
        /// Patient id, e.g. ICU-2024-001.
        id: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Overview => run_overview(),
        Command::Watch { ticks, interval_ms } => run_watch(ticks, interval_ms),
        Command::Acknowledge { id } => run_acknowledge(&id),
        Command::History { id } => run_history(&id),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_overview() -> VigilResult<()> {
    let store = PatientStore::seeded();
    let roster = sorted_by_risk(&store.snapshot());

    println!(
        "{:<8} {:<7} {:<9} {:<22} {:>6} {:>5} {:>8} {:>6} {:>6} {:>5} {:>4}",
        "BED", "ROOM", "RISK", "PATIENT", "HR", "RR", "BP", "SpO2", "TEMP", "MORT", "LOS"
    );
    for patient in &roster {
        print_patient_row(patient);
    }
    println!();
    let unacknowledged = roster.iter().filter(|p| !p.is_acknowledged).count();
    println!(
        "{} patient(s), {} unacknowledged alert(s)",
        roster.len(),
        unacknowledged
    );

    Ok(())
}

fn run_watch(ticks: u32, interval_ms: Option<u64>) -> VigilResult<()> {
    let interval_ms = interval_ms.unwrap_or_else(|| MonitorConfig::default().vitals_tick_ms);
    let store = PatientStore::seeded();
    let mut rng = rand::thread_rng();

    println!(
        "Watching {} tick(s) at {} ms per tick. Ctrl-C to stop early.",
        ticks, interval_ms
    );
    println!();

    let (ticker, tick_rx) = Ticker::spawn(std::time::Duration::from_millis(interval_ms));

    for n in 1..=ticks {
        if tick_rx.recv().is_err() {
            break;
        }
        store.advance_vitals(&mut rng);

        println!("tick {}", n);
        for patient in &sorted_by_risk(&store.snapshot()) {
            let v = &patient.vital_signs;
            println!(
                "  {:<14} HR {:>5.1}  RR {:>4.1}  BP {:>5.1}/{:<5.1}  SpO2 {:>5.1}  T {:>4.1}",
                patient.id,
                v.heart_rate,
                v.respiratory_rate,
                v.blood_pressure.systolic,
                v.blood_pressure.diastolic,
                v.spo2,
                v.temperature
            );
        }
    }

    ticker.cancel()?;
    Ok(())
}

fn run_acknowledge(id: &str) -> VigilResult<()> {
    let store = PatientStore::seeded();

    println!("Before:");
    for patient in &store.snapshot() {
        print_acknowledge_row(patient);
    }

    store.acknowledge(id);

    println!();
    println!("After acknowledge('{}'):", id);
    for patient in &store.snapshot() {
        print_acknowledge_row(patient);
    }

    Ok(())
}

fn run_history(id: &str) -> VigilResult<()> {
    let store = PatientStore::seeded();
    let roster = store.snapshot();

    let Some(patient) = roster.iter().find(|p| p.id == id) else {
        println!("no patient with id '{}'", id);
        return Ok(());
    };

    let mut rng = rand::thread_rng();
    let series = risk_history(patient.risk_scores.mortality, chrono::Utc::now(), &mut rng);

    println!(
        "48-hour mortality-risk series for {} ({}), current {}%:",
        patient.id, patient.name, patient.risk_scores.mortality
    );
    for point in &series {
        // One JSON object per line so the output pipes cleanly.
        println!("{}", serde_json::to_string(point).unwrap_or_default());
    }

    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_patient_row(patient: &Patient) {
    let v = &patient.vital_signs;
    println!(
        "{:<8} {:<7} {:<9} {:<22} {:>6.1} {:>5.1} {:>4.0}/{:<3.0} {:>6.1} {:>6.1} {:>4.0}% {:>3}d",
        patient.bed_number,
        patient.room,
        patient.risk_level.as_str(),
        format!("{} ({}y)", patient.name, patient.age),
        v.heart_rate,
        v.respiratory_rate,
        v.blood_pressure.systolic,
        v.blood_pressure.diastolic,
        v.spo2,
        v.temperature,
        patient.risk_scores.mortality,
        patient.length_of_stay
    );
}

fn print_acknowledge_row(patient: &Patient) {
    println!(
        "  {:<14} {:<9} acknowledged: {}",
        patient.id,
        patient.risk_level.as_str(),
        patient.is_acknowledged
    );
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("VIGIL — ICU Patient Monitor");
    println!("Simulated bedside data, headless demo");
    println!("=====================================");
    println!();
}
