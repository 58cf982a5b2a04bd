use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use dashboard_core::{DashboardConfig, PLACEHOLDER};
use dashboard_record::{summarize_patients_str, DashboardSummary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "dashboard-cli",
    about = "Summarize a patient dashboard from a saved record store response."
)]
struct Args {
    /// Path to the JSON patient list, or `-` for stdin.
    #[arg(short, long)]
    input: PathBuf,

    /// Patient to display (case-insensitive).
    #[arg(short, long)]
    patient: Option<String>,

    /// Print the full summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let data = read_input(&args.input)?;

    let mut config = DashboardConfig::default();
    if let Some(patient) = args.patient {
        config.patient_name = patient;
    }

    tracing::info!(patient = %config.patient_name, "building dashboard");
    let summary = summarize_patients_str(&data, &config)
        .with_context(|| format!("Could not build dashboard from {:?}", args.input))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("Could not read stdin")?;
        return Ok(data);
    }
    std::fs::read_to_string(path).with_context(|| format!("Could not read file {path:?}"))
}

fn print_summary(summary: &DashboardSummary) {
    let dashboard = &summary.dashboard;
    let profile = &dashboard.profile;

    println!("{} ({})", profile.name, profile.bio);
    println!(
        "Phone: {} | Emergency: {} | Insurance: {}",
        profile.phone_number, profile.emergency_contact, profile.insurance_type
    );

    println!("\nCurrent vitals:");
    if dashboard.current_vitals.is_empty() {
        println!("  {PLACEHOLDER}");
    }
    for reading in &dashboard.current_vitals {
        println!(
            "  {:<17} {:>6} {:<5} {} [{:?}]",
            reading.label,
            reading.display_value,
            reading.kind.unit(),
            reading.levels,
            reading.severity
        );
    }

    println!("\nBlood pressure by year:");
    for avg in &dashboard.yearly_bp {
        println!("  {}: {}/{}", avg.year, avg.mean_systolic, avg.mean_diastolic);
    }

    println!("\nDiagnosis history:");
    for line in &dashboard.history_lines {
        println!(
            "  {:<15} BP {} | HR {} | Temp {}",
            line.title, line.blood_pressure, line.heart_rate, line.temperature
        );
    }

    println!("\nDiagnostics:");
    for item in &dashboard.diagnostics {
        println!("  {} - {} ({})", item.name, item.status, item.description);
    }

    println!("\nLab results: {}", dashboard.lab_results.join(", "));
    println!("Patients in roster: {}", summary.patients.len());
}
