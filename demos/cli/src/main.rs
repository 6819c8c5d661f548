use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use directory_core::presentation::{
    experience_label, fee_label, results_heading, specialty_line, EMPTY_RESULTS_MESSAGE,
    LOAD_FAILED_NOTICE,
};
use directory_core::{
    all_specialties, apply_view, criteria_from_query, query_from_criteria, ConsultationMode,
    DirectoryConfig, Doctor, SortKey,
};
use directory_source::{load_doctors, HttpSource, StaticSource};

#[derive(Parser, Debug)]
#[command(
    name = "directory-cli",
    about = "Search, filter and sort the doctor directory."
)]
struct Args {
    /// Read doctors from a local JSON file; takes precedence over the endpoint.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// URL serving the doctor list.
    #[arg(long, env = "DOCTOR_DIRECTORY_ENDPOINT")]
    endpoint: Option<String>,

    /// Start from the criteria in a URL query string, e.g. "?specialty=Dentist&sortBy=fees".
    #[arg(long, default_value = "")]
    query_string: String,

    /// Only doctors whose name contains this text.
    #[arg(short, long)]
    query: Option<String>,

    /// Consultation mode to keep (repeatable).
    #[arg(short, long, value_enum)]
    mode: Vec<ModeArg>,

    /// Specialty to keep (repeatable).
    #[arg(short, long)]
    specialty: Vec<String>,

    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Print the derived view as JSON.
    #[arg(long)]
    json: bool,

    /// Print the specialty catalogue and exit.
    #[arg(long)]
    list_specialties: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Video,
    Clinic,
}

impl From<ModeArg> for ConsultationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Video => ConsultationMode::VideoConsult,
            ModeArg::Clinic => ConsultationMode::InClinic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Fees,
    Experience,
}

impl From<SortArg> for SortKey {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Fees => SortKey::Fees,
            SortArg::Experience => SortKey::Experience,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let loaded = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read file {path:?}"))?;
            load_doctors(&StaticSource::new(data)).await
        }
        None => {
            let mut config = DirectoryConfig::default();
            if let Some(endpoint) = &args.endpoint {
                config.endpoint = endpoint.clone();
            }
            log::info!("fetching doctors from {}", config.endpoint);
            load_doctors(&HttpSource::new(config.endpoint)).await
        }
    };

    if loaded.failure.is_some() {
        eprintln!("{LOAD_FAILED_NOTICE}");
    }
    let doctors = loaded.doctors;

    if args.list_specialties {
        for specialty in all_specialties(&doctors) {
            println!("{specialty}");
        }
        return Ok(());
    }

    let mut criteria = criteria_from_query(&args.query_string);
    if let Some(query) = &args.query {
        criteria.query = query.trim().to_string();
    }
    if !args.mode.is_empty() {
        criteria.consultation_types = args
            .mode
            .iter()
            .copied()
            .map(ConsultationMode::from)
            .collect();
    }
    if !args.specialty.is_empty() {
        criteria.specialties = args.specialty.iter().cloned().collect();
    }
    if let Some(sort) = args.sort {
        criteria.sort_by = Some(sort.into());
    }

    let view = apply_view(&doctors, &criteria);

    if args.json {
        let json = serde_json::to_string_pretty(&view).context("Could not serialize doctors")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", results_heading(view.len()));
    if view.is_empty() {
        println!("{EMPTY_RESULTS_MESSAGE}");
    }
    for doctor in &view {
        print_doctor(doctor);
    }

    let link = query_from_criteria(&criteria, &args.query_string);
    if !link.is_empty() {
        println!("\nLink: ?{link}");
    }

    Ok(())
}

fn print_doctor(doctor: &Doctor) {
    println!(
        "\n{}  [{}]\n  {}\n  {} | {}",
        doctor.name,
        doctor.id,
        specialty_line(doctor),
        experience_label(doctor),
        fee_label(doctor)
    );

    let modes: Vec<&str> = doctor
        .consultation_modes
        .iter()
        .map(|mode| mode.label())
        .collect();
    if !modes.is_empty() {
        println!("  {}", modes.join(", "));
    }
    if let Some(clinic) = &doctor.clinic {
        match &doctor.location {
            Some(location) => println!("  {clinic}, {location}"),
            None => println!("  {clinic}"),
        }
    }
}
