//! # Beamcalc CLI
//!
//! Terminal front end for the single-span steel beam check.
//!
//! ```text
//! beamcalc calculate --length 5 --support hinged --force 100 --position 0.5 --profile I-beam_20B1
//! beamcalc profiles --search 40
//! beamcalc profile I-beam_20B1 --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::calculations::render_text;
use calc_core::materials::ProfileRepository;
use calc_core::{builtin_catalog, evaluate, CalcResult, CalculationInput, Settings, SupportType};
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "beamcalc")]
#[command(about = "Strength and stiffness check for a single-span steel beam", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file (defaults to $BEAMCALC_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a beam under one concentrated load
    Calculate {
        /// Span length (m)
        #[arg(long)]
        length: f64,

        /// Support condition: hinged, cantilever or fixed
        #[arg(long, default_value = "hinged")]
        support: SupportType,

        /// Concentrated load (kN)
        #[arg(long)]
        force: f64,

        /// Load position as a fraction of the span (0..1)
        #[arg(long, default_value_t = 0.5)]
        position: f64,

        /// Profile key, e.g. I-beam_20B1
        #[arg(long)]
        profile: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available steel profiles
    Profiles {
        /// Only show profiles whose name or key contains this text
        #[arg(long)]
        search: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one steel profile
    Profile {
        /// Profile key
        key: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    calc_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            if e.is_precondition_failure() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = builtin_catalog();

    match cli.command {
        Commands::Calculate {
            length,
            support,
            force,
            position,
            profile,
            json,
        } => {
            let input = CalculationInput {
                length,
                support_type: support,
                force,
                force_position: position,
                profile_name: profile,
            };
            cmd_calculate(&input, catalog, &settings, json)
        }
        Commands::Profiles { search, json } => cmd_profiles(catalog, search.as_deref(), json),
        Commands::Profile { key, json } => cmd_profile(catalog, &key, json),
    }
}

fn cmd_calculate(
    input: &CalculationInput,
    repository: &dyn ProfileRepository,
    settings: &Settings,
    json: bool,
) -> CalcResult<()> {
    input.validate()?;
    let profile = repository.get_profile(&input.profile_name)?;
    tracing::info!("Checking {} over {} m", profile.key, input.length);

    let result = evaluate(input, profile, &settings.criteria)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", settings.app_name);
        println!("Beam check, {}", Local::now().format("%Y-%m-%d %H:%M"));
        println!("═══════════════════════════════════════");
        println!();
        print!("{}", render_text(&result));
    }
    Ok(())
}

fn cmd_profiles(repository: &dyn ProfileRepository, search: Option<&str>, json: bool) -> CalcResult<()> {
    let profiles = match search {
        Some(text) => repository.search_profiles(text),
        None => repository.all_profiles(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "profiles": profiles }))?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("No profiles found");
        return Ok(());
    }

    println!(
        "{:<14} {:<14} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "KEY", "STANDARD", "Ix cm⁴", "Wx cm³", "h mm", "b mm", "kg/m"
    );
    for p in profiles {
        println!(
            "{:<14} {:<14} {:>10.0} {:>10.1} {:>8.0} {:>8.0} {:>8.1}",
            p.key, p.standard, p.moment_of_inertia_ix_cm4, p.moment_of_resistance_wx_cm3, p.height_mm, p.width_mm, p.mass_kg_m
        );
    }
    Ok(())
}

fn cmd_profile(repository: &dyn ProfileRepository, key: &str, json: bool) -> CalcResult<()> {
    let profile = repository.get_profile(key)?;

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        println!("{}", profile);
        println!("  Standard: {}", profile.standard);
        println!("  Ix = {} cm⁴", profile.moment_of_inertia_ix_cm4);
        println!("  Wx = {} cm³", profile.moment_of_resistance_wx_cm3);
        println!("  h = {} mm, b = {} mm", profile.height_mm, profile.width_mm);
        println!("  Mass = {} kg/m", profile.mass_kg_m);
    }
    Ok(())
}
