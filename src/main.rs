use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fsp::input::{
    clamp_to, Diagnosis, Diet, FamilyHistory, Lifestyle, Menstruation, Ovulation,
    SexFrequency, Sleep, Stress, Substance, AGE_RANGE, HEIGHT_RANGE, MARRIAGE_YEARS_RANGE,
    WEIGHT_RANGE,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_IO: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one record and print the result (non-interactive)
    Score {
        /// Age in years (18-60)
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kg (30-200)
        #[arg(long)]
        weight: Option<u32>,

        /// Height in cm (100-220)
        #[arg(long)]
        height: Option<u32>,

        /// Marriage duration in years (0-40)
        #[arg(long)]
        marriage_years: Option<u32>,

        #[arg(long)]
        lifestyle: Option<Lifestyle>,

        #[arg(long)]
        menstruation: Option<Menstruation>,

        #[arg(long)]
        sex_frequency: Option<SexFrequency>,

        #[arg(long)]
        diagnosis: Option<Diagnosis>,

        #[arg(long)]
        ovulation: Option<Ovulation>,

        #[arg(long)]
        stress: Option<Stress>,

        #[arg(long)]
        sleep: Option<Sleep>,

        #[arg(long)]
        diet: Option<Diet>,

        #[arg(long)]
        substance: Option<Substance>,

        #[arg(long)]
        family_history: Option<FamilyHistory>,

        /// Print the full per-factor breakdown
        #[arg(long)]
        breakdown: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a commented sample config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "fsp")]
#[command(about = "Fertility score calculator (educational aid only)", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fsp/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.map(PathBuf::from);

    if let Some(Commands::Init) = cli.command {
        match fsp::config::init::write_sample_config(config_path) {
            Ok(path) => {
                println!("Wrote sample config to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match fsp::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate configured defaults at startup
    if let Err(errors) = fsp::config::validate_defaults(&config.defaults) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let initial = config.defaults.apply();

    if cli.verbose {
        eprintln!("Initial record: {:?}", initial);
    }

    match cli.command {
        None => {
            // Interactive form
            let app = fsp::tui::App::new(initial);
            if let Err(e) = fsp::tui::run_tui(app).await {
                eprintln!("Error: {}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Some(Commands::Score {
            age,
            weight,
            height,
            marriage_years,
            lifestyle,
            menstruation,
            sex_frequency,
            diagnosis,
            ovulation,
            stress,
            sleep,
            diet,
            substance,
            family_history,
            breakdown,
            json,
        }) => {
            // Flags override config defaults; numbers clamp like the form.
            let mut record = initial;
            if let Some(v) = age {
                record.age = clamp_to(&AGE_RANGE, v);
            }
            if let Some(v) = weight {
                record.weight = clamp_to(&WEIGHT_RANGE, v);
            }
            if let Some(v) = height {
                record.height = clamp_to(&HEIGHT_RANGE, v);
            }
            if let Some(v) = marriage_years {
                record.marriage_years = clamp_to(&MARRIAGE_YEARS_RANGE, v);
            }
            apply(&mut record.lifestyle, lifestyle);
            apply(&mut record.menstruation, menstruation);
            apply(&mut record.sex_frequency, sex_frequency);
            apply(&mut record.diagnosis, diagnosis);
            apply(&mut record.ovulation, ovulation);
            apply(&mut record.stress, stress);
            apply(&mut record.sleep, sleep);
            apply(&mut record.diet, diet);
            apply(&mut record.substance, substance);
            apply(&mut record.family_history, family_history);

            let result = fsp::scoring::compute_score(&record);

            if json {
                match fsp::output::format_json(&record, &result) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                let use_colors = fsp::output::should_use_colors();
                if breakdown {
                    println!("{}", fsp::output::format_breakdown(&result, use_colors));
                    println!();
                }
                println!("{}", fsp::output::format_summary(&result, use_colors));
            }
        }
        Some(Commands::Init) => unreachable!("handled before config load"),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn apply<T>(slot: &mut T, flag: Option<T>) {
    if let Some(v) = flag {
        *slot = v;
    }
}
