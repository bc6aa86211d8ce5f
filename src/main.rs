use clap::{Parser, Subcommand};
use convertor::convert::{
    format_outcome, format_outcome_json, looks_like_number, ConversionKind, ConversionOutcome,
    ConversionRequest, ConvertError,
};
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "convertor")]
#[command(about = "Length, weight and temperature conversion tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Conversion type (Length, Weight or Temperature)
        label: String,

        /// Raw input value
        value: String,

        /// Print the outcome as JSON instead of display text
        #[arg(long)]
        json: bool,
    },

    /// List available conversion types
    Kinds,

    /// Convert stdin line by line, one request per line
    Batch {
        /// Conversion type applied to every line
        #[arg(short, long, default_value = "Length")]
        label: String,

        /// Print one JSON object per line instead of display text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { label, value, json } => match convert_one(&label, &value, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Kinds => list_kinds(),
        Commands::Batch { label, json } => match run_batch(&label, json) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn convert_one(label: &str, value: &str, json: bool) -> Result<(), ConvertError> {
    let outcome = ConversionRequest::new(value, label).run();

    if json {
        println!("{}", format_outcome_json(&outcome)?);
    } else {
        println!("{}", format_outcome(&outcome));
    }

    Ok(())
}

fn list_kinds() {
    println!("Conversion types ({}):", ConversionKind::all().len());
    for kind in ConversionKind::all() {
        println!("  - {}: {}", kind, kind.formula());
    }
}

fn run_batch(label: &str, json: bool) -> Result<(), ConvertError> {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;

        // Cheap pre-check so obviously non-numeric lines skip the parse
        let outcome = if looks_like_number(&line) {
            ConversionRequest::new(&line, label).run()
        } else {
            ConversionOutcome::InvalidInput
        };

        if json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}", format_outcome(&outcome));
        }
    }

    Ok(())
}
