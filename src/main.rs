use clap::Parser;
use csv_rollup::logging;
use csv_rollup::pipeline::{self, RollupSettings};

#[derive(Parser)]
#[command(name = "csv_rollup")]
#[command(about = "Clean a CSV file and roll its values up per group", long_about = None)]
struct Args {
    /// Path to the TOML settings file
    #[arg(short, long)]
    config: String,

    /// Input CSV path, overriding the settings file
    #[arg(short, long)]
    input: Option<String>,

    /// Output CSV path, overriding the settings file
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = RollupSettings::load(&args.config)?;
    if let Some(input) = args.input {
        settings.input_path = input;
    }
    if let Some(output) = args.output {
        settings.output_path = output;
    }

    logging::init(&settings.logging)?;

    let summary = pipeline::run(&settings)?;
    println!(
        "processed {} rows into {} groups, wrote {}",
        summary.rows_read, summary.groups_written, settings.output_path
    );
    Ok(())
}
