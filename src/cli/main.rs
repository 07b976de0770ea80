//! ecs2avro binary
//!
//! Run-to-completion entry point: load the ECS flat catalogue, convert it,
//! validate the result against the Avro parser, and write the `.avsc` file.
//! Any failure aborts the run without producing (or overwriting) the output.

use clap::Parser;
use ecs_avro_converter::export::AvroExporter;
use ecs_avro_converter::import::EcsFlatImporter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Convert the Elastic Common Schema flat field catalogue into an Avro schema
#[derive(Parser, Debug)]
#[command(name = "ecs2avro")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the ECS flat catalogue YAML file
    #[arg(default_value = "ecs/generated/ecs/ecs_flat.yml")]
    input: PathBuf,

    /// Path the generated .avsc schema is written to
    #[arg(default_value = "elastic-common-schema.avsc")]
    output: PathBuf,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let schema = EcsFlatImporter::new().import_file(&cli.input)?;
    AvroExporter::new().export_to_file(&schema, &cli.output)?;
    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
