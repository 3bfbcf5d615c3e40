use clap::{Parser, Subcommand};
use lux_controls::{LampConfig, LampPipeline, Measurement};
use lux_sim::{RandomAmbientSensor, SimOptions, run_sim};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "lux-cli")]
#[command(about = "Luxflow CLI - Two-channel lamp control pipeline", long_about = None)]
struct Cli {
    /// Optional YAML lamp configuration (defaults used where absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one measurement and print the drive currents
    Tick {
        /// Measured ambient illuminance (lux)
        #[arg(allow_negative_numbers = true)]
        lux: f64,
        /// Measured ambient color temperature (kelvin)
        #[arg(allow_negative_numbers = true)]
        color_temp_k: i32,
    },
    /// Run a simulated sensor against the pipeline
    Run {
        /// Simulation length (seconds)
        #[arg(long, default_value_t = 10.0)]
        t_end: f64,
        /// Control tick period (seconds)
        #[arg(long, default_value_t = 0.1)]
        tick_period: f64,
        /// Record every N-th tick
        #[arg(long, default_value_t = 1)]
        record_every: usize,
        /// Seed for the random ambient sensor
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("{0}")]
    Control(#[from] lux_controls::ControlError),

    #[error("{0}")]
    Sim(#[from] lux_sim::SimError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tick { lux, color_temp_k } => cmd_tick(config, lux, color_temp_k),
        Commands::Run {
            t_end,
            tick_period,
            record_every,
            seed,
            output,
        } => cmd_run(config, t_end, tick_period, record_every, seed, output.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<LampConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config: LampConfig = serde_yaml::from_str(&text)?;
            tracing::debug!(path = %path.display(), "loaded lamp config");
            Ok(config)
        }
        None => Ok(LampConfig::default()),
    }
}

fn cmd_tick(config: LampConfig, lux: f64, color_temp_k: i32) -> CliResult<()> {
    let pipeline = LampPipeline::new(config)?;
    let out = pipeline.tick_checked(&Measurement::new(lux, color_temp_k))?;

    println!("white_current:  {:.6} A", out.white_current);
    println!("yellow_current: {:.6} A", out.yellow_current);
    println!("total_current:  {:.6} A", out.total_current());
    Ok(())
}

fn cmd_run(
    config: LampConfig,
    t_end: f64,
    tick_period: f64,
    record_every: usize,
    seed: u64,
    output: Option<&Path>,
) -> CliResult<()> {
    let pipeline = LampPipeline::new(config)?;
    let mut sensor = RandomAmbientSensor::new(seed);

    let opts = SimOptions {
        dt: tick_period,
        tick_period,
        t_end,
        record_every,
        ..SimOptions::default()
    };
    let record = run_sim(&mut sensor, &pipeline, &opts)?;

    let mut csv = String::from("time_s,lux,color_temp_k,white_current_a,yellow_current_a\n");
    for ((t, m), out) in record.t.iter().zip(&record.measurements).zip(&record.outputs) {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            t, m.illuminance, m.color_temperature, out.white_current, out.yellow_current
        ));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Wrote {} ticks to {}", record.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
