use clap::{Parser, Subcommand};
use std::fs::File;
use std::process::ExitCode;

use line_sphere::{
    collision::sample_count_bounded,
    config::DetectionConfig,
    detect_with_config,
    io::{format_collisions, read_given, write_report_json, Given},
    scene::{build_scene, write_scene_json},
};

/// Finds where a line segment crosses the surface of a sphere.
#[derive(Parser)]
#[command(name = "line_sphere_cli", version)]
struct Cli {
    /// JSON file with detection settings
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect collisions for the sphere and line described in a text file.
    Detect {
        path: String,
        /// Sampling step, shell width and merge tolerance
        #[arg(short, long)]
        precision: Option<f64>,
        /// Decimals printed per coordinate
        #[arg(long, default_value_t = 2)]
        digits: usize,
        /// Reject inputs that need more samples than this
        #[arg(long)]
        max_samples: Option<usize>,
        /// Also write the report as JSON
        #[arg(long)]
        json: Option<String>,
    },
    /// Print how many samples a detection would take.
    SampleCount {
        path: String,
        #[arg(short, long)]
        precision: Option<f64>,
    },
    /// Write sphere grid, line and collisions as JSON for plotting.
    ExportScene {
        path: String,
        output: String,
        #[arg(short, long)]
        precision: Option<f64>,
    },
}

fn init_logging() {
    if let Ok(path) = std::env::var("LINE_SPHERE_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

fn load_config(path: Option<&str>) -> Result<DetectionConfig, ExitCode> {
    match path {
        Some(p) => DetectionConfig::load(p).map_err(|e| {
            eprintln!("Error reading {}: {}", p, e);
            ExitCode::FAILURE
        }),
        None => Ok(DetectionConfig::default()),
    }
}

fn load_given(path: &str) -> Result<Given, ExitCode> {
    read_given(path).map_err(|e| {
        log::warn!("{}: {}", path, e);
        eprintln!("Wrong data: {}", e);
        ExitCode::FAILURE
    })
}

fn run(cli: Cli) -> Result<(), ExitCode> {
    let mut config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Detect {
            path,
            precision,
            digits,
            max_samples,
            json,
        } => {
            if let Some(p) = precision {
                config.precision = p;
            }
            if let Some(n) = max_samples {
                config.max_samples = n;
            }
            let given = load_given(&path)?;
            let report = detect_with_config(&given.sphere, &given.line, &config).map_err(|e| {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            })?;
            if report.is_empty() {
                println!("No collisions found");
            } else {
                for line in format_collisions(&report.collisions, digits) {
                    println!("{}", line);
                }
            }
            if let Some(out) = json {
                match write_report_json(&out, &report) {
                    Ok(()) => println!("Wrote {}", out),
                    Err(e) => {
                        eprintln!("Error writing {}: {}", out, e);
                        return Err(ExitCode::FAILURE);
                    }
                }
            }
        }
        Commands::SampleCount { path, precision } => {
            if let Some(p) = precision {
                config.precision = p;
            }
            let given = load_given(&path)?;
            let line = given.line;
            let count = sample_count_bounded(
                line.point1,
                line.point2,
                config.precision,
                config.max_samples,
            );
            match count {
                Ok(n) => println!("Samples: {}", n),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Err(ExitCode::FAILURE);
                }
            }
        }
        Commands::ExportScene {
            path,
            output,
            precision,
        } => {
            if let Some(p) = precision {
                config.precision = p;
            }
            let given = load_given(&path)?;
            let scene = build_scene(&given, &config).map_err(|e| {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            })?;
            match write_scene_json(&output, &scene) {
                Ok(()) => println!("Wrote {}", output),
                Err(e) => {
                    eprintln!("Error writing {}: {}", output, e);
                    return Err(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
