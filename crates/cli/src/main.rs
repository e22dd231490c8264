mod args;

use args::{CliOptions, OutputFormat, USAGE};
use emergent_core::{CognitiveEngine, EngineConfig};

fn load_config(options: &CliOptions) -> Result<EngineConfig, emergent_core::ConfigError> {
    let base = match &options.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };
    Ok(options.overrides.apply(base))
}

fn run(options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(options)?;
    let engine = CognitiveEngine::new(config)?;

    match options.format {
        OutputFormat::Summary => print!("{}", engine.final_metrics()),
        OutputFormat::Json => println!("{}", engine.report().to_json()?),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let options = match args::parse(&argv) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
