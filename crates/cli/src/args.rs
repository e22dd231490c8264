//! Command line parsing

use emergent_core::EngineConfig;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = r#"Emergent Cognitive Metrics - headless simulation

USAGE:
    emergent [OPTIONS]

OPTIONS:
    -c, --config <PATH>         Load configuration from JSON file
        --steps <N>             Number of simulation ticks (default: 150)
        --vocab-size <N>        Distribution dimensionality (default: 10)
        --decay <X>             Forgetting factor in (0, 1) (default: 0.91)
        --alpha-penalty <X>     Entropy weight in utility (default: 0.4)
        --seed <N>              Random seed (default: 42)
        --json                  Print the full result set as JSON
        --cli                   Headless mode (always on; accepted for compatibility)
    -h, --help                  Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                    Log level filter (default: warn)

EXAMPLES:
    # Final metrics with defaults
    emergent

    # Short run with a different seed, exported as JSON
    emergent --steps 20 --seed 7 --json
"#;

#[derive(Error, Debug, PartialEq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// What the binary should print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

/// Field overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub steps: Option<usize>,
    pub vocab_size: Option<usize>,
    pub decay: Option<f64>,
    pub alpha_penalty: Option<f64>,
    pub seed: Option<u64>,
}

impl Overrides {
    pub fn apply(&self, mut config: EngineConfig) -> EngineConfig {
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(vocab_size) = self.vocab_size {
            config.vocab_size = vocab_size;
        }
        if let Some(decay) = self.decay {
            config.decay = decay;
        }
        if let Some(alpha_penalty) = self.alpha_penalty {
            config.alpha_penalty = alpha_penalty;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: Overrides,
    pub format: OutputFormat,
    pub help: bool,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ArgsError> {
    let value = value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

/// Parse arguments, excluding the program name
pub fn parse(args: &[String]) -> Result<CliOptions, ArgsError> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--steps" => options.overrides.steps = Some(parse_value(arg, iter.next())?),
            "--vocab-size" => options.overrides.vocab_size = Some(parse_value(arg, iter.next())?),
            "--decay" => options.overrides.decay = Some(parse_value(arg, iter.next())?),
            "--alpha-penalty" => {
                options.overrides.alpha_penalty = Some(parse_value(arg, iter.next())?)
            }
            "--seed" => options.overrides.seed = Some(parse_value(arg, iter.next())?),
            "--json" => options.format = OutputFormat::Json,
            "--cli" => {}
            other => return Err(ArgsError::UnknownArgument(other.to_string())),
        }
    }

    Ok(options)
}
