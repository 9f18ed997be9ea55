mod config;
mod extract_cmd;
mod input;
mod parse_cmd;
mod profile_cmd;
mod render;
#[cfg(test)]
mod test_util;

use clap::{CommandFactory, Parser, Subcommand};

use coach_core::plan::Marker;

use config::{CliOverrides, CoachConfig, OutputFormat};

#[derive(Parser)]
#[command(
    name = "coach",
    version,
    about = "Parse meal and workout plans from AI coach responses and fitness profiles from user prompts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one raw plan section (exits non-zero if it is missing)
    Extract {
        /// Section to extract: meal, workout, MEAL_PLAN: or WORKOUT_PLAN:
        section: Marker,
        /// Response file (omit or `-` to read stdin)
        file: Option<String>,
    },
    /// Parse a response into days, meals and exercises
    Parse {
        /// Response file (omit or `-` to read stdin)
        file: Option<String>,
        /// Output format: text or json (overrides COACH_OUTPUT_FORMAT)
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Plan length in days (overrides COACH_PLAN_DAYS)
        #[arg(long)]
        days: Option<usize>,
        /// Leave empty meals empty instead of adding placeholders
        #[arg(long)]
        no_fill: bool,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Extract height, weight, age and goals from a user prompt and estimate energy needs
    Profile {
        /// Prompt file (omit or `-` to read stdin)
        file: Option<String>,
        /// Output format: text or json (overrides COACH_OUTPUT_FORMAT)
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Write a default coach config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Execute the `coach init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  parse.days = {}", cfg.parse.days);
    println!("  parse.fill_missing_meals = {}", cfg.parse.fill_missing_meals);
    println!("  output.format = {}", cfg.output.format);

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { section, file } => {
            extract_cmd::run_extract(section, file.as_deref())?;
        }
        Commands::Parse {
            file,
            format,
            days,
            no_fill,
            output,
        } => {
            let resolved = CoachConfig::resolve(&CliOverrides {
                days,
                format,
                no_fill,
            })?;
            parse_cmd::run_parse(file.as_deref(), output.as_deref(), &resolved)?;
        }
        Commands::Profile { file, format } => {
            let resolved = CoachConfig::resolve(&CliOverrides {
                days: None,
                format,
                no_fill: false,
            })?;
            profile_cmd::run_profile(file.as_deref(), resolved.format)?;
        }
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "coach", &mut std::io::stdout());
        }
    }

    Ok(())
}
