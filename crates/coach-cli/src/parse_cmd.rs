//! `coach parse [FILE] [--output <file>]`: structured plan as text or JSON.

use anyhow::{Context, Result};

use coach_core::plan::{CoachPlan, parse_coach_response};

use crate::config::{CoachConfig, OutputFormat};
use crate::input::read_response;
use crate::render::render_plan;

/// Parse a coach response and write it to a file or stdout.
pub fn run_parse(file: Option<&str>, output: Option<&str>, config: &CoachConfig) -> Result<()> {
    let response = read_response(file)?;
    let plan = parse_coach_response(&response, &config.parse_options);
    let rendered = format_plan(&plan, config.format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write to {path}"))?;
            println!(
                "{}-day plan written to {path} ({} training days)",
                plan.meal_days.len(),
                plan.training_days()
            );
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}

fn format_plan(plan: &CoachPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_plan(plan)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(plan).context("failed to serialize plan as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
