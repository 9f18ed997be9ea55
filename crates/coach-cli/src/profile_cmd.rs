//! `coach profile [FILE]`: measurements and energy needs from a user prompt.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use coach_core::profile::{FitnessProfile, Measurements, ProfileError, extract_measurements};

use crate::config::OutputFormat;
use crate::input::{read_response, source_name};
use crate::render::render_profile;

/// What a prompt says about the user, plus the profile built from it when
/// height, weight and age were all stated.
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    pub measurements: Measurements,
    pub profile: Option<FitnessProfile>,
    pub missing: Vec<&'static str>,
}

impl ProfileReport {
    pub fn from_measurements(measurements: Measurements) -> Result<Self> {
        let (profile, missing) = match FitnessProfile::from_measurements(&measurements) {
            Ok(profile) => (Some(profile), Vec::new()),
            Err(ProfileError::MissingFields(fields)) => (None, fields),
            Err(err) => return Err(err).context("failed to build fitness profile"),
        };
        Ok(Self {
            measurements,
            profile,
            missing,
        })
    }
}

/// Read a prompt and print the extracted profile.
pub fn run_profile(file: Option<&str>, format: OutputFormat) -> Result<()> {
    let prompt = read_response(file)?;
    let measurements = extract_measurements(&prompt);
    if !measurements.has_body_measurements() {
        warn!("no height, weight or age found in {}", source_name(file));
    }
    let report = ProfileReport::from_measurements(measurements)?;
    print!("{}", format_report(&report, format)?);
    Ok(())
}

fn format_report(report: &ProfileReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_profile(report)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)
                .context("failed to serialize profile as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
