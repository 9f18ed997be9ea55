//! `coach extract <section> [FILE]`: print one raw plan section.

use anyhow::{Result, bail};

use coach_core::plan::{Marker, extract_plan_content};

use crate::input::{read_response, source_name};

/// Print the section that follows `marker`, or fail if there is none.
pub fn run_extract(marker: Marker, file: Option<&str>) -> Result<()> {
    let response = read_response(file)?;
    let section = extract_section(&response, marker, source_name(file))?;
    println!("{section}");
    Ok(())
}

fn extract_section<'a>(response: &'a str, marker: Marker, source: &str) -> Result<&'a str> {
    match extract_plan_content(response, marker) {
        Some(section) => Ok(section),
        None => bail!("no {} section ({marker}) found in {source}", marker.label()),
    }
}
