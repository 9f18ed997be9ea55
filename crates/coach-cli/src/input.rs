//! Reading coach responses from a file or stdin.

use std::io::Read;

use anyhow::{Context, Result};

/// Read the whole response. `None` or `"-"` reads stdin.
pub fn read_response(file: Option<&str>) -> Result<String> {
    match file {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read response from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read response file {path}")),
    }
}

/// Human-readable name of the input, for error messages.
pub fn source_name(file: Option<&str>) -> &str {
    match file {
        None | Some("-") => "stdin",
        Some(path) => path,
    }
}
