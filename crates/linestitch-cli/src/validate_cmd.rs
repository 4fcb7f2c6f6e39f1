use std::path::Path;

use linestitch_core::{Severity, validate_unchecked_regions};

use crate::cli::ValidateFormat;
use crate::shared::read_unchecked_regions;

/// Report input problems. Exits with 1 when any error-severity issue is found.
pub fn run(file: &Path, format: &ValidateFormat) -> Result<(), i32> {
    let regions = read_unchecked_regions(file)?;
    let issues = validate_unchecked_regions(&regions);

    let error_count = issues.iter().filter(|i| i.is_error()).count();
    let warning_count = issues.iter().filter(|i| i.is_warning()).count();

    match format {
        ValidateFormat::Text => {
            if issues.is_empty() {
                println!("No issues found in {} region(s).", regions.len());
            } else {
                for issue in &issues {
                    let severity = match issue.severity {
                        Severity::Error => "ERROR",
                        Severity::Warning => "WARNING",
                    };
                    print!("[{severity}] {}: {}", issue.code, issue.message);
                    if let Some(ref loc) = issue.location {
                        print!(" (at {loc})");
                    }
                    println!();
                }
                println!();
                println!("Summary: {error_count} error(s), {warning_count} warning(s)");
            }
        }
        ValidateFormat::Json => {
            let output = serde_json::json!({
                "regions": regions.len(),
                "issues": issues,
                "summary": {
                    "errors": error_count,
                    "warnings": warning_count,
                },
            });
            let json_str = serde_json::to_string_pretty(&output).map_err(|e| {
                eprintln!("Error: failed to encode output: {e}");
                1
            })?;
            println!("{json_str}");
        }
    }

    if error_count > 0 { Err(1) } else { Ok(()) }
}
