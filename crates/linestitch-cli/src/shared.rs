use std::io::{self, Read};
use std::path::Path;

use linestitch_core::{TextRegion, UncheckedRegion};

/// Read raw input text from a file, or from stdin when the path is `-`.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or unreadable.
pub fn read_input(file: &Path) -> Result<String, i32> {
    if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| {
            eprintln!("Error: failed to read stdin: {e}");
            1
        })?;
        return Ok(buf);
    }
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Read regions from a JSON file, or from stdin when the path is `-`.
///
/// Returns `Err(1)` with a message printed to stderr if the input cannot be
/// read or is not a JSON array of regions with 8-coordinate boxes.
pub fn read_regions(file: &Path) -> Result<Vec<TextRegion>, i32> {
    let input = read_input(file)?;
    let regions: Vec<TextRegion> = serde_json::from_str(&input).map_err(|e| {
        eprintln!("Error: invalid region JSON: {e}");
        1
    })?;

    tracing::debug!(count = regions.len(), source = %file.display(), "read regions");
    Ok(regions)
}

/// Read regions without checking box length, for `validate`.
pub fn read_unchecked_regions(file: &Path) -> Result<Vec<UncheckedRegion>, i32> {
    let input = read_input(file)?;
    let regions: Vec<UncheckedRegion> = serde_json::from_str(&input).map_err(|e| {
        eprintln!("Error: invalid region JSON: {e}");
        1
    })?;

    tracing::debug!(count = regions.len(), source = %file.display(), "read unchecked regions");
    Ok(regions)
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Join member indices as `0,2,5`.
pub fn members_str(members: &[usize]) -> String {
    members
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
