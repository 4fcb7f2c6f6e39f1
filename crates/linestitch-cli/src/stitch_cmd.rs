use std::path::Path;

use linestitch_core::{
    LineGroup, StitchOptions, TextRegion, group_into_lines, try_stitch_boxes_into_lines,
};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, members_str, read_regions};

pub fn run(
    file: &Path,
    options: &StitchOptions,
    format: &OutputFormat,
    members: bool,
) -> Result<(), i32> {
    let regions = read_regions(file)?;

    let lines = try_stitch_boxes_into_lines(&regions, options).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    // One group per output line, including the pass-through cases.
    let groups = if members {
        Some(group_into_lines(&regions, options))
    } else {
        None
    };

    tracing::info!(
        regions = regions.len(),
        lines = lines.len(),
        max_x_dist = options.max_x_dist,
        min_y_overlap_ratio = ?options.min_y_overlap_ratio,
        "stitched"
    );

    match format {
        OutputFormat::Text => write_text(&lines, groups.as_deref()),
        OutputFormat::Json => write_json(&lines, groups.as_deref()),
        OutputFormat::Csv => write_csv(&lines, groups.as_deref()),
    }
}

fn write_text(lines: &[TextRegion], groups: Option<&[LineGroup]>) -> Result<(), i32> {
    if groups.is_some() {
        println!("x0\ttop\tx1\tbottom\ttext\tmembers");
    } else {
        println!("x0\ttop\tx1\tbottom\ttext");
    }

    for (i, line) in lines.iter().enumerate() {
        let b = line.bbox();
        print!(
            "{:.2}\t{:.2}\t{:.2}\t{:.2}\t{}",
            b.x0, b.top, b.x1, b.bottom, line.text
        );
        if let Some(groups) = groups {
            print!("\t{}", members_str(&groups[i].members));
        }
        println!();
    }

    Ok(())
}

fn write_json(lines: &[TextRegion], groups: Option<&[LineGroup]>) -> Result<(), i32> {
    let mut values = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let mut value = serde_json::to_value(line).map_err(|e| {
            eprintln!("Error: failed to encode line {i}: {e}");
            1
        })?;
        if let Some(groups) = groups {
            value["members"] = serde_json::json!(groups[i].members);
        }
        values.push(value);
    }

    let json_str = serde_json::to_string(&values).map_err(|e| {
        eprintln!("Error: failed to encode output: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(lines: &[TextRegion], groups: Option<&[LineGroup]>) -> Result<(), i32> {
    if groups.is_some() {
        println!("x0,top,x1,bottom,text,members");
    } else {
        println!("x0,top,x1,bottom,text");
    }

    for (i, line) in lines.iter().enumerate() {
        let b = line.bbox();
        print!(
            "{:.2},{:.2},{:.2},{:.2},{}",
            b.x0,
            b.top,
            b.x1,
            b.bottom,
            csv_escape(&line.text)
        );
        if let Some(groups) = groups {
            print!(",{}", csv_escape(&members_str(&groups[i].members)));
        }
        println!();
    }

    Ok(())
}
