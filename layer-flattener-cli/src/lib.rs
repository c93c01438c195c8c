use std::path::{Path, PathBuf};

use clap::Parser;
use layer_flattener::{
    Summary, flatten, flatten_per_layer, read_document, sanitize_name, write_summary,
};
use log::{info, warn};

pub use crate::cli::Cli;

mod cli;

pub fn run() -> anyhow::Result<()> {
    // parse command
    let args = Cli::parse();
    run_with(&args)?;
    Ok(())
}

/// Convert according to `args`, returning the files that were written.
pub fn run_with(args: &Cli) -> anyhow::Result<Vec<PathBuf>> {
    info!("flattening {}", args.input.display());
    let document = read_document(&args.input)?;
    let pretty = !args.compact;

    match &args.split {
        Some(dir) => split(&document, dir, pretty),
        None => {
            let summary = flatten(&document)?;
            write_summary(&args.output, &summary, pretty)?;
            confirm(&args.output, &summary);
            Ok(vec![args.output.clone()])
        }
    }
}

fn split(document: &serde_json::Value, dir: &Path, pretty: bool) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for layer in flatten_per_layer(document)? {
        let path = dir.join(format!("{}.json", sanitize_name(&layer.name)));
        if written.contains(&path) {
            warn!("layer {:?} overwrites {}", layer.name, path.display());
        }
        write_summary(&path, &layer.summary, pretty)?;
        confirm(&path, &layer.summary);
        written.push(path);
    }
    Ok(written)
}

fn confirm(path: &Path, summary: &Summary) {
    println!(
        "Wrote {} ({} points, {} rectangles, {} polygons, {} images)",
        path.display(),
        summary.points.len(),
        summary.rectangles.len(),
        summary.polygons.len(),
        summary.images.len()
    );
}
