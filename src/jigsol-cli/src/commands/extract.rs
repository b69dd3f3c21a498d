//! Extraction command handlers
//!
//! Thin wrappers over the `jigsol` library that resolve inputs, attach
//! context to errors and print a short summary per step.

use anyhow::{Context, Result};
use jigsol::{
    extract_highlights, extract_home_board_list, extract_piece_settings, ExportedBundle,
    Highlight, MetadataTokens, HIGHLIGHT_CAP, HOME_BOARD_EXCERPT_LIMIT, PIECE_SIZES,
};
use std::path::Path;

/// Split the metadata blob into the three token files
pub fn metadata(metadata: &Path, analysis_dir: &Path) -> Result<()> {
    let (tokens, summary) = MetadataTokens::from_file(metadata)
        .with_context(|| format!("Failed to read metadata from {}", metadata.display()))?;

    let written = tokens
        .write_to(analysis_dir)
        .with_context(|| format!("Failed to write token files to {}", analysis_dir.display()))?;

    println!("Scanned {} tokens from {}", summary.tokens_scanned, metadata.display());
    println!("  core:  {}", summary.core);
    println!("  piece: {}", summary.piece);
    println!("  board: {}", summary.board);
    for path in &written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Write the board or piece highlight excerpt
pub fn highlights(analysis_dir: &Path, highlight: Highlight, limit: usize) -> Result<()> {
    let report = extract_highlights(analysis_dir, highlight, limit).with_context(|| {
        format!(
            "Failed to extract highlights from {} (run `jigsol metadata` first)",
            analysis_dir.join(highlight.source_file()).display()
        )
    })?;

    println!(
        "Kept {} lines (limit {}) -> {}",
        report.lines.len(),
        limit,
        report.output.display()
    );

    Ok(())
}

fn open_bundle(bundle: &Path) -> Result<ExportedBundle> {
    ExportedBundle::open(bundle)
        .with_context(|| format!("Failed to open asset export {}", bundle.display()))
}

/// Write the HomeBoardList excerpt
pub fn home_board(bundle: &Path, analysis_dir: &Path, limit: usize) -> Result<()> {
    let container = open_bundle(bundle)?;
    let excerpt = extract_home_board_list(&container, analysis_dir, limit)
        .with_context(|| format!("Failed to extract home board list from {}", bundle.display()))?;

    println!(
        "{}: kept {} of {} boards -> {}",
        excerpt.source,
        excerpt.boards.len(),
        excerpt.total,
        excerpt.output.display()
    );

    Ok(())
}

/// Write one type-tree JSON per piece setting size
pub fn piece_settings(bundle: &Path, analysis_dir: &Path, sizes: &[String]) -> Result<()> {
    let sizes: Vec<&str> = if sizes.is_empty() {
        PIECE_SIZES.to_vec()
    } else {
        sizes.iter().map(String::as_str).collect()
    };

    let container = open_bundle(bundle)?;
    let report = extract_piece_settings(&container, analysis_dir, &sizes)
        .with_context(|| format!("Failed to extract piece settings from {}", bundle.display()))?;

    for (size, source, output) in &report.written {
        println!("{}: {} -> {}", size, source, output.display());
    }
    for size in &report.missing {
        println!("{}: no matching asset", size);
    }

    Ok(())
}

/// Run every extraction; metadata first since the highlights read its output
pub fn all(metadata_path: &Path, bundle: &Path, analysis_dir: &Path) -> Result<()> {
    println!("=== Metadata ===");
    metadata(metadata_path, analysis_dir)?;

    println!("\n=== Board highlights ===");
    highlights(analysis_dir, Highlight::Board, HIGHLIGHT_CAP)?;

    println!("\n=== Piece highlights ===");
    highlights(analysis_dir, Highlight::Piece, HIGHLIGHT_CAP)?;

    println!("\n=== Home board list ===");
    home_board(bundle, analysis_dir, HOME_BOARD_EXCERPT_LIMIT)?;

    println!("\n=== Piece settings ===");
    piece_settings(bundle, analysis_dir, &[])?;

    Ok(())
}
