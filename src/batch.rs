//! Batch conversion driver
//!
//! **Why**: The player character ships with three fixed animation folders
//! (run/slide/idle). Walking them, matching direction tokens in filenames
//! and converting each hit keeps the art pipeline a single command.
//!
//! **Used by**: main (one `convert_all` per process run)
//!
//! # Error policy
//!
//! Every per-file failure — open, decode, empty animation, write — is
//! logged, counted and skipped; the batch always runs to completion.
//! Files without a direction token are skipped silently.

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::convert;
use crate::direction::{AnimKind, Direction};
use crate::utils;

/// Filesystem layout of the player character assets
///
/// Spritesheets are written directly into `player_dir`; sources live in
/// the fixed per-kind subfolders below it (see [`AnimKind::source_dir`]).
#[derive(Debug, Clone)]
pub struct Layout {
    pub player_dir: PathBuf,
}

impl Layout {
    /// Compiled-in default, relative to the working directory
    pub const DEFAULT_PLAYER_DIR: &'static str = "assets/characters/player";

    pub fn new(player_dir: impl Into<PathBuf>) -> Self {
        Self {
            player_dir: player_dir.into(),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PLAYER_DIR)
    }
}

/// Outcome counters for one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Spritesheets written
    pub converted: usize,
    /// Conversions attempted but failed
    pub failed: usize,
    /// GIFs without a direction token in their name
    pub skipped: usize,
}

impl BatchSummary {
    /// Conversions that were actually attempted (matched a direction)
    pub fn attempted(&self) -> usize {
        self.converted + self.failed
    }

    /// True when at least one conversion ran and none succeeded
    pub fn all_failed(&self) -> bool {
        self.attempted() > 0 && self.converted == 0
    }
}

/// Convert every direction-named GIF under the layout's kind subfolders.
///
/// Missing subfolders are skipped. Files are processed in sorted order for
/// reproducible runs. One status line is printed per attempted conversion.
pub fn convert_all(layout: &Layout) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for kind in AnimKind::all() {
        let src_dir = kind.source_path(&layout.player_dir);
        if !src_dir.is_dir() {
            info!("No {} folder at {}, skipping", kind, src_dir.display());
            continue;
        }

        match list_gifs(&src_dir) {
            Ok(files) => {
                info!("{}: {} gif file(s) in {}", kind, files.len(), src_dir.display());
                for path in files {
                    convert_one(layout, *kind, &path, &mut summary);
                }
            }
            Err(e) => warn!("{:#}", e),
        }
    }

    summary
}

/// List GIF files in a directory, sorted for deterministic processing.
/// Extension matching is case-insensitive, like the direction matcher.
fn list_gifs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && utils::media::is_gif(p))
        .collect();
    files.sort();

    Ok(files)
}

/// Convert a single source file, updating the summary counters
fn convert_one(layout: &Layout, kind: AnimKind, path: &Path, summary: &mut BatchSummary) {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");

    let Some(direction) = Direction::find(name) else {
        info!("No direction token in {}, skipping", name);
        summary.skipped += 1;
        return;
    };

    let dst = layout.player_dir.join(kind.sheet_name(direction));
    match convert::convert(path, &dst) {
        Ok(sheet) => {
            println!(
                "Converted: {} -> {} ({} frames, {}x{})",
                path.display(),
                dst.display(),
                sheet.frames,
                sheet.width,
                sheet.height
            );
            summary.converted += 1;
        }
        Err(e) => {
            println!("Failed: {}: {}", path.display(), e);
            warn!("{}: {}", path.display(), e);
            summary.failed += 1;
        }
    }
}
