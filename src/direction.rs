//! Compass direction and animation kind vocabularies
//!
//! **Why**: Source GIFs encode their facing direction in free-form filenames
//! (`player_run_north-east.gif`). The output naming scheme needs that token
//! plus the animation kind derived from the source subfolder.
//!
//! **Used by**: Batch driver (filename matching, output naming)

use std::path::Path;

/// Eight-way compass direction parsed from a filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All directions in match order: diagonals first, so `north-east`
    /// is never shadowed by a premature `north` or `east` hit.
    pub fn all() -> &'static [Direction] {
        &[
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    /// Canonical token used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::NorthEast => "north-east",
            Direction::NorthWest => "north-west",
            Direction::SouthEast => "south-east",
            Direction::SouthWest => "south-west",
        }
    }

    /// Find the direction token in a filename (case-insensitive).
    ///
    /// A token only counts when it appears as a delimiter-bounded segment:
    /// `_<token>.`, `_<token>_`, or the suffix `_<token>.gif`. Bounding keeps
    /// tokens from matching inside unrelated words (`northern`, `western`).
    pub fn find(filename: &str) -> Option<Direction> {
        let lower = filename.to_lowercase();
        for dir in Self::all() {
            let token = dir.as_str();
            if lower.contains(&format!("_{}.", token))
                || lower.contains(&format!("_{}_", token))
                || lower.ends_with(&format!("_{}.gif", token))
            {
                return Some(*dir);
            }
        }
        None
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Animation kind, one per fixed source subfolder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimKind {
    Run,
    Slide,
    Idle,
}

impl AnimKind {
    pub fn all() -> &'static [AnimKind] {
        &[AnimKind::Run, AnimKind::Slide, AnimKind::Idle]
    }

    /// Output filename prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimKind::Run => "run",
            AnimKind::Slide => "slide",
            AnimKind::Idle => "idle",
        }
    }

    /// Fixed source subfolder under the player asset directory.
    /// The art drops land in Chinese-named folders: 跑步=run, 滑行=slide, 待机=idle.
    pub fn source_dir(&self) -> &'static str {
        match self {
            AnimKind::Run => "跑步",
            AnimKind::Slide => "滑行",
            AnimKind::Idle => "待机",
        }
    }

    /// Output spritesheet name for a matched direction: `run_north-east.png`
    pub fn sheet_name(&self, dir: Direction) -> String {
        format!("{}_{}.png", self.as_str(), dir.as_str())
    }

    /// Resolve the kind's source subfolder under `player_dir`
    pub fn source_path(&self, player_dir: &Path) -> std::path::PathBuf {
        player_dir.join(self.source_dir())
    }
}

impl std::fmt::Display for AnimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
