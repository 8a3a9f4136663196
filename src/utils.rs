//! Utility functions and constants
//!
//! **Why**: Centralized helpers used across multiple modules
//!
//! **Used by**: batch driver (source file filtering)

/// Media file type detection
pub mod media {
    use std::path::Path;

    /// Supported animation source extensions
    pub const SOURCE_EXTS: &[&str] = &["gif"];

    /// Check if file is an animation source (case-insensitive extension)
    pub fn is_gif(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|s| SOURCE_EXTS.contains(&s.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::media;
    use std::path::Path;

    #[test]
    fn test_is_gif() {
        assert!(media::is_gif(Path::new("run_north.gif")));
        assert!(media::is_gif(Path::new("RUN_NORTH.GIF")));
        assert!(!media::is_gif(Path::new("run_north.png")));
        assert!(!media::is_gif(Path::new("gif")));
        assert!(!media::is_gif(Path::new("noext")));
    }
}
