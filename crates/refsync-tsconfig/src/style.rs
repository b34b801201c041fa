//! Formatting style discovery
//!
//! Rewritten tsconfig files should match the repository's Prettier
//! configuration where one exists. Discovery walks from the directory of
//! the file being rewritten up to the workspace root and loads the first
//! style file found. Only the options that affect JSON output are read;
//! unknown keys are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Style file names probed in priority order within each directory.
const STYLE_FILES: [&str; 5] = [
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.toml",
];

/// Line terminator for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl LineEnding {
    /// The literal terminator. `Auto` falls back to `\n`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf | LineEnding::Auto => "\n",
            LineEnding::Crlf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::Lf
    }
}

/// Subset of Prettier options that affects JSON rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    pub tab_width: usize,
    pub use_tabs: bool,
    pub end_of_line: LineEnding,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            tab_width: 2,
            use_tabs: false,
            end_of_line: LineEnding::Lf,
        }
    }
}

impl StyleOptions {
    /// One level of indentation.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }

    /// The line terminator for rendered output.
    pub fn line_ending(&self) -> &'static str {
        self.end_of_line.as_str()
    }
}

/// Find the style governing `dir`, walking up to `ceiling` inclusive.
///
/// The first style file found wins. Returns `Ok(None)` when no style
/// file exists anywhere in the walked range.
pub fn discover(dir: &Path, ceiling: &Path) -> Result<Option<StyleOptions>> {
    let mut current = Some(dir);
    while let Some(candidate_dir) = current {
        for name in STYLE_FILES {
            let candidate = candidate_dir.join(name);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Loading style file");
                return load_style_file(&candidate).map(Some);
            }
        }
        if candidate_dir == ceiling {
            break;
        }
        current = candidate_dir.parent();
    }
    Ok(None)
}

/// Parse a single style file.
///
/// The format is chosen by extension. A bare `.prettierrc` is tried as
/// JSON first and YAML second, mirroring how Prettier resolves it.
pub fn load_style_file(path: &Path) -> Result<StyleOptions> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            serde_json::from_str(&text).map_err(|e| Error::style(path, "JSON", e.to_string()))
        }
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&text).map_err(|e| Error::style(path, "YAML", e.to_string()))
        }
        Some("toml") => {
            toml::from_str(&text).map_err(|e| Error::style(path, "TOML", e.to_string()))
        }
        _ => serde_json::from_str(&text).or_else(|_| {
            serde_yaml::from_str(&text).map_err(|e| Error::style(path, "YAML", e.to_string()))
        }),
    }
}
