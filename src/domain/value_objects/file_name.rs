use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{FileKind, FileSize};

/// Characters stripped from caller-supplied filenames: path separators,
/// shell/header metacharacters and control bytes
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[/\\:*?"'<>|\x00-\x1f]"#).expect("filename pattern is valid"));

/// Resolved download filename carried in the Content-Disposition header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileName(String);

impl FileName {
    /// Resolve the final filename for a generation request.
    ///
    /// A missing or blank request falls back to a synthesized
    /// `dummy_{size}_bytes.{ext}` name. Supplied names are sanitized and
    /// get the kind's extension appended when it is not already there.
    pub fn resolve(requested: Option<&str>, size: FileSize, kind: &FileKind) -> Self {
        match requested.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => {
                let sanitized = sanitize(name);
                if sanitized.is_empty() {
                    Self(synthesize(size, kind))
                } else {
                    Self(ensure_extension(&sanitized, kind))
                }
            }
            None => Self(synthesize(size, kind)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn synthesize(size: FileSize, kind: &FileKind) -> String {
    if kind.is_empty() {
        format!("dummy_{}_bytes", size)
    } else {
        format!("dummy_{}_bytes.{}", size, kind)
    }
}

fn sanitize(name: &str) -> String {
    UNSAFE_CHARS
        .replace_all(name, "_")
        .trim_matches(|c: char| c == '.' || c == ' ')
        .to_string()
}

fn ensure_extension(name: &str, kind: &FileKind) -> String {
    if kind.is_empty() {
        return name.to_string();
    }

    let extension = format!(".{}", kind.as_str());
    if name.to_lowercase().ends_with(&extension) {
        name.to_string()
    } else {
        format!("{}{}", name, extension)
    }
}
