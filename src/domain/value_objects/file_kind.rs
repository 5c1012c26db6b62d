use serde::{Deserialize, Serialize};

/// File-extension key used to look up a profile (e.g. "pdf", "docx")
///
/// Normalized to lowercase on construction. Unknown kinds are valid — they
/// resolve to an empty profile rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileKind(String);

impl FileKind {
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FileKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(FileKind::new(" PDF ").as_str(), "pdf");
        assert_eq!(FileKind::new("Docx").as_str(), "docx");
    }

    #[test]
    fn unknown_kinds_are_valid() {
        let kind = FileKind::new("xyz123");
        assert_eq!(kind.as_str(), "xyz123");
        assert!(!kind.is_empty());
    }

    #[test]
    fn empty_kind_is_detectable() {
        assert!(FileKind::new("   ").is_empty());
    }
}
