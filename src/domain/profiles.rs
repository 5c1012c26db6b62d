use std::collections::HashMap;

use bytes::Bytes;

use crate::domain::value_objects::FileKind;

// Magic bytes written at the start of each generated file
const PDF_HEADER: &[u8] = b"%PDF-1.5\n";
const OOXML_HEADER: &[u8] = &[0x50, 0x4B, 0x03, 0x04]; // docx/xlsx/pptx share the PK container signature
const JPG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF];
const MP3_HEADER: &[u8] = &[0xFF, 0xFB];

// Trailers required for readers that check the end of the file
const PDF_FOOTER: &[u8] = b"\n%%EOF";
const JPG_FOOTER: &[u8] = &[0xFF, 0xD9];

/// Per-file-type header/footer byte pair
///
/// Both sequences are immutable; cloning a profile only bumps the refcounts
/// of the underlying `Bytes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProfile {
    header: Bytes,
    footer: Bytes,
}

impl FileProfile {
    pub fn new(header: impl Into<Bytes>, footer: impl Into<Bytes>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Profile with no signature at all (txt, unknown kinds)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &Bytes {
        &self.header
    }

    pub fn footer(&self) -> &Bytes {
        &self.footer
    }
}

/// Immutable extension -> profile table, built once at startup and injected
/// wherever profiles are resolved
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: HashMap<String, FileProfile>,
}

impl ProfileCatalog {
    /// The built-in catalog of supported file types
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();

        profiles.insert(
            "pdf".to_string(),
            FileProfile::new(Bytes::from_static(PDF_HEADER), Bytes::from_static(PDF_FOOTER)),
        );

        for kind in ["docx", "xlsx", "pptx"] {
            profiles.insert(
                kind.to_string(),
                FileProfile::new(Bytes::from_static(OOXML_HEADER), Bytes::new()),
            );
        }

        profiles.insert(
            "jpg".to_string(),
            FileProfile::new(Bytes::from_static(JPG_HEADER), Bytes::from_static(JPG_FOOTER)),
        );

        profiles.insert(
            "mp3".to_string(),
            FileProfile::new(Bytes::from_static(MP3_HEADER), Bytes::new()),
        );

        profiles.insert("txt".to_string(), FileProfile::empty());

        Self { profiles }
    }

    /// Catalog with a single profile, for tests with synthetic signatures
    pub fn with_profile(mut self, kind: &str, profile: FileProfile) -> Self {
        self.profiles.insert(kind.to_lowercase(), profile);
        self
    }

    /// Look up a profile; unknown kinds degrade to the empty profile
    pub fn resolve(&self, kind: &FileKind) -> FileProfile {
        self.profiles.get(kind.as_str()).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
