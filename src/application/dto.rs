use crate::domain::profiles::FileProfile;
use crate::domain::value_objects::{FileName, FileSize};

/// Fully resolved generation request: validated size, looked-up profile and
/// final download filename. Built per request, discarded when the response
/// completes.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub size: FileSize,
    pub profile: FileProfile,
    pub filename: FileName,
}
