use crate::error::DecodeError;
use crate::loader::{self, SourceImage};
use crate::params::PathParameters;
use std::path::Path;
use tracing::{info, warn};

/// What one window remembers between frames.
///
/// A successful upload replaces the chart and resets every slider; a failed
/// one leaves the session exactly as it was.
#[derive(Default)]
pub struct Session {
    source: Option<SourceImage>,
    pub params: Option<PathParameters>,
    /// Bumped on every successful upload so views can tell charts apart.
    generation: u64,
}

impl Session {
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<(), DecodeError> {
        self.install(loader::decode(name, bytes))
    }

    pub fn load_path(&mut self, path: &Path) -> Result<(), DecodeError> {
        self.install(loader::read_file(path))
    }

    fn install(&mut self, decoded: Result<SourceImage, DecodeError>) -> Result<(), DecodeError> {
        let source = decoded.inspect_err(|e| warn!(error = %e, "Upload rejected"))?;
        info!(
            name = source.name(),
            width = source.width(),
            height = source.height(),
            "Chart loaded"
        );
        self.params = Some(PathParameters::defaults_for(source.width(), source.height()));
        self.source = Some(source);
        self.generation += 1;
        Ok(())
    }

    pub fn reset_params(&mut self) {
        if let Some(source) = &self.source {
            self.params = Some(PathParameters::defaults_for(source.width(), source.height()));
            info!("Guide reset to defaults");
        }
    }
}
