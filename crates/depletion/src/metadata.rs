use crate::material::DepletedMaterial;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File-level axes shared by every material of a depletion file
///
/// A reader fills this once from the file header and then creates materials
/// with [DepletionMetadata::material]. Materials hold onto the same axes
/// rather than copies, and an axis the file never recorded stays `None`.
///
/// ```rust
/// # use stools_depletion::DepletionMetadata;
/// let metadata = DepletionMetadata::new("case_dep.m")
///     .with_names(["U235", "U238"])
///     .with_days([0.0, 10.0, 20.0]);
///
/// let fuel = metadata.material("fuel");
/// assert_eq!(fuel.days(), Some([0.0, 10.0, 20.0].as_slice()));
/// assert!(fuel.zai().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DepletionMetadata {
    /// Path of the file the results were read from
    pub file_path: PathBuf,
    /// Isotope ZAI identifiers
    pub zai: Option<Arc<[u32]>>,
    /// Isotope names
    pub names: Option<Arc<[String]>>,
    /// Time points (days)
    pub days: Option<Arc<[f64]>>,
}

impl DepletionMetadata {
    /// Metadata for the file at `path`, with no axes recorded yet
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Record the isotope ZAI identifiers
    pub fn with_zai<I: IntoIterator<Item = u32>>(mut self, zai: I) -> Self {
        self.zai = Some(zai.into_iter().collect());
        self
    }

    /// Record the isotope names
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Record the time points (days)
    pub fn with_days<I: IntoIterator<Item = f64>>(mut self, days: I) -> Self {
        self.days = Some(days.into_iter().collect());
        self
    }

    /// Create an empty material sharing these axes
    pub fn material(&self, name: &str) -> DepletedMaterial {
        DepletedMaterial::new(self, name)
    }
}
