use crate::error::{Error, Result};
use crate::scope::ScopedSettings;

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use stools_utils::{f, OptionExt};

/// Key for reshaping group-to-group data into square matrices
pub const RESHAPE_SCATTER: &str = "xs.reshapeScatter";

/// Key for the fallback number of energy groups
pub const NUM_GROUPS: &str = "xs.numGroups";

/// Options consulted by the containers at ingestion time
///
/// Queries never read the settings, only `add_data` style calls do.
///
/// Values are set either through the typed setters or by key with
/// [Settings::set_value], which mirrors how the options are named in a JSON
/// settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Store `numGroups`² long data as square matrices
    #[serde(rename = "xs.reshapeScatter", default)]
    reshape_scatter: bool,
    /// Number of energy groups when a container cannot infer its own
    #[serde(rename = "xs.numGroups", default)]
    num_groups: Option<usize>,
}

/// A single setting value, used for key-based access
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue {
    /// Boolean option
    Bool(bool),
    /// Integer option
    Integer(usize),
    /// Unset optional value
    None,
}

impl SettingValue {
    fn kind(&self) -> String {
        match self {
            Self::Bool(value) => f!("bool {value}"),
            Self::Integer(value) => f!("integer {value}"),
            Self::None => "none".to_string(),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<usize> for SettingValue {
    fn from(value: usize) -> Self {
        Self::Integer(value)
    }
}

impl From<Option<usize>> for SettingValue {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(n) => Self::Integer(n),
            None => Self::None,
        }
    }
}

impl Settings {
    /// Create the default settings, equivalent to `Settings::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a JSON string
    ///
    /// Keys are the dotted option names and any key left out takes the
    /// default. Unknown keys are an error.
    ///
    /// ```rust
    /// # use stools_settings::Settings;
    /// let settings = Settings::from_json(r#"{"xs.reshapeScatter": true}"#).unwrap();
    /// assert!(settings.reshape_scatter());
    /// assert_eq!(settings.num_groups(), None);
    /// ```
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load settings from a JSON file
    ///
    /// The `path` takes anything that can be turned into a `Path` reference,
    /// such as a [&str], [String], [Path], etc...
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path: &Path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Is reshaping of group-to-group data active
    pub fn reshape_scatter(&self) -> bool {
        self.reshape_scatter
    }

    /// Fallback number of energy groups, if set
    pub fn num_groups(&self) -> Option<usize> {
        self.num_groups
    }

    /// Turn reshaping of group-to-group data on or off
    pub fn set_reshape_scatter(&mut self, reshape: bool) {
        self.reshape_scatter = reshape;
    }

    /// Set or clear the fallback number of energy groups
    pub fn set_num_groups(&mut self, num_groups: Option<usize>) {
        self.num_groups = num_groups;
    }

    /// Look up a setting by key
    ///
    /// ```rust
    /// # use stools_settings::{Settings, SettingValue, NUM_GROUPS};
    /// let settings = Settings::default();
    /// assert_eq!(settings.get_value(NUM_GROUPS).unwrap(), SettingValue::None);
    /// assert!(settings.get_value("xs.unknown").is_err());
    /// ```
    pub fn get_value(&self, key: &str) -> Result<SettingValue> {
        match key {
            RESHAPE_SCATTER => Ok(self.reshape_scatter.into()),
            NUM_GROUPS => Ok(self.num_groups.into()),
            _ => Err(Error::UnknownSetting(key.to_string())),
        }
    }

    /// Change a setting by key
    ///
    /// The value must match the type of the option, so a boolean for
    /// `xs.reshapeScatter` and an integer or [SettingValue::None] for
    /// `xs.numGroups`.
    ///
    /// ```rust
    /// # use stools_settings::{Settings, NUM_GROUPS, RESHAPE_SCATTER};
    /// let mut settings = Settings::default();
    /// settings.set_value(RESHAPE_SCATTER, true).unwrap();
    /// settings.set_value(NUM_GROUPS, 2_usize).unwrap();
    ///
    /// // wrong types are rejected
    /// assert!(settings.set_value(RESHAPE_SCATTER, 2_usize).is_err());
    /// ```
    pub fn set_value<V: Into<SettingValue>>(&mut self, key: &str, value: V) -> Result<()> {
        let value = value.into();
        match (key, value) {
            (RESHAPE_SCATTER, SettingValue::Bool(reshape)) => self.reshape_scatter = reshape,
            (NUM_GROUPS, SettingValue::Integer(n)) => self.num_groups = Some(n),
            (NUM_GROUPS, SettingValue::None) => self.num_groups = None,
            (RESHAPE_SCATTER, _) => {
                return Err(Error::InvalidSettingType {
                    key: key.to_string(),
                    expected: "bool",
                    found: value.kind(),
                })
            }
            (NUM_GROUPS, _) => {
                return Err(Error::InvalidSettingType {
                    key: key.to_string(),
                    expected: "integer or none",
                    found: value.kind(),
                })
            }
            _ => return Err(Error::UnknownSetting(key.to_string())),
        }

        debug!(
            "Setting {key} changed (reshape={}, groups={})",
            self.reshape_scatter,
            self.num_groups.display()
        );
        Ok(())
    }

    /// Open a scope for temporary overrides
    ///
    /// Current values are copied now and written back when the returned guard
    /// is dropped.
    pub fn scoped(&mut self) -> ScopedSettings<'_> {
        ScopedSettings::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::new();
        assert!(!settings.reshape_scatter());
        assert_eq!(settings.num_groups(), None);
        assert_eq!(
            settings.get_value(RESHAPE_SCATTER).unwrap(),
            SettingValue::Bool(false)
        );
    }

    #[test]
    fn set_by_key() {
        let mut settings = Settings::new();
        settings.set_value(NUM_GROUPS, 5_usize).unwrap();
        assert_eq!(settings.num_groups(), Some(5));

        settings.set_value(NUM_GROUPS, SettingValue::None).unwrap();
        assert_eq!(settings.num_groups(), None);
    }

    #[test]
    fn rejected_values_leave_settings_untouched() {
        let mut settings = Settings::new();
        let result = settings.set_value(NUM_GROUPS, true);
        assert!(matches!(result, Err(Error::InvalidSettingType { .. })));

        let result = settings.set_value("xs.other", true);
        assert!(matches!(result, Err(Error::UnknownSetting(_))));

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn json_loading() {
        let settings =
            Settings::from_json(r#"{"xs.reshapeScatter": true, "xs.numGroups": 2}"#).unwrap();
        assert!(settings.reshape_scatter());
        assert_eq!(settings.num_groups(), Some(2));

        assert!(Settings::from_json(r#"{"reshapeScatter": true}"#).is_err());
    }
}
