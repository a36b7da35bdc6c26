use crate::error::{Error, Result};
use crate::key::{Family, VariableKey};

use log::{debug, trace, warn};
use std::collections::HashMap;
use stools_settings::Settings;
use stools_utils::{Array, NamedObject, OptionExt};

/// Metadata key holding the group energy boundaries
///
/// Stored from the raw `MACRO_E` key and used to infer the number of groups,
/// as there is always one more boundary than there are groups.
pub const GROUP_BOUNDARIES: &str = "macroE";

/// Homogenised group constants for one universe at one point in time
///
/// Quantities are stored under the camelCase name with the family prefix
/// removed, in one of five collections:
///
/// | Collection | Contents                                 |
/// | ---------- | ---------------------------------------- |
/// | `b1_exp`   | B1 expected values (`B1_` keys)          |
/// | `b1_unc`   | B1 relative uncertainties                |
/// | `inf_exp`  | infinite medium expected values (`INF_`) |
/// | `inf_unc`  | infinite medium relative uncertainties   |
/// | `metadata` | everything else, without uncertainties   |
///
/// ```rust
/// # use stools_settings::Settings;
/// # use stools_utils::{Array, NamedObject};
/// # use stools_xs::HomogUniv;
/// let settings = Settings::default();
/// let mut univ = HomogUniv::new("0", 0.0, 0, 0.0);
/// assert!(!univ.has_data());
///
/// univ.add_data(&settings, "INF_TOT", &[0.5, 0.8], false);
/// univ.add_data(&settings, "INF_TOT", &[0.01, 0.02], true);
///
/// let (value, unc) = univ.get_with_uncertainty("infTot").unwrap();
/// assert_eq!(value, &Array::from(vec![0.5, 0.8]));
/// assert_eq!(unc, &Array::from(vec![0.01, 0.02]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomogUniv {
    name: String,
    bu: f64,
    step: usize,
    day: f64,
    num_groups: Option<usize>,
    reshaped: bool,
    b1_exp: HashMap<String, Array>,
    b1_unc: HashMap<String, Array>,
    inf_exp: HashMap<String, Array>,
    inf_unc: HashMap<String, Array>,
    metadata: HashMap<String, Array>,
}

impl HomogUniv {
    /// Create an empty universe
    ///
    /// - `name` universe identifier
    /// - `bu` burnup value (MWd/kgU)
    /// - `step` index of the burnup step
    /// - `day` point in time (days)
    pub fn new<S: Into<String>>(name: S, bu: f64, step: usize, day: f64) -> Self {
        Self {
            name: name.into(),
            bu,
            step,
            day,
            ..Default::default()
        }
    }

    /// Burnup value (MWd/kgU)
    pub fn bu(&self) -> f64 {
        self.bu
    }

    /// Burnup step index
    pub fn step(&self) -> usize {
        self.step
    }

    /// Point in time (days)
    pub fn day(&self) -> f64 {
        self.day
    }

    /// Number of energy groups
    ///
    /// An explicitly set value takes priority, otherwise this is inferred from
    /// the length of the [GROUP_BOUNDARIES] metadata when available.
    pub fn num_groups(&self) -> Option<usize> {
        self.num_groups.or_else(|| {
            self.metadata
                .get(GROUP_BOUNDARIES)
                .map(Array::len)
                .filter(|n| *n > 1)
                .map(|n| n - 1)
        })
    }

    /// Explicitly set the number of energy groups
    pub fn set_num_groups(&mut self, num_groups: usize) {
        self.num_groups = Some(num_groups);
    }

    /// True once any quantity has been stored as a square matrix
    pub fn reshaped(&self) -> bool {
        self.reshaped
    }

    /// B1 expected values
    pub fn b1_exp(&self) -> &HashMap<String, Array> {
        &self.b1_exp
    }

    /// B1 relative uncertainties
    pub fn b1_unc(&self) -> &HashMap<String, Array> {
        &self.b1_unc
    }

    /// Infinite medium expected values
    pub fn inf_exp(&self) -> &HashMap<String, Array> {
        &self.inf_exp
    }

    /// Infinite medium relative uncertainties
    pub fn inf_unc(&self) -> &HashMap<String, Array> {
        &self.inf_unc
    }

    /// Auxiliary values with no uncertainty, e.g. group boundaries
    pub fn metadata(&self) -> &HashMap<String, Array> {
        &self.metadata
    }

    /// Store a single quantity
    ///
    /// The `key` is normalised to decide both the storage name and the
    /// collection. With `uncertainty` set the data goes to the uncertainty
    /// collection of the family instead. Metadata has no uncertainties, so
    /// uncertainty data for a metadata key is stored as the value only if
    /// nothing is stored under that key yet.
    ///
    /// When `xs.reshapeScatter` is active in `settings` and the data holds
    /// exactly `num_groups`² values it is stored as a square matrix. The
    /// group count falls back to `xs.numGroups` if the universe cannot
    /// provide one.
    ///
    /// Any existing entry under the same key is replaced.
    pub fn add_data(&mut self, settings: &Settings, key: &str, data: &[f64], uncertainty: bool) {
        let key = VariableKey::parse(key);

        if key.family.is_none() && uncertainty && self.metadata.contains_key(&key.name) {
            debug!("Keeping existing metadata {key} on universe {}", self.name);
            return;
        }

        let values = self.shape_values(settings, &key, data);
        debug!(
            "Adding {key} {} to universe {} {:?}",
            if uncertainty { "uncertainty" } else { "value" },
            self.name,
            values.shape()
        );

        let storage = match (key.family, uncertainty) {
            (Some(Family::B1), false) => &mut self.b1_exp,
            (Some(Family::B1), true) => &mut self.b1_unc,
            (Some(Family::Inf), false) => &mut self.inf_exp,
            (Some(Family::Inf), true) => &mut self.inf_unc,
            (None, _) => &mut self.metadata,
        };
        storage.insert(key.name, values);
    }

    /// Store a quantity from interleaved value/uncertainty data
    ///
    /// Serpent writes group constants as `[v0 u0 v1 u1 ...]`, which is split
    /// here into the expected values and uncertainties. Both are stored, or
    /// nothing is when the data cannot be split into pairs.
    ///
    /// ```rust
    /// # use stools_settings::Settings;
    /// # use stools_utils::Array;
    /// # use stools_xs::HomogUniv;
    /// let settings = Settings::default();
    /// let mut univ = HomogUniv::new("0", 0.0, 0, 0.0);
    /// univ.add_interleaved(&settings, "INF_FLX", &[1.0, 0.1, 2.0, 0.2]).unwrap();
    ///
    /// let (value, unc) = univ.get_with_uncertainty("INF_FLX").unwrap();
    /// assert_eq!(value, &Array::from(vec![1.0, 2.0]));
    /// assert_eq!(unc, &Array::from(vec![0.1, 0.2]));
    ///
    /// assert!(univ.add_interleaved(&settings, "INF_TOT", &[1.0, 0.1, 2.0]).is_err());
    /// ```
    pub fn add_interleaved(&mut self, settings: &Settings, key: &str, data: &[f64]) -> Result<()> {
        if data.len() % 2 != 0 {
            return Err(Error::OddLengthPairs {
                key: key.to_string(),
                length: data.len(),
            });
        }

        let (values, uncertainties): (Vec<f64>, Vec<f64>) =
            data.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();

        self.add_data(settings, key, &values, false);
        self.add_data(settings, key, &uncertainties, true);
        Ok(())
    }

    /// Get the expected value of a quantity
    ///
    /// Prefixed keys (`INF_S0`, `infS0`) only look in their own family. Keys
    /// without a family are searched for in B1, then infinite medium, then
    /// metadata.
    pub fn get(&self, key: &str) -> Result<&Array> {
        self.lookup(&VariableKey::parse(key))
            .map(|(value, _)| value)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
                universe: self.name.clone(),
            })
    }

    /// Get the expected value and uncertainty of a quantity
    ///
    /// Searched for in the same way as [HomogUniv::get], but fails if the
    /// quantity was found without an uncertainty, which is always the case for
    /// metadata.
    pub fn get_with_uncertainty(&self, key: &str) -> Result<(&Array, &Array)> {
        match self.lookup(&VariableKey::parse(key)) {
            Some((value, Some(uncertainty))) => Ok((value, uncertainty)),
            Some((_, None)) => Err(Error::UncertaintyUnavailable {
                key: key.to_string(),
                universe: self.name.clone(),
            }),
            None => Err(Error::KeyNotFound {
                key: key.to_string(),
                universe: self.name.clone(),
            }),
        }
    }

    /// Expected value and optional uncertainty for a normalised key
    fn lookup(&self, key: &VariableKey) -> Option<(&Array, Option<&Array>)> {
        let families: &[Family] = match key.family {
            Some(Family::B1) => &[Family::B1],
            Some(Family::Inf) => &[Family::Inf],
            None => &[Family::B1, Family::Inf],
        };

        families
            .iter()
            .find_map(|family| {
                let (expected, uncertainty) = self.collections(*family);
                expected
                    .get(&key.name)
                    .map(|value| (value, uncertainty.get(&key.name)))
            })
            .or_else(|| match key.family {
                Some(_) => None,
                None => self.metadata.get(&key.name).map(|value| (value, None)),
            })
    }

    fn collections(&self, family: Family) -> (&HashMap<String, Array>, &HashMap<String, Array>) {
        match family {
            Family::B1 => (&self.b1_exp, &self.b1_unc),
            Family::Inf => (&self.inf_exp, &self.inf_unc),
        }
    }

    /// Apply the reshaping policy to incoming data
    fn shape_values(&mut self, settings: &Settings, key: &VariableKey, data: &[f64]) -> Array {
        // metadata is never group-to-group data
        if !settings.reshape_scatter() || key.family.is_none() {
            return Array::from(data);
        }

        let groups = self.num_groups().or(settings.num_groups());
        match groups {
            Some(n) if n > 0 => match Array::square_from_row_slice(data, n) {
                Some(matrix) => {
                    trace!("Reshaped {key} to {n}x{n}");
                    self.reshaped = true;
                    matrix
                }
                None => Array::from(data),
            },
            _ => {
                if is_square(data.len()) {
                    warn!(
                        "Unable to reshape {key} on universe {}, number of groups is {}",
                        self.name,
                        groups.display_or("unknown")
                    );
                }
                Array::from(data)
            }
        }
    }
}

impl NamedObject for HomogUniv {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_data(&self) -> bool {
        [
            &self.b1_exp,
            &self.b1_unc,
            &self.inf_exp,
            &self.inf_unc,
            &self.metadata,
        ]
        .iter()
        .any(|collection| !collection.is_empty())
    }
}

/// Could this many values be a square matrix larger than 1x1
fn is_square(len: usize) -> bool {
    let root = (len as f64).sqrt().round() as usize;
    len > 1 && root * root == len
}
