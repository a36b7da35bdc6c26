use crate::error::{Error, Result};
use crate::metadata::DepletionMetadata;

use log::{debug, trace};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use stools_utils::{Array, NamedObject, SliceExt, StringExt};

/// Name of the time axis for [DepletedMaterial::get_values]
pub const DAYS: &str = "days";

/// Raw text for one variable, as split out of the file by a reader
///
/// A single line is a vector over time, several lines are a matrix with one
/// row per isotope and one column per time point.
#[derive(Debug, Clone, PartialEq)]
pub enum RawData<'a> {
    /// Whitespace delimited values for a 1-D quantity
    Line(&'a str),
    /// One whitespace delimited line per row of a 2-D quantity
    Lines(Vec<&'a str>),
}

impl<'a> From<&'a str> for RawData<'a> {
    fn from(line: &'a str) -> Self {
        Self::Line(line)
    }
}

impl<'a> From<&'a [&'a str]> for RawData<'a> {
    fn from(lines: &'a [&'a str]) -> Self {
        Self::Lines(lines.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for RawData<'a> {
    fn from(lines: [&'a str; N]) -> Self {
        Self::Lines(lines.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for RawData<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        Self::Lines(lines)
    }
}

impl<'a> From<&'a [String]> for RawData<'a> {
    fn from(lines: &'a [String]) -> Self {
        Self::Lines(lines.iter().map(String::as_str).collect())
    }
}

/// Depletion results for a single material
///
/// Quantities are stored under their camelCase names (`ADENS` becomes
/// `adens`) as either time series vectors or isotope × time matrices.
///
/// The isotope and time axes are shared with the [DepletionMetadata] the
/// material was created from.
///
/// ## Cached quantities
///
/// The [burnup](DepletedMaterial::burnup), [adens](DepletedMaterial::adens)
/// and [mdens](DepletedMaterial::mdens) accessors keep the values from their
/// first successful call. Data added under the same name afterwards is
/// visible through [get](DepletedMaterial::get) but not through these.
#[derive(Debug)]
pub struct DepletedMaterial {
    name: String,
    file_path: PathBuf,
    zai: Option<Arc<[u32]>>,
    names: Option<Arc<[String]>>,
    days: Option<Arc<[f64]>>,
    data: HashMap<String, Array>,
    burnup: OnceLock<Array>,
    adens: OnceLock<Array>,
    mdens: OnceLock<Array>,
}

impl DepletedMaterial {
    /// Create an empty material with the axes of a depletion file
    pub fn new(metadata: &DepletionMetadata, name: &str) -> Self {
        Self {
            name: name.to_string(),
            file_path: metadata.file_path.clone(),
            zai: metadata.zai.clone(),
            names: metadata.names.clone(),
            days: metadata.days.clone(),
            data: HashMap::new(),
            burnup: OnceLock::new(),
            adens: OnceLock::new(),
            mdens: OnceLock::new(),
        }
    }

    /// Path of the file the material was read from
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Isotope ZAI identifiers, if recorded
    pub fn zai(&self) -> Option<&[u32]> {
        self.zai.as_deref()
    }

    /// Isotope names, if recorded
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Time points (days), if recorded
    pub fn days(&self) -> Option<&[f64]> {
        self.days.as_deref()
    }

    /// Every stored quantity
    pub fn data(&self) -> &HashMap<String, Array> {
        &self.data
    }

    /// Parse and store the raw text of a variable
    ///
    /// Every token must parse as a float, otherwise nothing is stored. Blank
    /// lines in a matrix are skipped, but the remaining rows must all be the
    /// same length. Any existing data under the same name is replaced.
    ///
    /// ```rust
    /// # use stools_depletion::DepletionMetadata;
    /// let mut fuel = DepletionMetadata::new("case_dep.m").material("fuel");
    /// fuel.add_data("BURNUP", "0.0 1.5 3.0").unwrap();
    /// fuel.add_data("ADENS", ["1.0 0.9 0.8", "", "0.1 0.2 0.3"]).unwrap();
    ///
    /// assert_eq!(fuel.get("adens").unwrap().shape(), (2, 3));
    /// assert!(fuel.add_data("MDENS", "1.0 x 2.0").is_err());
    /// ```
    pub fn add_data<'a, R: Into<RawData<'a>>>(&mut self, variable: &str, raw: R) -> Result<()> {
        let name = variable.to_variable_name();
        debug!("Adding {} data to {}", name, self.name);

        let array = match raw.into() {
            RawData::Line(line) => Array::from(parse_row(variable, line)?),
            RawData::Lines(lines) => parse_matrix(variable, &lines)?,
        };

        trace!("{} {:?}", name, array.shape());
        self.data.insert(name, array);
        Ok(())
    }

    /// Reference to a stored quantity
    pub fn get(&self, variable: &str) -> Result<&Array> {
        self.data
            .get(&variable.to_variable_name())
            .ok_or_else(|| Error::KeyNotFound {
                variable: variable.to_string(),
                material: self.name.clone(),
            })
    }

    /// Burnup over time, cached on first access
    pub fn burnup(&self) -> Result<&Array> {
        self.cached(&self.burnup, "burnup")
    }

    /// Atomic densities for each isotope over time, cached on first access
    pub fn adens(&self) -> Result<&Array> {
        self.cached(&self.adens, "adens")
    }

    /// Mass densities for each isotope over time, cached on first access
    pub fn mdens(&self) -> Result<&Array> {
        self.cached(&self.mdens, "mdens")
    }

    fn cached<'a>(&'a self, cell: &'a OnceLock<Array>, variable: &str) -> Result<&'a Array> {
        let current = self
            .data
            .get(variable)
            .ok_or_else(|| Error::DataNotLoaded {
                variable: variable.to_string(),
                material: self.name.clone(),
            })?;
        Ok(cell.get_or_init(|| current.clone()))
    }

    /// Select values of a quantity by time point and isotope
    ///
    /// - `x_units` is the coordinate axis, either [DAYS] or the name of a
    ///   stored vector quantity such as `burnup`
    /// - `y_units` is the quantity to return
    /// - `time_points` selects columns by exact match against the x axis,
    ///   keeping the order of the axis. All columns when `None`.
    /// - `names` selects rows by isotope name, in the requested order. All
    ///   rows when `None` or empty. Ignored for vector quantities.
    ///
    /// Returns a vector for vector quantities and a `rows × columns` matrix
    /// otherwise.
    ///
    /// Every requested time point missing from the x axis is reported at
    /// once, and requesting isotopes from a material without isotope names
    /// fails before anything is looked up.
    ///
    /// ```rust
    /// # use stools_depletion::{DepletionMetadata, DAYS};
    /// let metadata = DepletionMetadata::new("case_dep.m")
    ///     .with_names(["U235", "U238"])
    ///     .with_days([0.0, 10.0, 20.0]);
    ///
    /// let mut fuel = metadata.material("fuel");
    /// fuel.add_data("ADENS", ["1.0 2.0 3.0", "4.0 5.0 6.0"]).unwrap();
    ///
    /// let values = fuel
    ///     .get_values(DAYS, "adens", Some(&[0.0, 20.0]), Some(&["U238"]))
    ///     .unwrap();
    ///
    /// assert_eq!(values.shape(), (1, 2));
    /// assert_eq!(values.to_row_major(), vec![4.0, 6.0]);
    /// ```
    pub fn get_values(
        &self,
        x_units: &str,
        y_units: &str,
        time_points: Option<&[f64]>,
        names: Option<&[&str]>,
    ) -> Result<Array> {
        let x_axis = self.x_axis(x_units)?;

        if let Some(points) = time_points {
            let missing = x_axis.missing_from(points);
            if !missing.is_empty() {
                return Err(Error::CoordinateNotFound {
                    points: missing,
                    path: self.file_path.clone(),
                });
            }
        }

        let names = names.filter(|n| !n.is_empty());
        if names.is_some() && self.names.is_none() {
            return Err(Error::AxisUnavailable {
                axis: "isotope names",
                material: self.name.clone(),
            });
        }

        let columns = match time_points {
            Some(points) => x_axis.positions_in(points),
            None => (0..x_axis.len()).collect(),
        };

        let y_values = self.get(y_units)?;
        if y_values.ncols() != x_axis.len() {
            return Err(Error::UnexpectedLength {
                variable: y_units.to_string(),
                expected: x_axis.len(),
                found: y_values.ncols(),
            });
        }

        match y_values {
            Array::Vector(vector) => Ok(Array::Vector(vector.select_rows(&columns))),
            Array::Matrix(matrix) => {
                let rows = self.row_indices(matrix.nrows(), names)?;
                Ok(Array::Matrix(
                    matrix.select_columns(&columns).select_rows(&rows),
                ))
            }
        }
    }

    /// Values of the coordinate axis for `x_units`
    fn x_axis(&self, x_units: &str) -> Result<&[f64]> {
        if x_units == DAYS {
            return self.days().ok_or_else(|| Error::AxisUnavailable {
                axis: DAYS,
                material: self.name.clone(),
            });
        }

        match self.get(x_units)? {
            Array::Vector(vector) => Ok(vector.as_slice()),
            array => Err(Error::UnexpectedShape {
                variable: x_units.to_string(),
                expected: "vector",
                found: array.shape(),
            }),
        }
    }

    /// Row positions of the requested isotopes, first match for duplicates
    fn row_indices(&self, nrows: usize, isotopes: Option<&[&str]>) -> Result<Vec<usize>> {
        let Some(isotopes) = isotopes else {
            return Ok((0..nrows).collect());
        };

        // presence checked by the caller
        let axis = self.names().unwrap_or_default();
        if axis.len() != nrows {
            return Err(Error::UnexpectedLength {
                variable: "isotope names".to_string(),
                expected: nrows,
                found: axis.len(),
            });
        }

        let mut rows = Vec::with_capacity(isotopes.len());
        let mut missing = Vec::new();
        for isotope in isotopes {
            match axis.iter().position(|name| name == isotope) {
                Some(idx) => rows.push(idx),
                None => missing.push(isotope.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(rows)
        } else {
            Err(Error::IsotopeNotFound {
                names: missing,
                material: self.name.clone(),
            })
        }
    }
}

impl NamedObject for DepletedMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// Parse a whitespace delimited line of floats
fn parse_row(variable: &str, line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|source| Error::ParseError {
                variable: variable.to_string(),
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse non-blank lines as the rows of a matrix
fn parse_matrix(variable: &str, lines: &[&str]) -> Result<Array> {
    let rows = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(variable, line))
        .collect::<Result<Vec<Vec<f64>>>>()?;

    if rows.is_empty() {
        return Err(Error::UnexpectedLength {
            variable: variable.to_string(),
            expected: 1,
            found: 0,
        });
    }

    let ncols = rows.first().map(Vec::len).unwrap_or_default();
    if let Some(row) = rows.iter().find(|row| row.len() != ncols) {
        return Err(Error::UnexpectedLength {
            variable: variable.to_string(),
            expected: ncols,
            found: row.len(),
        });
    }

    let values: Vec<f64> = rows.concat();
    Array::from_row_slice(rows.len(), ncols, &values).ok_or_else(|| Error::UnexpectedLength {
        variable: variable.to_string(),
        expected: rows.len() * ncols,
        found: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scientific_rows() {
        let row = parse_row("ADENS", "  1.00000E-02 2.5E+01\t3 ").unwrap();
        assert_eq!(row, vec![1.0e-02, 25.0, 3.0]);
    }

    #[test]
    fn parse_error_names_token() {
        let err = parse_row("ADENS", "1.0 abc").unwrap_err();
        assert!(matches!(
            err,
            Error::ParseError { ref variable, ref token, .. } if variable == "ADENS" && token == "abc"
        ));
    }

    #[test]
    fn ragged_matrix() {
        let result = parse_matrix("ADENS", &["1.0 2.0", "3.0"]);
        assert!(matches!(
            result,
            Err(Error::UnexpectedLength {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn only_blank_lines() {
        let result = parse_matrix("ADENS", &["", "  ", "\t"]);
        assert!(matches!(
            result,
            Err(Error::UnexpectedLength {
                expected: 1,
                found: 0,
                ..
            })
        ));
    }

    #[test]
    fn blank_lines_skipped() {
        let matrix = parse_matrix("ADENS", &["", "1.0 2.0", "   ", "3.0 4.0"]).unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.to_row_major(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
