//! Depleted material results from Serpent outputs
//!
//! A reader records the file-level axes (isotope ZAI, isotope names and time
//! points) in a [DepletionMetadata], then creates one [DepletedMaterial] per
//! material found and stores each variable with
//! [DepletedMaterial::add_data].
//!
//! Quantities are either vectors over time or isotope × time matrices:
//!
//! | Variable | Shape          | Description              |
//! | -------- | -------------- | ------------------------ |
//! | `burnup` | time           | burnup (MWd/kgU)         |
//! | `adens`  | isotope × time | atomic density (/b-cm)   |
//! | `mdens`  | isotope × time | mass density (g/cm3)     |
//!
//! ## Selecting values
//!
//! [DepletedMaterial::get_values] slices any quantity by time point and
//! isotope. The x axis can be the time axis ([DAYS]) or any stored vector
//! quantity such as `burnup`.
//!
//! ```rust
//! # use stools_depletion::{DepletionMetadata, DAYS};
//! let metadata = DepletionMetadata::new("case_dep.m")
//!     .with_names(["U235", "U238"])
//!     .with_days([0.0, 10.0, 20.0]);
//!
//! let mut fuel = metadata.material("fuel");
//! fuel.add_data("BURNUP", "0.0 0.5 1.0").unwrap();
//! fuel.add_data("ADENS", ["1.0 2.0 3.0", "4.0 5.0 6.0"]).unwrap();
//!
//! // U235 density at 0.5 and 1.0 MWd/kgU
//! let adens = fuel
//!     .get_values("burnup", "adens", Some(&[0.5, 1.0]), Some(&["U235"]))
//!     .unwrap();
//! assert_eq!(adens.to_row_major(), vec![2.0, 3.0]);
//!
//! // a day not in the file is an error
//! assert!(fuel.get_values(DAYS, "adens", Some(&[5.0]), None).is_err());
//! ```

mod error;
mod material;
mod metadata;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use material::{DepletedMaterial, RawData, DAYS};

#[doc(inline)]
pub use metadata::DepletionMetadata;
