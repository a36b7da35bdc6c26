//! Homogenised group constants from Serpent outputs
//!
//! A [HomogUniv] holds every group constant produced for one universe at one
//! burnup point. Readers create one per block of results and feed it through
//! [HomogUniv::add_data], after which it is used read-only.
//!
//! ## Key names
//!
//! Serpent writes names such as `INF_S0` or `B1_DIFFCOEF`. These are stored
//! by calculation mode ([Family]) under a camelCase name without the prefix,
//! and lookups accept either form.
//!
//! | Raw key        | Collection | Stored as    | Also found by          |
//! | -------------- | ---------- | ------------ | ---------------------- |
//! | `INF_S0`       | `inf_exp`  | `s0`         | `infS0`, `S0`          |
//! | `B1_1`         | `b1_exp`   | `1`          | `b11`                  |
//! | `MACRO_E`      | `metadata` | `macroE`     | `macroE`               |
//! | `CMM_TRANSP_X` | `metadata` | `cmmTranspX` | `cmmTranspX`           |
//!
//! Names without a family are looked up in B1 results first, then infinite
//! medium results, then metadata.
//!
//! ## Scattering matrices
//!
//! With the `xs.reshapeScatter` setting active, any B1 or infinite medium
//! quantity of exactly `num_groups`² values is stored as a square matrix.
//!
//! ```rust
//! # use stools_settings::{Settings, RESHAPE_SCATTER};
//! # use stools_xs::HomogUniv;
//! let mut settings = Settings::default();
//! let mut univ = HomogUniv::new("10", 0.0, 0, 0.0);
//! univ.set_num_groups(2);
//!
//! {
//!     let mut scope = settings.scoped();
//!     scope.set_value(RESHAPE_SCATTER, true).unwrap();
//!     univ.add_data(&scope, "INF_S0", &[0.5, 0.1, 0.0, 0.9], false);
//! }
//!
//! assert!(univ.reshaped());
//! assert_eq!(univ.get("infS0").unwrap().shape(), (2, 2));
//! ```

mod error;
mod key;
mod universe;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use key::{Family, VariableKey};

#[doc(inline)]
pub use universe::{HomogUniv, GROUP_BOUNDARIES};
