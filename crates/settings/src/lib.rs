//! Scoped run-time settings for the result containers
//!
//! A [Settings] value is passed by reference into every ingestion call, so two
//! containers filled by the same sequence of calls only differ when the
//! settings handed to them differ.
//!
//! | Key                 | Type            | Default | Purpose                          |
//! | ------------------- | --------------- | ------- | -------------------------------- |
//! | `xs.reshapeScatter` | bool            | false   | store n×n data as n×n matrices   |
//! | `xs.numGroups`      | integer or null | null    | fallback number of energy groups |
//!
//! ## Scoped overrides
//!
//! Temporary changes go through [Settings::scoped], which snapshots the current
//! values and hands back a [ScopedSettings] guard. The snapshot is restored
//! when the guard is dropped, including early returns through `?` and panics.
//!
//! ```rust
//! # use stools_settings::{Settings, RESHAPE_SCATTER};
//! let mut settings = Settings::default();
//! {
//!     let mut scope = settings.scoped();
//!     scope.set_value(RESHAPE_SCATTER, true).unwrap();
//!     assert!(scope.reshape_scatter());
//! }
//! assert!(!settings.reshape_scatter());
//! ```

mod error;
mod scope;
mod settings;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use scope::ScopedSettings;

#[doc(inline)]
pub use settings::{SettingValue, Settings, NUM_GROUPS, RESHAPE_SCATTER};
