//! `stools` is a semi-modular toolkit of typed result containers for Serpent
//! outputs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use stools_settings as settings;

#[doc(inline)]
pub use stools_utils as utils;

#[cfg(feature = "depletion")]
#[cfg_attr(docsrs, doc(cfg(feature = "depletion")))]
#[doc(inline)]
pub use stools_depletion as depletion;

#[cfg(feature = "xs")]
#[cfg_attr(docsrs, doc(cfg(feature = "xs")))]
#[doc(inline)]
pub use stools_xs as xs;
