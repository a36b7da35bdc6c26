//! Common utilities shared by the stools crates
//!
//! These are left public for convenience.
//!
//! The [Array] type is the numeric storage behind every result container, and
//! [NamedObject] is the minimal interface they all expose. The remaining
//! extension traits cover the small formatting and lookup jobs needed
//! everywhere, such as converting raw Serpent variable names to the camelCase
//! names used for storage.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod array;
mod named;
mod option_ext;
mod slice_ext;
mod string_ext;

// Flatten
pub use array::Array;
pub use named::NamedObject;
pub use option_ext::OptionExt;
pub use slice_ext::SliceExt;
pub use string_ext::StringExt;
