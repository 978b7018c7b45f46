#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Ergonomic helpers over [`adventure`]: string-to-component coercion, builder closures,
//! component concatenation and joining, style color shorthands, boss bar construction and
//! audience forwarding.
//!
//! Every helper delegates to `adventure`; none adds behavior of its own.
//!
//! ```rust
//! use adventure::NamedTextColor;
//! use adventure_dsl::prelude::*;
//!
//! let line = ["red", "green", "blue"]
//!     .map(|name| name.component_styled(NamedTextColor::Gray))
//!     .join_to_text_with(", ");
//! assert_eq!(line.plain_text(), "red, green, blue");
//! ```

/// Audience forwarding.
pub mod audience;
/// Boss bar construction and change callbacks.
pub mod boss_bar;
/// Component coercion, concatenation and joining.
pub mod component;
/// Common re-exports for convenience.
pub mod prelude;
/// Style color shorthands.
pub mod style;

pub use adventure;
pub use adventure::{Error, Result};
