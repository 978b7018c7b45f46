//! Error types for color and boss bar construction.

use thiserror::Error;

/// Errors raised when a value falls outside what a component type accepts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	/// A fractional color channel was outside `[0.0, 1.0]`.
	#[error("{channel} channel must be within [0, 1], got {value}")]
	ChannelOutOfRange {
		/// Name of the offending channel (`red`, `hue`, ...).
		channel: &'static str,
		/// The rejected value.
		value: f32,
	},

	/// A hex color string was not of the form `#rrggbb`.
	#[error("invalid hex color: {0:?} (expected '#rrggbb')")]
	InvalidHex(String),

	/// A color string was neither a hex color nor a known color name.
	#[error("unknown color: {0:?}")]
	UnknownColor(String),

	/// A boss bar progress value was outside `[0.0, 1.0]`.
	#[error("boss bar progress must be within [0, 1], got {0}")]
	ProgressOutOfRange(f32),
}

/// Result type for fallible component operations.
pub type Result<T> = std::result::Result<T, Error>;
