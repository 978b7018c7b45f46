//! Style conversions from colors and decorations.

use super::{Style, TextDecoration};
use crate::color::{NamedTextColor, TextColor};

impl From<TextColor> for Style {
	/// Creates a new `Style` with the given color.
	///
	/// # Example
	///
	/// ```rust
	/// use adventure::color::TextColor;
	/// use adventure::style::Style;
	///
	/// let style = Style::from(TextColor::from_u32(0x00AAAA));
	/// assert_eq!(style.color(), Some(TextColor::from_u32(0x00AAAA)));
	/// ```
	fn from(color: TextColor) -> Self {
		Self::builder().color(color).build()
	}
}

impl From<NamedTextColor> for Style {
	fn from(color: NamedTextColor) -> Self {
		Self::from(color.color())
	}
}

impl From<TextDecoration> for Style {
	/// Creates a new `Style` with the given decoration enabled.
	fn from(decoration: TextDecoration) -> Self {
		Self::builder().decorate(decoration).build()
	}
}

impl From<(TextColor, TextDecoration)> for Style {
	/// Creates a new `Style` with the given color and decoration enabled.
	///
	/// # Example
	///
	/// ```rust
	/// use adventure::color::NamedTextColor;
	/// use adventure::style::{Style, TextDecoration};
	///
	/// let style = Style::from((NamedTextColor::Red.color(), TextDecoration::Bold));
	/// assert!(style.has_decoration(TextDecoration::Bold));
	/// ```
	fn from((color, decoration): (TextColor, TextDecoration)) -> Self {
		Self::builder().color(color).decorate(decoration).build()
	}
}

impl From<&mut super::StyleBuilder> for Style {
	fn from(builder: &mut super::StyleBuilder) -> Self {
		builder.build()
	}
}
