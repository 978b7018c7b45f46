//! Color shorthands for [`StyleBuilder`].
//!
//! Every method here normalises its input to a [`TextColor`] and hands it to
//! [`StyleBuilder::color`]. Range checks belong to [`TextColor`]; its errors pass through
//! untouched.

use adventure::Result;
use adventure::color::{HsvLike, RgbLike, TextColor};
use adventure::style::StyleBuilder;

/// Extra ways to set a style's color.
///
/// ```rust
/// use adventure::Style;
/// use adventure_dsl::prelude::*;
///
/// let mut builder = Style::builder();
/// builder.color_rgb(0xFF, 0x55, 0x55).bold(true);
/// assert_eq!(builder.build().color(), Some(adventure::NamedTextColor::Red.color()));
/// ```
pub trait StyleBuilderExt {
	/// Sets the color from a packed `0xRRGGBB` value.
	fn color_packed(&mut self, rgb: u32) -> &mut Self;

	/// Sets the color from anything exposing RGB channels.
	fn color_rgb_like(&mut self, rgb: &impl RgbLike) -> &mut Self;

	/// Sets the color from anything exposing HSV components.
	fn color_hsv_like(&mut self, hsv: &impl HsvLike) -> Result<&mut Self>;

	/// Sets the color from 8-bit channels.
	fn color_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self;

	/// Sets the color from fractional channels in `[0.0, 1.0]`.
	fn color_rgb_f32(&mut self, red: f32, green: f32, blue: f32) -> Result<&mut Self>;
}

impl StyleBuilderExt for StyleBuilder {
	fn color_packed(&mut self, rgb: u32) -> &mut Self {
		self.color(TextColor::from_u32(rgb))
	}

	fn color_rgb_like(&mut self, rgb: &impl RgbLike) -> &mut Self {
		self.color(TextColor::from_rgb_like(rgb))
	}

	fn color_hsv_like(&mut self, hsv: &impl HsvLike) -> Result<&mut Self> {
		Ok(self.color(TextColor::from_hsv(hsv)?))
	}

	fn color_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
		self.color(TextColor::from_rgb(red, green, blue))
	}

	fn color_rgb_f32(&mut self, red: f32, green: f32, blue: f32) -> Result<&mut Self> {
		Ok(self.color(TextColor::from_rgb_f32(red, green, blue)?))
	}
}
