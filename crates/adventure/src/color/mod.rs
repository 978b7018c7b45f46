//! RGB text colors, HSV conversions and the sixteen named chat colors.

use core::fmt;
use core::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::{Error, Result};

const RGB_MASK: u32 = 0x00FF_FFFF;

/// A 24-bit RGB color that can be applied to text.
///
/// Every constructor funnels into the packed `0xRRGGBB` representation, so two colors built
/// from different inputs compare equal whenever they encode the same channels.
///
/// # Example
///
/// ```rust
/// use adventure::color::{NamedTextColor, TextColor};
///
/// assert_eq!(TextColor::from_u32(0xFF5555), TextColor::from_rgb(255, 85, 85));
/// assert_eq!(TextColor::from_rgb(255, 85, 85).named(), Some(NamedTextColor::Red));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextColor(u32);

impl TextColor {
	/// Creates a color from a packed `0xRRGGBB` value. Bits above the low 24 are discarded.
	pub const fn from_u32(value: u32) -> Self {
		Self(value & RGB_MASK)
	}

	/// Creates a color from 8-bit channels.
	pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
		Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
	}

	/// Creates a color from fractional channels, each within `[0.0, 1.0]`.
	///
	/// Channels are scaled to `0..=255` and truncated.
	pub fn from_rgb_f32(red: f32, green: f32, blue: f32) -> Result<Self> {
		let red = unit_interval("red", red)?;
		let green = unit_interval("green", green)?;
		let blue = unit_interval("blue", blue)?;
		Ok(Self::from_rgb(scale(red), scale(green), scale(blue)))
	}

	/// Creates a color from anything exposing RGB channels.
	pub fn from_rgb_like(rgb: &impl RgbLike) -> Self {
		Self::from_rgb(rgb.red(), rgb.green(), rgb.blue())
	}

	/// Creates a color from normalised HSV components.
	///
	/// Fails if any component lies outside `[0.0, 1.0]`.
	pub fn from_hsv(hsv: &impl HsvLike) -> Result<Self> {
		let h = unit_interval("hue", hsv.h())?;
		let s = unit_interval("saturation", hsv.s())?;
		let v = unit_interval("value", hsv.v())?;
		if s == 0.0 {
			return Self::from_rgb_f32(v, v, v);
		}

		// hue 1.0 wraps back onto red
		let h = (h * 6.0) % 6.0;
		let sector = h.floor();
		let f = h - sector;
		let p = v * (1.0 - s);
		let q = v * (1.0 - s * f);
		let t = v * (1.0 - s * (1.0 - f));
		let (r, g, b) = match sector as u8 {
			0 => (v, t, p),
			1 => (q, v, p),
			2 => (p, v, t),
			3 => (p, q, v),
			4 => (t, p, v),
			_ => (v, p, q),
		};
		Self::from_rgb_f32(r, g, b)
	}

	/// Parses a `#rrggbb` string (either case).
	pub fn from_hex_str(input: &str) -> Result<Self> {
		let digits = input
			.strip_prefix('#')
			.filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
			.ok_or_else(|| Error::InvalidHex(input.to_owned()))?;
		u32::from_str_radix(digits, 16)
			.map(Self)
			.map_err(|_| Error::InvalidHex(input.to_owned()))
	}

	/// Returns the packed `0xRRGGBB` value.
	pub const fn value(self) -> u32 {
		self.0
	}

	/// Red channel.
	pub const fn red(self) -> u8 {
		(self.0 >> 16) as u8
	}

	/// Green channel.
	pub const fn green(self) -> u8 {
		(self.0 >> 8) as u8
	}

	/// Blue channel.
	pub const fn blue(self) -> u8 {
		self.0 as u8
	}

	/// Converts this color to normalised HSV.
	pub fn as_hsv(self) -> Hsv {
		Hsv::from_rgb(self.red(), self.green(), self.blue())
	}

	/// Lowercase `#rrggbb` form.
	pub fn as_hex_string(self) -> String {
		self.to_string()
	}

	/// Returns the named color with exactly this value, if there is one.
	pub fn named(self) -> Option<NamedTextColor> {
		NamedTextColor::from_color(self)
	}
}

impl fmt::Display for TextColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:06x}", self.0)
	}
}

impl FromStr for TextColor {
	type Err = Error;

	/// Parses either `#rrggbb` or a snake_case color name such as `dark_aqua`.
	fn from_str(s: &str) -> Result<Self> {
		if s.starts_with('#') {
			return Self::from_hex_str(s);
		}
		NamedTextColor::from_str(s)
			.map(NamedTextColor::color)
			.map_err(|_| Error::UnknownColor(s.to_owned()))
	}
}

impl From<NamedTextColor> for TextColor {
	fn from(named: NamedTextColor) -> Self {
		named.color()
	}
}

impl From<u32> for TextColor {
	fn from(value: u32) -> Self {
		Self::from_u32(value)
	}
}

/// The sixteen legacy chat colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	strum::Display,
	strum::EnumIter,
	strum::EnumString,
	strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NamedTextColor {
	Black,
	DarkBlue,
	DarkGreen,
	DarkAqua,
	DarkRed,
	DarkPurple,
	Gold,
	Gray,
	DarkGray,
	Blue,
	Green,
	Aqua,
	Red,
	LightPurple,
	Yellow,
	White,
}

impl NamedTextColor {
	/// The RGB value behind this name.
	pub const fn color(self) -> TextColor {
		TextColor::from_u32(match self {
			Self::Black => 0x000000,
			Self::DarkBlue => 0x0000AA,
			Self::DarkGreen => 0x00AA00,
			Self::DarkAqua => 0x00AAAA,
			Self::DarkRed => 0xAA0000,
			Self::DarkPurple => 0xAA00AA,
			Self::Gold => 0xFFAA00,
			Self::Gray => 0xAAAAAA,
			Self::DarkGray => 0x555555,
			Self::Blue => 0x5555FF,
			Self::Green => 0x55FF55,
			Self::Aqua => 0x55FFFF,
			Self::Red => 0xFF5555,
			Self::LightPurple => 0xFF55FF,
			Self::Yellow => 0xFFFF55,
			Self::White => 0xFFFFFF,
		})
	}

	/// Snake_case name, e.g. `light_purple`.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Finds the named color whose value equals `color` exactly.
	pub fn from_color(color: TextColor) -> Option<Self> {
		Self::iter().find(|named| named.color() == color)
	}

	/// Downsamples an arbitrary color to the closest named color.
	///
	/// Distance is measured in HSV space with hue weighted three times as heavily as
	/// saturation and value; hue wraps around at 1.0.
	pub fn nearest_to(color: TextColor) -> Self {
		if let Some(exact) = Self::from_color(color) {
			return exact;
		}
		let target = color.as_hsv();
		Self::iter()
			.min_by(|a, b| {
				hsv_distance(&a.color().as_hsv(), &target)
					.total_cmp(&hsv_distance(&b.color().as_hsv(), &target))
			})
			.unwrap_or(Self::Black)
	}
}

/// A value that exposes 8-bit red, green and blue channels.
pub trait RgbLike {
	/// Red channel.
	fn red(&self) -> u8;
	/// Green channel.
	fn green(&self) -> u8;
	/// Blue channel.
	fn blue(&self) -> u8;
}

impl RgbLike for TextColor {
	fn red(&self) -> u8 {
		TextColor::red(*self)
	}

	fn green(&self) -> u8 {
		TextColor::green(*self)
	}

	fn blue(&self) -> u8 {
		TextColor::blue(*self)
	}
}

impl RgbLike for NamedTextColor {
	fn red(&self) -> u8 {
		self.color().red()
	}

	fn green(&self) -> u8 {
		self.color().green()
	}

	fn blue(&self) -> u8 {
		self.color().blue()
	}
}

impl RgbLike for (u8, u8, u8) {
	fn red(&self) -> u8 {
		self.0
	}

	fn green(&self) -> u8 {
		self.1
	}

	fn blue(&self) -> u8 {
		self.2
	}
}

/// A value that exposes normalised hue, saturation and value components.
pub trait HsvLike {
	/// Hue in `[0, 1]`.
	fn h(&self) -> f32;
	/// Saturation in `[0, 1]`.
	fn s(&self) -> f32;
	/// Value (brightness) in `[0, 1]`.
	fn v(&self) -> f32;
}

/// A color in normalised HSV space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
	h: f32,
	s: f32,
	v: f32,
}

impl Hsv {
	/// Creates an HSV triple, rejecting components outside `[0, 1]`.
	pub fn new(h: f32, s: f32, v: f32) -> Result<Self> {
		Ok(Self {
			h: unit_interval("hue", h)?,
			s: unit_interval("saturation", s)?,
			v: unit_interval("value", v)?,
		})
	}

	/// Converts 8-bit RGB channels to HSV.
	pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
		let r = f32::from(red) / 255.0;
		let g = f32::from(green) / 255.0;
		let b = f32::from(blue) / 255.0;
		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;
		let s = if max == 0.0 { 0.0 } else { delta / max };
		if s == 0.0 {
			return Self { h: 0.0, s, v: max };
		}

		let mut h = if r == max {
			(g - b) / delta
		} else if g == max {
			2.0 + (b - r) / delta
		} else {
			4.0 + (r - g) / delta
		};
		h *= 60.0;
		if h < 0.0 {
			h += 360.0;
		}
		Self {
			h: h / 360.0,
			s,
			v: max,
		}
	}
}

impl HsvLike for Hsv {
	fn h(&self) -> f32 {
		self.h
	}

	fn s(&self) -> f32 {
		self.s
	}

	fn v(&self) -> f32 {
		self.v
	}
}

fn unit_interval(channel: &'static str, value: f32) -> Result<f32> {
	if (0.0..=1.0).contains(&value) {
		Ok(value)
	} else {
		Err(Error::ChannelOutOfRange { channel, value })
	}
}

fn scale(unit: f32) -> u8 {
	(unit * 255.0) as u8
}

fn hsv_distance(a: &impl HsvLike, b: &impl HsvLike) -> f32 {
	let hue = (a.h() - b.h()).abs();
	let hue = 3.0 * hue.min(1.0 - hue);
	let saturation = a.s() - b.s();
	let value = a.v() - b.v();
	hue * hue + saturation * saturation + value * value
}

#[cfg(feature = "serde")]
impl serde::Serialize for TextColor {
	/// Named colors serialize by name, everything else as `#rrggbb`.
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
		match self.named() {
			Some(named) => serializer.serialize_str(named.name()),
			None => serializer.collect_str(self),
		}
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TextColor {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests;
