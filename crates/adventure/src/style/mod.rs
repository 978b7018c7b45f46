//! Text styles: an optional color plus tri-state decorations.

use crate::color::TextColor;

mod conversions;

/// A decoration that can be applied to text.
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
	strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum TextDecoration {
	/// Scrambled, constantly changing characters.
	Obfuscated,
	/// Bold text.
	Bold,
	/// Struck-through text.
	Strikethrough,
	/// Underlined text.
	Underlined,
	/// Italic text.
	Italic,
}

/// Whether a decoration is explicitly on, explicitly off, or inherited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationState {
	/// Inherited from the parent component.
	#[default]
	NotSet,
	/// Explicitly disabled.
	False,
	/// Explicitly enabled.
	True,
}

impl DecorationState {
	/// `None` for [`DecorationState::NotSet`], otherwise the explicit flag.
	pub const fn as_option(self) -> Option<bool> {
		match self {
			Self::NotSet => None,
			Self::False => Some(false),
			Self::True => Some(true),
		}
	}
}

impl From<bool> for DecorationState {
	fn from(flag: bool) -> Self {
		if flag { Self::True } else { Self::False }
	}
}

impl From<Option<bool>> for DecorationState {
	fn from(flag: Option<bool>) -> Self {
		flag.map_or(Self::NotSet, Self::from)
	}
}

/// An immutable set of text attributes.
///
/// `Style` values are assembled with a [`StyleBuilder`], either from scratch via
/// [`Style::builder`] or starting from an existing style via [`Style::edit`].
///
/// # Example
///
/// ```rust
/// use adventure::color::NamedTextColor;
/// use adventure::style::{Style, TextDecoration};
///
/// let style = Style::builder()
///     .color(NamedTextColor::Gold.color())
///     .bold(true)
///     .build();
/// assert!(style.has_decoration(TextDecoration::Bold));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	color: Option<TextColor>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	obfuscated: Option<bool>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	bold: Option<bool>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	strikethrough: Option<bool>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	underlined: Option<bool>,
	#[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
	italic: Option<bool>,
}

impl Style {
	/// A style with no attributes set.
	pub const fn empty() -> Self {
		Self {
			color: None,
			obfuscated: None,
			bold: None,
			strikethrough: None,
			underlined: None,
			italic: None,
		}
	}

	/// Starts a builder with no attributes set.
	pub const fn builder() -> StyleBuilder {
		StyleBuilder {
			style: Self::empty(),
		}
	}

	/// Starts a builder seeded with this style's attributes.
	pub const fn to_builder(self) -> StyleBuilder {
		StyleBuilder { style: self }
	}

	/// Returns a new style produced by applying `edit` to a builder seeded with `self`.
	#[must_use = "styles are immutable; the edited style is returned"]
	pub fn edit(self, edit: impl FnOnce(&mut StyleBuilder)) -> Self {
		let mut builder = self.to_builder();
		edit(&mut builder);
		builder.build()
	}

	/// The text color, if set.
	pub const fn color(&self) -> Option<TextColor> {
		self.color
	}

	/// The state of a single decoration.
	pub const fn decoration(&self, decoration: TextDecoration) -> DecorationState {
		let flag = match decoration {
			TextDecoration::Obfuscated => self.obfuscated,
			TextDecoration::Bold => self.bold,
			TextDecoration::Strikethrough => self.strikethrough,
			TextDecoration::Underlined => self.underlined,
			TextDecoration::Italic => self.italic,
		};
		match flag {
			None => DecorationState::NotSet,
			Some(false) => DecorationState::False,
			Some(true) => DecorationState::True,
		}
	}

	/// True only when `decoration` is explicitly enabled.
	pub const fn has_decoration(&self, decoration: TextDecoration) -> bool {
		matches!(self.decoration(decoration), DecorationState::True)
	}

	/// True when no attribute is set.
	pub fn is_empty(&self) -> bool {
		*self == Self::empty()
	}

	/// Overlays `other` on top of `self`.
	///
	/// Attributes set in `other` win; attributes `other` leaves unset are kept from `self`.
	#[must_use = "styles are immutable; the merged style is returned"]
	pub fn merge(self, other: &Style) -> Self {
		Self {
			color: other.color.or(self.color),
			obfuscated: other.obfuscated.or(self.obfuscated),
			bold: other.bold.or(self.bold),
			strikethrough: other.strikethrough.or(self.strikethrough),
			underlined: other.underlined.or(self.underlined),
			italic: other.italic.or(self.italic),
		}
	}

	fn decoration_slot(&mut self, decoration: TextDecoration) -> &mut Option<bool> {
		match decoration {
			TextDecoration::Obfuscated => &mut self.obfuscated,
			TextDecoration::Bold => &mut self.bold,
			TextDecoration::Strikethrough => &mut self.strikethrough,
			TextDecoration::Underlined => &mut self.underlined,
			TextDecoration::Italic => &mut self.italic,
		}
	}
}

/// Mutable, transient state used to assemble a [`Style`].
///
/// Every setter returns `&mut Self` so calls can be chained inside a configuration closure.
#[derive(Debug, Default, Clone)]
pub struct StyleBuilder {
	style: Style,
}

impl StyleBuilder {
	/// Sets the text color.
	pub fn color(&mut self, color: TextColor) -> &mut Self {
		self.style.color = Some(color);
		self
	}

	/// Removes the text color so it is inherited again.
	pub fn clear_color(&mut self) -> &mut Self {
		self.style.color = None;
		self
	}

	/// Sets the state of one decoration.
	pub fn decoration(
		&mut self,
		decoration: TextDecoration,
		state: impl Into<DecorationState>,
	) -> &mut Self {
		*self.style.decoration_slot(decoration) = state.into().as_option();
		self
	}

	/// Enables one decoration.
	pub fn decorate(&mut self, decoration: TextDecoration) -> &mut Self {
		self.decoration(decoration, true)
	}

	/// Sets or clears bold.
	pub fn bold(&mut self, flag: bool) -> &mut Self {
		self.decoration(TextDecoration::Bold, flag)
	}

	/// Sets or clears italic.
	pub fn italic(&mut self, flag: bool) -> &mut Self {
		self.decoration(TextDecoration::Italic, flag)
	}

	/// Sets or clears underline.
	pub fn underlined(&mut self, flag: bool) -> &mut Self {
		self.decoration(TextDecoration::Underlined, flag)
	}

	/// Sets or clears strikethrough.
	pub fn strikethrough(&mut self, flag: bool) -> &mut Self {
		self.decoration(TextDecoration::Strikethrough, flag)
	}

	/// Sets or clears obfuscation.
	pub fn obfuscated(&mut self, flag: bool) -> &mut Self {
		self.decoration(TextDecoration::Obfuscated, flag)
	}

	/// Overlays the attributes set in `other`.
	pub fn merge(&mut self, other: &Style) -> &mut Self {
		self.style = self.style.merge(other);
		self
	}

	/// Finalizes the builder into an immutable [`Style`].
	pub fn build(&self) -> Style {
		self.style
	}
}
