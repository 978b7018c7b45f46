//! Immutable text components and their builder.

use core::fmt;

use compact_str::CompactString;

use crate::color::TextColor;
use crate::style::{DecorationState, Style, StyleBuilder, TextDecoration};

/// Something that can be turned into a [`Component`].
pub trait ComponentLike {
	/// Produces the component this value represents.
	fn as_component(&self) -> Component;
}

impl<T: ComponentLike + ?Sized> ComponentLike for &T {
	fn as_component(&self) -> Component {
		(**self).as_component()
	}
}

/// An immutable tree of styled text.
///
/// A component holds its own text content, a [`Style`], and an ordered list of children that
/// are rendered after the content. Operations that "change" a component return a new one; the
/// receiver is never modified.
///
/// # Example
///
/// ```rust
/// use adventure::color::NamedTextColor;
/// use adventure::component::Component;
///
/// let greeting = Component::text("Hello")
///     .with_style(NamedTextColor::Gold)
///     .append(&Component::text(" world"));
/// assert_eq!(greeting.plain_text(), "Hello world");
/// assert_eq!(greeting.children().len(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Component {
	#[cfg_attr(feature = "serde", serde(rename = "text", default))]
	content: CompactString,
	#[cfg_attr(feature = "serde", serde(flatten))]
	style: Style,
	#[cfg_attr(
		feature = "serde",
		serde(rename = "extra", default, skip_serializing_if = "Vec::is_empty")
	)]
	children: Vec<Component>,
}

impl Component {
	/// A component with no content, no style and no children.
	pub const fn empty() -> Self {
		Self {
			content: CompactString::const_new(""),
			style: Style::empty(),
			children: Vec::new(),
		}
	}

	/// An unstyled leaf holding `content`.
	pub fn text(content: impl Into<CompactString>) -> Self {
		Self {
			content: content.into(),
			..Self::empty()
		}
	}

	/// A leaf holding a single line break.
	pub const fn newline() -> Self {
		Self {
			content: CompactString::const_new("\n"),
			style: Style::empty(),
			children: Vec::new(),
		}
	}

	/// A leaf holding a single space.
	pub const fn space() -> Self {
		Self {
			content: CompactString::const_new(" "),
			style: Style::empty(),
			children: Vec::new(),
		}
	}

	/// Starts an empty text builder.
	pub fn builder() -> ComponentBuilder {
		ComponentBuilder::default()
	}

	/// Starts a builder seeded with this component's content, style and children.
	pub fn to_builder(&self) -> ComponentBuilder {
		ComponentBuilder {
			content: self.content.clone(),
			style: self.style.to_builder(),
			children: self.children.clone(),
		}
	}

	/// The component's own text, excluding children.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// The component's style.
	pub const fn style(&self) -> Style {
		self.style
	}

	/// The component's children, in render order.
	pub fn children(&self) -> &[Component] {
		&self.children
	}

	/// True if this component equals [`Component::empty`].
	pub fn is_empty(&self) -> bool {
		self.content.is_empty() && self.children.is_empty() && self.style.is_empty()
	}

	/// Replaces the style.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn with_style(mut self, style: impl Into<Style>) -> Self {
		self.style = style.into();
		self
	}

	/// Replaces the style with the result of editing the current one.
	#[must_use = "method moves the value of self and returns the modified value"]
	pub fn edit_style(mut self, edit: impl FnOnce(&mut StyleBuilder)) -> Self {
		self.style = self.style.edit(edit);
		self
	}

	/// Returns a copy of this component with `other` added as its last child.
	#[must_use = "components are immutable; the appended component is returned"]
	pub fn append(&self, other: impl ComponentLike) -> Self {
		let mut appended = self.clone();
		appended.children.push(other.as_component());
		appended
	}

	/// Renders the content of this component and all descendants without styling.
	pub fn plain_text(&self) -> String {
		let mut out = String::new();
		self.write_plain(&mut out);
		out
	}

	fn write_plain(&self, out: &mut String) {
		out.push_str(&self.content);
		for child in &self.children {
			child.write_plain(out);
		}
	}
}

impl ComponentLike for Component {
	fn as_component(&self) -> Component {
		self.clone()
	}
}

impl fmt::Display for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.content)?;
		for child in &self.children {
			fmt::Display::fmt(child, f)?;
		}
		Ok(())
	}
}

/// Mutable, transient state used to assemble a text [`Component`].
#[derive(Debug, Default, Clone)]
pub struct ComponentBuilder {
	content: CompactString,
	style: StyleBuilder,
	children: Vec<Component>,
}

impl ComponentBuilder {
	/// Sets the text content.
	pub fn content(&mut self, content: impl Into<CompactString>) -> &mut Self {
		self.content = content.into();
		self
	}

	/// Adds a child after any existing children.
	pub fn append(&mut self, child: impl ComponentLike) -> &mut Self {
		self.children.push(child.as_component());
		self
	}

	/// Replaces the style.
	pub fn style(&mut self, style: impl Into<Style>) -> &mut Self {
		self.style = style.into().to_builder();
		self
	}

	/// Edits the style in place.
	pub fn edit_style(&mut self, edit: impl FnOnce(&mut StyleBuilder)) -> &mut Self {
		edit(&mut self.style);
		self
	}

	/// Sets the text color.
	pub fn color(&mut self, color: TextColor) -> &mut Self {
		self.style.color(color);
		self
	}

	/// Sets the state of one decoration.
	pub fn decoration(
		&mut self,
		decoration: TextDecoration,
		state: impl Into<DecorationState>,
	) -> &mut Self {
		self.style.decoration(decoration, state);
		self
	}

	/// Finalizes the builder into an immutable [`Component`].
	pub fn build(&self) -> Component {
		Component {
			content: self.content.clone(),
			style: self.style.build(),
			children: self.children.clone(),
		}
	}
}

impl ComponentLike for ComponentBuilder {
	fn as_component(&self) -> Component {
		self.build()
	}
}
