//! Component sugar: string coercion, builder closures, concatenation and joining.

use adventure::component::{Component, ComponentBuilder};
use adventure::style::{Style, StyleBuilder};

/// Values accepted wherever the DSL expects a component.
///
/// Strings become unstyled leaf components; components and builders pass through.
pub trait IntoComponent {
	fn into_component(self) -> Component;
}

impl IntoComponent for &str {
	fn into_component(self) -> Component {
		Component::text(self)
	}
}

impl IntoComponent for String {
	fn into_component(self) -> Component {
		Component::text(self)
	}
}

impl IntoComponent for &String {
	fn into_component(self) -> Component {
		Component::text(self.as_str())
	}
}

impl IntoComponent for Component {
	fn into_component(self) -> Component {
		self
	}
}

impl IntoComponent for &Component {
	fn into_component(self) -> Component {
		self.clone()
	}
}

impl IntoComponent for ComponentBuilder {
	fn into_component(self) -> Component {
		self.build()
	}
}

impl IntoComponent for &ComponentBuilder {
	fn into_component(self) -> Component {
		self.build()
	}
}

/// Turns string slices into text components.
///
/// ```rust
/// use adventure::NamedTextColor;
/// use adventure_dsl::prelude::*;
///
/// let warning = "Careful".component_with(|style| {
///     style.color(NamedTextColor::Red.color()).bold(true);
/// });
/// assert_eq!(warning.content(), "Careful");
/// assert!(warning.style().has_decoration(adventure::TextDecoration::Bold));
/// ```
pub trait StrExt {
	/// An unstyled text component holding this string.
	fn component(&self) -> Component;

	/// A text component holding this string with `style` applied.
	fn component_styled(&self, style: impl Into<Style>) -> Component;

	/// A text component holding this string, styled by `configure`.
	fn component_with(&self, configure: impl FnOnce(&mut StyleBuilder)) -> Component;
}

impl StrExt for str {
	fn component(&self) -> Component {
		Component::text(self)
	}

	fn component_styled(&self, style: impl Into<Style>) -> Component {
		self.component().with_style(style)
	}

	fn component_with(&self, configure: impl FnOnce(&mut StyleBuilder)) -> Component {
		self.component().edit_style(configure)
	}
}

/// Builds a text component by configuring a fresh [`ComponentBuilder`].
pub fn text_component(configure: impl FnOnce(&mut ComponentBuilder)) -> Component {
	let mut builder = Component::builder();
	configure(&mut builder);
	builder.build()
}

/// Concatenation for components.
pub trait ComponentExt {
	/// Returns a new component with `other` as its last child. The receiver is unchanged.
	///
	/// ```rust
	/// use adventure_dsl::prelude::*;
	///
	/// let greeting = "Hello".component().plus(" world");
	/// assert_eq!(greeting.to_string(), "Hello world");
	/// ```
	#[must_use = "components are immutable; the concatenated component is returned"]
	fn plus(&self, other: impl IntoComponent) -> Component;
}

impl ComponentExt for Component {
	fn plus(&self, other: impl IntoComponent) -> Component {
		self.append(other.into_component())
	}
}

/// Joins a sequence of components into one.
///
/// The result is an empty, unstyled component whose children are the elements with the
/// separator between each adjacent pair. Joining nothing yields [`Component::empty`].
pub trait JoinToText {
	/// Joins with `separator` between adjacent elements.
	fn join_to_text_with(self, separator: impl IntoComponent) -> Component;

	/// Joins with an empty separator.
	fn join_to_text(self) -> Component
	where
		Self: Sized,
	{
		self.join_to_text_with(Component::empty())
	}
}

impl<I> JoinToText for I
where
	I: IntoIterator,
	I::Item: IntoComponent,
{
	fn join_to_text_with(self, separator: impl IntoComponent) -> Component {
		let separator = separator.into_component();
		let mut joined = Component::builder();
		let mut items = self.into_iter().peekable();
		while let Some(item) = items.next() {
			joined.append(item.into_component());
			if items.peek().is_some() {
				joined.append(&separator);
			}
		}
		joined.build()
	}
}

#[cfg(test)]
mod tests;
