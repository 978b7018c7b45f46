//! Boss bar construction from named fields, and closure-based change listeners.

use adventure::Result;
use adventure::boss_bar::{BossBar, BossBarColor, BossBarFlags, BossBarListener, BossBarOverlay};
use adventure::component::{Component, ComponentBuilder};

use crate::component::{IntoComponent, text_component};

/// Progress of a boss bar built without an explicit value.
pub const DEFAULT_PROGRESS: f32 = 0.0;
/// Color of a boss bar built without an explicit value.
pub const DEFAULT_COLOR: BossBarColor = BossBarColor::Red;
/// Overlay of a boss bar built without an explicit value.
pub const DEFAULT_OVERLAY: BossBarOverlay = BossBarOverlay::Progress;

/// Named fields for a [`BossBar`], handed to the configuration closure of [`boss_bar`].
#[derive(Debug, Clone, PartialEq)]
pub struct BossBarBuilder {
	pub name: Component,
	pub progress: f32,
	pub color: BossBarColor,
	pub overlay: BossBarOverlay,
	pub flags: BossBarFlags,
}

impl Default for BossBarBuilder {
	fn default() -> Self {
		Self {
			name: Component::empty(),
			progress: DEFAULT_PROGRESS,
			color: DEFAULT_COLOR,
			overlay: DEFAULT_OVERLAY,
			flags: BossBarFlags::empty(),
		}
	}
}

impl BossBarBuilder {
	/// Starts from the defaults with the given name.
	pub fn new(name: impl IntoComponent) -> Self {
		Self {
			name: name.into_component(),
			..Self::default()
		}
	}

	/// Creates the bar. Progress outside `[0, 1]` is rejected by [`BossBar::new`].
	pub fn build(self) -> Result<BossBar> {
		tracing::debug!(
			bar = %self.name,
			progress = self.progress,
			color = %self.color,
			overlay = %self.overlay,
			flags = self.flags.bits(),
			"Building boss bar"
		);
		BossBar::new(self.name, self.progress, self.color, self.overlay, self.flags)
	}
}

/// Builds a boss bar named `name`, letting `configure` adjust the remaining fields.
///
/// ```rust
/// use adventure::{BossBarColor, BossBarFlags};
/// use adventure_dsl::prelude::*;
///
/// let bar = boss_bar("Ender Dragon", |b| {
///     b.progress = 0.5;
///     b.color = BossBarColor::Purple;
///     b.flags = BossBarFlags::DARKEN_SCREEN;
/// })?;
/// assert_eq!(bar.name().plain_text(), "Ender Dragon");
/// # Ok::<(), adventure::Error>(())
/// ```
pub fn boss_bar(
	name: impl IntoComponent,
	configure: impl FnOnce(&mut BossBarBuilder),
) -> Result<BossBar> {
	let mut builder = BossBarBuilder::new(name);
	configure(&mut builder);
	builder.build()
}

/// Like [`boss_bar`], with the name assembled by a component builder closure.
pub fn boss_bar_with(
	name: impl FnOnce(&mut ComponentBuilder),
	configure: impl FnOnce(&mut BossBarBuilder),
) -> Result<BossBar> {
	boss_bar(text_component(name), configure)
}

/// Builds a boss bar named by the receiver.
pub trait BossBarExt {
	fn boss_bar(self, configure: impl FnOnce(&mut BossBarBuilder)) -> Result<BossBar>;
}

impl<T: IntoComponent> BossBarExt for T {
	fn boss_bar(self, configure: impl FnOnce(&mut BossBarBuilder)) -> Result<BossBar> {
		boss_bar(self, configure)
	}
}

// Adapters keep only the (old, new) callback; the bar argument is dropped.
macro_rules! change_adapter {
	($adapter:ident => $event:ident($value:ty)) => {
		struct $adapter<F>(F);

		impl<F> BossBarListener for $adapter<F>
		where
			F: Fn($value, $value) + Send + Sync,
		{
			fn $event(&self, _bar: &BossBar, old: $value, new: $value) {
				(self.0)(old, new);
			}
		}
	};
}

change_adapter!(NameChanged => name_changed(&Component));
change_adapter!(ProgressChanged => progress_changed(f32));
change_adapter!(ColorChanged => color_changed(BossBarColor));
change_adapter!(OverlayChanged => overlay_changed(BossBarOverlay));
change_adapter!(FlagsChanged => flags_changed(BossBarFlags));

/// Registers two-argument `(old, new)` callbacks as boss bar listeners.
///
/// Callbacks stay attached for the lifetime of the bar.
pub trait BossBarListenExt {
	fn on_name_changed(
		&mut self,
		callback: impl Fn(&Component, &Component) + Send + Sync + 'static,
	) -> &mut Self;

	fn on_progress_changed(
		&mut self,
		callback: impl Fn(f32, f32) + Send + Sync + 'static,
	) -> &mut Self;

	fn on_color_changed(
		&mut self,
		callback: impl Fn(BossBarColor, BossBarColor) + Send + Sync + 'static,
	) -> &mut Self;

	fn on_overlay_changed(
		&mut self,
		callback: impl Fn(BossBarOverlay, BossBarOverlay) + Send + Sync + 'static,
	) -> &mut Self;

	/// Receives the whole flag set before and after the change.
	fn on_flags_changed(
		&mut self,
		callback: impl Fn(BossBarFlags, BossBarFlags) + Send + Sync + 'static,
	) -> &mut Self;
}

impl BossBarListenExt for BossBar {
	fn on_name_changed(
		&mut self,
		callback: impl Fn(&Component, &Component) + Send + Sync + 'static,
	) -> &mut Self {
		self.add_listener(NameChanged(callback))
	}

	fn on_progress_changed(
		&mut self,
		callback: impl Fn(f32, f32) + Send + Sync + 'static,
	) -> &mut Self {
		self.add_listener(ProgressChanged(callback))
	}

	fn on_color_changed(
		&mut self,
		callback: impl Fn(BossBarColor, BossBarColor) + Send + Sync + 'static,
	) -> &mut Self {
		self.add_listener(ColorChanged(callback))
	}

	fn on_overlay_changed(
		&mut self,
		callback: impl Fn(BossBarOverlay, BossBarOverlay) + Send + Sync + 'static,
	) -> &mut Self {
		self.add_listener(OverlayChanged(callback))
	}

	fn on_flags_changed(
		&mut self,
		callback: impl Fn(BossBarFlags, BossBarFlags) + Send + Sync + 'static,
	) -> &mut Self {
		self.add_listener(FlagsChanged(callback))
	}
}
