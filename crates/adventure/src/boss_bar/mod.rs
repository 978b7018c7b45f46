//! Boss bars: named progress displays that report every change to their listeners.

use core::fmt;

use bitflags::bitflags;

use crate::component::{Component, ComponentLike};
use crate::error::{Error, Result};

/// Lowest accepted progress value.
pub const MIN_PROGRESS: f32 = 0.0;
/// Highest accepted progress value.
pub const MAX_PROGRESS: f32 = 1.0;

/// Color of the bar itself.
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
pub enum BossBarColor {
	Pink,
	Blue,
	Red,
	Green,
	Yellow,
	Purple,
	White,
}

/// How the bar is segmented.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
pub enum BossBarOverlay {
	/// A single continuous bar.
	#[cfg_attr(feature = "serde", serde(rename = "progress"))]
	#[strum(serialize = "progress")]
	Progress,
	/// Six segments.
	#[cfg_attr(feature = "serde", serde(rename = "notched_6"))]
	#[strum(serialize = "notched_6")]
	Notched6,
	/// Ten segments.
	#[cfg_attr(feature = "serde", serde(rename = "notched_10"))]
	#[strum(serialize = "notched_10")]
	Notched10,
	/// Twelve segments.
	#[cfg_attr(feature = "serde", serde(rename = "notched_12"))]
	#[strum(serialize = "notched_12")]
	Notched12,
	/// Twenty segments.
	#[cfg_attr(feature = "serde", serde(rename = "notched_20"))]
	#[strum(serialize = "notched_20")]
	Notched20,
}

bitflags! {
	/// Client-side effects requested while the bar is shown.
	///
	/// ```rust
	/// use adventure::boss_bar::BossBarFlags;
	///
	/// let flags = BossBarFlags::DARKEN_SCREEN | BossBarFlags::PLAY_BOSS_MUSIC;
	/// assert!(flags.contains(BossBarFlags::DARKEN_SCREEN));
	/// ```
	#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
	#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct BossBarFlags: u8 {
		/// Darkens the sky.
		const DARKEN_SCREEN    = 0b001;
		/// Plays the boss music.
		const PLAY_BOSS_MUSIC  = 0b010;
		/// Creates fog around the viewer.
		const CREATE_WORLD_FOG = 0b100;
	}
}

/// Receives change notifications from a [`BossBar`].
///
/// Every method defaults to doing nothing, so implementors only override the events they
/// care about. Each notification carries the bar (already updated), the previous value and
/// the new value.
pub trait BossBarListener: Send + Sync {
	/// The name changed.
	fn name_changed(&self, _bar: &BossBar, _old: &Component, _new: &Component) {}

	/// The progress changed.
	fn progress_changed(&self, _bar: &BossBar, _old: f32, _new: f32) {}

	/// The color changed.
	fn color_changed(&self, _bar: &BossBar, _old: BossBarColor, _new: BossBarColor) {}

	/// The overlay changed.
	fn overlay_changed(&self, _bar: &BossBar, _old: BossBarOverlay, _new: BossBarOverlay) {}

	/// The flag set changed.
	fn flags_changed(&self, _bar: &BossBar, _old: BossBarFlags, _new: BossBarFlags) {}
}

/// A boss bar shown at the top of a viewer's screen.
///
/// Setters only notify listeners when the stored value actually changes. Listeners stay
/// attached for the lifetime of the bar.
pub struct BossBar {
	name: Component,
	progress: f32,
	color: BossBarColor,
	overlay: BossBarOverlay,
	flags: BossBarFlags,
	listeners: Vec<Box<dyn BossBarListener>>,
}

impl fmt::Debug for BossBar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BossBar")
			.field("name", &self.name)
			.field("progress", &self.progress)
			.field("color", &self.color)
			.field("overlay", &self.overlay)
			.field("flags", &self.flags)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

impl BossBar {
	/// Creates a boss bar, rejecting progress outside `[0, 1]`.
	pub fn new(
		name: impl ComponentLike,
		progress: f32,
		color: BossBarColor,
		overlay: BossBarOverlay,
		flags: BossBarFlags,
	) -> Result<Self> {
		Ok(Self {
			name: name.as_component(),
			progress: check_progress(progress)?,
			color,
			overlay,
			flags,
			listeners: Vec::new(),
		})
	}

	pub fn name(&self) -> &Component {
		&self.name
	}

	pub const fn progress(&self) -> f32 {
		self.progress
	}

	pub const fn color(&self) -> BossBarColor {
		self.color
	}

	pub const fn overlay(&self) -> BossBarOverlay {
		self.overlay
	}

	pub const fn flags(&self) -> BossBarFlags {
		self.flags
	}

	/// Number of attached listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Sets the name.
	pub fn set_name(&mut self, name: impl ComponentLike) -> &mut Self {
		let name = name.as_component();
		if name != self.name {
			let old = core::mem::replace(&mut self.name, name);
			self.notify("name", |listener, bar| {
				listener.name_changed(bar, &old, &bar.name);
			});
		}
		self
	}

	/// Sets the progress, rejecting values outside `[0, 1]`.
	pub fn set_progress(&mut self, progress: f32) -> Result<&mut Self> {
		let progress = check_progress(progress)?;
		if progress != self.progress {
			let old = core::mem::replace(&mut self.progress, progress);
			self.notify("progress", |listener, bar| {
				listener.progress_changed(bar, old, bar.progress);
			});
		}
		Ok(self)
	}

	/// Sets the color.
	pub fn set_color(&mut self, color: BossBarColor) -> &mut Self {
		if color != self.color {
			let old = core::mem::replace(&mut self.color, color);
			self.notify("color", |listener, bar| {
				listener.color_changed(bar, old, bar.color);
			});
		}
		self
	}

	/// Sets the overlay.
	pub fn set_overlay(&mut self, overlay: BossBarOverlay) -> &mut Self {
		if overlay != self.overlay {
			let old = core::mem::replace(&mut self.overlay, overlay);
			self.notify("overlay", |listener, bar| {
				listener.overlay_changed(bar, old, bar.overlay);
			});
		}
		self
	}

	/// Replaces the flag set.
	pub fn set_flags(&mut self, flags: BossBarFlags) -> &mut Self {
		if flags != self.flags {
			let old = core::mem::replace(&mut self.flags, flags);
			self.notify("flags", |listener, bar| {
				listener.flags_changed(bar, old, bar.flags);
			});
		}
		self
	}

	/// Adds flags to the current set.
	pub fn add_flags(&mut self, flags: BossBarFlags) -> &mut Self {
		self.set_flags(self.flags | flags)
	}

	/// Removes flags from the current set.
	pub fn remove_flags(&mut self, flags: BossBarFlags) -> &mut Self {
		self.set_flags(self.flags - flags)
	}

	/// Attaches a listener for the rest of the bar's lifetime.
	pub fn add_listener(&mut self, listener: impl BossBarListener + 'static) -> &mut Self {
		self.listeners.push(Box::new(listener));
		self
	}

	fn notify(&self, attribute: &'static str, event: impl Fn(&dyn BossBarListener, &Self)) {
		tracing::trace!(
			attribute,
			listeners = self.listeners.len(),
			"Notifying boss bar listeners"
		);
		for listener in &self.listeners {
			event(listener.as_ref(), self);
		}
	}
}

fn check_progress(progress: f32) -> Result<f32> {
	if (MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
		Ok(progress)
	} else {
		Err(Error::ProgressOutOfRange(progress))
	}
}
