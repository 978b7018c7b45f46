//! Message recipients and forwarding audiences that fan out to many of them.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::boss_bar::BossBar;
use crate::component::Component;

/// A title shown in the middle of the screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Title {
	pub title: Component,
	pub subtitle: Component,
}

impl Title {
	pub fn new(title: Component, subtitle: Component) -> Self {
		Self { title, subtitle }
	}
}

/// Something that can receive chat and UI output.
///
/// Every operation defaults to doing nothing, so an audience only implements what its
/// transport supports.
pub trait Audience: Send + Sync {
	/// Sends a chat message.
	fn send_message(&self, _message: &Component) {}

	/// Shows a message above the hotbar.
	fn send_action_bar(&self, _message: &Component) {}

	/// Shows a title.
	fn show_title(&self, _title: &Title) {}

	/// Clears the current title.
	fn clear_title(&self) {}

	/// Starts displaying a boss bar.
	fn show_boss_bar(&self, _bar: &BossBar) {}

	/// Stops displaying a boss bar.
	fn hide_boss_bar(&self, _bar: &BossBar) {}
}

impl<A: Audience + ?Sized> Audience for Arc<A> {
	fn send_message(&self, message: &Component) {
		(**self).send_message(message);
	}

	fn send_action_bar(&self, message: &Component) {
		(**self).send_action_bar(message);
	}

	fn show_title(&self, title: &Title) {
		(**self).show_title(title);
	}

	fn clear_title(&self) {
		(**self).clear_title();
	}

	fn show_boss_bar(&self, bar: &BossBar) {
		(**self).show_boss_bar(bar);
	}

	fn hide_boss_bar(&self, bar: &BossBar) {
		(**self).hide_boss_bar(bar);
	}
}

/// An audience that receives nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyAudience;

impl Audience for EmptyAudience {}

/// A shared, growable collection of audiences.
///
/// Clones share the same underlying collection, so a [`ForwardingAudience::live`] built from
/// one handle sees members pushed through any other.
#[derive(Clone, Default)]
pub struct Audiences(Arc<RwLock<Vec<Arc<dyn Audience>>>>);

impl Audiences {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a member.
	pub fn push(&self, audience: Arc<dyn Audience>) {
		self.0.write().push(audience);
	}

	/// Removes every occurrence of `audience`, compared by pointer identity.
	///
	/// Returns true if anything was removed.
	pub fn remove(&self, audience: &Arc<dyn Audience>) -> bool {
		let mut members = self.0.write();
		let before = members.len();
		members.retain(|member| !Arc::ptr_eq(member, audience));
		members.len() != before
	}

	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Copies the current members.
	pub fn snapshot(&self) -> Vec<Arc<dyn Audience>> {
		self.0.read().clone()
	}
}

impl FromIterator<Arc<dyn Audience>> for Audiences {
	fn from_iter<I: IntoIterator<Item = Arc<dyn Audience>>>(iter: I) -> Self {
		Self(Arc::new(RwLock::new(iter.into_iter().collect())))
	}
}

#[derive(Clone)]
enum Members {
	Live(Audiences),
	Snapshot(Arc<[Arc<dyn Audience>]>),
}

/// An audience that repeats every operation to each of its members, in order.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use adventure::audience::{Audience, Audiences, EmptyAudience, ForwardingAudience};
/// use adventure::component::Component;
///
/// let online = Audiences::new();
/// let everyone = ForwardingAudience::live(&online);
/// online.push(Arc::new(EmptyAudience));
/// assert_eq!(everyone.len(), 1);
/// everyone.send_message(&Component::text("hi"));
/// ```
#[derive(Clone)]
pub struct ForwardingAudience {
	members: Members,
}

impl ForwardingAudience {
	/// Forwards to whatever `audiences` holds at the time of each call.
	pub fn live(audiences: &Audiences) -> Self {
		Self {
			members: Members::Live(audiences.clone()),
		}
	}

	/// Forwards to a copy of `audiences` taken now.
	pub fn snapshot(audiences: impl IntoIterator<Item = Arc<dyn Audience>>) -> Self {
		Self {
			members: Members::Snapshot(audiences.into_iter().collect()),
		}
	}

	/// True if this audience re-reads a shared collection on every call.
	pub fn is_live(&self) -> bool {
		matches!(self.members, Members::Live(_))
	}

	/// Current number of members.
	pub fn len(&self) -> usize {
		match &self.members {
			Members::Live(audiences) => audiences.len(),
			Members::Snapshot(members) => members.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	// Live members are copied out first so a member may modify the collection while
	// being forwarded to.
	fn for_each(&self, operation: &'static str, mut forward: impl FnMut(&dyn Audience)) {
		let members: Arc<[Arc<dyn Audience>]> = match &self.members {
			Members::Live(audiences) => audiences.snapshot().into(),
			Members::Snapshot(members) => Arc::clone(members),
		};
		tracing::trace!(
			operation,
			members = members.len(),
			mode = if self.is_live() { "live" } else { "snapshot" },
			"Forwarding to audience members"
		);
		for member in members.iter() {
			forward(member.as_ref());
		}
	}
}

impl Audience for ForwardingAudience {
	fn send_message(&self, message: &Component) {
		self.for_each("send_message", |member| member.send_message(message));
	}

	fn send_action_bar(&self, message: &Component) {
		self.for_each("send_action_bar", |member| member.send_action_bar(message));
	}

	fn show_title(&self, title: &Title) {
		self.for_each("show_title", |member| member.show_title(title));
	}

	fn clear_title(&self) {
		self.for_each("clear_title", |member| member.clear_title());
	}

	fn show_boss_bar(&self, bar: &BossBar) {
		self.for_each("show_boss_bar", |member| member.show_boss_bar(bar));
	}

	fn hide_boss_bar(&self, bar: &BossBar) {
		self.for_each("hide_boss_bar", |member| member.hide_boss_bar(bar));
	}
}
