//! Forwarding shorthand for audience collections.

use std::sync::Arc;

use adventure::audience::{Audience, Audiences, ForwardingAudience};

/// Combines a collection of audiences into one [`ForwardingAudience`].
///
/// A shared [`Audiences`] collection forwards live: members added or removed later are
/// seen by every subsequent call. A slice, array or `Vec` is copied when `forward` is
/// called and never changes afterwards.
///
/// ```rust
/// use std::sync::Arc;
///
/// use adventure::{Audience, Audiences, EmptyAudience};
/// use adventure_dsl::prelude::*;
///
/// let online = Audiences::new();
/// let everyone = online.forward();
/// let frozen = [Arc::new(EmptyAudience) as Arc<dyn Audience>].forward();
///
/// online.push(Arc::new(EmptyAudience));
/// assert_eq!(everyone.len(), 1);
/// assert_eq!(frozen.len(), 1);
/// ```
pub trait ForwardExt {
	fn forward(&self) -> ForwardingAudience;
}

impl ForwardExt for Audiences {
	fn forward(&self) -> ForwardingAudience {
		ForwardingAudience::live(self)
	}
}

impl ForwardExt for [Arc<dyn Audience>] {
	fn forward(&self) -> ForwardingAudience {
		ForwardingAudience::snapshot(self.iter().cloned())
	}
}
