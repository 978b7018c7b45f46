#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Text components, styles, colors, boss bars and audiences for game-server chat UIs.

/// Message recipients and forwarding audiences.
pub mod audience;
/// Boss bars and their change listeners.
pub mod boss_bar;
/// RGB, HSV and named chat colors.
pub mod color;
/// Immutable text components.
pub mod component;
/// Error type shared by every module.
pub mod error;
/// Text styles and decorations.
pub mod style;

pub use audience::{Audience, Audiences, EmptyAudience, ForwardingAudience, Title};
pub use boss_bar::{BossBar, BossBarColor, BossBarFlags, BossBarListener, BossBarOverlay};
pub use color::{Hsv, HsvLike, NamedTextColor, RgbLike, TextColor};
pub use component::{Component, ComponentBuilder, ComponentLike};
pub use error::{Error, Result};
pub use style::{DecorationState, Style, StyleBuilder, TextDecoration};
