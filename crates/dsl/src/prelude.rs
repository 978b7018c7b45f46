//! Extension traits and builder functions, ready for a glob import.

pub use crate::audience::ForwardExt;
pub use crate::boss_bar::{BossBarBuilder, BossBarExt, BossBarListenExt, boss_bar, boss_bar_with};
pub use crate::component::{ComponentExt, IntoComponent, JoinToText, StrExt, text_component};
pub use crate::style::StyleBuilderExt;
