// extensions/mod.rs
//
// Small math helpers used by the surface transitions.

pub mod easing;

pub use easing::{ease, lerp, Easing};
