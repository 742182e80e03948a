//! Seedfall: a side-scrolling seed hunt
//!
//! The playable parts live in a headless simulation core so the whole
//! game can be exercised tick by tick in tests:
//! - `level`: declarative layouts with RON load/save and validation
//! - `sim`: physics, collision, scrolling, events, score, reset
//! - `anim`: frame cycles and sprite sheet slicing
//! - `input`/`render`/`assets`: the macroquad shell around the core
//! - `exchange`: the currency-rate client behind the `rates` binary

pub mod anim;
pub mod assets;
pub mod exchange;
pub mod input;
pub mod level;
pub mod math;
pub mod render;
pub mod sim;
