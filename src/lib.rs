//! Conway's Game of Life on a bounded grid, double buffered, serialized into
//! a flat RGBA frame for display as a texture.
//!
//! The library is the whole simulation: [`CellGrid`] holds the two cell
//! generations, [`Life`] applies the rule and keeps the frame buffer current.
//! Displaying the frame (here, a minifb window in `main.rs`) is a thin
//! consumer of [`Life::frame_rgba`].
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod grid;
mod life;

pub use grid::{Cell, CellGrid, Rgb};
pub use life::Life;
