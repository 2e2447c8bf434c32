// src/lib.rs

//! Workspace facade: re-exports [`isocodes_core`] so the demos under
//! `demos/` can `use isocodes_rs::prelude::*`.

pub use isocodes_core::*;
