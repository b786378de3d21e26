//! # battle_math - Planar Math
//!
//! The numeric primitives game objects carry around: positions and
//! velocities on the 2D battle map.

pub mod vector;

pub use vector::*;

pub mod prelude {
    pub use crate::vector::Vec2;
}
