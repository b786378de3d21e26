//! # battle_core - Game Object Model
//!
//! Game objects in the battle simulation carry no typed fields. Each one is
//! a bag of named properties behind the [`UObject`] contract, and all
//! behavior is layered on top through narrow capability traits elsewhere.
//!
//! ```ignore
//! use battle_core::prelude::*;
//!
//! let ship = GameObject::named("frigate")
//!     .with_property(keys::POSITION, Vec2::new(12.0, 5.0))
//!     .into_shared();
//!
//! let position = ship.read().get_value(keys::POSITION)?;
//! ```

pub mod error;
pub mod id;
pub mod object;
pub mod value;

pub use error::*;
pub use id::*;
pub use object::*;
pub use value::*;

pub use battle_math::Vec2;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{PropertyError, Result};
    pub use crate::id::ObjectId;
    pub use crate::object::{keys, GameObject, SharedObject, UObject};
    pub use crate::value::PropertyValue;
    pub use battle_math::Vec2;
}
