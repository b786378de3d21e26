//! Game object identifiers

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a game object, as named by incoming orders
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh process-unique id
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Derive a stable id from a name (FNV-1a)
    pub fn from_name(name: &str) -> Self {
        let mut hash = 0xcbf29ce484222325u64;
        for byte in name.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        Self(hash)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:#x})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_unique() {
        let a = ObjectId::next();
        let b = ObjectId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_name_is_stable() {
        assert_eq!(ObjectId::from_name("frigate"), ObjectId::from_name("frigate"));
        assert_ne!(ObjectId::from_name("frigate"), ObjectId::from_name("cruiser"));
    }

    #[test]
    fn test_display() {
        let id = ObjectId::from_name("");
        assert_eq!(id.to_string(), "#cbf29ce484222325");
        assert_eq!(format!("{:?}", id), "ObjectId(0xcbf29ce484222325)");
    }
}
