//! Strong id handles for mesh entities.
//!
//! Ids come straight from the mesh file and are never regenerated. Unlike
//! storage indices they may start at any value, skip numbers, or appear in
//! any order, so every cross-reference between entities goes through these
//! newtypes rather than through `usize` positions.
//!
//! Both handles are `repr(transparent)` wrappers around `u64`, serialize as
//! the bare integer, and print as the bare integer with `Display`.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw id as read from the file.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                $name(raw)
            }

            /// Returns the raw `u64` value.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id! {
    /// Id of a vertex, unique within a mesh.
    VertexId
}

entity_id! {
    /// Id of an element or surface record.
    CellId
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_valid_id() {
        assert_eq!(VertexId::new(0).get(), 0);
    }

    #[test]
    fn debug_and_display() {
        let v = VertexId::new(7);
        assert_eq!(format!("{v:?}"), "VertexId(7)");
        assert_eq!(format!("{v}"), "7");
        assert_eq!(format!("{:?}", CellId::from(3)), "CellId(3)");
    }

    #[test]
    fn ordering_and_hash() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        assert!(a < b);
        let mut set = std::collections::HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(VertexId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let s = serde_json::to_string(&VertexId::new(123)).unwrap();
        assert_eq!(s, "123");
        let back: CellId = serde_json::from_str("456").unwrap();
        assert_eq!(back, CellId::new(456));
    }

    #[test]
    fn max_value() {
        assert_eq!(VertexId::new(u64::MAX).get(), u64::MAX);
    }
}
