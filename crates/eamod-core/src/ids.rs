//! Strongly typed, zero-cost identifier wrappers.
//!
//! Road nodes are **1-based** in configuration text and **0-based** inside
//! the builder.  `NodeId` is always the 0-based form; use
//! [`NodeId::from_label`] / [`NodeId::label`] to cross the boundary so the
//! off-by-one lives in exactly one place.
//!
//! `EdgeId` is the 1-based running edge number handed to the optimizer.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// 0-based index of a road node.
    pub struct NodeId(u32);
}

typed_id! {
    /// 1-based running number of a directed road edge.
    pub struct EdgeId(u32);
}

impl NodeId {
    /// Convert a 1-based node label into a `NodeId`, given the node count.
    ///
    /// Returns `None` unless `1 <= label <= node_count`.
    #[inline]
    pub fn from_label(label: i64, node_count: usize) -> Option<NodeId> {
        let n = i64::try_from(node_count).ok()?;
        if (1..=n).contains(&label) {
            u32::try_from(label - 1).ok().map(NodeId)
        } else {
            None
        }
    }

    /// The 1-based label used in configuration text.
    #[inline]
    pub fn label(self) -> i64 {
        i64::from(self.0) + 1
    }
}
