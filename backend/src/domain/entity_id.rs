//! Positive integer identifiers shared by users and posts.
//!
//! Identifiers are assigned as "highest existing + 1", starting at 1, and are
//! never reused while a higher identifier remains in the collection.

/// Raised when an identifier is zero or not a base-10 integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("identifier must be a positive integer")]
pub struct InvalidEntityId;

macro_rules! define_entity_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "u64", into = "u64")]
        pub struct $name(u64);

        impl $name {
            /// Identifier handed out when the collection is empty.
            pub const FIRST: Self = Self(1);

            /// Validate a raw identifier.
            pub fn new(raw: u64) -> Result<Self, $crate::domain::entity_id::InvalidEntityId> {
                if raw == 0 {
                    return Err($crate::domain::entity_id::InvalidEntityId);
                }
                Ok(Self(raw))
            }

            /// Raw numeric value.
            pub fn get(self) -> u64 {
                self.0
            }

            /// Identifier following the highest of `existing`.
            ///
            /// Returns [`Self::FIRST`] for an empty collection and `None` once
            /// the numeric space is exhausted.
            pub fn next_after(existing: impl IntoIterator<Item = Self>) -> Option<Self> {
                match existing.into_iter().max() {
                    Some(highest) => highest.0.checked_add(1).map(Self),
                    None => Some(Self::FIRST),
                }
            }
        }

        impl TryFrom<u64> for $name {
            type Error = $crate::domain::entity_id::InvalidEntityId;

            fn try_from(value: u64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::entity_id::InvalidEntityId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .parse::<u64>()
                    .map_err(|_| $crate::domain::entity_id::InvalidEntityId)?;
                Self::new(raw)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_entity_id;
