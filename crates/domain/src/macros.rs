//! Macro for implementing wire conversions for closed domain enums
//!
//! Every enum the API exchanges as a lowercase string (case status, case
//! type, movement type, document type) needs the same set of conversions.
//! The enum must declare an `Unrecognized(String)` variant: values outside
//! the known set are kept verbatim there instead of failing the mapping.
//!
//! # Example
//!
//! ```rust
//! use jurisrem_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! pub enum Priority {
//!     Low,
//!     High,
//!     Unrecognized(String),
//! }
//!
//! impl_wire_enum_conversions!(Priority {
//!     Low => "baixa",
//!     High => "alta",
//! });
//!
//! assert_eq!(Priority::from_wire("alta"), Priority::High);
//! assert_eq!(Priority::from_wire("urgente"), Priority::Unrecognized("urgente".into()));
//! ```

/// Implements wire conversions for closed domain enums
///
/// This macro generates:
/// - `as_str` / `from_wire` (total: unknown values become `Unrecognized`)
/// - `known()` listing the declared variants in order
/// - Display: the wire string
/// - FromStr: strict, case-insensitive parsing of known values only
/// - serde Serialize/Deserialize as a plain string
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Total conversion from the wire string.
            pub fn from_wire(raw: &str) -> Self {
                match raw {
                    $($str => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            /// Known variants in declaration order.
            pub fn known() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// Whether the value belongs to the known set.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&raw))
            }
        }
    };
}
