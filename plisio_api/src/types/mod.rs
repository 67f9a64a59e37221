//! Closed enumerations used in request parameters and the response envelope.

/// Error returned when a string does not name any variant of a code enumeration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Name of the enumeration that was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Normalizes a user-supplied name so that `usdt-trx`, `USDT_TRX` and
/// `Usdt Trx` all compare equal.
pub(crate) fn normalize_name(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Declares an enumeration whose variants map to a fixed API code and a
/// human-readable description.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $description:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value sent to the API.
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Human-readable name.
            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $description,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::types::normalize_name(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::types::normalize_name(v.code()) == wanted)
                    .ok_or_else(|| $crate::types::ParseEnumError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(value: $name) -> Self {
                serde_json::Value::String(value.code().to_string())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod currency;
pub use self::currency::{Currency, FiatCurrency};

mod operation;
pub use self::operation::{FeePlan, HttpMethod, TransactionStatus, TransactionType, WithdrawType};

mod envelope;
pub use self::envelope::Envelope;
