use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Scalar
///
/// The closed set of primitive value kinds. Every projection (runtime
/// validator, GraphQL, JSON Schema) resolves scalars through this enum, so
/// adding a kind here is the single edit required to support it everywhere.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum Scalar {
    AmountCrypto,
    Boolean,
    Date,
    Id,
    Number,
    String,
}

impl Scalar {
    pub const ALL: [Self; 6] = [
        Self::AmountCrypto,
        Self::Boolean,
        Self::Date,
        Self::Id,
        Self::Number,
        Self::String,
    ];

    /// Stable registry key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AmountCrypto => "amount_crypto",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Id => "id",
            Self::Number => "number",
            Self::String => "string",
        }
    }

    /// GraphQL type name used in SDL emission and generated docs.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::AmountCrypto => "AmountCrypto",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Id => "ID",
            Self::Number => "Number",
            Self::String => "String",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AmountCrypto => "An amount of crypto.",
            Self::Boolean => "A boolean value.",
            Self::Date => "A date value.",
            Self::Id => "A unique identifier for the object.",
            Self::Number => "A number value.",
            Self::String => "A string value.",
        }
    }

    /// Scalars whose values are objects rather than JSON primitives.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::AmountCrypto)
    }
}

impl FromStr for Scalar {
    type Err = UnknownScalarKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scalar| scalar.key() == s)
            .ok_or(UnknownScalarKey)
    }
}

///
/// UnknownScalarKey
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownScalarKey;
