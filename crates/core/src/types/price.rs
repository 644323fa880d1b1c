//! Type-safe price representation.
//!
//! Prices are stored as integer cents, matching the `products.price` column.
//! Keeping the wire and storage format integral avoids floating-point money
//! arithmetic anywhere in the system.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in integer cents.
///
/// Serializes transparently as a JSON number (e.g., `1999` for $19.99),
/// which is also how the catalog stores and returns prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    /// Create a price from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i32) -> Self {
        Self(cents)
    }

    /// Get the price in integer cents.
    #[must_use]
    pub const fn as_cents(&self) -> i32 {
        self.0
    }

    /// Format for display (e.g., `"$19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("${}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i32> for Price {
    fn from(cents: i32) -> Self {
        Self(cents)
    }
}

impl From<Price> for i32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let cents = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(cents))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
