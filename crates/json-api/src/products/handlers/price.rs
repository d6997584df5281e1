//! Price field decoding.
//!
//! Clients send prices as plain JSON numbers, so `20000` and `20000.0` are
//! the same price. Fractional, negative and out-of-range values are rejected.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Number;

/// 2^64, the first whole number a `u64` cannot hold.
const PRICE_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn whole_price(number: &Number) -> Option<u64> {
    if let Some(price) = number.as_u64() {
        return Some(price);
    }

    let price = number.as_f64()?;

    if price < 0.0 || price >= PRICE_LIMIT || price.fract() != 0.0 {
        return None;
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a non-negative whole number below 2^64"
    )]
    Some(price as u64)
}

fn price_from<E: Error>(number: &Number) -> Result<u64, E> {
    whole_price(number).ok_or_else(|| {
        E::custom(format!(
            "invalid price {number}: expected a non-negative whole number"
        ))
    })
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    price_from(&Number::deserialize(deserializer)?)
}

pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer)?
        .map(|number| price_from(&number))
        .transpose()
}
