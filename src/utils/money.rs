use crate::error::ServiceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Digits after the decimal point in the currency.
pub const CURRENCY_SCALE: u32 = 2;

/// Converts a client-supplied amount into minor units. Amounts must be
/// positive and carry no more than [`CURRENCY_SCALE`] fractional digits.
pub fn to_minor_units(amount: Decimal) -> Result<i64, ServiceError> {
    if amount <= Decimal::ZERO {
        return Err(ServiceError::validation("Amount must be greater than 0"));
    }
    if amount.normalize().scale() > CURRENCY_SCALE {
        return Err(ServiceError::validation(
            "Amount cannot have more than two decimal places",
        ));
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|units| units.trunc().to_i64())
        .ok_or_else(|| ServiceError::validation("Amount is too large"))
}

pub fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, CURRENCY_SCALE)
}
