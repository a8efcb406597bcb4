use crate::error::UnitError;
use crate::prefix;

/// Encode a value as a unit string with an SI prefix.
/// The mantissa is rescaled into [1, 1000) so it pairs with a prefix from
/// the table, e.g. `("Hz", 1500.0)` -> `"1.50 KHz"`.
pub fn format_unit_string(unit: &str, value: f64) -> Result<String, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::NonFiniteValue(value));
    }

    // Zero carries no prefix; formatting the literal keeps -0.0 from
    // printing a spurious sign
    if value == 0.0 {
        return Ok(format!("{:.2} {}", 0.0, unit));
    }

    let exponent = value.abs().log10().floor() as i32;

    // Prefixes exist only at decade steps of 3, so floor the exponent
    // toward negative infinity to the nearest multiple of 3
    let mut prefix_exponent = exponent.div_euclid(3) * 3;
    let mut mantissa = value / 10f64.powi(prefix_exponent);

    // log10 can land a hair on the wrong side of a power-of-ten boundary;
    // one shift puts the mantissa back in [1, 1000)
    if mantissa.abs() >= 1000.0 {
        prefix_exponent += 3;
        mantissa /= 1000.0;
    } else if mantissa.abs() < 1.0 {
        prefix_exponent -= 3;
        mantissa *= 1000.0;
    }

    let prefix = prefix::prefix_of(prefix_exponent)
        .ok_or(UnitError::UnsupportedPrefix(prefix_exponent))?;

    Ok(format!("{:.2} {}{}", mantissa, prefix, unit))
}
