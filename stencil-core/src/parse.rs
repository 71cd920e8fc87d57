use crate::{Context, Result};
use atoi::FromRadix10SignedChecked;
use fast_float::parse_partial;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, format_description::well_known::Rfc3339,
    macros::format_description,
};

/// Leading integer of `value`, like a lenient cast: `"12abc"` is 12, `"abc"` is 0.
///
/// A fractional or exponent part is truncated (`"1.9"` is 1, `"1e3"` is 1000).
pub fn parse_integer_prefix(value: &str) -> i64 {
    let value = value.trim_start();
    let (integer, used) = i64::from_radix_10_signed_checked(value.as_bytes());
    match (integer, value.as_bytes().get(used)) {
        (Some(v), next) if !matches!(next, Some(b'.' | b'e' | b'E')) => v,
        // Fraction, exponent or overflow, the float cast saturates
        _ => parse_float_prefix(value) as i64,
    }
}

/// Leading float of `value`, `0.0` when there is none.
pub fn parse_float_prefix(value: &str) -> f64 {
    parse_partial::<f64, _>(value.trim_start())
        .map(|(v, _)| v)
        .unwrap_or(0.0)
}

/// Generic date time parsing: RFC 3339, ISO like timestamps with `T` or space, plain dates.
///
/// Values without offset are taken as UTC.
pub fn parse_timestamp(value: impl AsRef<str>) -> Result<OffsetDateTime> {
    let value = value.as_ref().trim();
    if let Ok(v) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(v);
    }
    if let Ok(v) = OffsetDateTime::parse(
        value,
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        ),
    ) {
        return Ok(v);
    }
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    )
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ))
    .or(PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ))
    .or(
        Date::parse(value, format_description!("[year]-[month]-[day]"))
            .map(|v| PrimitiveDateTime::new(v, Time::MIDNIGHT)),
    )
    .map(PrimitiveDateTime::assume_utc)
    .with_context(|| format!("Cannot parse '{}' as a timestamp", value))
}

/// Timestamp from seconds since the Unix epoch, fractional part kept.
pub fn timestamp_from_epoch(seconds: f64) -> Result<OffsetDateTime> {
    let nanos = (seconds * 1_000_000_000.0).trunc() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .with_context(|| format!("Epoch {} is out of range", seconds))
}
