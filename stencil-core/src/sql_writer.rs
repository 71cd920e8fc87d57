use crate::{Value, separated_by};
use std::fmt::Write;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset,
    format_description::BorrowedFormatItem, macros::format_description,
};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Dialect capability consumed by the translator: escaping, identifier quoting and literal
/// formatting.
///
/// Every method has an ANSI flavored default, dialects override what differs.
pub trait SqlWriter: Send + Sync {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote a possibly qualified identifier (`schema.table`), one part at a time.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        separated_by(
            out,
            value.split('.'),
            |out, part| {
                if part == "*" {
                    out.push('*');
                } else {
                    self.write_identifier_part(out, part);
                }
            },
            ".",
        );
    }

    /// Quote a single identifier ("name") doubling inner quotes.
    fn write_identifier_part(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    /// Render a concrete value without modifier.
    fn write_value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Null => self.write_value_none(out),
            Value::Boolean(v) => self.write_value_bool(out, *v),
            Value::Int64(v) => write_integer!(out, *v),
            Value::UInt64(v) => write_integer!(out, *v),
            Value::Float64(v) => self.write_value_float(out, *v),
            Value::Decimal(v) => drop(write!(out, "{}", v)),
            Value::Varchar(v) => self.write_value_string(out, v),
            Value::Blob(v) => self.write_value_blob(out, v),
            Value::Date(v) => self.write_value_date(out, v),
            Value::Time(v) => self.write_value_time(out, v),
            Value::Timestamp(v) => self.write_value_datetime(out, v),
            Value::TimestampWithTimezone(v) => self.write_value_timestamptz(out, v),
            Value::Uuid(v) => {
                let mut buffer = uuid::Uuid::encode_buffer();
                self.write_value_string(out, v.hyphenated().encode_lower(&mut buffer));
            }
            Value::Expression(v) => v.write_sql(self.as_dyn(), out, None),
        }
    }

    /// Render NULL literal.
    fn write_value_none(&self, out: &mut String) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, out: &mut String, value: bool) {
        out.push_str(["FALSE", "TRUE"][value as usize]);
    }

    /// Render a float in its shortest round trip form (`1e-7` keeps its exponent).
    fn write_value_float(&self, out: &mut String, value: f64) {
        if value.is_infinite() {
            self.write_value_infinity(out, value.is_sign_negative());
        } else if value.is_nan() {
            self.write_value_nan(out);
        } else {
            let mut buffer = ryu::Buffer::new();
            out.push_str(buffer.format(value));
        }
    }

    /// Render +/- INF via CAST for dialect portability.
    fn write_value_infinity(&self, out: &mut String, negative: bool) {
        out.push_str(if negative {
            "CAST('-inf' AS DOUBLE)"
        } else {
            "CAST('inf' AS DOUBLE)"
        });
    }

    /// Render NaN via CAST for dialect portability.
    fn write_value_nan(&self, out: &mut String) {
        out.push_str("CAST('NaN' AS DOUBLE)");
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    /// Render a blob literal in hex form.
    fn write_value_blob(&self, out: &mut String, value: &[u8]) {
        out.push_str("X'");
        out.push_str(&hex::encode_upper(value));
        out.push('\'');
    }

    /// Pattern of a DATE literal, including the delimiters.
    fn date_format(&self) -> &'static [BorrowedFormatItem<'static>] {
        format_description!("'[year]-[month]-[day]'")
    }

    /// Pattern of a TIME literal, including the delimiters.
    fn time_format(&self) -> &'static [BorrowedFormatItem<'static>] {
        format_description!("'[hour]:[minute]:[second]'")
    }

    /// Pattern of a TIMESTAMP literal, including the delimiters.
    fn datetime_format(&self) -> &'static [BorrowedFormatItem<'static>] {
        format_description!("'[year]-[month]-[day] [hour]:[minute]:[second]'")
    }

    fn write_value_date(&self, out: &mut String, value: &Date) {
        match value.format(self.date_format()) {
            Ok(v) => out.push_str(&v),
            Err(e) => log::error!("Cannot write the date {}: {:#}", value, e),
        }
    }

    fn write_value_time(&self, out: &mut String, value: &Time) {
        match value.format(self.time_format()) {
            Ok(v) => out.push_str(&v),
            Err(e) => log::error!("Cannot write the time {}: {:#}", value, e),
        }
    }

    fn write_value_datetime(&self, out: &mut String, value: &PrimitiveDateTime) {
        match value.format(self.datetime_format()) {
            Ok(v) => out.push_str(&v),
            Err(e) => log::error!("Cannot write the timestamp {}: {:#}", value, e),
        }
    }

    /// Render a TIMESTAMPTZ literal, normalized to UTC.
    fn write_value_timestamptz(&self, out: &mut String, value: &OffsetDateTime) {
        let value = value.to_offset(UtcOffset::UTC);
        self.write_value_datetime(out, &PrimitiveDateTime::new(value.date(), value.time()));
    }
}

/// ANSI flavored writer, the defaults of [`SqlWriter`] with nothing overridden.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
