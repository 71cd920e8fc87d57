use crate::{
    Arg, Modifier, Scanner, SqlWriter, Substitutions, Token, TranslateError, TranslationState,
    Value, is_truthy_text, parse_float_prefix, parse_integer_prefix, parse_timestamp,
    separated_by, timestamp_from_epoch,
};
use rust_decimal::prelude::ToPrimitive;
use time::{OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Turns arguments into SQL text according to the active modifier.
///
/// The formatter itself is stateless, everything that changes while translating lives in the
/// [`TranslationState`] it receives.
#[derive(Clone, Copy)]
pub struct Formatter<'t> {
    writer: &'t dyn SqlWriter,
    substitutions: &'t Substitutions,
}

impl<'t> Formatter<'t> {
    pub fn new(writer: &'t dyn SqlWriter, substitutions: &'t Substitutions) -> Self {
        Self {
            writer,
            substitutions,
        }
    }

    /// Substitute then quote an identifier.
    pub fn write_identifier(&self, out: &mut String, name: &str) {
        self.writer
            .write_identifier_quoted(out, &self.substitutions.substitute(name));
    }

    /// Scan raw SQL text, copying it while acting on quoted literals, identifiers and
    /// directives.
    pub fn write_sql(&self, state: &mut TranslationState, out: &mut String, sql: &str) {
        if !Scanner::needs_scan(sql) {
            if !state.conditional.is_suppressing() {
                out.push_str(sql);
            }
            return;
        }
        for token in Scanner::new(sql) {
            match token {
                Token::Conditional(v) => {
                    if let Err(e) = state.conditional.handle(v) {
                        state.report(out, e);
                    }
                }
                Token::Modifier(v) => state.pending = Some(v.parse()),
                _ if state.conditional.is_suppressing() => {}
                Token::Text(v) => out.push_str(v),
                Token::Identifier(v) => self.write_identifier(out, v),
                Token::Quoted { quote, body } => {
                    let unescaped = match quote {
                        '\'' => body.replace("''", "'"),
                        _ => body.replace("\"\"", "\""),
                    };
                    self.writer.write_value_string(out, &unescaped);
                }
                Token::StrayQuote(v) => state.report(out, TranslateError::StraySymbol(v)),
            }
        }
    }

    /// Format a whole argument, lists and mappings included.
    pub fn write_arg(
        &self,
        state: &mut TranslationState,
        out: &mut String,
        arg: &Arg,
        modifier: Option<Modifier>,
    ) {
        match arg {
            Arg::Sql(v) => match modifier {
                None | Some(Modifier::Sql) => self.write_sql(state, out, v),
                Some(modifier) => self.write_text(state, out, v, modifier),
            },
            Arg::Value(v) => self.write_value(state, out, v, modifier),
            Arg::List(values) => match modifier {
                Some(modifier @ (Modifier::Set | Modifier::Values)) => state.report(
                    out,
                    TranslateError::DisallowedModifierContext {
                        modifier,
                        found: arg.type_name(),
                    },
                ),
                _ => separated_by(
                    out,
                    values,
                    |out, v| self.write_value(state, out, v, modifier),
                    ", ",
                ),
            },
            Arg::Map(entries) => match modifier {
                Some(Modifier::Set) => separated_by(
                    out,
                    entries,
                    |out, (key, value)| {
                        let (identifier, inline) = split_key(key);
                        self.write_identifier(out, identifier);
                        out.push_str(" = ");
                        self.write_keyed(state, out, value, inline);
                    },
                    ", ",
                ),
                Some(Modifier::Values) => {
                    out.push('(');
                    separated_by(
                        out,
                        entries,
                        |out, (key, _)| self.write_identifier(out, split_key(key).0),
                        ", ",
                    );
                    out.push_str(") VALUES (");
                    separated_by(
                        out,
                        entries,
                        |out, (key, value)| self.write_keyed(state, out, value, split_key(key).1),
                        ", ",
                    );
                    out.push(')');
                }
                _ => separated_by(
                    out,
                    entries,
                    |out, (_, v)| self.write_value(state, out, v, modifier),
                    ", ",
                ),
            },
        }
    }

    /// Format a mapping value with the modifier written inline in its key.
    fn write_keyed(
        &self,
        state: &mut TranslationState,
        out: &mut String,
        value: &Value,
        inline: Option<&str>,
    ) {
        match inline.map(str::parse::<Modifier>).transpose() {
            Ok(modifier) => self.write_value(state, out, value, modifier),
            Err(e) => state.report(out, e),
        }
    }

    /// Format a single value.
    pub fn write_value(
        &self,
        state: &mut TranslationState,
        out: &mut String,
        value: &Value,
        modifier: Option<Modifier>,
    ) {
        let Some(modifier) = modifier else {
            return self.writer.write_value(out, value);
        };
        match (modifier, value) {
            (Modifier::Set | Modifier::Values | Modifier::If, _) => state.report(
                out,
                TranslateError::DisallowedModifierContext {
                    modifier,
                    found: value.type_name(),
                },
            ),
            (_, Value::Null) => self.writer.write_value_none(out),
            (_, Value::Expression(v)) => v.write_sql(self.writer, out, Some(&modifier)),
            (_, Value::Varchar(v)) => self.write_text(state, out, v, modifier),
            (_, Value::Blob(v)) => self.write_text(state, out, &String::from_utf8_lossy(v), modifier),
            (Modifier::Boolean, _) => self.writer.write_value_bool(out, value.is_truthy()),
            (Modifier::Integer | Modifier::Unsigned, _) => match value {
                Value::Boolean(v) => write_integer!(out, *v as i64),
                Value::Int64(v) => write_integer!(out, *v),
                Value::UInt64(v) => write_integer!(out, *v),
                Value::Float64(v) => write_integer!(out, v.trunc() as i64),
                Value::Decimal(v) => match v.trunc().to_i64() {
                    Some(v) => write_integer!(out, v),
                    None => out.push_str(&v.trunc().to_string()),
                },
                _ => self.unsupported(state, out, modifier, value),
            },
            (Modifier::Float, _) => match value {
                Value::Boolean(v) => self.writer.write_value_float(out, *v as i64 as f64),
                Value::Int64(v) => self.writer.write_value_float(out, *v as f64),
                Value::UInt64(v) => self.writer.write_value_float(out, *v as f64),
                Value::Float64(v) => self.writer.write_value_float(out, *v),
                Value::Decimal(v) => self
                    .writer
                    .write_value_float(out, v.to_f64().unwrap_or_default()),
                _ => self.unsupported(state, out, modifier, value),
            },
            (Modifier::Date | Modifier::DateTime, _) => {
                let timestamp = match value {
                    Value::Date(v) => Some(PrimitiveDateTime::new(*v, Time::MIDNIGHT).assume_utc()),
                    Value::Timestamp(v) => Some(v.assume_utc()),
                    Value::TimestampWithTimezone(v) => Some(*v),
                    Value::Int64(v) => timestamp_from_epoch(*v as f64).ok(),
                    Value::UInt64(v) => timestamp_from_epoch(*v as f64).ok(),
                    Value::Float64(v) => timestamp_from_epoch(*v).ok(),
                    _ => None,
                };
                match timestamp {
                    Some(v) => self.write_timestamp(out, v, modifier),
                    None => self.unsupported(state, out, modifier, value),
                }
            }
            _ => match value.to_text() {
                Some(text) => self.write_text(state, out, &text, modifier),
                None => self.unsupported(state, out, modifier, value),
            },
        }
    }

    /// Format text under a modifier, strings are coerced the lenient way.
    pub fn write_text(
        &self,
        state: &mut TranslationState,
        out: &mut String,
        text: &str,
        modifier: Modifier,
    ) {
        match modifier {
            Modifier::String => self.writer.write_value_string(out, text),
            Modifier::StringOrNull if text.is_empty() => self.writer.write_value_none(out),
            Modifier::StringOrNull => self.writer.write_value_string(out, text),
            Modifier::Boolean => self.writer.write_value_bool(out, is_truthy_text(text)),
            Modifier::Integer | Modifier::Unsigned => {
                write_integer!(out, parse_integer_prefix(text))
            }
            Modifier::Float => self.writer.write_value_float(out, parse_float_prefix(text)),
            Modifier::Date | Modifier::DateTime => match parse_timestamp(text) {
                Ok(v) => self.write_timestamp(out, v, modifier),
                Err(e) => {
                    log::debug!("{:#}", e);
                    state.report(
                        out,
                        TranslateError::UnsupportedValueType {
                            modifier,
                            found: "string",
                        },
                    )
                }
            },
            Modifier::Identifier => self.write_identifier(out, text),
            Modifier::Sql => self.write_sql(state, out, text),
            Modifier::Set | Modifier::Values | Modifier::If => state.report(
                out,
                TranslateError::DisallowedModifierContext {
                    modifier,
                    found: "string",
                },
            ),
        }
    }

    fn write_timestamp(&self, out: &mut String, value: OffsetDateTime, modifier: Modifier) {
        let value = value.to_offset(UtcOffset::UTC);
        if modifier == Modifier::Date {
            self.writer.write_value_date(out, &value.date());
        } else {
            self.writer
                .write_value_datetime(out, &PrimitiveDateTime::new(value.date(), value.time()));
        }
    }

    fn unsupported(
        &self,
        state: &mut TranslationState,
        out: &mut String,
        modifier: Modifier,
        value: &Value,
    ) {
        state.report(
            out,
            TranslateError::UnsupportedValueType {
                modifier,
                found: value.type_name(),
            },
        );
    }
}

/// Mapping key split on its first `%`, an empty inline modifier counts as none.
fn split_key(key: &str) -> (&str, Option<&str>) {
    let (identifier, modifier) = crate::split_key(key);
    (identifier, modifier.filter(|v| !v.is_empty()))
}
