use crate::{Modifier, SqlWriter};
use rust_decimal::Decimal;
use std::{borrow::Cow, fmt::Debug, sync::Arc};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, macros::format_description};
use uuid::Uuid;

/// Opaque SQL expression that renders itself.
///
/// This is the single extension point of [`Value`]: anything the translator does not know
/// how to format (function calls, dialect specific literals, pre-rendered fragments) can be
/// wrapped in [`Value::Expression`] and will be written as is, whatever modifier is active.
///
/// ```rust
/// use stencil_core::{Modifier, SqlExpression, SqlWriter};
///
/// #[derive(Debug)]
/// struct Now;
///
/// impl SqlExpression for Now {
///     fn write_sql(&self, _writer: &dyn SqlWriter, out: &mut String, _modifier: Option<&Modifier>) {
///         out.push_str("CURRENT_TIMESTAMP");
///     }
/// }
/// ```
pub trait SqlExpression: Debug + Send + Sync {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String, modifier: Option<&Modifier>);
}

/// Raw SQL passed through unchanged when used as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(pub String);

impl SqlExpression for Raw {
    fn write_sql(&self, _writer: &dyn SqlWriter, out: &mut String, _modifier: Option<&Modifier>) {
        out.push_str(&self.0);
    }
}

#[derive(Default, Debug, Clone)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    TimestampWithTimezone(OffsetDateTime),
    Uuid(Uuid),
    Expression(Arc<dyn SqlExpression>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(l), Self::Boolean(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::UInt64(l), Self::UInt64(r)) => l == r,
            (Self::Float64(l), Self::Float64(r)) => l == r,
            (Self::Decimal(l), Self::Decimal(r)) => l == r,
            (Self::Varchar(l), Self::Varchar(r)) => l == r,
            (Self::Blob(l), Self::Blob(r)) => l == r,
            (Self::Date(l), Self::Date(r)) => l == r,
            (Self::Time(l), Self::Time(r)) => l == r,
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            (Self::TimestampWithTimezone(l), Self::TimestampWithTimezone(r)) => l == r,
            (Self::Uuid(l), Self::Uuid(r)) => l == r,
            (Self::Expression(l), Self::Expression(r)) => Arc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl Value {
    /// Truth value used by `%if` and by the `b` modifier.
    ///
    /// Null, false, zero, the empty string, the string `"0"` and empty blobs are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(v) => *v,
            Value::Int64(v) => *v != 0,
            Value::UInt64(v) => *v != 0,
            Value::Float64(v) => *v != 0.0,
            Value::Decimal(v) => !v.is_zero(),
            Value::Varchar(v) => is_truthy_text(v),
            Value::Blob(v) => !v.is_empty(),
            Value::Date(..)
            | Value::Time(..)
            | Value::Timestamp(..)
            | Value::TimestampWithTimezone(..)
            | Value::Uuid(..)
            | Value::Expression(..) => true,
        }
    }

    /// Name of the variant as it appears in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(..) => "boolean",
            Value::Int64(..) | Value::UInt64(..) => "integer",
            Value::Float64(..) => "float",
            Value::Decimal(..) => "decimal",
            Value::Varchar(..) => "string",
            Value::Blob(..) => "blob",
            Value::Date(..) => "date",
            Value::Time(..) => "time",
            Value::Timestamp(..) => "timestamp",
            Value::TimestampWithTimezone(..) => "timestamp with time zone",
            Value::Uuid(..) => "uuid",
            Value::Expression(..) => "expression",
        }
    }

    /// Textual form of the value, the one escaped by the `s` and `sn` modifiers.
    ///
    /// `true` is `"1"` and `false` the empty string, integral floats have no fraction
    /// (`1.0` is `"1"`).
    ///
    /// Returns `None` for expressions, they can only render themselves.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        Some(match self {
            Value::Null => Cow::Borrowed(""),
            Value::Boolean(v) => Cow::Borrowed(if *v { "1" } else { "" }),
            Value::Int64(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Value::UInt64(v) => Cow::Owned(itoa::Buffer::new().format(*v).to_owned()),
            Value::Float64(v) => {
                let mut buffer = ryu::Buffer::new();
                let text = buffer.format(*v);
                // Integral floats read as integers
                Cow::Owned(text.strip_suffix(".0").unwrap_or(text).to_owned())
            }
            Value::Decimal(v) => Cow::Owned(v.to_string()),
            Value::Varchar(v) => Cow::Borrowed(v.as_str()),
            Value::Blob(v) => String::from_utf8_lossy(v),
            Value::Date(v) => Cow::Owned(v.format(format_description!("[year]-[month]-[day]")).ok()?),
            Value::Time(v) => Cow::Owned(v.format(format_description!("[hour]:[minute]:[second]")).ok()?),
            Value::Timestamp(v) => Cow::Owned(
                v.format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second]"
                ))
                .ok()?,
            ),
            Value::TimestampWithTimezone(v) => Cow::Owned(
                v.format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
                ))
                .ok()?,
            ),
            Value::Uuid(v) => Cow::Owned(v.to_string()),
            Value::Expression(..) => return None,
        })
    }
}

/// Truth value of a piece of text: only the empty string and `"0"` are falsy.
pub fn is_truthy_text(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

macro_rules! impl_from_value {
    ($variant:ident, $target:ty, $($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )+
    };
}
impl_from_value!(Int64, i64, i8, i16, i32, i64, isize);
impl_from_value!(UInt64, u64, u8, u16, u32, u64, usize);
impl_from_value!(Float64, f64, f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Varchar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(value.to_owned())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Varchar(value.into_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.into())
    }
}

impl From<Box<[u8]>> for Value {
    fn from(value: Box<[u8]>) -> Self {
        Value::Blob(value)
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Value::Date(value)
    }
}

impl From<Time> for Value {
    fn from(value: Time) -> Self {
        Value::Time(value)
    }
}

impl From<PrimitiveDateTime> for Value {
    fn from(value: PrimitiveDateTime) -> Self {
        Value::Timestamp(value)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Value::TimestampWithTimezone(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<Raw> for Value {
    fn from(value: Raw) -> Self {
        Value::Expression(Arc::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
