use crate::{Raw, Value, is_truthy_text};
use rust_decimal::Decimal;
use std::borrow::Cow;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// One element of the argument list handed to the translator.
///
/// Plain strings are SQL text: they are scanned for directives and copied to the output.
/// Typed values are formatted according to the modifier preceding them.
///
/// ```rust
/// use stencil_core::{Arg, Value};
/// assert!(matches!(Arg::from("SELECT 1"), Arg::Sql(..)));
/// assert!(matches!(Arg::from(1), Arg::Value(Value::Int64(1))));
/// assert!(matches!(Arg::from(Value::from("Bob")), Arg::Value(Value::Varchar(..))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Sql(String),
    Value(Value),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Arg {
    pub fn is_truthy(&self) -> bool {
        match self {
            Arg::Sql(v) => is_truthy_text(v),
            Arg::Value(v) => v.is_truthy(),
            Arg::List(v) => !v.is_empty(),
            Arg::Map(v) => !v.is_empty(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Sql(..) => "string",
            Arg::Value(v) => v.type_name(),
            Arg::List(..) => "list",
            Arg::Map(..) => "map",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Sql(value.to_owned())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Sql(value)
    }
}

impl From<Cow<'_, str>> for Arg {
    fn from(value: Cow<'_, str>) -> Self {
        Arg::Sql(value.into_owned())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

macro_rules! impl_from_arg {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for Arg {
                fn from(value: $source) -> Self {
                    Arg::Value(value.into())
                }
            }
        )+
    };
}
impl_from_arg!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Decimal,
    &[u8],
    Box<[u8]>,
    Date,
    Time,
    PrimitiveDateTime,
    OffsetDateTime,
    Uuid,
    Raw,
);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg::Value(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(value: Vec<T>) -> Self {
        Arg::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arg {
    fn from(value: [T; N]) -> Self {
        Arg::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arg {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Arg::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Build an argument list, converting every element with `Arg::from`.
///
/// ```rust
/// use stencil_core::{Arg, args};
/// let args = args!["SELECT * FROM t WHERE id = ", 5];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),*]
    };
}

/// Build an ordered mapping argument, keys may carry an inline modifier (`"age%i"`).
///
/// ```rust
/// use stencil_core::{Arg, map};
/// let arg = map! { "name%s" => "Bob", "age%i" => 30 };
/// assert!(matches!(arg, Arg::Map(ref v) if v.len() == 2));
/// ```
#[macro_export]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Arg::Map(::std::vec![
            $((::std::string::String::from($key), $crate::Value::from($value))),*
        ])
    };
}
