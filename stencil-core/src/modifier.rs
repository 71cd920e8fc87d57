use crate::TranslateError;
use std::{fmt, str::FromStr};

/// Directive token selecting the SQL rendering rule of the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `%s` escaped string.
    String,
    /// `%sn` escaped string, `NULL` when empty.
    StringOrNull,
    /// `%b` boolean literal.
    Boolean,
    /// `%i` signed integer.
    Integer,
    /// `%u` unsigned integer (documentation only, the sign is kept).
    Unsigned,
    /// `%f` float.
    Float,
    /// `%d` date.
    Date,
    /// `%t` date and time.
    DateTime,
    /// `%n` identifier.
    Identifier,
    /// `%sql` (or `%p`) raw SQL, scanned again for directives.
    Sql,
    /// `%a` assignment list (`a = 1, b = 2`).
    Set,
    /// `%v` insert form (`(a, b) VALUES (1, 2)`).
    Values,
    /// `%if` conditional block opener.
    If,
}

impl Modifier {
    pub fn token(&self) -> &'static str {
        match self {
            Modifier::String => "s",
            Modifier::StringOrNull => "sn",
            Modifier::Boolean => "b",
            Modifier::Integer => "i",
            Modifier::Unsigned => "u",
            Modifier::Float => "f",
            Modifier::Date => "d",
            Modifier::DateTime => "t",
            Modifier::Identifier => "n",
            Modifier::Sql => "sql",
            Modifier::Set => "a",
            Modifier::Values => "v",
            Modifier::If => "if",
        }
    }
}

impl FromStr for Modifier {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "s" => Modifier::String,
            "sn" => Modifier::StringOrNull,
            "b" => Modifier::Boolean,
            "i" => Modifier::Integer,
            "u" => Modifier::Unsigned,
            "f" => Modifier::Float,
            "d" => Modifier::Date,
            "t" => Modifier::DateTime,
            "n" => Modifier::Identifier,
            "sql" | "p" => Modifier::Sql,
            "a" => Modifier::Set,
            "v" => Modifier::Values,
            "if" => Modifier::If,
            _ => return Err(TranslateError::UnknownModifier(s.to_owned())),
        })
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.token())
    }
}

/// Split a mapping key on its first `%` into the identifier and the inline modifier.
///
/// ```rust
/// use stencil_core::split_key;
/// assert_eq!(split_key("name%s"), ("name", Some("s")));
/// assert_eq!(split_key("name"), ("name", None));
/// ```
pub fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('%') {
        Some((identifier, modifier)) => (identifier, Some(modifier)),
        None => (key, None),
    }
}
