use crate::Modifier;

/// Problem found while compiling one argument list.
///
/// None of these stop the translation: the error is recorded and its message is inlined in
/// the produced SQL (see [`TranslateError::placeholder`]) so that one coherent diagnostic
/// string comes out of every call.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// Quote without its closing counterpart.
    #[error("Stray quote {0}")]
    StraySymbol(char),
    /// `%else` or `%end` with no `%if` open.
    #[error("Unexpected condition %{0}")]
    UnexpectedConditional(&'static str),
    /// Modifier used on a value of the wrong shape, or `%if` in value position.
    #[error("The {modifier} is not allowed on {found}")]
    DisallowedModifierContext {
        modifier: Modifier,
        found: &'static str,
    },
    #[error("Unknown modifier %{0}")]
    UnknownModifier(String),
    /// The active modifier cannot coerce this kind of value.
    #[error("Unexpected {found} for {modifier}")]
    UnsupportedValueType {
        modifier: Modifier,
        found: &'static str,
    },
}

impl TranslateError {
    /// Write the inline diagnostic marker for this error.
    pub fn placeholder(&self, out: &mut String) {
        out.push_str("**");
        out.push_str(&self.to_string());
        out.push_str("**");
    }
}

/// Translation that produced at least one error.
///
/// Carries the best effort SQL, with the diagnostic markers inlined, to help locating the
/// problem.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("SQL generate error: {sql}")]
pub struct TranslationFailed {
    pub sql: String,
    pub errors: Vec<TranslateError>,
}
