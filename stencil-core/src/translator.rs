use crate::{
    Arg, Classifier, ConditionalState, Formatter, Fragment, Modifier, Result, SqlWriter,
    Substitutions, TranslateError, TranslationFailed, join_fragments, truncate_long,
};
use std::borrow::Cow;

/// What to do when a translation reports errors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return a [`TranslationFailed`] error carrying the best effort SQL.
    #[default]
    Raise,
    /// Log a warning and return an empty string.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    pub error_policy: ErrorPolicy,
    /// Inserted between the output of two consecutive arguments.
    pub join_separator: Cow<'static, str>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Raise,
            join_separator: Cow::Borrowed(""),
        }
    }
}

impl TranslatorConfig {
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn with_join_separator(mut self, join_separator: impl Into<Cow<'static, str>>) -> Self {
        self.join_separator = join_separator.into();
        self
    }
}

/// Mutable state of a single translation, never shared between calls.
#[derive(Debug, Default)]
pub struct TranslationState {
    pub conditional: ConditionalState,
    /// Modifier found at the end of the last scanned text, it applies to the next argument.
    pub pending: Option<std::result::Result<Modifier, TranslateError>>,
    pub classifier: Classifier,
    errors: Vec<TranslateError>,
}

impl TranslationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error and inline its diagnostic marker.
    pub fn report(&mut self, out: &mut String, error: TranslateError) {
        error.placeholder(out);
        self.errors.push(error);
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[TranslateError] {
        &self.errors
    }
}

/// Outcome of [`Translator::compile`]: the SQL produced and every error met on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub sql: String,
    pub errors: Vec<TranslateError>,
}

impl Translation {
    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<String> {
        if self.has_error() {
            return Err(TranslationFailed {
                sql: self.sql,
                errors: self.errors,
            }
            .into());
        }
        Ok(self.sql)
    }
}

/// Compiles argument lists into SQL for one dialect.
///
/// The translator is immutable while translating, each call owns its own
/// [`TranslationState`] so a translator can be shared between threads.
///
/// ```rust
/// use stencil_core::{GenericSqlWriter, Translator, args, map};
/// let translator = Translator::new(GenericSqlWriter::new());
/// let sql = translator
///     .translate(&args!["UPDATE t SET ", map! { "x%i" => 1, "y%i" => 2 }, " WHERE id=", 5])
///     .unwrap();
/// assert_eq!(sql, r#"UPDATE t SET "x" = 1, "y" = 2 WHERE id=5"#);
/// ```
#[derive(Debug, Clone)]
pub struct Translator<W: SqlWriter> {
    writer: W,
    substitutions: Substitutions,
    config: TranslatorConfig,
}

impl<W: SqlWriter> Translator<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, Default::default())
    }

    pub fn with_config(writer: W, config: TranslatorConfig) -> Self {
        Self {
            writer,
            substitutions: Default::default(),
            config,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TranslatorConfig {
        &mut self.config
    }

    pub fn substitutions(&self) -> &Substitutions {
        &self.substitutions
    }

    /// Register an identifier substitution, `name:rest` will be written as `replacement` + `rest`.
    pub fn substitute(
        &mut self,
        name: impl Into<String>,
        replacement: impl Into<String>,
    ) -> &mut Self {
        self.substitutions.insert(name, replacement);
        self
    }

    pub fn formatter(&self) -> Formatter<'_> {
        Formatter::new(self.writer.as_dyn(), &self.substitutions)
    }

    /// Compile the arguments, always producing some SQL even when errors are found.
    pub fn compile(&self, args: &[Arg]) -> Translation {
        let formatter = self.formatter();
        let mut state = TranslationState::new();
        let mut fragments = Vec::with_capacity(args.len());
        for arg in args {
            let mut sql = String::new();
            let modifier = match state.pending.take() {
                None => None,
                Some(Ok(Modifier::If)) => {
                    let suppressing = state.conditional.is_suppressing();
                    state.conditional.open(arg.is_truthy());
                    if !suppressing && state.conditional.is_suppressing() {
                        fragments.push(Fragment {
                            sql,
                            suppressed_after: true,
                        });
                    }
                    continue;
                }
                Some(Ok(v)) => Some(v),
                Some(Err(e)) => {
                    if !state.conditional.is_suppressing() {
                        state.report(&mut sql, e);
                        fragments.push(Fragment {
                            sql,
                            suppressed_after: false,
                        });
                    }
                    continue;
                }
            };
            match (arg, modifier) {
                // Text is always scanned, it may close the suppressed block
                (Arg::Sql(text), None | Some(Modifier::Sql)) => {
                    formatter.write_sql(&mut state, &mut sql, text)
                }
                _ if state.conditional.is_suppressing() => continue,
                (Arg::Map(..), None) => {
                    let modifier = state.classifier.implicit_modifier(args);
                    formatter.write_arg(&mut state, &mut sql, arg, Some(modifier));
                    state.pending = None;
                }
                _ => {
                    formatter.write_arg(&mut state, &mut sql, arg, modifier);
                    // Only raw text hands a trailing modifier to the next argument
                    state.pending = None;
                }
            }
            fragments.push(Fragment {
                sql,
                suppressed_after: state.conditional.is_suppressing(),
            });
        }
        if state.conditional.finish() {
            log::debug!("Unterminated %if closed at the end of the query");
        }
        Translation {
            sql: join_fragments(&fragments, &self.config.join_separator),
            errors: state.errors,
        }
    }

    /// Compile the arguments and apply the configured [`ErrorPolicy`].
    pub fn translate(&self, args: &[Arg]) -> Result<String> {
        let translation = self.compile(args);
        if !translation.has_error() {
            log::trace!("{}", truncate_long!(translation.sql));
            return Ok(translation.sql);
        }
        match self.config.error_policy {
            ErrorPolicy::Raise => {
                log::error!("SQL generate error\n-- SQL: {}", truncate_long!(translation.sql));
                translation.into_result()
            }
            ErrorPolicy::Empty => {
                log::warn!("SQL generate error: {}", truncate_long!(translation.sql));
                Ok(String::new())
            }
        }
    }
}
