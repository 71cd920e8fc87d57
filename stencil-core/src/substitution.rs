use std::{borrow::Cow, collections::HashMap};

/// Symbolic rewrite table applied to identifiers before quoting.
///
/// An identifier written as `prefix:rest` whose `prefix` is registered becomes the
/// replacement followed by `rest`, which is handy for table prefixes:
///
/// ```rust
/// use stencil_core::Substitutions;
/// let mut substitutions = Substitutions::new();
/// substitutions.insert("blog", "wp_");
/// assert_eq!(substitutions.substitute("blog:posts"), "wp_posts");
/// assert_eq!(substitutions.substitute("posts"), "posts");
/// assert_eq!(substitutions.substitute("other:posts"), "other:posts");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Substitutions {
    table: HashMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the expansion of `name`.
    pub fn insert(&mut self, name: impl Into<String>, replacement: impl Into<String>) {
        self.table.insert(name.into(), replacement.into());
    }

    pub fn substitute<'a>(&self, identifier: &'a str) -> Cow<'a, str> {
        let Some((prefix, rest)) = identifier.split_once(':') else {
            return Cow::Borrowed(identifier);
        };
        match self.table.get(prefix) {
            Some(replacement) => Cow::Owned(format!("{replacement}{rest}")),
            None => Cow::Borrowed(identifier),
        }
    }
}
