pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut first = true;
    for v in values {
        if !first {
            out.push_str(separator);
        }
        first = false;
        f(out, v);
    }
}

/// SQL produced by one argument.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub sql: String,
    /// The fragment ends inside a suppressed `%if` branch.
    pub suppressed_after: bool,
}

/// Concatenate the fragments, separators falling inside a suppressed branch are dropped.
pub fn join_fragments(fragments: &[Fragment], separator: &str) -> String {
    let mut result = String::with_capacity(
        fragments
            .iter()
            .map(|v| v.sql.len() + separator.len())
            .sum(),
    );
    let mut fragments = fragments.iter().peekable();
    while let Some(fragment) = fragments.next() {
        result.push_str(&fragment.sql);
        if !fragment.suppressed_after && fragments.peek().is_some() {
            result.push_str(separator);
        }
    }
    result
}

/// Longest prefix of `value` not exceeding `max` bytes that ends on a char boundary.
pub fn truncate_at(value: &str, max: usize) -> &str {
    let mut end = value.len().min(max);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            $crate::truncate_at(&$query, 497).trim_end(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}
