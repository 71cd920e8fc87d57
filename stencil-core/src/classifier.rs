use crate::{Arg, Modifier};

/// Picks the form of a mapping argument given without modifier.
///
/// The leading command word of the statement decides: `INSERT` and `REPLACE` statements get
/// the VALUES form, everything else the SET form. The command is looked up once per
/// translation, at the first mapping that needs it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Classifier {
    form: Option<Modifier>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Implicit modifier of an unmarked mapping within `args`.
    pub fn implicit_modifier(&mut self, args: &[Arg]) -> Modifier {
        *self.form.get_or_insert_with(|| mapping_form(args))
    }
}

/// Uppercased first six characters of the statement, leading whitespace skipped.
pub fn command_word(sql: &str) -> String {
    sql.trim_start()
        .chars()
        .take(6)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn mapping_form(args: &[Arg]) -> Modifier {
    let command = match args.first() {
        Some(Arg::Sql(sql)) => command_word(sql),
        _ => String::new(),
    };
    match command.as_str() {
        "INSERT" | "REPLAC" => Modifier::Values,
        _ => Modifier::Set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    #[test]
    fn command_words() {
        assert_eq!(command_word("  insert into t"), "INSERT");
        assert_eq!(command_word("\nReplace INTO t"), "REPLAC");
        assert_eq!(command_word("DO"), "DO");
    }

    #[test]
    fn forms() {
        assert_eq!(mapping_form(&args!["INSERT INTO t"]), Modifier::Values);
        assert_eq!(mapping_form(&args![" replace into t"]), Modifier::Values);
        assert_eq!(mapping_form(&args!["UPDATE t SET "]), Modifier::Set);
        assert_eq!(mapping_form(&args!["SELECT 1"]), Modifier::Set);
        assert_eq!(mapping_form(&args![1, "INSERT"]), Modifier::Set);
        assert_eq!(mapping_form(&[]), Modifier::Set);
    }
}
