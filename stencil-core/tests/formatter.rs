#[cfg(test)]
mod tests {
    use stencil_core::{
        Formatter, GenericSqlWriter, Modifier, Substitutions, TranslateError, TranslationState,
        Value,
    };
    use time::macros::datetime;

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn format(value: impl Into<Value>, modifier: Option<Modifier>) -> (String, TranslationState) {
        let substitutions = Substitutions::new();
        let formatter = Formatter::new(&WRITER, &substitutions);
        let mut state = TranslationState::new();
        let mut out = String::new();
        formatter.write_value(&mut state, &mut out, &value.into(), modifier);
        (out, state)
    }

    #[test]
    fn default_formatting() {
        assert_eq!(format(1, None).0, "1");
        assert_eq!(format("a'b", None).0, "'a''b'");
        assert_eq!(format(true, None).0, "TRUE");
        assert_eq!(format(None::<i32>, None).0, "NULL");
        assert_eq!(
            format(datetime!(2024-01-02 03:04:05), None).0,
            "'2024-01-02 03:04:05'"
        );
        assert_eq!(
            format(datetime!(2024-01-02 03:04:05 -2), None).0,
            "'2024-01-02 05:04:05'"
        );
    }

    #[test]
    fn coercions() {
        assert_eq!(format("  42 apples", Some(Modifier::Integer)).0, "42");
        assert_eq!(format("1e3", Some(Modifier::Integer)).0, "1000");
        assert_eq!(format("99999999999999999999", Some(Modifier::Integer)).0, "9223372036854775807");
        assert_eq!(format("-0.5 m", Some(Modifier::Float)).0, "-0.5");
        assert_eq!(format("", Some(Modifier::Boolean)).0, "FALSE");
        assert_eq!(format(false, Some(Modifier::String)).0, "''");
        assert_eq!(format(true, Some(Modifier::String)).0, "'1'");
        assert_eq!(format(false, Some(Modifier::StringOrNull)).0, "NULL");
        assert_eq!(format(1.0, Some(Modifier::String)).0, "'1'");
        assert_eq!(format(-20.0, Some(Modifier::StringOrNull)).0, "'-20'");
        assert_eq!(format(1.25, Some(Modifier::StringOrNull)).0, "'1.25'");
        assert_eq!(format(None::<i32>, Some(Modifier::Float)).0, "NULL");
        assert_eq!(format(86400.5, Some(Modifier::DateTime)).0, "'1970-01-02 00:00:00'");
        assert_eq!(format(86400, Some(Modifier::Date)).0, "'1970-01-02'");
    }

    #[test]
    fn disallowed_and_unsupported() {
        let (out, state) = format(1, Some(Modifier::Values));
        assert_eq!(out, "**The %v is not allowed on integer**");
        assert!(state.has_error());
        let (out, state) = format(None::<i32>, Some(Modifier::If));
        assert_eq!(out, "**The %if is not allowed on null**");
        assert_eq!(
            state.errors(),
            [TranslateError::DisallowedModifierContext {
                modifier: Modifier::If,
                found: "null",
            }]
        );
        let (out, _) = format(datetime!(2024-01-02 03:04:05), Some(Modifier::Float));
        assert_eq!(out, "**Unexpected timestamp for %f**");
    }

    #[test]
    fn identifiers_are_substituted() {
        let mut substitutions = Substitutions::new();
        substitutions.insert("app", "prod_");
        let formatter = Formatter::new(&WRITER, &substitutions);
        let mut out = String::new();
        formatter.write_identifier(&mut out, "app:users.*");
        assert_eq!(out, r#""prod_users".*"#);
        let mut out = String::new();
        formatter.write_identifier(&mut out, r#"we"ird"#);
        assert_eq!(out, r#""we""ird""#);
    }
}
