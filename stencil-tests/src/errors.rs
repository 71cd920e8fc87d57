use stencil::{Arg, Modifier, SqlWriter, TranslateError, TranslationFailed, Translator, args, map};
use time::macros::date;

pub fn errors<W: SqlWriter>(translator: &Translator<W>) {
    let compile = |args: &[Arg]| translator.compile(args);

    let result = compile(&args!["SELECT 'abc"]);
    assert_eq!(result.errors, [TranslateError::StraySymbol('\'')]);
    assert_eq!(result.sql, "SELECT **Stray quote '**abc");

    let result = compile(&args!["SELECT 1%end"]);
    assert_eq!(result.errors, [TranslateError::UnexpectedConditional("end")]);
    assert_eq!(result.sql, "SELECT 1**Unexpected condition %end**");
    let result = compile(&args!["SELECT 1%else 2"]);
    assert_eq!(result.errors, [TranslateError::UnexpectedConditional("else")]);

    let result = compile(&args!["SELECT %zz", 5]);
    assert_eq!(
        result.errors,
        [TranslateError::UnknownModifier("zz".into())]
    );
    assert_eq!(result.sql, "SELECT **Unknown modifier %zz**");

    let result = compile(&args!["SELECT %a", 5]);
    assert_eq!(
        result.errors,
        [TranslateError::DisallowedModifierContext {
            modifier: Modifier::Set,
            found: "integer",
        }]
    );
    assert_eq!(result.sql, "SELECT **The %a is not allowed on integer**");
    let result = compile(&args!["SELECT %v", vec![1]]);
    assert_eq!(
        result.errors,
        [TranslateError::DisallowedModifierContext {
            modifier: Modifier::Values,
            found: "list",
        }]
    );
    let result = compile(&args!["UPDATE t SET ", map! { "x%if" => 1 }]);
    assert_eq!(
        result.errors,
        [TranslateError::DisallowedModifierContext {
            modifier: Modifier::If,
            found: "integer",
        }]
    );
    let result = compile(&args!["UPDATE t SET ", map! { "x%zz" => 1 }]);
    assert_eq!(
        result.errors,
        [TranslateError::UnknownModifier("zz".into())]
    );

    let result = compile(&args!["SELECT %i", date!(2024 - 01 - 01)]);
    assert_eq!(
        result.errors,
        [TranslateError::UnsupportedValueType {
            modifier: Modifier::Integer,
            found: "date",
        }]
    );
    let result = compile(&args!["SELECT %d", "yesterday"]);
    assert_eq!(
        result.errors,
        [TranslateError::UnsupportedValueType {
            modifier: Modifier::Date,
            found: "string",
        }]
    );

    // Translation goes on after an error
    let result = compile(&args!["SELECT %zz", 1, ", 'x", " FROM t"]);
    assert_eq!(result.errors.len(), 2);
    assert!(result.sql.ends_with("x FROM t"), "{}", result.sql);

    // Raised as an error carrying the partial SQL
    let error = translator
        .translate(&args!["SELECT %zz", 1])
        .expect_err("Should fail");
    let failed = error
        .downcast_ref::<TranslationFailed>()
        .expect("Should be a TranslationFailed");
    assert_eq!(failed.sql, "SELECT **Unknown modifier %zz**");
    assert_eq!(failed.errors.len(), 1);
}
