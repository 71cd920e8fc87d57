use crate::{boolean, ident, string};
use stencil::{Arg, SqlWriter, Translator, Value, args};

pub fn plain<W: SqlWriter>(translator: &Translator<W>) {
    let translate = |args: &[Arg]| translator.translate(args).expect("Failed to translate");

    // Nothing to act on, returned byte identical
    let sql = "SELECT a, b FROM t WHERE a > 1 -- comment\n";
    assert_eq!(translate(&args![sql]), sql);
    assert_eq!(translate(&args!["SELECT 5 % 3"]), "SELECT 5 % 3");

    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE id = ", 5]),
        "SELECT * FROM t WHERE id = 5"
    );
    assert_eq!(
        translate(&args!["SELECT ", 1.5, ", ", 1e-7, ", ", 1e20, ", ", -3]),
        "SELECT 1.5, 1e-7, 1e20, -3"
    );
    assert_eq!(
        translate(&args!["SELECT ", true, ", ", false, ", ", Value::Null]),
        format!(
            "SELECT {}, {}, NULL",
            boolean(translator, true),
            boolean(translator, false)
        )
    );
    assert_eq!(
        translate(&args!["SELECT ", Value::from("it's")]),
        format!("SELECT {}", string(translator, "it's"))
    );

    #[cfg(not(feature = "disable-infinity"))]
    {
        let mut expected = String::from("SELECT ");
        translator.writer().write_value_infinity(&mut expected, true);
        assert_ne!(expected, "SELECT NULL");
        assert_eq!(translate(&args!["SELECT ", f64::NEG_INFINITY]), expected);
    }

    // Quoted literals are unescaped then escaped again by the dialect
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE name = 'O''Brien'"]),
        format!("SELECT * FROM t WHERE name = {}", string(translator, "O'Brien"))
    );
    assert_eq!(
        translate(&args![r#"SELECT "say ""hi""""#]),
        format!("SELECT {}", string(translator, r#"say "hi""#))
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE a LIKE 'x%'"]),
        format!("SELECT * FROM t WHERE a LIKE {}", string(translator, "x%"))
    );

    // Identifiers
    assert_eq!(
        translate(&args!["SELECT `a`, [b] FROM [s.t]"]),
        format!(
            "SELECT {}, {} FROM {}",
            ident(translator, "a"),
            ident(translator, "b"),
            ident(translator, "s.t")
        )
    );
    // Empty brackets are not identifiers
    assert_eq!(translate(&args!["SELECT ARRAY[]"]), "SELECT ARRAY[]");

    // Trailing modifier applies to the next argument
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE name = %s", "Bob"]),
        format!("SELECT * FROM t WHERE name = {}", string(translator, "Bob"))
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE id IN (%i", vec![1, 2, 3], ")"]),
        "SELECT * FROM t WHERE id IN (1, 2, 3)"
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE id IN (", vec![4, 5], ")"]),
        "SELECT * FROM t WHERE id IN (4, 5)"
    );
    // Only the next argument
    assert_eq!(
        translate(&args!["SELECT %s", "a", ", ", "'b'"]),
        format!(
            "SELECT {}, {}",
            string(translator, "a"),
            string(translator, "b")
        )
    );
}
