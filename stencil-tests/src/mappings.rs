use crate::{ident, string};
use stencil::{Arg, SqlWriter, Translator, Value, args, map};

pub fn mappings<W: SqlWriter>(translator: &Translator<W>) {
    let translate = |args: &[Arg]| translator.translate(args).expect("Failed to translate");

    // Assignment list, guessed from the leading command
    assert_eq!(
        translate(&args![
            "UPDATE t SET ",
            map! { "x%i" => 1, "y%i" => "2" },
            " WHERE id=",
            5
        ]),
        format!(
            "UPDATE t SET {} = 1, {} = 2 WHERE id=5",
            ident(translator, "x"),
            ident(translator, "y")
        )
    );

    // Insert form
    let expected = format!(
        "({}, {}) VALUES ({}, 30)",
        ident(translator, "name"),
        ident(translator, "age"),
        string(translator, "Bob"),
    );
    assert_eq!(
        translate(&args![
            "INSERT INTO t ",
            map! { "name%s" => "Bob", "age%i" => 30 }
        ]),
        format!("INSERT INTO t {}", expected)
    );
    assert_eq!(
        translate(&args![
            "  replace into t ",
            map! { "name%s" => "Bob", "age%i" => "30 years" }
        ]),
        format!("  replace into t {}", expected)
    );

    assert_eq!(
        translate(&args![
            "UPDATE t SET %a",
            map! { "name%s" => "Bob", "age%i" => 30 },
            " WHERE id = 1"
        ]),
        format!(
            "UPDATE t SET {} = {}, {} = 30 WHERE id = 1",
            ident(translator, "name"),
            string(translator, "Bob"),
            ident(translator, "age"),
        )
    );

    // Explicit modifier wins over the guess
    assert_eq!(
        translate(&args![
            "INSERT INTO t SET %a",
            map! { "name" => "Bob" }
        ]),
        format!(
            "INSERT INTO t SET {} = {}",
            ident(translator, "name"),
            string(translator, "Bob")
        )
    );
    assert_eq!(
        translate(&args!["UPSERT t %v", map! { "a" => 1 }]),
        format!("UPSERT t ({}) VALUES (1)", ident(translator, "a"))
    );

    // Plain values, empty inline modifier means none
    assert_eq!(
        translate(&args![
            "UPDATE t SET ",
            map! { "a" => 1, "b%" => "x", "c" => Value::Null }
        ]),
        format!(
            "UPDATE t SET {} = 1, {} = {}, {} = NULL",
            ident(translator, "a"),
            ident(translator, "b"),
            string(translator, "x"),
            ident(translator, "c"),
        )
    );

    // Any other modifier formats the values alone
    assert_eq!(
        translate(&args!["SELECT %i", map! { "a" => "1", "b" => 2.5 }]),
        "SELECT 1, 2"
    );

    // Lists
    assert_eq!(
        translate(&args!["SELECT * FROM t WHERE a IN (%s", vec!["a", "b"], ")"]),
        format!(
            "SELECT * FROM t WHERE a IN ({}, {})",
            string(translator, "a"),
            string(translator, "b")
        )
    );
    assert_eq!(
        translate(&args!["SELECT %n", ["a", "b.c"]]),
        format!(
            "SELECT {}, {}",
            ident(translator, "a"),
            ident(translator, "b.c")
        )
    );
    assert_eq!(translate(&args!["SELECT ", Vec::<i32>::new()]), "SELECT ");
}
