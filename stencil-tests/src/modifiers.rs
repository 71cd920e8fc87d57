use crate::{boolean, ident, string};
use stencil::{Arg, Raw, SqlWriter, Translator, Value, args};
use time::macros::{date, datetime};

pub fn modifiers<W: SqlWriter>(translator: &Translator<W>) {
    let translate = |args: &[Arg]| translator.translate(args).expect("Failed to translate");
    let writer = translator.writer();

    // Strings
    assert_eq!(
        translate(&args!["SELECT %s", 42]),
        format!("SELECT {}", string(translator, "42"))
    );
    assert_eq!(
        translate(&args!["SELECT %s", "O'Brien"]),
        format!("SELECT {}", string(translator, "O'Brien"))
    );
    assert_eq!(translate(&args!["SELECT %s", Value::Null]), "SELECT NULL");
    assert_eq!(translate(&args!["SELECT %sn", ""]), "SELECT NULL");
    assert_eq!(
        translate(&args!["SELECT %sn", "a"]),
        format!("SELECT {}", string(translator, "a"))
    );

    assert_eq!(
        translate(&args!["x = %s", true]),
        format!("x = {}", string(translator, "1"))
    );
    assert_eq!(
        translate(&args!["x = %s", false]),
        format!("x = {}", string(translator, ""))
    );
    assert_eq!(translate(&args!["x = %sn", false]), "x = NULL");
    assert_eq!(
        translate(&args!["x = %s", 1.0]),
        format!("x = {}", string(translator, "1"))
    );
    assert_eq!(
        translate(&args!["x = %sn", 2.5]),
        format!("x = {}", string(translator, "2.5"))
    );

    // Booleans
    assert_eq!(
        translate(&args!["SELECT %b", "0"]),
        format!("SELECT {}", boolean(translator, false))
    );
    assert_eq!(
        translate(&args!["SELECT %b", 5]),
        format!("SELECT {}", boolean(translator, true))
    );

    // Numbers
    assert_eq!(translate(&args!["SELECT %i", "12abc"]), "SELECT 12");
    assert_eq!(translate(&args!["SELECT %i", "abc"]), "SELECT 0");
    assert_eq!(translate(&args!["SELECT %i", 3.9]), "SELECT 3");
    assert_eq!(translate(&args!["SELECT %i", -3.9]), "SELECT -3");
    assert_eq!(translate(&args!["SELECT %i", true]), "SELECT 1");
    assert_eq!(translate(&args!["SELECT %u", -5]), "SELECT -5");
    assert_eq!(translate(&args!["SELECT %f", "1.5kg"]), "SELECT 1.5");
    assert_eq!(translate(&args!["SELECT %f", 2]), "SELECT 2.0");

    // Temporal values
    let mut expected = String::from("SELECT ");
    writer.write_value_date(&mut expected, &date!(2024 - 03 - 01));
    assert_eq!(translate(&args!["SELECT %d", "2024-03-01 10:20:30"]), expected);
    let mut expected = String::from("SELECT ");
    writer.write_value_datetime(&mut expected, &datetime!(1970-01-01 0:00));
    assert_eq!(translate(&args!["SELECT %t", 0]), expected);
    let mut expected = String::from("SELECT ");
    writer.write_value_datetime(&mut expected, &datetime!(2024-03-01 8:20:30));
    assert_eq!(
        translate(&args!["SELECT %t", "2024-03-01T10:20:30+02:00"]),
        expected
    );
    assert_eq!(
        translate(&args!["SELECT %t", datetime!(2024-03-01 10:20:30 +2)]),
        expected
    );

    // Identifiers
    assert_eq!(
        translate(&args!["SELECT %n", "my.col"]),
        format!("SELECT {}", ident(translator, "my.col"))
    );
    assert_eq!(
        translate(&args!["SELECT %n", "t.*"]),
        format!("SELECT {}.*", ident(translator, "t"))
    );

    // Raw SQL, scanned again
    assert_eq!(translate(&args!["SELECT %sql", "NOW()"]), "SELECT NOW()");
    assert_eq!(
        translate(&args!["SELECT %p", "'a'"]),
        format!("SELECT {}", string(translator, "a"))
    );
    assert_eq!(translate(&args!["SELECT %sql", "a = %i", 7]), "SELECT a = 7");

    // Expressions are written as they are
    assert_eq!(
        translate(&args!["SELECT %s", Raw("CURRENT_DATE".into())]),
        "SELECT CURRENT_DATE"
    );
    assert_eq!(
        translate(&args!["SELECT ", Raw("1 + 1".into())]),
        "SELECT 1 + 1"
    );
}
