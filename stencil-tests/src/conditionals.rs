use stencil::{Arg, SqlWriter, Translator, args};

pub fn conditionals<W: SqlWriter>(translator: &Translator<W>) {
    let translate = |args: &[Arg]| translator.translate(args).expect("Failed to translate");

    assert_eq!(
        translate(&args!["SELECT * FROM t%if", true, " WHERE a = 1%end"]),
        "SELECT * FROM t WHERE a = 1"
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t%if", false, " WHERE a = 1%end"]),
        "SELECT * FROM t"
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t%if", 0, " WHERE a = 1%else WHERE b = 2%end"]),
        "SELECT * FROM t WHERE b = 2"
    );
    assert_eq!(
        translate(&args!["SELECT * FROM t%if", "yes", " WHERE a = 1%else WHERE b = 2%end"]),
        "SELECT * FROM t WHERE a = 1"
    );
    assert_eq!(translate(&args!["%if", 1, "%if", 0, "X%else Y%end %end"]), " Y ");

    // Falsy values
    for value in args!["", "0", 0, 0.0, false, Option::<i32>::None, Vec::<i32>::new()] {
        assert_eq!(
            translate(&[
                "A%if".into(),
                value.clone(),
                "B%end".into(),
            ]),
            "A",
            "{:?} should be falsy",
            value
        );
    }
    for value in args!["a", "00", 2, -0.5, true, vec![0]] {
        assert_eq!(
            translate(&["A%if".into(), value.clone(), "B%end".into()]),
            "AB",
            "{:?} should be truthy",
            value
        );
    }

    // An outer suppression swallows the inner blocks entirely
    assert_eq!(
        translate(&args!["A%if", false, " B%if", true, " C%else D%end E%end F"]),
        "A F"
    );
    assert_eq!(
        translate(&args!["A%if", true, " B%if", false, " C%else D%end E%end F"]),
        "A B D E F"
    );

    // Values inside a suppressed span are not formatted, errors included
    assert_eq!(
        translate(&args!["SELECT 1%if", false, ", %i", 5, "%end"]),
        "SELECT 1"
    );
    assert_eq!(
        translate(&args!["SELECT 1%if", false, " 'oops%end"]),
        "SELECT 1"
    );
    assert_eq!(
        translate(&args!["SELECT 1%if", false, ", %zz", 5, "%end"]),
        "SELECT 1"
    );

    // Unterminated block is closed at the end
    assert_eq!(translate(&args!["SELECT 1%if", false, " WHERE x"]), "SELECT 1");
    assert_eq!(translate(&args!["SELECT 1%if", true, " WHERE x"]), "SELECT 1 WHERE x");

    // The condition is consumed, not written
    assert_eq!(translate(&args!["SELECT %if", true, "1%end"]), "SELECT 1");
}
