#[cfg(test)]
mod tests {
    use stencil_core::{Driver, args, map};
    use stencil_sqlite::SQLiteDriver;
    use stencil_tests::{execute_tests, init_logs};

    #[test]
    fn common_suite() {
        init_logs();
        execute_tests(&SQLiteDriver::new());
    }

    #[test]
    fn literals() {
        init_logs();
        let translator = SQLiteDriver::new().translator();
        assert_eq!(SQLiteDriver::NAME, "sqlite");
        assert_eq!(
            translator
                .translate(&args![
                    "INSERT INTO [flags] ",
                    map! { "on" => true, "off%b" => "0", "ratio" => f64::NEG_INFINITY, "nan%f" => f64::NAN },
                ])
                .unwrap(),
            r#"INSERT INTO "flags" ("on", "off", "ratio", "nan") VALUES (1, 0, -1.0e+10000, NULL)"#
        );
    }
}
