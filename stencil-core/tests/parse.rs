#[cfg(test)]
mod tests {
    use stencil_core::{
        Fragment, join_fragments, parse_float_prefix, parse_integer_prefix, parse_timestamp,
        timestamp_from_epoch, truncate_long,
    };
    use time::macros::datetime;

    #[test]
    fn integer_prefix() {
        assert_eq!(parse_integer_prefix("12abc"), 12);
        assert_eq!(parse_integer_prefix("-7"), -7);
        assert_eq!(parse_integer_prefix("+7"), 7);
        assert_eq!(parse_integer_prefix("abc"), 0);
        assert_eq!(parse_integer_prefix(""), 0);
        assert_eq!(parse_integer_prefix("1.9"), 1);
        assert_eq!(parse_integer_prefix("-1.9"), -1);
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float_prefix("1.5kg"), 1.5);
        assert_eq!(parse_float_prefix(" 2e2"), 200.0);
        assert_eq!(parse_float_prefix("kg"), 0.0);
    }

    #[test]
    fn timestamps() {
        assert_eq!(
            parse_timestamp("2024-01-02").unwrap(),
            datetime!(2024-01-02 0:00 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-01-02 03:04").unwrap(),
            datetime!(2024-01-02 03:04 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-01-02T03:04:05.25").unwrap(),
            datetime!(2024-01-02 03:04:05.25 UTC)
        );
        assert_eq!(
            parse_timestamp("2024-01-02 03:04:05+02:00").unwrap(),
            datetime!(2024-01-02 03:04:05 +2)
        );
        assert!(parse_timestamp("tomorrow").is_err());
        assert_eq!(
            timestamp_from_epoch(1.5).unwrap(),
            datetime!(1970-01-01 0:00:01.5 UTC)
        );
    }

    #[test]
    fn fragments_join() {
        let fragment = |sql: &str, suppressed_after| Fragment {
            sql: sql.into(),
            suppressed_after,
        };
        let fragments = [
            fragment("SELECT 1", false),
            fragment("", true),
            fragment(" B", false),
            fragment("C", false),
        ];
        assert_eq!(join_fragments(&fragments, ""), "SELECT 1 BC");
        assert_eq!(join_fragments(&fragments, " "), "SELECT 1  B C");
        assert_eq!(join_fragments(&[fragment("a\0b", false)], ","), "a\0b");
        assert_eq!(join_fragments(&[], ","), "");
    }

    #[test]
    fn truncation() {
        let long = "é".repeat(600);
        let truncated = truncate_long!(long).to_string();
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_long!("short").to_string(), "short");
    }
}
