#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use stencil::{Arg, Modifier, Raw, TranslateError, Value, split_key};
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn value_from() {
        assert_eq!(Value::from(5_i8), Value::Int64(5));
        assert_eq!(Value::from(5_u16), Value::UInt64(5));
        assert_eq!(Value::from(1.5_f32), Value::Float64(1.5));
        assert_eq!(Value::from("a"), Value::Varchar("a".into()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Boolean(true));
        assert_eq!(Value::from(date!(2024 - 01 - 02)).type_name(), "date");
        assert_eq!(Value::from(Raw("NOW()".into())).type_name(), "expression");
    }

    #[test]
    fn value_truthiness() {
        for value in [
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0_u8),
            Value::from(0.0),
            Value::from(Decimal::ZERO),
            Value::from(""),
            Value::from("0"),
            Value::from(&b""[..]),
        ] {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }
        for value in [
            Value::from(true),
            Value::from(-1),
            Value::from(0.1),
            Value::from(Decimal::from_str("0.01").unwrap()),
            Value::from(" "),
            Value::from("0.0"),
            Value::from("false"),
            Value::from(time!(0:00)),
            Value::from(Uuid::nil()),
        ] {
            assert!(value.is_truthy(), "{:?} should be truthy", value);
        }
    }

    #[test]
    fn value_to_text() {
        assert_eq!(Value::Null.to_text().unwrap(), "");
        assert_eq!(Value::from(true).to_text().unwrap(), "1");
        assert_eq!(Value::from(false).to_text().unwrap(), "");
        assert_eq!(Value::from(-42).to_text().unwrap(), "-42");
        assert_eq!(Value::from(0.25).to_text().unwrap(), "0.25");
        assert_eq!(Value::from(1.0).to_text().unwrap(), "1");
        assert_eq!(Value::from(-300.0).to_text().unwrap(), "-300");
        assert_eq!(Value::from(1e-7).to_text().unwrap(), "1e-7");
        assert_eq!(
            Value::from(datetime!(2024-01-02 03:04:05)).to_text().unwrap(),
            "2024-01-02 03:04:05"
        );
        assert_eq!(
            Value::from(datetime!(2024-01-02 03:04:05 +1)).to_text().unwrap(),
            "2024-01-02 03:04:05+01:00"
        );
        assert_eq!(
            Value::from(Uuid::nil()).to_text().unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert!(Value::from(Raw("1".into())).to_text().is_none());
    }

    #[test]
    fn arg_from() {
        assert!(matches!(Arg::from("SELECT"), Arg::Sql(..)));
        assert!(matches!(Arg::from(String::from("SELECT")), Arg::Sql(..)));
        assert!(matches!(Arg::from(Value::from("x")), Arg::Value(Value::Varchar(..))));
        assert!(matches!(Arg::from(Some(1)), Arg::Value(Value::Int64(1))));
        assert!(matches!(Arg::from(vec![1, 2]), Arg::List(ref v) if v.len() == 2));
        assert!(matches!(Arg::from(["a"]), Arg::List(ref v) if v.len() == 1));
        assert!(!Arg::from(Vec::<i32>::new()).is_truthy());
        assert!(!Arg::from("0").is_truthy());
        assert!(Arg::from("SELECT").is_truthy());
        assert_eq!(Arg::from(vec![1]).type_name(), "list");
    }

    #[test]
    fn modifier_tokens() {
        for (token, modifier) in [
            ("s", Modifier::String),
            ("sn", Modifier::StringOrNull),
            ("b", Modifier::Boolean),
            ("i", Modifier::Integer),
            ("u", Modifier::Unsigned),
            ("f", Modifier::Float),
            ("d", Modifier::Date),
            ("t", Modifier::DateTime),
            ("n", Modifier::Identifier),
            ("sql", Modifier::Sql),
            ("a", Modifier::Set),
            ("v", Modifier::Values),
            ("if", Modifier::If),
        ] {
            assert_eq!(token.parse::<Modifier>().unwrap(), modifier);
            assert_eq!(modifier.token(), token);
            assert_eq!(modifier.to_string(), format!("%{}", token));
        }
        assert_eq!("p".parse::<Modifier>().unwrap(), Modifier::Sql);
        assert_eq!(
            "x".parse::<Modifier>(),
            Err(TranslateError::UnknownModifier("x".into()))
        );
    }

    #[test]
    fn mapping_keys() {
        assert_eq!(split_key("name%s"), ("name", Some("s")));
        assert_eq!(split_key("name"), ("name", None));
        assert_eq!(split_key("name%"), ("name", Some("")));
    }
}
