//! Unit tests for literal evaluation of print arguments

use codeplay::execution::literal::{evaluate, LiteralError, Value};

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        assert_eq!(evaluate("'hi'").unwrap(), Value::Str("hi".to_string()));
        assert_eq!(evaluate("3.25").unwrap(), Value::Number(3.25));
        assert_eq!(evaluate("true").unwrap(), Value::Bool(true));
        assert_eq!(evaluate("null").unwrap(), Value::Null);
        assert_eq!(evaluate("undefined").unwrap(), Value::Undefined);
    }

    #[test]
    fn test_special_numbers() {
        assert_eq!(evaluate("NaN").unwrap().display(), "NaN");
        assert_eq!(evaluate("-Infinity").unwrap().display(), "-Infinity");
        assert_eq!(evaluate("1 / 2").unwrap().display(), "0.5");
        assert_eq!(evaluate("0 / 0").unwrap().display(), "NaN");
    }

    #[test]
    fn test_arithmetic_and_concatenation() {
        assert_eq!(evaluate("10 - 4 - 3").unwrap().display(), "3");
        assert_eq!(evaluate("0.1 + 0.2").unwrap().display(), "0.30000000000000004");
        assert_eq!(evaluate("'n=' + 1 + 1").unwrap().display(), "n=11");
        assert_eq!(evaluate("'n=' + (1 + 1)").unwrap().display(), "n=2");
        assert_eq!(evaluate("1 + 2 * 3").unwrap().display(), "7");
        assert_eq!(evaluate("'6' / '2'").unwrap().display(), "3");
        assert_eq!(evaluate("'3' * '4' + '!'").unwrap().display(), "12!");
        assert_eq!(evaluate("1_000 * 2").unwrap().display(), "2000");
        assert_eq!(evaluate("-'3'").unwrap().display(), "-3");
        assert_eq!(evaluate("+'abc'").unwrap().display(), "NaN");
    }

    #[test]
    fn test_strings_keep_inner_quotes() {
        assert_eq!(evaluate(r#"'say "hi"'"#).unwrap().display(), "say \"hi\"");
        assert_eq!(evaluate(r#""it's""#).unwrap().display(), "it's");
    }

    #[test]
    fn test_rejects_code() {
        assert!(matches!(
            evaluate("require('fs')"),
            Err(LiteralError::UndefinedIdentifier(name)) if name == "require"
        ));
        assert!(matches!(
            evaluate("require('fs'"),
            Err(LiteralError::MissingCallParen)
        ));
        assert!(matches!(
            evaluate("'a'.length"),
            Err(LiteralError::UnexpectedToken(_))
        ));
        assert!(evaluate("`${1}`").is_err());
    }
}
