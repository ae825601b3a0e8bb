use shopping_log::{
    entities::{FieldRule, ValidationError},
    validation::validate,
};

#[test]
fn integer_examples() {
    for bad in ["0", "-1", "3.5"] {
        assert!(validate(bad, FieldRule::Integer, true).is_err(), "{bad}");
    }
    assert_eq!(
        validate("", FieldRule::Integer, true),
        Err(ValidationError::Required)
    );
    assert_eq!(validate("1", FieldRule::Integer, true), Ok(()));
    assert_eq!(validate("42", FieldRule::Integer, true), Ok(()));
}

#[test]
fn price_examples() {
    for ok in ["0", "12.5", "12.50"] {
        assert_eq!(validate(ok, FieldRule::Price, true), Ok(()), "{ok}");
    }
    for bad in ["12.345", "-1", "abc"] {
        assert!(validate(bad, FieldRule::Price, true).is_err(), "{bad}");
    }
}

#[test]
fn zero_is_a_number_and_a_price_but_not_a_quantity() {
    assert_eq!(validate("0", FieldRule::Number, true), Ok(()));
    assert_eq!(validate("0", FieldRule::Price, true), Ok(()));
    assert!(validate("0", FieldRule::Integer, true).is_err());
}

#[test]
fn text_bound() {
    let rule = FieldRule::Text { max_len: 255 };
    assert_eq!(validate(&"x".repeat(255), rule, true), Ok(()));
    assert_eq!(
        validate(&"x".repeat(256), rule, true),
        Err(ValidationError::TooLong { max: 255 })
    );
    assert_eq!(validate("", rule, false), Ok(()));
}
