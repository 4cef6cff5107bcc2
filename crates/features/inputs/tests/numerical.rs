use fhub_inputs::prelude::*;
use std::collections::BTreeMap;

fn numerical(config: NumericalInputConfig) -> NumericalInput {
    NumericalInput::new(NumericalInputConfig { base: InputConfig::new("Amount", "amount"), ..config })
}

#[test]
fn numbers_are_stringified() {
    let mut input = numerical(NumericalInputConfig::default());
    input.set_value(66);
    assert_eq!(input.value(), "66");
    assert_eq!(input.value_as_number(), Some(66.0));
}

#[test]
fn text_keeps_its_leading_number() {
    let mut input = numerical(NumericalInputConfig::default());
    input.set_value("65px");
    assert_eq!(input.value(), "65");

    input.set_value("-12.75 kg");
    assert_eq!(input.value(), "-12.75");
    assert_eq!(input.value_as_number(), Some(-12.75));
}

#[test]
fn unusable_values_become_empty() {
    let mut input = numerical(NumericalInputConfig::default());
    let values = [
        RawValue::from("This is not a number"),
        RawValue::from(BTreeMap::from([("value".to_owned(), "0")])),
        RawValue::from([6, 3, 13]),
        RawValue::Absent,
        RawValue::from(None::<f64>),
        RawValue::from(true),
    ];
    for value in values {
        input.set_value(1);
        let shape = value.shape();
        input.set_value(value);
        assert_eq!(input.value(), "", "{shape}");
        assert_eq!(input.value_as_number(), None);
    }
}

#[test]
fn integer_mode_truncates() {
    let mut input =
        numerical(NumericalInputConfig { kind: NumberKind::Integers, ..Default::default() });
    input.set_value("55.2");
    assert_eq!(input.value(), "55");
    assert_eq!(input.value_as_number(), Some(55.0));

    input.set_value(-7.9);
    assert_eq!(input.value(), "-7");
}

#[test]
fn float_mode_keeps_fractions() {
    let mut input = numerical(NumericalInputConfig::default());
    input.set_value("55.2");
    assert_eq!(input.value_as_number(), Some(55.2));
}

#[test]
fn minimum_bound() {
    let mut input = numerical(NumericalInputConfig { min_val: Some(10.0), ..Default::default() });
    for value in [-10, 0, 5] {
        input.set_value(value);
        assert!(!input.is_valid(), "{value}");
    }
    input.set_value(10);
    assert!(input.is_valid());
}

#[test]
fn maximum_bound() {
    let mut input = numerical(NumericalInputConfig { max_val: Some(10.0), ..Default::default() });
    input.set_value(15);
    assert!(!input.is_valid());
    for value in [10, 0, -100] {
        input.set_value(value);
        assert!(input.is_valid(), "{value}");
    }
}

#[test]
fn increment_step() {
    let mut input =
        numerical(NumericalInputConfig { increment_step: Some(2.0), ..Default::default() });
    input.set_value(3);
    assert!(!input.is_valid());
    for value in [0, 2, -122] {
        input.set_value(value);
        assert!(input.is_valid(), "{value}");
    }
}

#[test]
fn increment_counts_from_the_minimum() {
    let mut input = numerical(NumericalInputConfig {
        min_val: Some(1.0),
        increment_step: Some(0.5),
        ..Default::default()
    });
    input.set_value("2.5");
    assert!(input.is_valid());

    input.set_value("2.25");
    assert!(!input.is_valid());
}

#[test]
fn fractional_steps_tolerate_rounding() {
    let mut input =
        numerical(NumericalInputConfig { increment_step: Some(0.1), ..Default::default() });
    input.set_value("0.3");
    assert!(input.is_valid());
}

#[test]
fn degenerate_steps_constrain_nothing() {
    for step in [0.0, f64::NAN, f64::INFINITY] {
        let mut input =
            numerical(NumericalInputConfig { increment_step: Some(step), ..Default::default() });
        input.set_value("1.3");
        assert!(input.is_valid(), "{step}");
    }
}

#[test]
fn out_of_range_values_are_stored_unchanged() {
    let mut input = numerical(NumericalInputConfig {
        min_val: Some(0.0),
        max_val: Some(10.0),
        ..Default::default()
    });
    input.set_value(250);
    assert_eq!(input.value(), "250");
    assert!(!input.is_valid());
}

#[test]
fn empty_value_depends_on_required() {
    let mut input = numerical(NumericalInputConfig { min_val: Some(5.0), ..Default::default() });
    assert!(input.is_valid(), "optional and empty");

    input.set_required(true);
    assert!(!input.is_valid());
}
