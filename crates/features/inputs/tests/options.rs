use fhub_domain::config::OptionInputSource;
use fhub_inputs::flatten;
use fhub_inputs::prelude::*;
use serde_json::json;

fn option(label: &str, value: &str) -> InputOption {
    InputOption::new(InputOptionConfig::new(label, value)).expect("valid option")
}

fn group(label: &str, options: Vec<InputOption>) -> OptionGroup {
    OptionGroup::new(OptionGroupConfig { label: label.to_owned(), options, ..Default::default() })
}

fn config(options: Vec<OptionEntry>) -> OptionInputConfig {
    OptionInputConfig {
        base: InputConfig::new("Colour", "colour"),
        options,
        ..OptionInputConfig::default()
    }
}

fn colours() -> Vec<OptionEntry> {
    vec![
        option("Red", "red").into(),
        group("Cold", vec![option("Blue", "blue"), option("Green", "green")]).into(),
        option("Black", "black").into(),
    ]
}

#[test]
fn option_requires_a_value() {
    let err = InputOption::new(InputOptionConfig::default()).unwrap_err();
    assert!(matches!(err, InputError::InvalidOption { .. }));
    assert!(err.to_string().contains("minimum length of 1 character"));

    let err = InputOption::new(InputOptionConfig::new("Empty", "")).unwrap_err();
    assert!(err.to_string().contains("option 'Empty'"));
}

#[test]
fn option_defaults() {
    let option = InputOption::new(InputOptionConfig {
        value: "only-value".to_owned(),
        ..InputOptionConfig::default()
    })
    .expect("label is optional");

    assert_eq!(option.label(), None);
    assert_eq!(option.value(), "only-value");
    assert!(!option.disabled());
    assert!(!option.pre_selected());

    option.set_disabled(true);
    option.set_pre_selected(true);
    assert!(option.disabled());
    assert!(option.pre_selected());
}

#[test]
fn group_stores_options_as_given() {
    let mut cold = group("Cold", vec![option("Blue", "blue"), option("Blue again", "blue")]);
    assert_eq!(cold.label(), "Cold");
    assert_eq!(cold.options().len(), 2, "groups do not validate");

    cold.set_disabled(true);
    assert!(cold.disabled());
}

#[test]
fn options_are_required() {
    let attempts = [
        SingleOptionInput::new(config(Vec::new())).map(drop),
        MultiOptionInput::new(config(Vec::new())).map(drop),
    ];
    for attempt in attempts {
        let err = attempt.unwrap_err();
        assert!(matches!(err, InputError::MissingOptions { .. }));
        assert!(err.to_string().contains("Options are required"));
    }

    let empty_group = vec![group("Nothing", Vec::new()).into()];
    let err = SingleOptionInput::new(config(empty_group)).unwrap_err();
    assert_eq!(err.kind(), "MissingOptions");
}

#[test]
fn duplicate_values_are_rejected() {
    let entries = vec![option("One", "1").into(), option("Uno", "1").into()];
    let err = SingleOptionInput::new(config(entries)).unwrap_err();
    assert!(matches!(err, InputError::DuplicateOptionValue { .. }));
    assert!(err.to_string().contains("unique values"));
    assert!(err.to_string().contains("value '1'"));
}

#[test]
fn duplicates_inside_groups_are_rejected() {
    let entries = vec![
        option("Red", "red").into(),
        group("Warm", vec![option("Orange", "orange"), option("Crimson", "red")]).into(),
    ];
    let err = MultiOptionInput::new(config(entries)).unwrap_err();
    assert_eq!(err.kind(), "DuplicateOptionValue");
}

#[test]
fn the_same_instance_twice_is_a_duplicate() {
    let red = option("Red", "red");
    let entries = vec![red.clone().into(), group("Again", vec![red]).into()];
    assert!(SingleOptionInput::new(config(entries)).is_err());
}

#[test]
fn mixed_options_and_groups_flatten_in_order() {
    let input = SingleOptionInput::new(config(colours())).expect("unique values");
    let values: Vec<_> = input.flattened_options().iter().map(InputOption::value).collect();
    assert_eq!(values, ["red", "blue", "green", "black"]);
    assert_eq!(input.options().len(), 3);
    assert_eq!(flatten(input.options()).len(), 4);
}

#[test]
fn shared_options_see_each_others_changes() {
    let blue = option("Blue", "blue");
    let entries = vec![group("Cold", vec![blue.clone()]).into(), option("Red", "red").into()];
    let input = MultiOptionInput::new(config(entries)).expect("unique values");

    blue.set_disabled(true);
    let held = input.find_option("blue").expect("blue is reachable");
    assert!(held.disabled());
    assert!(held.ptr_eq(&blue));

    let copy = blue.detached();
    copy.set_disabled(false);
    assert!(held.disabled());
}

#[test]
fn single_selection_starts_from_the_first_pre_selected_option() {
    let green = option("Green", "green");
    let black = option("Black", "black");
    green.set_pre_selected(true);
    black.set_pre_selected(true);
    let entries = vec![option("Red", "red").into(), green.into(), black.into()];

    let input = SingleOptionInput::new(config(entries)).expect("unique values");
    assert_eq!(input.value(), Some("green"));
    assert_eq!(input.selected_option().map(InputOption::value), Some("green"));
}

#[test]
fn single_selection_validity() {
    let mut input = SingleOptionInput::new(config(colours())).expect("unique values");
    assert_eq!(input.value(), None);
    assert!(input.is_valid(), "optional and empty");

    input.set_required(true);
    assert!(!input.is_valid());

    input.select("blue");
    assert!(input.is_valid());

    input.set_value(Some("purple".to_owned()));
    assert!(!input.is_valid());
    input.update_hint();
    assert_eq!(input.hints(), ["this field has to be one of red, blue, green, black"]);

    input.clear();
    input.update_hint();
    assert_eq!(input.hints(), ["this field is required"]);
}

#[test]
fn multi_selection_keeps_order_without_repeats() {
    let mut input = MultiOptionInput::new(config(colours())).expect("unique values");
    input.select("green");
    input.select("red");
    input.select("green");
    assert_eq!(input.values(), ["green", "red"]);
    assert!(input.is_selected("red"));

    assert!(input.deselect("green"));
    assert!(!input.deselect("green"));

    input.toggle("black");
    input.toggle("red");
    assert_eq!(input.values(), ["black"]);

    input.set_values(["blue", "blue", "red"]);
    assert_eq!(input.values(), ["blue", "red"]);
    let labels: Vec<_> = input.selected_options().filter_map(InputOption::label).collect();
    assert_eq!(labels, ["Blue", "Red"]);
}

#[test]
fn multi_selection_validity() {
    let red = option("Red", "red");
    red.set_pre_selected(true);
    let entries = vec![red.into(), option("Blue", "blue").into()];
    let mut input = MultiOptionInput::new(OptionInputConfig {
        base: InputConfig::new("Colours", "colours").with_required(true),
        options: entries,
        ..OptionInputConfig::default()
    })
    .expect("unique values");

    assert_eq!(input.values(), ["red"]);
    assert!(input.is_valid());

    input.clear();
    assert!(!input.is_valid());

    input.set_values(["blue", "teal"]);
    assert!(!input.is_valid());

    input.hint_config_mut().toggle.remove(HintRules::OPTIONS);
    input.update_hint();
    assert!(input.hints().is_empty());
}

#[test]
fn inputs_build_from_configuration_documents() {
    let source: OptionInputSource = serde_json::from_value(json!({
        "label": "Size",
        "name": "size",
        "required": true,
        "options": [
            { "label": "Small", "value": "s" },
            { "label": "Large", "options": [
                { "label": "L", "value": "l", "preSelected": true },
                { "label": "XL", "value": "xl", "disabled": true }
            ]}
        ]
    }))
    .expect("valid document");

    let input = SingleOptionInput::new(source.try_into().expect("valid options")).expect("unique");
    assert_eq!(input.name(), "size");
    assert_eq!(input.value(), Some("l"));
    assert!(input.is_valid());
    assert!(input.find_option("xl").is_some_and(InputOption::disabled));
    assert!(matches!(input.options()[1], OptionEntry::Group(ref group) if group.label() == "Large"));
}

#[test]
fn documents_with_empty_values_fail() {
    let source: OptionInputSource = serde_json::from_value(json!({
        "label": "Size",
        "name": "size",
        "options": [{ "label": "Blank", "value": "" }]
    }))
    .expect("valid document");

    let err = OptionInputConfig::try_from(source).unwrap_err();
    assert_eq!(err.kind(), "InvalidOption");
}
