use fhub_inputs::prelude::*;

fn toggle(required: bool, initial_state: bool) -> ToggleInput {
    ToggleInput::new(ToggleInputConfig {
        base: InputConfig::new("Accept terms", "terms").with_required(required),
        initial_state,
        ..ToggleInputConfig::default()
    })
}

#[test]
fn starts_from_initial_state() {
    assert!(!toggle(false, false).value());
    assert!(toggle(false, true).value());
}

#[test]
fn toggle_flips_the_value() {
    let mut input = toggle(false, false);
    input.toggle();
    assert!(input.value());
    input.toggle();
    assert!(!input.value());
}

#[test]
fn optional_toggle_is_always_valid() {
    let mut input = toggle(false, false);
    assert!(input.is_valid());
    input.toggle();
    assert!(input.is_valid());
}

#[test]
fn required_toggle_is_valid_only_when_on() {
    let mut input = toggle(true, false);
    assert!(!input.is_valid());

    input.toggle();
    assert!(input.is_valid());

    input.set_value(false);
    assert!(!input.is_valid());
}

#[test]
fn required_hint_follows_its_toggle() {
    let mut input = toggle(true, false);
    input.update_hint();
    assert_eq!(input.hints(), ["this field is required"]);

    input.hint_config_mut().toggle.remove(HintRules::REQUIRED);
    input.update_hint();
    assert!(input.hints().is_empty());
    assert!(!input.is_valid());

    input.hint_config_mut().toggle.insert(HintRules::REQUIRED);
    input.toggle();
    input.update_hint();
    assert!(input.hints().is_empty());
}
