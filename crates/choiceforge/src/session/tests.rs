//! Tests for selection sessions.

use super::*;
use crate::event::CountingSessionListener;
use choiceforge_config::{OptionConfig, RuleConfig, SectionConfig};
use choiceforge_test::{demo_layout, single_section, two_sections, DemoCatalogue, DEMO_RULES};

fn session(rule: RuleSpec, layout: OptionLayout<&'static str>) -> SelectionSession<&'static str> {
    let mut session = SelectionSession::new(rule);
    session.configure_layout(rule, layout);
    session
}

#[test]
fn test_single_sequence() {
    let mut s = session(RuleSpec::single(), single_section(&["OA", "OB", "OC"]));

    s.toggle(&"OA").unwrap();
    assert_eq!(s.selected(), &["OA"]);
    s.toggle(&"OB").unwrap();
    assert_eq!(s.selected(), &["OB"]);
    s.toggle(&"OB").unwrap();
    assert!(s.selected().is_empty());
}

#[test]
fn test_single_sectioned_sequence() {
    let mut s = session(RuleSpec::single_sectioned(), two_sections());

    s.toggle(&"k1").unwrap();
    s.toggle(&"k2").unwrap();
    assert_eq!(s.selected_in(0), vec![&"k2"]);
    s.toggle(&"k3").unwrap();
    assert_eq!(s.selected(), &["k2", "k3"]);
    assert_eq!(s.selected_in(1), vec![&"k3"]);
}

#[test]
fn test_configure_from_parts() {
    let catalogue = DemoCatalogue::new();
    let mut s = SelectionSession::new(RuleSpec::multiple());
    s.configure(
        catalogue.options.clone(),
        catalogue.details.clone(),
        catalogue.section_titles.clone(),
        catalogue.order.clone(),
    );

    assert_eq!(s.layout().section_count(), 2);
    assert_eq!(s.identifier_for(&"OB"), CellIdentifier::Detail);
    assert_eq!(s.identifier_for(&"OC"), CellIdentifier::Basic);
    assert_eq!(s.layout().section_label(1), "Choices");
}

#[test]
fn test_configure_resets_selection() {
    let mut s = session(RuleSpec::multiple(), demo_layout());
    s.toggle(&"OA").unwrap();
    s.toggle(&"CA").unwrap();

    s.configure_layout(RuleSpec::single(), demo_layout());
    assert!(s.selected().is_empty());
    assert_eq!(*s.rule(), RuleSpec::single());
}

#[test]
fn test_finish_multiple() {
    let mut s = session(RuleSpec::multiple(), demo_layout());

    let outcome = s.request_finish().unwrap();
    assert_eq!(
        outcome.error().map(|e| e.message.as_str()),
        Some("Please make a selection.")
    );
    assert_eq!(s.status(), SessionState::Idle);

    s.toggle(&"CC").unwrap();
    assert_eq!(s.request_finish().unwrap(), FinishOutcome::Approved);
    assert_eq!(s.status(), SessionState::Approved);
}

#[test]
fn test_finish_single_sectioned_missing_section() {
    let mut s = session(RuleSpec::single_sectioned(), two_sections()).with_title("meal");
    s.toggle(&"k1").unwrap();

    match s.request_finish().unwrap() {
        FinishOutcome::Rejected(error) => {
            assert_eq!(error.title.as_deref(), Some("Meal"));
            assert_eq!(
                error.message,
                "Please select at least 1 per section and 1 in total. You can select a maximum of 1 per section."
            );
            assert_eq!(error.dismiss_label, "OK");
        }
        FinishOutcome::Approved => panic!("expected rejection"),
    }
}

#[test]
fn test_finish_without_requires_selection() {
    let mut s = session(RuleSpec::single_sectioned(), two_sections()).with_requires_selection(false);

    assert!(s.request_finish().unwrap().is_approved());
    assert!(s.selected().is_empty());
}

#[test]
fn test_cancel_always_approved() {
    for rule in DEMO_RULES {
        let mut s = session(rule, demo_layout());
        assert_eq!(s.request_cancel(), CancelOutcome::Approved);
        assert_eq!(s.status(), SessionState::CancelApproved);
    }
}

#[test]
fn test_cancel_keeps_toggles() {
    let mut s = session(RuleSpec::multiple(), demo_layout());
    s.toggle(&"OA").unwrap();
    s.request_cancel();

    assert_eq!(s.selected(), &["OA"]);
    assert_eq!(s.into_selection(), vec!["OA"]);
}

#[test]
fn test_ended_session_rejects_changes() {
    let mut s = session(RuleSpec::multiple(), demo_layout());
    s.toggle(&"OA").unwrap();
    s.request_finish().unwrap();

    assert_eq!(s.toggle(&"OB"), Err(ChoiceForgeError::SessionEnded));
    assert_eq!(s.deselect(&"OA"), Err(ChoiceForgeError::SessionEnded));
    assert_eq!(s.clear(), Err(ChoiceForgeError::SessionEnded));
    assert_eq!(s.request_finish(), Err(ChoiceForgeError::SessionEnded));
    assert_eq!(s.request_cancel(), CancelOutcome::Approved);
    assert_eq!(s.status(), SessionState::Approved);
    assert_eq!(s.selected(), &["OA"]);
}

#[test]
fn test_unknown_key_is_ignored() {
    let mut s = session(RuleSpec::single(), demo_layout());
    s.toggle(&"OA").unwrap();

    assert_eq!(s.toggle(&"nope").unwrap(), ToggleOutcome::Ignored);
    assert_eq!(s.selected(), &["OA"]);
    assert!(s.selected_in(9).is_empty());
}

#[test]
fn test_seed_selection() {
    let mut s = session(RuleSpec::all(1, Some(2)), demo_layout());
    s.seed_selection(["CA", "OB", "ZZ"]);
    assert_eq!(s.selected(), &["CA", "OB"]);

    s.toggle(&"OC").unwrap();
    assert_eq!(s.selected(), &["OB", "OC"]);
}

#[test]
fn test_deselect_and_clear() {
    let mut s = session(RuleSpec::multiple(), demo_layout());
    s.toggle(&"OA").unwrap();
    s.toggle(&"OB").unwrap();

    assert!(s.deselect(&"OA").unwrap());
    assert!(!s.deselect(&"OA").unwrap());
    assert!(s.is_selected(&"OB"));
    s.clear().unwrap();
    assert!(s.selected().is_empty());
}

#[test]
fn test_listeners_receive_events() {
    let listener = Arc::new(CountingSessionListener::new());
    let mut s = SelectionSession::new(RuleSpec::multiple())
        .with_key("toppings")
        .with_listener(listener.clone());
    s.configure_layout(RuleSpec::multiple(), demo_layout());

    s.toggle(&"nope").unwrap();
    s.request_finish().unwrap();
    s.toggle(&"OA").unwrap();
    s.toggle(&"OA").unwrap();
    s.toggle(&"OB").unwrap();
    s.request_finish().unwrap();

    assert_eq!(s.key(), Some("toppings"));
    assert_eq!(listener.toggled_count(), 3);
    assert_eq!(listener.validation_failed_count(), 1);
    assert_eq!(listener.dismissal_count(), 1);
    assert_eq!(listener.cancel_count(), 0);
}

#[test]
fn test_unsatisfiable_section_is_not_corrected() {
    let mut s = session(RuleSpec::sectioned(2, None, 0, None), two_sections());
    for key in ["k1", "k2", "k3", "k4"] {
        s.toggle(&key).unwrap();
    }
    assert!(s.is_valid());

    // Section B only offers two options, so three per section can never pass.
    s.configure_layout(RuleSpec::sectioned(3, None, 0, None), two_sections());
    for key in ["k1", "k2", "k3", "k4"] {
        s.toggle(&key).unwrap();
    }
    assert!(!s.request_finish().unwrap().is_approved());
}

#[test]
fn test_from_config() {
    let config = SessionConfig::new()
        .with_title("choose an option")
        .with_rule(RuleConfig::Sectioned {
            section_min: 1,
            section_max: Some(2),
            total_min: 0,
            total_max: None,
        })
        .with_section(
            SectionConfig::titled("Options")
                .with_option(OptionConfig::new("OA", "Option A"))
                .with_option(OptionConfig::new("OB", "Option B"))
                .with_option(OptionConfig::new("OC", "Option C")),
        )
        .with_section(SectionConfig::titled("Choices").with_option(OptionConfig::new("CA", "Choice A")))
        .with_selected(["OA", "OB"]);

    let mut s = SelectionSession::from_config(&config).unwrap();
    assert_eq!(s.title(), Some("choose an option"));
    assert!(s.requires_selection());
    assert_eq!(s.selected(), &["OA".to_string(), "OB".to_string()]);

    s.toggle(&"OC".to_string()).unwrap();
    assert_eq!(s.selected(), &["OB".to_string(), "OC".to_string()]);

    let error = s.request_finish().unwrap();
    assert_eq!(
        error.error().map(|e| e.title.as_deref()),
        Some(Some("Choose An Option"))
    );
}

#[test]
fn test_from_invalid_config() {
    let config = SessionConfig::new()
        .with_section(SectionConfig::new().with_option(OptionConfig::new("OA", "Option A")))
        .with_selected(["ZZ"]);

    assert!(matches!(
        SelectionSession::from_config(&config),
        Err(ChoiceForgeError::Config(_))
    ));
}
