// Host-side tests for toggle state types.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod state {
    include!("../src/state.rs");
}

use state::*;

#[test]
fn visibility_defaults_to_hidden() {
    assert_eq!(Visibility::default(), Visibility::Hidden);
    assert!(!Visibility::default().is_visible());
}

#[test]
fn visibility_flip_is_an_involution() {
    for v in [Visibility::Hidden, Visibility::Visible] {
        assert_ne!(v.flipped(), v);
        assert_eq!(v.flipped().flipped(), v);
    }
}

#[test]
fn visibility_markers_are_complementary() {
    let m = Markers::default();
    assert_eq!(Visibility::Hidden.marker(&m), "hidden");
    assert_eq!(Visibility::Hidden.cleared_marker(&m), "visible");
    assert_eq!(Visibility::Visible.marker(&m), "visible");
    assert_eq!(Visibility::Visible.cleared_marker(&m), "hidden");
}

#[test]
fn group_trigger_events() {
    assert_eq!(ToggleGroup::Click.trigger_events(), &["click"]);
    assert_eq!(
        ToggleGroup::Hover.trigger_events(),
        &["mouseenter", "mouseleave"]
    );
}

#[test]
fn group_selectors_use_markers() {
    let m = Markers::default();
    assert_eq!(m.selector(ToggleGroup::Click), ".showhide");
    assert_eq!(m.selector(ToggleGroup::Hover), ".showhide_step");

    let custom = Markers {
        click_group: "faq".into(),
        hover_group: "peek".into(),
        ..Markers::default()
    };
    assert_eq!(custom.selector(ToggleGroup::Click), ".faq");
    assert_eq!(ToggleGroup::Hover.selector_class(&custom), "peek");
}

#[test]
fn group_parses_aliases_and_marker_names() {
    assert_eq!("click".parse::<ToggleGroup>(), Ok(ToggleGroup::Click));
    assert_eq!("showhide".parse::<ToggleGroup>(), Ok(ToggleGroup::Click));
    assert_eq!("hover".parse::<ToggleGroup>(), Ok(ToggleGroup::Hover));
    assert_eq!(" showhide_step ".parse::<ToggleGroup>(), Ok(ToggleGroup::Hover));
}

#[test]
fn group_parse_rejects_unknown_names() {
    let err = "Showhide".parse::<ToggleGroup>().unwrap_err();
    assert_eq!(err, ParseGroupError("Showhide".to_string()));
    assert!(err.to_string().contains("unknown toggle group"));
    assert!("".parse::<ToggleGroup>().is_err());
}

#[test]
fn group_display_round_trips_through_parse() {
    for g in ToggleGroup::ALL {
        assert_eq!(g.to_string().parse::<ToggleGroup>(), Ok(g));
    }
}

#[test]
fn default_markers_are_valid() {
    assert_eq!(Markers::default().validate(), Ok(()));
}

#[test]
fn markers_reject_unusable_names() {
    let blank = Markers {
        hidden: String::new(),
        ..Markers::default()
    };
    assert_eq!(blank.validate(), Err(MarkerError::Invalid("hidden")));

    let spaced = Markers {
        click_group: "show hide".into(),
        ..Markers::default()
    };
    assert_eq!(spaced.validate(), Err(MarkerError::Invalid("click_group")));

    let shared_group = Markers {
        hover_group: "showhide".into(),
        ..Markers::default()
    };
    assert_eq!(shared_group.validate(), Err(MarkerError::SameGroupMarkers));
}
