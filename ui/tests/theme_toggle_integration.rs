//! Integration tests for the presentation mode toggle.

mod common;

use common::{app_harness, run_frames};
use kittest::Queryable;
use qrstudio_states::ThemeMode;

#[test]
fn test_toggle_twice_returns_to_original_mode() {
    let mut harness = app_harness();
    run_frames(&mut harness, 2);

    assert_eq!(harness.state().state.theme, ThemeMode::Dark);

    harness.get_by_label_contains("Light mode").click();
    run_frames(&mut harness, 2);
    assert_eq!(harness.state().state.theme, ThemeMode::Light);

    harness.get_by_label_contains("Dark mode").click();
    run_frames(&mut harness, 2);
    assert_eq!(harness.state().state.theme, ThemeMode::Dark);
}

#[test]
fn test_toggle_never_touches_the_configuration() {
    let mut harness = app_harness();
    run_frames(&mut harness, 2);

    let before = harness.state().state.config().clone();

    harness.get_by_label_contains("Light mode").click();
    run_frames(&mut harness, 2);
    harness.get_by_label_contains("Dark mode").click();
    run_frames(&mut harness, 2);

    assert_eq!(harness.state().state.config(), &before);
}
