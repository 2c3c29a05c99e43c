use egui_kittest::Harness;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;

/// Build a harness around the real app with the default state.
#[allow(dead_code)]
pub fn app_harness<'a>() -> Harness<'a, QrStudioApp> {
    let _ = env_logger::builder().is_test(true).try_init();
    let app = QrStudioApp::new(State::default());
    Harness::new_eframe(|_| app)
}

/// Run a few frames so state changes settle into the rendered tree.
pub fn run_frames(harness: &mut Harness<'_, QrStudioApp>, frames: usize) {
    for _ in 0..frames {
        harness.step();
    }
}
