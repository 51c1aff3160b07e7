use fltk::app;

use ferris_calc::app::domain::messages::Message;
use ferris_calc::app::domain::settings::AppSettings;
use ferris_calc::app::infrastructure::logging;
use ferris_calc::app::state::AppState;
use ferris_calc::ui::main_window::build_main_window;

fn main() {
    let (settings, load_error) = AppSettings::load();
    logging::init(&settings);
    if let Some(e) = load_error {
        tracing::warn!(
            path = %AppSettings::get_config_path().display(),
            error = %e,
            "failed to load settings, using defaults"
        );
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&settings, &sender);
    let mut state = AppState::new(widgets, &settings);
    state.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle(msg) {
                break;
            }
        }
    }
}
