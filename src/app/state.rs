use fltk::{app, button::Button, input::Input, prelude::*, window::Window};

use super::domain::display::DisplayState;
use super::domain::keys::Key;
use super::domain::messages::Message;
use super::domain::settings::AppSettings;
use super::infrastructure::platform::resolve_dark_mode;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

pub struct AppState {
    pub calc: DisplayState,
    pub window: Window,
    pub display: Input,
    pub buttons: Vec<(Key, Button)>,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: &AppSettings) -> Self {
        let MainWidgets {
            wind,
            display,
            buttons,
        } = widgets;

        let dark_mode = resolve_dark_mode(settings.theme_mode);
        tracing::info!(theme = ?settings.theme_mode, dark_mode, "starting FerrisCalc");

        let mut state = Self {
            calc: DisplayState::new(),
            window: wind,
            display,
            buttons,
            dark_mode,
        };
        apply_theme(
            &mut state.window,
            &mut state.display,
            &mut state.buttons,
            state.dark_mode,
        );
        state.refresh_display();
        state
    }

    pub fn show(&mut self) {
        self.window.show();
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, self.dark_mode);
    }

    /// Dispatch one message. Returns false once the app should stop.
    pub fn handle(&mut self, msg: Message) -> bool {
        tracing::debug!(?msg, "dispatch");
        if self.calc.apply(msg) {
            self.refresh_display();
            return true;
        }

        // Only window close falls through.
        self.window.hide();
        app::quit();
        false
    }

    /// Re-render the display field from the current display text.
    pub fn refresh_display(&mut self) {
        let text = self.calc.display_text();
        self.display.set_value(text);
        // Keep the end of long expressions in view.
        let end = text.len() as i32;
        if let Err(e) = self.display.set_position(end) {
            tracing::debug!(error = %e, position = end, "could not move display cursor");
        }
        self.display.redraw();
    }
}
