use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, Font},
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
    window::Window,
};

use super::keypad::{KEY_SPACING, build_keypad};
use crate::app::domain::keys::Key;
use crate::app::domain::messages::Message;
use crate::app::domain::settings::AppSettings;

pub const WINDOW_WIDTH: i32 = 320;
pub const WINDOW_HEIGHT: i32 = 440;
const DISPLAY_HEIGHT: i32 = 64;
const MARGIN: i32 = 10;

pub struct MainWidgets {
    pub wind: Window,
    pub display: Input,
    pub buttons: Vec<(Key, Button)>,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "FerrisCalc");
    wind.set_xclass("FerrisCalc");

    let mut flex = Flex::new(
        MARGIN,
        MARGIN,
        WINDOW_WIDTH - 2 * MARGIN,
        WINDOW_HEIGHT - 2 * MARGIN,
        None,
    );
    flex.set_type(FlexType::Column);
    flex.set_spacing(KEY_SPACING);

    // Keyboard input is not handled; only the keypad edits the expression.
    let mut display = Input::default();
    display.set_readonly(true);
    display.set_text_font(Font::Courier);
    display.set_text_size(settings.font_size as i32);
    display.clear_visible_focus();
    flex.fixed(&display, DISPLAY_HEIGHT);

    let buttons = build_keypad(sender);

    flex.end();
    wind.end();
    wind.make_resizable(false);

    // Route the close button through the dispatcher instead of the default hide.
    let close_sender = sender.clone();
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            close_sender.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        display,
        buttons,
    }
}
