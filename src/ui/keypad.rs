use fltk::{
    app::Sender,
    button::Button,
    enums::Font,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::keys::Key;
use crate::app::domain::messages::Message;

pub const KEY_SPACING: i32 = 6;
const KEY_LABEL_SIZE: i32 = 20;

/// Button labels, row by row. A row with a single label spans the full width.
pub const LAYOUT: [&[&str]; 5] = [
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

/// Keys in layout order.
pub fn layout_keys() -> Vec<Key> {
    LAYOUT
        .iter()
        .flat_map(|row| row.iter())
        .filter_map(|label| Key::from_label(label))
        .collect()
}

/// Build the button grid inside the currently open group.
///
/// Every button emits its key's message on `sender`.
pub fn build_keypad(sender: &Sender<Message>) -> Vec<(Key, Button)> {
    let mut buttons = Vec::new();

    for row_labels in LAYOUT {
        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        row.set_spacing(KEY_SPACING);

        for label in row_labels {
            let Some(key) = Key::from_label(label) else {
                continue;
            };
            let mut button = Button::default().with_label(label);
            button.set_label_size(KEY_LABEL_SIZE);
            button.set_label_font(Font::HelveticaBold);
            button.clear_visible_focus();
            button.emit(sender.clone(), key.message());
            buttons.push((key, button));
        }

        row.end();
    }

    buttons
}
