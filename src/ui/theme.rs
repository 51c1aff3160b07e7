use fltk::{
    button::Button,
    enums::{Color, FrameType},
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::domain::keys::Key;

struct Palette {
    window: Color,
    display_bg: Color,
    display_fg: Color,
    digit: Color,
    operator: Color,
    action: Color,
    label: Color,
}

const LIGHT: Palette = Palette {
    window: Color::from_rgb(240, 240, 240),
    display_bg: Color::White,
    display_fg: Color::Black,
    digit: Color::from_rgb(250, 250, 250),
    operator: Color::from_rgb(222, 165, 132), // Ferris orange, muted
    action: Color::from_rgb(200, 200, 200),
    label: Color::Black,
};

const DARK: Palette = Palette {
    window: Color::from_rgb(25, 25, 25),
    display_bg: Color::from_rgb(30, 30, 30),
    display_fg: Color::from_rgb(220, 220, 220),
    digit: Color::from_rgb(50, 50, 50),
    operator: Color::from_rgb(165, 75, 40),
    action: Color::from_rgb(70, 70, 70),
    label: Color::from_rgb(220, 220, 220),
};

pub fn apply_theme(
    window: &mut Window,
    display: &mut Input,
    buttons: &mut [(Key, Button)],
    is_dark: bool,
) {
    let palette = if is_dark { &DARK } else { &LIGHT };

    window.set_color(palette.window);
    window.set_label_color(palette.label);

    display.set_color(palette.display_bg);
    display.set_text_color(palette.display_fg);
    display.set_selection_color(palette.operator);

    for (key, button) in buttons.iter_mut() {
        let color = match key {
            Key::Token(_) if key.is_operator() => palette.operator,
            Key::Token(_) => palette.digit,
            Key::Clear | Key::Evaluate => palette.action,
        };
        button.set_frame(FrameType::RoundedBox);
        button.set_color(color);
        button.set_selection_color(color.darker());
        button.set_label_color(palette.label);
        button.redraw();
    }

    display.redraw();
    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if is_dark { 1 } else { 0 };

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        // 20 = DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 10 2004+), 19 on older builds
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
