pub mod keypad;
pub mod main_window;
pub mod theme;
