/// All messages that can be sent through the FLTK channel.
/// Each button callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Keypad
    Append(char),
    Clear,
    Evaluate,

    // Window
    WindowClose,
}
