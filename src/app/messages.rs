use super::settings::Theme;

/// All messages that can be sent through the FLTK channel.
/// Menu items and buttons send one of these; the dispatch loop in main
/// hands them to `AppState`.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Navigation
    ShowHome,
    ShowConverter,
    ShowSettings,

    // Conversion
    ConvertToHex,
    ConvertToText,

    // File
    FileOpen,
    FileQuit,

    // Settings
    SetTheme(Theme),
}
