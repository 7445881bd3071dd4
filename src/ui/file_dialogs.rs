use fltk::dialog;

/// Blocking native open dialog. Returns None if the user cancelled.
pub fn native_open_dialog(title: &str, filter: &str) -> Option<String> {
    dialog::file_chooser(title, filter, ".", false)
}
