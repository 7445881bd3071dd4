use fltk::{app, dialog, prelude::*};
use std::fs;

use super::codec;
use super::file_filters::text_files_filter;
use super::messages::Message;
use super::settings::{SettingsStore, Theme};
use crate::ui::file_dialogs::native_open_dialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;

pub struct AppState {
    pub widgets: MainWidgets,
    pub store: SettingsStore,
}

impl AppState {
    pub fn new(widgets: MainWidgets, store: SettingsStore) -> Self {
        let mut state = Self { widgets, store };
        state
            .widgets
            .theme_choice
            .set_value(theme_index(state.store.settings().theme));
        state.refresh_last_opened();
        state
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ShowHome => self.show_home(),
            Message::ShowConverter => self.show_converter(),
            Message::ShowSettings => self.show_settings(),
            Message::ConvertToHex => self.convert_to_hex(),
            Message::ConvertToText => self.convert_to_text(),
            Message::FileOpen => self.open_file(),
            Message::SetTheme(theme) => self.set_theme(theme),
            Message::FileQuit => app::quit(),
        }
    }

    fn show_home(&mut self) {
        self.widgets.wizard.set_current_widget(&self.widgets.home);
    }

    fn show_converter(&mut self) {
        self.widgets
            .wizard
            .set_current_widget(&self.widgets.converter);
    }

    fn show_settings(&mut self) {
        self.widgets
            .wizard
            .set_current_widget(&self.widgets.settings);
    }

    fn convert_to_hex(&mut self) {
        let text = self.widgets.text_input.value();
        if text.is_empty() {
            dialog::alert_default("Please enter some text to convert.");
            return;
        }
        self.widgets.hex_buffer.set_text(&codec::encode_to_hex(&text));
    }

    fn convert_to_text(&mut self) {
        let input = self.widgets.hex_input.value();
        if input.is_empty() {
            dialog::alert_default("Please enter a hex string to convert.");
            return;
        }
        match codec::decode_from_hex(&input) {
            Ok(text) => dialog::message_default(&format!("Converted text: {}", text)),
            Err(e) => dialog::alert_default(&format!("The hex string is not valid: {}", e)),
        }
    }

    /// Open a text file, fill the plain-text input with its contents and
    /// convert immediately. The chosen path is persisted.
    fn open_file(&mut self) {
        let Some(path) = native_open_dialog("Open Text File", &text_files_filter()) else {
            return;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                self.show_converter();
                self.widgets.text_input.set_value(&content);
                self.convert_to_hex();

                if let Err(e) = self.store.set_last_opened_file(&path) {
                    dialog::alert_default(&format!("Error saving settings: {}", e));
                }
                self.refresh_last_opened();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        if let Err(e) = self.store.set_theme(theme) {
            dialog::alert_default(&format!("Error saving settings: {}", e));
        }
        apply_theme(&mut self.widgets, theme);
    }

    fn refresh_last_opened(&mut self) {
        let label = match &self.store.settings().last_opened_file {
            Some(path) => format!("Last opened: {}", path),
            None => "Last opened: none".to_string(),
        };
        self.widgets.last_file_frame.set_label(&label);
    }
}

/// Convert a theme to its dropdown index
fn theme_index(theme: Theme) -> i32 {
    Theme::all()
        .iter()
        .position(|t| *t == theme)
        .map(|i| i as i32)
        .unwrap_or(0)
}
