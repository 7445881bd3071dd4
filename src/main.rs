use fltk::{app, dialog, prelude::*};

use hex_pad::app::messages::Message;
use hex_pad::app::settings::SettingsStore;
use hex_pad::app::state::AppState;
use hex_pad::ui::main_window::build_main_window;
use hex_pad::ui::menu::build_menu;
use hex_pad::ui::theme::apply_theme;

fn main() {
    let a = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    // A broken settings file must not keep the app from starting.
    let store = SettingsStore::load(SettingsStore::default_path()).unwrap_or_else(|e| {
        dialog::alert_default(&format!("Error loading settings: {}", e));
        SettingsStore::with_defaults(SettingsStore::default_path())
    });

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender);
    apply_theme(&mut widgets, store.settings().theme);

    widgets.wind.show();

    let mut state = AppState::new(widgets, store);

    while a.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
