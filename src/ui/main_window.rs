use fltk::{
    app::Sender,
    button::Button,
    frame::Frame,
    group::{Group, Wizard},
    input::Input,
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextDisplay},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::settings::Theme;

const WIN_W: i32 = 600;
const WIN_H: i32 = 430;
const MENU_H: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub wizard: Wizard,
    pub home: Group,
    pub converter: Group,
    pub settings: Group,
    pub last_file_frame: Frame,
    pub text_input: Input,
    pub hex_buffer: TextBuffer,
    pub hex_output: TextDisplay,
    pub hex_input: Input,
    pub theme_choice: Choice,
    pub labels: Vec<Frame>,
    pub buttons: Vec<Button>,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let s = sender;
    let mut labels = Vec::new();
    let mut buttons = Vec::new();

    let mut wind = Window::new(100, 100, WIN_W, WIN_H, "View/Edit HEX");
    wind.set_xclass("HexPad");

    let menu = MenuBar::new(0, 0, WIN_W, MENU_H, "");

    let mut wizard = Wizard::new(0, MENU_H, WIN_W, WIN_H - MENU_H, None);

    // Home screen: title, last-opened-file line, three buttons.
    let home = Group::default()
        .with_pos(0, MENU_H)
        .with_size(WIN_W, WIN_H - MENU_H);

    let mut title = Frame::default()
        .with_pos(0, 60)
        .with_size(WIN_W, 40)
        .with_label("View/Edit HEX");
    title.set_label_size(24);
    labels.push(title);

    let mut last_file_frame = Frame::default().with_pos(0, 110).with_size(WIN_W, 20);
    last_file_frame.set_label_size(11);

    let mut start_btn = Button::default()
        .with_pos(250, 160)
        .with_size(100, 30)
        .with_label("Start");
    start_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ShowConverter)
    });
    buttons.push(start_btn);

    let mut home_settings_btn = Button::default()
        .with_pos(250, 200)
        .with_size(100, 30)
        .with_label("Settings");
    home_settings_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ShowSettings)
    });
    buttons.push(home_settings_btn);

    let mut exit_btn = Button::default()
        .with_pos(250, 240)
        .with_size(100, 30)
        .with_label("Exit");
    exit_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::FileQuit)
    });
    buttons.push(exit_btn);

    home.end();

    // Converter screen: text -> hex on top, hex -> text below.
    let converter = Group::default()
        .with_pos(0, MENU_H)
        .with_size(WIN_W, WIN_H - MENU_H);

    labels.push(label_frame(20, 45, "Plain text:"));
    let text_input = Input::default().with_pos(20, 70).with_size(560, 25);

    let mut to_hex_btn = Button::default()
        .with_pos(20, 105)
        .with_size(190, 30)
        .with_label("Convert to Hexadecimal");
    to_hex_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ConvertToHex)
    });
    buttons.push(to_hex_btn);

    labels.push(label_frame(20, 145, "Hex output:"));
    let hex_buffer = TextBuffer::default();
    let mut hex_output = TextDisplay::default().with_pos(20, 170).with_size(560, 80);
    hex_output.set_buffer(hex_buffer.clone());
    hex_output.set_text_font(fltk::enums::Font::Courier);
    hex_output.wrap_mode(fltk::text::WrapMode::AtBounds, 0);

    labels.push(label_frame(20, 260, "Hex text (to convert back):"));
    let hex_input = Input::default().with_pos(20, 285).with_size(560, 25);

    let mut to_text_btn = Button::default()
        .with_pos(20, 320)
        .with_size(140, 30)
        .with_label("Convert to Text");
    to_text_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ConvertToText)
    });
    buttons.push(to_text_btn);

    let mut conv_back_btn = Button::default()
        .with_pos(480, 320)
        .with_size(100, 30)
        .with_label("Back");
    conv_back_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ShowHome)
    });
    buttons.push(conv_back_btn);

    converter.end();

    // Settings screen: theme picker.
    let settings = Group::default()
        .with_pos(0, MENU_H)
        .with_size(WIN_W, WIN_H - MENU_H);

    labels.push(label_frame(20, 60, "Theme:"));
    let mut theme_choice = Choice::default().with_pos(20, 90).with_size(200, 25);
    for theme in Theme::all() {
        theme_choice.add_choice(theme.name());
    }
    theme_choice.set_callback({
        let s = *s;
        move |c| {
            if c.value() >= 0 {
                if let Some(theme) = Theme::all().get(c.value() as usize) {
                    s.send(Message::SetTheme(*theme));
                }
            }
        }
    });

    let mut settings_back_btn = Button::default()
        .with_pos(20, 130)
        .with_size(100, 30)
        .with_label("Back");
    settings_back_btn.set_callback({
        let s = *s;
        move |_| s.send(Message::ShowHome)
    });
    buttons.push(settings_back_btn);

    settings.end();

    wizard.end();
    wizard.set_current_widget(&home);

    wind.end();

    MainWidgets {
        wind,
        menu,
        wizard,
        home,
        converter,
        settings,
        last_file_frame,
        text_input,
        hex_buffer,
        hex_output,
        hex_input,
        theme_choice,
        labels,
        buttons,
    }
}

fn label_frame(x: i32, y: i32, label: &str) -> Frame {
    Frame::default()
        .with_pos(x, y)
        .with_size(560, 20)
        .with_label(label)
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside)
}
