use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, Frame, Orientation, ScrolledWindow, TextView};
use gtk4::{Revealer, RevealerTransitionType};
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod layout;
pub mod menu;
pub mod model;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;

fn main() {
    let app = Application::builder()
        .application_id("org.mavensgroup.pview")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    // Log panel first, so everything below is captured in it.
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    if let Err(e) = utils::logger::init(&console_view) {
        eprintln!("Logger already initialised: {}", e);
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    initial_state.load_elements();
    let state = Rc::new(RefCell::new(initial_state));

    let (title, width, height, show_log) = {
        let st = state.borrow();
        (
            st.language().title(),
            st.config.window_width,
            st.config.window_height,
            st.config.show_log_panel,
        )
    };

    let window = ApplicationWindow::builder()
        .application(app)
        .title(title)
        .default_width(width)
        .default_height(height)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu, Table, Log)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. Table area
    let table_holder = GtkBox::new(Orientation::Vertical, 0);
    let table_scroll = ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .child(&table_holder)
        .build();

    // 3. Log panel
    let info_frame = Frame::new(None);
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    let log_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideUp)
        .child(&info_frame)
        .reveal_child(show_log)
        .build();

    // 4. Menu Bar
    let menu_bar =
        menu::build_menu_and_actions(app, &window, state.clone(), &table_holder, &log_revealer);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&table_scroll);
    root_vbox.append(&log_revealer);

    ui::populate_table(&table_holder, &state.borrow());

    // Remember the window size for next time
    let s = state.clone();
    window.connect_close_request(move |win| {
        let (w, h) = win.default_size();
        if w > 0 && h > 0 {
            let mut st = s.borrow_mut();
            st.config.window_width = w;
            st.config.window_height = h;
            st.save_config();
        }
        gtk4::glib::Propagation::Proceed
    });

    window.present();
}
