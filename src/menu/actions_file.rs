// src/menu/actions_file.rs
use gtk4::prelude::*;
use gtk4::Application;

pub fn setup(app: &Application) {
    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
