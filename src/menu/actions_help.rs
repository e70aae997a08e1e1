use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

pub fn setup(app: &Application, window: &ApplicationWindow) {
    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("pview")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("An interactive periodic table of the elements, written in Rust and GTK4.")
                .authors(vec!["Mavens Group".to_string()])
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);
}
