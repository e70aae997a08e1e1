// src/menu/actions_view.rs

use crate::model::Language;
use crate::state::AppState;
use crate::ui;
use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    table_holder: &gtk4::Box,
    log_revealer: &Revealer,
) {
    // 1. Toggle Log Panel
    let act_log = gtk4::gio::SimpleAction::new("toggle_log", None);
    let s_log = state.clone();
    let rev_weak = log_revealer.downgrade();

    act_log.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            let show = !rev.reveals_child();
            rev.set_reveal_child(show);

            let mut st = s_log.borrow_mut();
            st.config.show_log_panel = show;
            st.save_config();
        }
    });
    app.add_action(&act_log);

    // 2. Language (stateful, "zh" / "en")
    let current = state.borrow().language().code().to_variant();
    let act_lang =
        gtk4::gio::SimpleAction::new_stateful("language", Some(glib::VariantTy::STRING), &current);
    let s_lang = state.clone();
    let win_weak = window.downgrade();
    let holder_weak = table_holder.downgrade();

    act_lang.connect_change_state(move |action, value| {
        let Some(code) = value.and_then(|v| v.str()) else {
            return;
        };
        let Some(language) = Language::from_code(code) else {
            log::warn!("Unknown language '{}'", code);
            return;
        };
        if s_lang.borrow().language() == language {
            return;
        }

        action.set_state(&code.to_variant());
        {
            let mut st = s_lang.borrow_mut();
            st.config.language = language;
            st.save_config();
        }
        log::info!("Language set to {}.", language.code());

        if let Some(win) = win_weak.upgrade() {
            win.set_title(Some(language.title()));
        }
        if let Some(holder) = holder_weak.upgrade() {
            ui::populate_table(&holder, &s_lang.borrow());
        }
    });
    app.add_action(&act_lang);
}
