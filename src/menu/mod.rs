// src/menu/mod.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  table_holder: &gtk4::Box,
  log_revealer: &Revealer,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app);
  actions_view::setup(app, window, state, table_holder, log_revealer);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.toggle_log", &["F9"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Toggle Log Panel"), Some("app.toggle_log"));

  let language_submenu = gtk4::gio::Menu::new();
  language_submenu.append(Some("中文"), Some("app.language::zh"));
  language_submenu.append(Some("English"), Some("app.language::en"));
  view_menu.append_submenu(Some("Language"), &language_submenu);
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
