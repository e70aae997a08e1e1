// src/utils/logger.rs
//
// `log` backend that writes into the log panel at the bottom of the window.

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: PanelLogger = PanelLogger;

struct PanelLogger;

const TAGS: [(&str, &str); 4] = [
  ("error", "#ff4444"),
  ("warn", "#ffbb33"),
  ("info", "#33b5e5"),
  ("debug", "#aaaaaa"),
];

pub fn init(view: &TextView) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();

  for (name, colour) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", colour);
      if name == "error" {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = LOG_VIEW.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

fn tag_for(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "error"),
    Level::Warn => ("🟠", "warn"),
    Level::Info => ("🔵", "info"),
    Level::Debug => ("⚪", "debug"),
    Level::Trace => ("▫️", "debug"),
  }
}

impl log::Log for PanelLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Debug
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let (icon, tag_name) = tag_for(record.level());
    let msg = format!("{}  {}\n", icon, record.args());

    // Widgets may only be touched from the main loop.
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = LOG_VIEW.get().and_then(|weak| weak.upgrade()) else {
        eprint!("{}", msg);
        return;
      };

      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

      // Auto-scroll
      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_every_level_maps_to_a_known_tag() {
    let known: Vec<&str> = TAGS.iter().map(|(n, _)| *n).collect();
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
      let (_, tag) = tag_for(level);
      assert!(known.contains(&tag), "{:?}", level);
    }
  }
}
