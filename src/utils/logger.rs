// src/utils/logger.rs

use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

fn icon(level: Level) -> &'static str {
  match level {
    Level::Error => "🔴",
    Level::Warn => "🟠",
    Level::Info => "🔵",
    Level::Debug => "⚪",
    Level::Trace => "▫️",
  }
}

/// Console logger on stderr. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
  // Format: "🔴  File not found"
  let _ = Builder::from_env(Env::default().default_filter_or("info"))
    .format(|buf, record| writeln!(buf, "{}  {}", icon(record.level()), record.args()))
    .try_init();
}
