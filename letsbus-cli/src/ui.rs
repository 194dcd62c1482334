//! Progress spinners
//!
//! Off under `--quiet`, with `LETSBUS_QUIET=1`, or when stderr isn't a terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static QUIET: OnceLock<bool> = OnceLock::new();

/// Decide quiet mode once, at startup.
pub fn init_quiet_mode(flag: bool) {
    let from_env = std::env::var("LETSBUS_QUIET").is_ok_and(|v| v == "1");
    let quiet = flag || from_env || !std::io::stderr().is_terminal();
    QUIET.set(quiet).ok();
}

fn is_quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}

/// A spinner on stderr that disappears when dropped
pub struct Spinner(Option<ProgressBar>);

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        if is_quiet() {
            return Self(None);
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self(Some(bar))
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.0.take() {
            bar.finish_and_clear();
        }
    }
}
