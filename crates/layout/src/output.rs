//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;

/// Spinner currently drawn on stderr, if any
static ACTIVE_SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Highlight a name or command
pub fn highlight(text: &str) -> String {
    style(text).cyan().to_string()
}

/// Start a spinner, replacing any spinner already running
pub fn start_spinner(msg: &str) {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE_SPINNER.lock() {
        if let Some(previous) = active.replace(pb) {
            previous.finish_and_clear();
        }
    }
}

/// Stop and erase the running spinner
pub fn stop_spinner() {
    let previous = ACTIVE_SPINNER.lock().ok().and_then(|mut active| active.take());
    if let Some(pb) = previous {
        pb.finish_and_clear();
    }
}

fn active_spinner() -> Option<ProgressBar> {
    ACTIVE_SPINNER.lock().ok().and_then(|active| active.clone())
}

/// Log sink writing to stderr
///
/// While a spinner is running it is hidden for the duration of the write, so
/// log lines never end up inside the spinner line.
pub struct LogWriter;

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active_spinner() {
            Some(pb) => pb.suspend(|| io::stderr().write(buf)),
            None => io::stderr().write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match active_spinner() {
            Some(pb) => pb.suspend(|| io::stderr().write_all(buf)),
            None => io::stderr().write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        start_spinner("Cloning template...");
        assert!(active_spinner().is_some());

        start_spinner("Tidying dependencies...");
        assert_eq!(
            active_spinner().map(|pb| pb.message()),
            Some("Tidying dependencies...".to_string())
        );

        stop_spinner();
        assert!(active_spinner().is_none());
    }

    #[test]
    fn test_log_writer_without_spinner() {
        let mut writer = LogWriter;
        writer.write_all(b"").unwrap();
        writer.flush().unwrap();
    }
}
