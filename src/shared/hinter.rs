use crossterm::style::Stylize;

/// Progress and confirmation output goes to stderr so stdout stays clean
/// for shell consumers.
pub fn streamlog(text: &str) {
    eprintln!("{text}");
}

pub fn warn(text: &str) {
    eprintln!("{} {text}", " WARN ".black().on_green());
}

pub fn error(text: &str) {
    eprintln!("{} {}", " ERROR ".black().on_green(), text.red());
}
