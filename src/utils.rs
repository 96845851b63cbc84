use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Spinner that stays up while a transient message is shown.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{spinner} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.yellow().to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
