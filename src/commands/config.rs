use anyhow::Result;
use owo_colors::OwoColorize;
use pickgrid_core::config::PickgridConfig;
use pickgrid_core::constants::{MAX_DAYS_ALLOWED, MAX_LOOKAHEAD_DAYS, WARNING_DURATION};

pub fn run() -> Result<()> {
    let config_path = PickgridConfig::config_path()?;
    let config = PickgridConfig::load()?;

    println!("{}", "Paths".bold());
    let exists = if config_path.exists() { "" } else { " (not found, using defaults)" };
    println!("  Config:  {}{}", config_path.display(), exists.dimmed());

    println!();
    println!("{}", "Settings".bold());
    println!("  Default timezone:  {}", config.default_timezone);
    let source = if config.special_dates.is_empty() { "built-in" } else { "config" };
    println!(
        "  Special dates:     {} ({})",
        config.registry().len(),
        source.dimmed()
    );

    println!();
    println!("{}", "Limits".bold());
    println!("  Max selection span:  {MAX_DAYS_ALLOWED} days");
    println!("  Max lookahead:       {MAX_LOOKAHEAD_DAYS} days");
    println!("  Warning shown for:   {}ms", WARNING_DURATION.as_millis());

    Ok(())
}
