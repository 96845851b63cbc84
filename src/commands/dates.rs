use anyhow::Result;
use owo_colors::OwoColorize;
use pickgrid_core::DateKey;
use pickgrid_core::config::PickgridConfig;
use pickgrid_core::date_range::ValidRange;
use pickgrid_core::picker::CalendarView;

use super::instant_or_now;
use crate::render::Render;

pub fn run(config: &PickgridConfig, toggles: &[String], json: bool, now: Option<&str>) -> Result<()> {
    let now = instant_or_now(now)?;
    let mut registry = config.registry();

    for date in toggles {
        let key: DateKey = date.parse()?;
        registry.toggle_disabled(&key)?;
    }

    let view = CalendarView {
        events: registry.decorations(),
        valid_range: ValidRange::current_year(&now),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "{} {} → {}",
        "Selectable".bold(),
        view.valid_range.start,
        view.valid_range.end
    );

    if view.events.is_empty() {
        println!("   {}", "No special dates".dimmed());
    }

    for event in &view.events {
        let disabled = registry
            .lookup(&event.date_key)
            .map(|entry| entry.disabled)
            .unwrap_or(false);
        let state = if disabled {
            "disabled".red().to_string()
        } else {
            "enabled".green().to_string()
        };
        println!("   {} {}", event.render(), state);
    }

    Ok(())
}
