use anyhow::Result;
use owo_colors::OwoColorize;
use pickgrid_core::config::PickgridConfig;
use pickgrid_core::picker::DatePicker;
use pickgrid_core::timezone::Timezone;
use pickgrid_core::warning::{Scheduler, TokioScheduler, WarningTask};
use pickgrid_core::{DateKey, ValidationOutcome};
use tokio::sync::mpsc::UnboundedReceiver;

use super::instant_or_now;
use crate::render::Render;
use crate::utils::create_spinner;

pub struct SelectArgs {
    pub start: String,
    pub end: Option<String>,
    pub now: Option<String>,
    pub tz: Option<String>,
    pub toggle: bool,
}

pub async fn run(config: &PickgridConfig, args: SelectArgs) -> Result<()> {
    let now = instant_or_now(args.now.as_deref())?;
    let first: DateKey = args.start.parse()?;
    let last: DateKey = match args.end.as_deref() {
        Some(s) => s.parse()?,
        None => first,
    };

    let timezone = match args.tz.as_deref() {
        Some(name) => name.parse::<Timezone>()?,
        None => config.default_timezone,
    };

    log::debug!("selection shown in {timezone}, now is {now}");

    let (scheduler, fired) = TokioScheduler::new();
    let mut picker = DatePicker::new(config.registry(), timezone, scheduler);

    // Only cells the grid shows can be selected
    let interval = picker.calendar_view(&now).valid_range.select(first, last)?;
    let outcome = picker.select(&interval, now);
    println!("{}", outcome.render());

    match outcome {
        ValidationOutcome::Accepted(_) => {
            show_selection(&picker);

            if args.toggle {
                let entry = picker.toggle_selected()?;
                let state = if entry.disabled { "disabled" } else { "enabled" };
                println!("   {} {}", "Date is now".dimmed(), state.bold());
            }
        }
        ValidationOutcome::RejectedSpanTooLong => wait_for_warning(&mut picker, fired).await,
        _ => {}
    }

    Ok(())
}

fn show_selection<S: Scheduler<WarningTask>>(picker: &DatePicker<S>) {
    if let Some(display) = picker.selected_display() {
        println!("   {} {}", picker.timezone().to_string().dimmed(), display);
    }

    if let Some((key, entry)) = picker.selected_entry() {
        let state = if entry.disabled { "disabled" } else { "enabled" };
        println!("   {} {} ({})", key.to_string().dimmed(), entry.message, state);
    }
}

/// Keep the span warning on screen until its timer clears it.
async fn wait_for_warning(
    picker: &mut DatePicker<TokioScheduler<WarningTask>>,
    mut fired: UnboundedReceiver<WarningTask>,
) {
    let spinner = create_spinner(pickgrid_core::validator::span_warning_text());

    while picker.warning().is_visible() {
        match fired.recv().await {
            Some(task) => {
                picker.warning_mut().apply(task);
            }
            None => break,
        }
    }

    spinner.finish_and_clear();
}
