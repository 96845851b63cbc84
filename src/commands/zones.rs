use anyhow::Result;
use owo_colors::OwoColorize;
use pickgrid_core::timezone::{Timezone, project};

use super::instant_or_now;

pub fn run(at: Option<&str>) -> Result<()> {
    let instant = instant_or_now(at)?;

    for zone in Timezone::ALL {
        println!("{:<18} {}", zone.name().bold(), project(&instant, zone));
    }

    Ok(())
}
