use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use taqvim::time::{holidays, CalendarKind, HolidayTable};

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaqvimConfig {
    /// Holiday table overrides.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

/// The `[holidays]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Start from an empty table instead of the official one.
    #[serde(default)]
    pub replace_defaults: bool,

    /// Extra Persian-calendar holidays.
    #[serde(default)]
    pub persian: Vec<HolidayEntry>,

    /// Extra Islamic-calendar holidays.
    #[serde(default)]
    pub islamic: Vec<HolidayEntry>,
}

/// One listed day of the year.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidayEntry {
    /// Month number in the entry's calendar.
    pub month: u8,
    /// Day of the month.
    pub day: u8,
    /// Holiday name; empty when omitted.
    #[serde(default)]
    pub label: String,
}

impl TaqvimConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

impl HolidaysToml {
    /// Build the holiday table these settings describe.
    pub fn build(&self) -> Result<HolidayTable> {
        let mut table = if self.replace_defaults {
            HolidayTable::empty()
        } else {
            HolidayTable::official()
        };
        for (kind, entries) in [
            (CalendarKind::Persian, &self.persian),
            (CalendarKind::Islamic, &self.islamic),
        ] {
            for e in entries {
                table
                    .insert(kind, e.month, e.day, e.label.clone())
                    .with_context(|| {
                        format!("bad [holidays].{kind} entry {}/{}", e.month, e.day)
                    })?;
            }
        }
        Ok(table)
    }
}

/// Load `path` (if given) and install its holiday table process-wide.
///
/// Without a path the official table stays in effect.
pub fn install(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    info!(path = %path.display(), "loading configuration");
    let config = TaqvimConfig::load(path)?;
    let table = config.holidays.build()?;
    holidays::install(table).context("failed to install holiday table")
}
