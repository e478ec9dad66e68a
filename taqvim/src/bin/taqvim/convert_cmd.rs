use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use taqvim::time::{CalendarDate, CalendarKind, HolidayTable};

use crate::cli::ConvertArgs;

/// Convert one date into all three calendars.
pub fn run(args: &ConvertArgs, holidays: &HolidayTable, out: &mut impl Write) -> Result<()> {
    let input = CalendarDate::parse(args.calendar, &args.date)
        .with_context(|| format!("invalid {} date {:?}", args.calendar, args.date))?;
    debug!(%input, jd = %input.to_jdn(), "parsed input date");

    for kind in CalendarKind::ALL {
        let date = input
            .convert(kind)
            .with_context(|| format!("{input} has no {kind} equivalent"))?;
        writeln!(
            out,
            "{:<10} {}  {} {} {}",
            kind.as_str(),
            date,
            date.day(),
            date.month_name(),
            date.year()
        )?;
    }

    let weekday = input.weekday();
    writeln!(out, "{:<10} {} ({})", "weekday", weekday, weekday.persian_name())?;
    writeln!(out, "{:<10} {}", "julian day", input.to_jdn())?;

    let persian = input.convert(CalendarKind::Persian)?;
    let islamic = input.convert(CalendarKind::Islamic)?;
    if holidays.is_holiday(weekday, &persian, &islamic) {
        let labels = holidays.labels(&persian, &islamic);
        if labels.is_empty() {
            writeln!(out, "{:<10} yes", "holiday")?;
        } else {
            writeln!(out, "{:<10} yes ({})", "holiday", labels.join("، "))?;
        }
    } else {
        writeln!(out, "{:<10} no", "holiday")?;
    }
    Ok(())
}
