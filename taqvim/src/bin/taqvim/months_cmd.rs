use std::io::Write;

use anyhow::{Context, Result};

use taqvim::core::Year;
use taqvim::time::{generate_days_with, month_spans, CalendarDate, HolidayTable};

/// Print the months of a Persian year with the spans they cover.
pub fn run(year: Year, holidays: &HolidayTable, out: &mut impl Write) -> Result<()> {
    let days = generate_days_with(year, holidays)
        .with_context(|| format!("failed to generate Persian year {year}"))?;
    for span in month_spans(&days) {
        let (first, last) = (span.first(), span.last());
        let n_holidays = days
            .iter()
            .filter(|d| d.persian_date().month() == span.month() && d.is_holiday())
            .count();
        writeln!(
            out,
            "{:>2}  {:<24}  {:>2} days  {:>2} holidays  {}  |  {}",
            span.month(),
            title(first.persian_date(), last.persian_date()),
            span.len(),
            n_holidays,
            title(first.gregorian_date(), last.gregorian_date()),
            title(first.islamic_date(), last.islamic_date()),
        )?;
    }
    Ok(())
}

/// Name the months covered by `first..=last`, giving the year once when
/// both ends share it.
fn title(first: CalendarDate, last: CalendarDate) -> String {
    debug_assert_eq!(first.kind(), last.kind());
    if first.year() != last.year() {
        format!(
            "{} {} - {} {}",
            first.month_name(),
            first.year(),
            last.month_name(),
            last.year()
        )
    } else if first.month() != last.month() {
        format!("{} - {} {}", first.month_name(), last.month_name(), last.year())
    } else {
        format!("{} {}", first.month_name(), first.year())
    }
}
