use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use taqvim::core::Year;
use taqvim::time::{generate_days_with, Day, HolidayTable};

use crate::cli::{Format, YearArgs};

const CSV_HEADER: &str = "persian,gregorian,islamic,weekday,week_of_month,is_holiday,labels";

/// Print every day of a Persian year.
pub fn run(
    args: &YearArgs,
    year: Year,
    holidays: &HolidayTable,
    out: &mut impl Write,
) -> Result<()> {
    let days = generate_days_with(year, holidays)
        .with_context(|| format!("failed to generate Persian year {year}"))?;
    info!(year, n_days = days.len(), format = ?args.format, "writing year");

    if args.format == Format::Csv {
        writeln!(out, "{CSV_HEADER}")?;
    }
    for day in days.iter().filter(|d| !args.holidays_only || d.is_holiday()) {
        match args.format {
            Format::Text => write_text_row(out, day, holidays)?,
            Format::Csv => write_csv_row(out, day, holidays)?,
        }
    }
    Ok(())
}

fn write_text_row(out: &mut impl Write, day: &Day, holidays: &HolidayTable) -> Result<()> {
    let mark = if day.is_holiday() { '*' } else { ' ' };
    let labels = day.holiday_labels(holidays).join("، ");
    let line = format!(
        "{}  {}  {}  {:<9}  w{}  {mark} {labels}",
        day.persian_date(),
        day.gregorian_date(),
        day.islamic_date(),
        day.weekday(),
        day.week_of_month(),
    );
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn write_csv_row(out: &mut impl Write, day: &Day, holidays: &HolidayTable) -> Result<()> {
    writeln!(
        out,
        "{},{},{},{},{},{},{}",
        day.persian_date(),
        day.gregorian_date(),
        day.islamic_date(),
        day.weekday(),
        day.week_of_month(),
        day.is_holiday(),
        csv_field(&day.holiday_labels(holidays).join("; ")),
    )?;
    Ok(())
}

/// Quote a CSV field when it contains a separator, quote, or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(year: Year, format: Format, holidays_only: bool, table: &HolidayTable) -> String {
        let args = YearArgs {
            year: Some(year),
            format,
            holidays_only,
        };
        let mut buf = Vec::new();
        run(&args, year, table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_lists_every_day() {
        let text = render(1403, Format::Text, false, &HolidayTable::official());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 365);
        assert!(lines[0].starts_with("1403-01-01  2024-03-20  1445-09-10  Wednesday  w1  *"));
        assert!(lines[0].ends_with("عید نوروز"));
        // 1403-01-05 is a Sunday with no listed holiday.
        assert_eq!(lines[4], "1403-01-05  2024-03-24  1445-09-14  Sunday     w2");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = render(1401, Format::Csv, false, &HolidayTable::official());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 366);
        assert!(lines[1].starts_with("1401-01-01,2022-03-21,1443-08-17,Monday,1,true,"));
        assert_eq!(
            lines[365],
            "1401-12-29,2023-03-20,1444-08-27,Monday,5,true,روز ملی شدن صنعت نفت"
        );
    }

    #[test]
    fn holidays_only_filters_rows() {
        let table = HolidayTable::empty();
        let text = render(1403, Format::Text, true, &table);
        // With an empty table only Fridays remain.
        assert!(text.lines().all(|l| l.contains("Friday")));
        assert_eq!(text.lines().count(), 52);
    }

    #[test]
    fn csv_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
