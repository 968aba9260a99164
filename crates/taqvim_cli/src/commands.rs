use anyhow::{Result, bail};
use serde_json::json;
use taqvim_convert::{
    Calendar, CalendarDate, CivilDate, LongCount, YEAR_LIMIT, convert, describe, is_leap_year,
    leap_year_label, parse_conversion_type, render_all, to_jd,
};
use taqvim_time::{Locale, Weekday, jd_to_mjd, jd_to_unix_days};
use tracing::{info, info_span};

use crate::cli::Command;
use crate::config::{OutputFormat, TaqvimConfig};
use crate::output;

/// Config values with command-line overrides applied.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub source: Calendar,
    pub target: Calendar,
    pub locale: Locale,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(
        config: &TaqvimConfig,
        locale: Option<Locale>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            source: config.defaults.source,
            target: config.defaults.target,
            locale: locale.unwrap_or(config.output.locale),
            format: format.unwrap_or(config.output.format),
        }
    }

    fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

pub fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Convert {
            date,
            from,
            to,
            conversion,
        } => run_convert(&date, from, to, conversion.as_deref(), settings),
        Command::ToJd { date, calendar } => {
            run_to_jd(&date, calendar.unwrap_or(settings.source), settings)
        }
        Command::FromJd { jd, calendar } => {
            run_from_jd(jd, calendar.unwrap_or(settings.target), settings)
        }
        Command::Weekday { date, calendar, jd } => {
            let jd = resolve_jd(date.as_deref(), calendar.unwrap_or(settings.source), jd)?;
            run_weekday(jd, settings)
        }
        Command::Leap { year, calendar } => {
            run_leap(year, calendar.unwrap_or(settings.source), settings)
        }
        Command::Table { date, calendar, jd } => {
            let jd = resolve_jd(date.as_deref(), calendar.unwrap_or(settings.source), jd)?;
            run_table(jd, settings)
        }
        Command::Calendars => run_calendars(settings),
    }
}

/// Parse `text` in the shape `calendar` expects.
fn parse_date(calendar: Calendar, text: &str) -> Result<CalendarDate> {
    let date = if calendar.is_long_count() {
        CalendarDate::from(text.parse::<LongCount>()?)
    } else {
        CalendarDate::from(text.parse::<CivilDate>()?)
    };
    Ok(date)
}

fn resolve_jd(date: Option<&str>, calendar: Calendar, jd: Option<f64>) -> Result<f64> {
    match (date, jd) {
        (_, Some(jd)) => Ok(jd),
        (Some(text), None) => Ok(to_jd(calendar, &parse_date(calendar, text)?)?),
        (None, None) => bail!("either a date or --jd is required"),
    }
}

fn run_convert(
    date: &str,
    from: Option<Calendar>,
    to: Option<Calendar>,
    conversion: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let (source, target) = match conversion {
        Some(c) => parse_conversion_type(c)?,
        None => (
            from.unwrap_or(settings.source),
            to.unwrap_or(settings.target),
        ),
    };
    let _span = info_span!("convert", %source, %target).entered();

    let parsed = parse_date(source, date)?;
    let result = convert(source, target, &parsed)?;
    info!(input = %parsed, output = %result.date, jd = result.jd, "conversion done");

    if settings.json() {
        output::print_json(&result)
    } else {
        println!("{}", output::result_line(&result, settings.locale));
        Ok(())
    }
}

fn run_to_jd(date: &str, calendar: Calendar, settings: &Settings) -> Result<()> {
    let _span = info_span!("to_jd", %calendar).entered();
    let parsed = parse_date(calendar, date)?;
    let jd = to_jd(calendar, &parsed)?;

    if settings.json() {
        output::print_json(&json!({
            "calendar": calendar,
            "date": parsed.to_string(),
            "jd": jd,
            "mjd": jd_to_mjd(jd),
            "unix_days": jd_to_unix_days(jd),
        }))
    } else {
        println!("{jd}");
        Ok(())
    }
}

fn run_from_jd(jd: f64, calendar: Calendar, settings: &Settings) -> Result<()> {
    let _span = info_span!("from_jd", %calendar, jd).entered();
    let result = describe(calendar, jd)?;

    if settings.json() {
        output::print_json(&result)
    } else {
        println!("{}", output::result_line(&result, settings.locale));
        Ok(())
    }
}

fn run_weekday(jd: f64, settings: &Settings) -> Result<()> {
    let _span = info_span!("weekday", jd).entered();
    // Range check shared with every other command.
    let start = describe(Calendar::Gregorian, jd)?.jd;
    let weekday = Weekday::from_jd(start);

    if settings.json() {
        output::print_json(&json!({
            "jd": start,
            "weekday": weekday.index(),
            "weekday_name": weekday,
        }))
    } else {
        println!("{}", weekday.name(settings.locale));
        Ok(())
    }
}

/// Whether `year` exists in `calendar`'s year numbering.
fn year_is_numbered(calendar: Calendar, year: i32) -> bool {
    if year.unsigned_abs() > YEAR_LIMIT.unsigned_abs() {
        return false;
    }
    match calendar {
        Calendar::Julian | Calendar::Persian => year != 0,
        Calendar::Hebrew => year >= 1,
        _ => true,
    }
}

fn run_leap(year: i32, calendar: Calendar, settings: &Settings) -> Result<()> {
    if !year_is_numbered(calendar, year) {
        bail!("{} has no year {year}", calendar.name());
    }
    let leap = is_leap_year(calendar, year);

    if settings.json() {
        output::print_json(&json!({
            "calendar": calendar,
            "year": year,
            "is_leap_year": leap,
        }))
    } else {
        println!(
            "{year} ({}): {}",
            calendar.name(),
            leap_year_label(leap, settings.locale)
        );
        Ok(())
    }
}

fn run_table(jd: f64, settings: &Settings) -> Result<()> {
    let _span = info_span!("table", jd).entered();
    let rows = render_all(jd)?;

    if settings.json() {
        output::print_json(&output::table_json(&rows)?)
    } else {
        println!("{}", output::table_text(&rows, settings.locale));
        Ok(())
    }
}

fn run_calendars(settings: &Settings) -> Result<()> {
    if settings.json() {
        output::print_json(&output::calendars_json())
    } else {
        println!("{}", output::calendar_lines());
        Ok(())
    }
}
