use anyhow::Result;
use serde::Serialize;
use serde_json::{Value, json};
use taqvim_convert::{Calendar, ConversionResult, TableEntry, leap_year_label};
use taqvim_time::Locale;

/// One-line summary of a date and its day attributes.
pub fn result_line(result: &ConversionResult, locale: Locale) -> String {
    let mut line = format!(
        "{} {} ({}",
        result.calendar.name(),
        result.date,
        result.weekday_name.name(locale),
    );
    if !result.calendar.is_long_count() {
        line.push_str(", ");
        line.push_str(leap_year_label(result.is_leap_year, locale));
    }
    line.push_str(&format!(") JD {}", result.jd));
    line
}

pub fn table_text(entries: &[TableEntry], locale: Locale) -> String {
    let width = entries
        .iter()
        .map(|e| e.calendar.name().len())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|entry| {
            let body = match &entry.outcome {
                Ok(r) if entry.calendar.is_long_count() => {
                    format!("{}  {}", r.date, r.weekday_name.name(locale))
                }
                Ok(r) => format!(
                    "{}  {}, {}",
                    r.date,
                    r.weekday_name.name(locale),
                    leap_year_label(r.is_leap_year, locale)
                ),
                Err(e) => format!("-  ({e})"),
            };
            format!("{:<width$}  {body}", entry.calendar.name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn table_json(entries: &[TableEntry]) -> Result<Value> {
    entries
        .iter()
        .map(|entry| -> Result<Value> {
            match &entry.outcome {
                Ok(r) => Ok(serde_json::to_value(r)?),
                Err(e) => Ok(json!({ "calendar": entry.calendar, "error": e.to_string() })),
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

pub fn calendar_lines() -> String {
    Calendar::ALL
        .iter()
        .map(|c| {
            let aliases = c.aliases();
            if aliases.is_empty() {
                format!("{:<18} {}", c.code(), c.name())
            } else {
                format!("{:<18} {} (also: {})", c.code(), c.name(), aliases.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn calendars_json() -> Value {
    Value::Array(
        Calendar::ALL
            .iter()
            .map(|c| json!({ "code": c.code(), "name": c.name(), "aliases": c.aliases() }))
            .collect(),
    )
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
