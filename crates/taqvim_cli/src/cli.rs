use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taqvim_convert::Calendar;
use taqvim_time::Locale;

use crate::config::OutputFormat;

/// Convert dates between calendars through the Julian Day.
#[derive(Parser)]
#[command(name = "taqvim", version, about = "Multi-calendar date converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: taqvim.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Label language for weekday and leap-year names: en or fa.
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a date from one calendar to another
    Convert {
        /// Date as YEAR-MONTH-DAY, or baktun.katun.tun.uinal.kin for the Long Count
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Source calendar (default from config)
        #[arg(long)]
        from: Option<Calendar>,
        /// Target calendar (default from config)
        #[arg(long)]
        to: Option<Calendar>,
        /// Conversion identifier such as gregorian_to_persian
        #[arg(long = "type", conflicts_with_all = ["from", "to"])]
        conversion: Option<String>,
    },
    /// Julian Day at the start of a date
    ToJd {
        /// Date as YEAR-MONTH-DAY, or baktun.katun.tun.uinal.kin for the Long Count
        #[arg(allow_hyphen_values = true)]
        date: String,
        /// Calendar of the date (default: the configured source)
        #[arg(long)]
        calendar: Option<Calendar>,
    },
    /// Date of the civil day containing a Julian Day
    FromJd {
        /// Julian Day
        #[arg(allow_negative_numbers = true)]
        jd: f64,
        /// Calendar to express the day in (default: the configured target)
        #[arg(long)]
        calendar: Option<Calendar>,
    },
    /// Day of the week
    Weekday {
        /// Date as YEAR-MONTH-DAY (omit when --jd is given)
        #[arg(allow_hyphen_values = true, required_unless_present = "jd")]
        date: Option<String>,
        /// Calendar of the date (default: the configured source)
        #[arg(long)]
        calendar: Option<Calendar>,
        /// Julian Day instead of a date
        #[arg(long, allow_negative_numbers = true, conflicts_with = "date")]
        jd: Option<f64>,
    },
    /// Whether a year is a leap year
    Leap {
        /// Year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Calendar (default: the configured source)
        #[arg(long)]
        calendar: Option<Calendar>,
    },
    /// Show one day in every calendar
    Table {
        /// Date as YEAR-MONTH-DAY (omit when --jd is given)
        #[arg(allow_hyphen_values = true, required_unless_present = "jd")]
        date: Option<String>,
        /// Calendar of the date (default: the configured source)
        #[arg(long)]
        calendar: Option<Calendar>,
        /// Julian Day instead of a date
        #[arg(long, allow_negative_numbers = true, conflicts_with = "date")]
        jd: Option<f64>,
    },
    /// List supported calendars and their codes
    Calendars,
}
