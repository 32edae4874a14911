use chrono::{Local, Locale, NaiveDate};
use serde::{Deserialize, Serialize};

/// Locale used for the publish date and every piece of screen text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocale {
    #[default]
    Ru,
    En,
}

impl DisplayLocale {
    fn chrono_locale(&self) -> Locale {
        match self {
            DisplayLocale::Ru => Locale::ru_RU,
            DisplayLocale::En => Locale::en_US,
        }
    }
}

/// Formats `date` as "day month year" with a long month name.
pub fn format_date(date: NaiveDate, locale: DisplayLocale) -> String {
    let formatted = date.format_localized("%-d %B %Y", locale.chrono_locale());
    match locale {
        DisplayLocale::Ru => format!("{} г.", formatted),
        DisplayLocale::En => formatted.to_string(),
    }
}

/// Source of "today" for stamping new articles.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
