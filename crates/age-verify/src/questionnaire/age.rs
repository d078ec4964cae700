use chrono::{Datelike, Local, NaiveDate};

/// Whole years between `born` and `reference`, counting a year only once the
/// birthday has been reached in the reference year.
pub fn calculate_age(born: NaiveDate, reference: NaiveDate) -> i64 {
    let mut years = i64::from(reference.year()) - i64::from(born.year());
    if (reference.month(), reference.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years
}

/// Age as of the local calendar date.
pub fn age_today(born: NaiveDate) -> i64 {
    calculate_age(born, today())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
