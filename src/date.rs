//! `MM/DD/YYYY` input dates.
use chrono::NaiveDate;

/// Earliest accepted year.
pub const MIN_YEAR: i32 = 1900;

/// How far past the current year a date may lie.
pub const MAX_YEARS_AHEAD: i32 = 100;

fn components(date: &str) -> Vec<&str> {
    date.split(['/', '-']).collect()
}

/// Converts a `MM/DD/YYYY` (or `M-D-YY`, ...) date into the 8 digit
/// `MMDDYYYY` form used in the record.
///
/// Month and day are left-padded with `0`, and two digit years are taken to
/// be in the 2000s. Returns the empty string if `date` does not have exactly
/// three components. No other check is made: validate with
/// [`is_valid_date`] first.
pub fn normalize(date: &str) -> String {
    let parts = components(date);
    let [month, day, year] = parts.as_slice() else {
        return String::new();
    };

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };

    format!("{month:0>2}{day:0>2}{year}")
}

/// Checks that `date` is a real calendar date written `MM/DD/YYYY` (or with
/// `-` separators), with a year between 1900 and `current_year + 100`.
pub fn is_valid_date(date: &str, current_year: i32) -> bool {
    let parts = components(date);
    let [month, day, year] = parts.as_slice() else {
        return false;
    };

    let (Ok(month), Ok(day), Ok(year)) = (
        month.parse::<u32>(),
        day.parse::<u32>(),
        year.parse::<i32>(),
    ) else {
        return false;
    };

    if !(MIN_YEAR..=current_year + MAX_YEARS_AHEAD).contains(&year) {
        return false;
    }

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
