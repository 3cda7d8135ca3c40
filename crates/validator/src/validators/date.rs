//! Calendar date validators for `DD/MM/YYYY` input.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::foundation::{ErrorKind, Validate, ValidationError};

static DMY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").unwrap()
});

/// Two-digit years are not accepted as literal years.
const MIN_YEAR: u32 = 100;

/// Parses a `DD/MM/YYYY` date that exists on the calendar.
///
/// Both the shape and the date are checked: `31/02/2024` has the right
/// shape but is not a date, and `1/2/2024` is a date in the wrong shape.
/// Only ASCII digits are accepted, and years below 100 are rejected.
///
/// ```
/// use castra_validator::validators::parse_date_dmy;
///
/// let date = parse_date_dmy("29/02/2024").unwrap();
/// assert_eq!(date.to_string(), "2024-02-29");
/// assert!(parse_date_dmy("29/02/2023").is_err());
/// ```
pub fn parse_date_dmy(input: &str) -> Result<NaiveDate, ValidationError> {
    let shape_error = || ValidationError::invalid_format("", "DD/MM/YYYY");
    let caps = DMY_REGEX.captures(input).ok_or_else(shape_error)?;

    let part = |i: usize| caps[i].parse::<u32>().map_err(|_| shape_error());
    let (day, month, year) = (part(1)?, part(2)?, part(3)?);

    let nonexistent = || {
        ValidationError::new("date_nonexistent", "Date does not exist on the calendar")
            .with_param("day", day.to_string())
            .with_param("month", month.to_string())
            .with_param("year", year.to_string())
    };

    if year < MIN_YEAR {
        return Err(nonexistent());
    }
    let year = i32::try_from(year).map_err(|_| nonexistent())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(nonexistent)
}

/// Full years between `birth` and `today`.
///
/// A birthday not yet reached in `today`'s year does not count. Negative for
/// birth dates in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates a `DD/MM/YYYY` date string.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::DateDmy;
/// use castra_validator::foundation::Validate;
///
/// assert!(DateDmy.validate("29/02/2024").is_ok());
/// assert!(DateDmy.validate("31/02/2024").is_err());
/// assert!(DateDmy.validate("2024-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateDmy;

impl Validate for DateDmy {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        parse_date_dmy(input).map(|_| ())
    }
}

/// Factory for [`DateDmy`].
#[must_use]
pub const fn date_dmy() -> DateDmy {
    DateDmy
}

// ============================================================================
// MINIMUM AGE VALIDATOR
// ============================================================================

/// Validates that a `DD/MM/YYYY` birth date is at least `years` old on
/// `today`.
///
/// The reference day is a field rather than a clock read so the outcome
/// depends only on the inputs; [`MinimumAge::as_of_today`] reads the local
/// clock once at construction.
///
/// # Examples
///
/// ```
/// use castra_validator::validators::MinimumAge;
/// use castra_validator::foundation::Validate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let adult = MinimumAge::new(18, today);
/// assert!(adult.validate("15/06/2006").is_ok());
/// assert!(adult.validate("16/06/2006").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimumAge {
    /// Required age in full years.
    pub years: u32,
    /// Day the age is measured on.
    pub today: NaiveDate,
}

impl MinimumAge {
    /// Creates a validator measuring age on `today`.
    #[must_use]
    pub fn new(years: u32, today: NaiveDate) -> Self {
        Self { years, today }
    }

    /// Creates a validator measuring age on the current local date.
    #[must_use]
    pub fn as_of_today(years: u32) -> Self {
        Self::new(years, Local::now().date_naive())
    }
}

impl Validate for MinimumAge {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let birth = parse_date_dmy(input)?;
        let age = age_on(birth, self.today);

        if i64::from(age) >= i64::from(self.years) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "minimum_age",
                format!("Must be at least {} years old", self.years),
            )
            .with_param("min", self.years.to_string())
            .with_param("actual", age.to_string())
            .with_kind(ErrorKind::OutOfRange))
        }
    }
}
