//! Provides utilities for DMS (sexagesimal) notation degree.
//!
//! Lantmäteriet publishes geodetic control points in DMS notation,
//! e.g. `67°05′26.452769″`, this converts such notation from/to DD notation [`f64`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Returns a DMS notation [`String`] from a DD notation [`f64`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use swegrid::dms::to_dms;
/// #
/// assert_eq!(to_dms(60.5), Some("60°30′00″".to_string()));
/// assert_eq!(to_dms(-13.75), Some("-13°45′00″".to_string()));
/// assert_eq!(to_dms(f64::NAN), None);
/// ```
#[inline]
#[must_use]
pub fn to_dms(t: f64) -> Option<String> {
    DMS::try_from(t).ok().map(|x| x.to_string())
}

/// Returns a DD notation [`f64`] from a DMS notation [`str`].
///
/// # Errors
///
/// Returns [`None`] when the conversion fails.
///
/// # Example
///
/// ```
/// # use swegrid::dms::from_dms;
/// #
/// assert_eq!(from_dms("60°30′00″"), Some(60.5));
/// assert_eq!(from_dms("13 45 0 W"), Some(-13.75));
/// assert_eq!(from_dms("60°60′"), None);
/// ```
#[inline]
#[must_use]
pub fn from_dms(s: &str) -> Option<f64> {
    s.parse::<DMS>().ok().map(|x| x.to_degree())
}

/// Signature of DMS
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Sign {
    Positive,
    Negative,
}

/// Represents DMS notation latitude and/or longitude.
///
/// This supports -180.0 <= and <= 180.0 angle in degree (DD notation).
///
/// # Example
///
/// ```
/// # use swegrid::dms::*;
/// #
/// # fn wrapper() -> Option<()> {
/// let latitude = DMS::new(Sign::Positive, 67, 5, 26.452769)?;
/// assert_eq!(latitude.to_string(), "67°05′26.452769″");
///
/// // Construct from &str
/// assert_eq!("67°05′26.452769″".parse::<DMS>().ok()?, latitude);
/// assert_eq!("67 5 26.452769 N".parse::<DMS>().ok()?, latitude);
///
/// // Convert into DD notation (f64)
/// assert_eq!(latitude.to_degree(), 67.0 + 5.0 / 60.0 + 26.452769 / 3600.0);
///
/// // Construct from DD notation (f64)
/// let latitude = DMS::try_from(67.09068132472222).ok()?;
/// assert_eq!(latitude.sign(), &Sign::Positive);
/// assert_eq!(latitude.degree(), &67);
/// assert_eq!(latitude.minute(), &5);
/// assert!((latitude.second() - 26.452769).abs() < 1e-8);
/// assert_eq!(format!("{latitude:.3}"), "67°05′26.453″");
/// # Some(())}
/// # fn main() {wrapper();()}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DMS {
    sign: Sign,
    degree: u8,
    minute: u8,
    second: f64,
}

const SEPARATORS: [char; 6] = ['°', '′', '\'', '″', '"', ':'];

const MAX_PRECISION: usize = 15;

impl Display for DMS {
    /// Returns a DMS notation [`str`] which represents `self`.
    ///
    /// The precision, if given, is the number of decimals of second,
    /// which is capped at 15.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 21, 2, 5.101575)?;
    /// assert_eq!(format!("{}", dms), "21°02′05.101575″");
    /// assert_eq!(format!("{:.2}", dms), "21°02′05.10″");
    /// assert_eq!(format!("{:.0}", dms), "21°02′05″");
    ///
    /// let dms = DMS::new(Sign::Negative, 0, 59, 59.9999)?;
    /// assert_eq!(format!("{:.2}", dms), "-1°00′00.00″");
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let buf = match f.precision() {
            Some(precision) => {
                // keeps the scale finite
                let precision = precision.min(MAX_PRECISION);
                let scale = 10_f64.powi(precision as i32);
                let second = (self.second * scale).round() / scale;
                let (degree, minute, second) = carry(self.degree, self.minute, second);
                let width = if precision == 0 { 2 } else { precision + 3 };
                format!("{degree}°{minute:02}′{second:0width$.precision$}″")
            }
            None if self.second < 10.0 => {
                format!("{}°{:02}′0{}″", self.degree, self.minute, self.second)
            }
            None => format!("{}°{:02}′{}″", self.degree, self.minute, self.second),
        };

        if matches!(self.sign, Sign::Negative) {
            f.write_str("-")?;
        }
        f.write_str(&buf)
    }
}

impl FromStr for DMS {
    type Err = ParseDMSError;

    /// Makes a [`DMS`] from DMS notation [`&str`].
    ///
    /// Degree, minute and second are separated by `°`, `′`, `″`, `'`, `"`, `:`
    /// and/or whitespace, the minute and the second are optional.
    /// Degree and minute must be integers.
    /// The sign is given by a leading `+`/`-`,
    /// or by a trailing hemisphere letter `N`/`E` (positive) or `S`/`W` (negative).
    ///
    /// # Errors
    ///
    /// When `s` is invalid or out-of-range.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// assert_eq!(
    ///     "63°32′14.761735″".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Positive, 63, 32, 14.761735)?)
    /// );
    /// assert_eq!(
    ///     "16:14:59.594626".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Positive, 16, 14, 59.594626)?)
    /// );
    /// assert_eq!(
    ///     "-5°30'".parse::<DMS>(),
    ///     Ok(DMS::new(Sign::Negative, 5, 30, 0.0)?)
    /// );
    /// assert_eq!("63°60′".parse::<DMS>(), Err(ParseDMSError::OutOfBounds));
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDMSError::Empty);
        }

        let (sign, rest) = if let Some(rest) = s.strip_prefix(|c: char| c == '-' || c == '−') {
            (Some(Sign::Negative), rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Some(Sign::Positive), rest)
        } else {
            (None, s)
        };

        let (hemisphere, rest) = match rest.chars().next_back() {
            Some(c @ ('N' | 'n' | 'E' | 'e')) => {
                (Some(Sign::Positive), &rest[..rest.len() - c.len_utf8()])
            }
            Some(c @ ('S' | 's' | 'W' | 'w')) => {
                (Some(Sign::Negative), &rest[..rest.len() - c.len_utf8()])
            }
            _ => (None, rest),
        };

        let sign = match (sign, hemisphere) {
            (Some(_), Some(_)) => return Err(ParseDMSError::InvalidDigit),
            (Some(sign), None) | (None, Some(sign)) => sign,
            (None, None) => Sign::Positive,
        };

        let mut parts = rest
            .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
            .filter(|part| !part.is_empty());

        let degree = parts.next().ok_or(ParseDMSError::InvalidDigit)?;
        let minute = parts.next();
        let second = parts.next();
        if parts.next().is_some() {
            return Err(ParseDMSError::InvalidDigit);
        }

        let degree = parse_integer(degree)?;
        let minute = minute.map(parse_integer).transpose()?.unwrap_or(0);
        let second = second.map(parse_second).transpose()?.unwrap_or(0.0);

        Self::new(sign, degree, minute, second).ok_or(ParseDMSError::OutOfBounds)
    }
}

fn parse_integer(s: &str) -> Result<u8, ParseDMSError> {
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseDMSError::InvalidDigit);
    }

    // all digits, so the only failure left is overflow
    s.parse::<u8>().map_err(|_| ParseDMSError::OutOfBounds)
}

fn parse_second(s: &str) -> Result<f64, ParseDMSError> {
    if !s.chars().any(|c| c.is_ascii_digit())
        || !s.chars().all(|c| c.is_ascii_digit() || c == '.')
        || s.matches('.').count() > 1
    {
        return Err(ParseDMSError::InvalidDigit);
    }

    s.parse::<f64>().map_err(|_| ParseDMSError::InvalidDigit)
}

/// Moves 60″ into the minute and 60′ into the degree.
fn carry(degree: u8, minute: u8, second: f64) -> (u16, u8, f64) {
    let (minute, second) = if second >= 60.0 {
        (minute as u16 + 1, second - 60.0)
    } else {
        (minute as u16, second)
    };

    if minute >= 60 {
        (degree as u16 + 1, (minute - 60) as u8, second)
    } else {
        (degree as u16, minute as u8, second)
    }
}

impl TryFrom<f64> for DMS {
    type Error = TryFromDMSError;

    /// Makes a [`DMS`] from DD notation [`f64`].
    ///
    /// `value` is angle which satisfies -180.0 <= and <= 180.0.
    ///
    /// # Errors
    ///
    /// When `value` is NaN or not in -180.0 to 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// assert_eq!(
    ///     DMS::try_from(-13.75),
    ///     Ok(DMS::new(Sign::Negative, 13, 45, 0.0)?)
    /// );
    /// assert_eq!(DMS::try_from(180.5), Err(TryFromDMSError::OutOfBounds));
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(TryFromDMSError::NAN);
        } else if !(-180.0..=180.0).contains(&value) {
            return Err(TryFromDMSError::OutOfBounds);
        }

        let sign = if value.is_sign_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        };

        let value = value.abs();
        let mm = 60.0 * value.fract();
        let ss = 60.0 * mm.fract();

        // the products may round up to exactly 60.0
        let (degree, minute, second) = carry(value.trunc() as u8, mm.trunc() as u8, ss);
        let degree = u8::try_from(degree).map_err(|_| TryFromDMSError::OutOfBounds)?;

        Self::new(sign, degree, minute, second).ok_or(TryFromDMSError::OutOfBounds)
    }
}

impl DMS {
    /// Makes a [`DMS`].
    ///
    /// # Errors
    ///
    /// Returns [`None`] when the input is not in -180°0′0″ to 180°0′0″,
    /// or `minute` or `second` is not less than 60.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 56, 21, 17.199245)?;
    /// assert_eq!(dms.to_string(), "56°21′17.199245″");
    ///
    /// assert!(DMS::new(Sign::Positive, 56, 60, 0.0).is_none());
    /// assert!(DMS::new(Sign::Positive, 180, 0, 0.1).is_none());
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn new(sign: Sign, degree: u8, minute: u8, second: f64) -> Option<Self> {
        if second.is_nan()
            || degree == 180 && (minute > 0 || second > 0.0)
            || degree > 180
            || minute >= 60
            || !(0.0..60.0).contains(&second)
        {
            return None;
        }

        Some(Self {
            sign,
            degree,
            minute,
            // -0.0 to 0.0
            second: second + 0.0,
        })
    }

    /// Returns the sign of `self`.
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> &Sign {
        &self.sign
    }

    /// Returns the degree of `self`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> &u8 {
        &self.degree
    }

    /// Returns the minute of `self`.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> &u8 {
        &self.minute
    }

    /// Returns the second of `self`, including the fraction part.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> &f64 {
        &self.second
    }

    /// Returns a DD notation [`f64`] that `self` converts into.
    ///
    /// # Example
    ///
    /// ```
    /// # use swegrid::dms::*;
    /// #
    /// # fn wrapper() -> Option<()> {
    /// let dms = DMS::new(Sign::Positive, 60, 9, 33.882413)?;
    /// assert!((dms.to_degree() - 60.15941178138889).abs() < 1e-12);
    ///
    /// let dms = DMS::new(Sign::Negative, 60, 9, 33.882413)?;
    /// assert!((dms.to_degree() + 60.15941178138889).abs() < 1e-12);
    /// # Some(())}
    /// # fn main() {wrapper();()}
    /// ```
    #[inline]
    #[must_use]
    pub fn to_degree(&self) -> f64 {
        let temp = self.degree as f64 + self.minute as f64 / 60.0 + self.second / 3600.0;

        match self.sign {
            Sign::Positive => temp,
            Sign::Negative => -temp,
        }
    }
}

//
// Error
//

/// An error which can be returned on parsing DMS degree.
///
/// This error is used as the error type for the [`FromStr`] for [`DMS`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum ParseDMSError {
    #[error("cannot parse DMS from empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("cannot parse out-of-bounds DMS")]
    OutOfBounds,
}

/// An error which can be returned on converting DD notation degree into DMS.
///
/// This error is used as the error type for the [`TryFrom`] for [`DMS`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum TryFromDMSError {
    #[error("number would be NAN")]
    NAN,
    #[error("number would be out-of-bounds")]
    OutOfBounds,
}
