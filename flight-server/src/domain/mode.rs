//! Processing mode.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

/// Error returned when parsing an unsupported mode token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid mode")]
pub struct InvalidMode {
    token: String,
}

impl InvalidMode {
    /// The token that was rejected.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Which order run the schedule is being prepared for.
///
/// `Commandes` prepares tomorrow's flights (J+1), `Precommandes` the day
/// after (J+2). Only `Commandes` computes seat counts.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Mode;
/// use chrono::NaiveDate;
///
/// let mode = Mode::parse("precommandes").unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
/// assert_eq!(mode.target_date(today), NaiveDate::from_ymd_opt(2025, 7, 12));
///
/// // Tokens are case-sensitive
/// assert!(Mode::parse("Commandes").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Commandes,
    Precommandes,
}

impl Mode {
    /// Parse a mode from its wire token.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        match s {
            "commandes" => Ok(Mode::Commandes),
            "precommandes" => Ok(Mode::Precommandes),
            other => Err(InvalidMode {
                token: other.to_string(),
            }),
        }
    }

    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Commandes => "commandes",
            Mode::Precommandes => "precommandes",
        }
    }

    /// Days between "today" and the flights this mode prepares.
    pub fn day_offset(&self) -> u64 {
        match self {
            Mode::Commandes => 1,
            Mode::Precommandes => 2,
        }
    }

    /// The calendar date whose departures this mode selects.
    ///
    /// Returns `None` only when the offset runs past chrono's date range.
    pub fn target_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        today.checked_add_days(Days::new(self.day_offset()))
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
