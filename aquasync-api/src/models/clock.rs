use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Wall-clock trigger time for the day-at schedule modes.
///
/// Renders as zero-padded `"HH:MM"`, which is the exact form the device
/// registry stores in the `tickat` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseClockError> {
        if hour > 23 || minute > 59 {
            return Err(ParseClockError::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((hour, minute)) = s.split_once(':') else {
            return Err(ParseClockError::Malformed(s.to_string()));
        };

        let hour = hour
            .parse::<u8>()
            .map_err(|_| ParseClockError::Malformed(s.to_string()))?;
        let minute = minute
            .parse::<u8>()
            .map_err(|_| ParseClockError::Malformed(s.to_string()))?;

        Self::new(hour, minute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseClockError {
    /// Not a `"HH:MM"` shaped string.
    Malformed(String),
    /// Parsed fine but hour or minute is outside the day.
    OutOfRange { hour: u8, minute: u8 },
}

impl Display for ParseClockError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseClockError::Malformed(raw) => write!(f, "malformed clock time: {:?}", raw),
            ParseClockError::OutOfRange { hour, minute } => {
                write!(f, "clock time out of range: {}:{}", hour, minute)
            }
        }
    }
}

impl std::error::Error for ParseClockError {}
