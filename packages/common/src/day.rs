use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven sequential competition days.
///
/// Always within `1..=7`; serialized as a bare integer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(try_from = "i64", into = "u8")]
#[schema(value_type = u8, example = 1)]
pub struct EventDay(u8);

/// Error for a day number outside the competition week.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Day number must be between 1 and 7, got {value}")]
pub struct DayRangeError {
    pub value: i64,
}

impl EventDay {
    pub const FIRST: EventDay = EventDay(1);
    pub const LAST: EventDay = EventDay(7);

    pub fn new(value: i64) -> Result<Self, DayRangeError> {
        if (i64::from(Self::FIRST.0)..=i64::from(Self::LAST.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DayRangeError { value })
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for EventDay {
    type Error = DayRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EventDay> for u8 {
    fn from(day: EventDay) -> Self {
        day.0
    }
}

impl fmt::Display for EventDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
