use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidObject { input: String },
    InvalidEmail { input: String },
    MissingDestinationText { index: usize },
    NoWeekdaySelected,
    NoFireTimes,
    NoSubscriptionTargets,
    NoNotification,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidObject { input } => {
                write!(f, "invalid identifier format: {input:?}")
            }
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::MissingDestinationText { index } => {
                write!(f, "destination[{index}] text is not provided")
            }
            Self::NoWeekdaySelected => {
                write!(f, "schedule has no weekday enabled")
            }
            Self::NoFireTimes => write!(f, "schedule has no fire times"),
            Self::NoSubscriptionTargets => {
                write!(f, "subscription has neither all objects nor any object")
            }
            Self::NoNotification => write!(f, "notification channel is not set"),
        }
    }
}

impl std::error::Error for ValidationError {}
