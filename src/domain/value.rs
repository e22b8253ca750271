use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MoVizor API key (`key`).
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by MoVizor (`key`).
    pub const FIELD: &'static str = "key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// MoVizor project name, the first path segment of every action URL.
///
/// Invariant: non-empty after trimming.
pub struct Project(String);

impl Project {
    pub const FIELD: &'static str = "project";

    /// Create a validated [`Project`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Tracked subscriber ("object"), identified by a phone number.
///
/// The value is kept exactly as provided. Every wire parameter and every
/// comparison goes through [`Object::canonical`], which derives the MSISDN
/// form required by MoVizor (11 digits starting with `7`). Formats such as
/// `+7 (921) 001-02-03` or `8-921-001-02-03` are accepted.
pub struct Object(String);

impl Object {
    /// Query parameter name used by MoVizor (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Wrap arbitrary user input. No validation happens here.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Value as provided.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Canonical MSISDN (`7XXXXXXXXXX`).
    ///
    /// Fails with [`ValidationError::InvalidObject`] when fewer than 10 usable
    /// digits remain.
    pub fn canonical(&self) -> Result<String, ValidationError> {
        canonical_msisdn(&self.0).ok_or_else(|| ValidationError::InvalidObject {
            input: self.0.clone(),
        })
    }

    /// Returns `true` if [`Object::canonical`] succeeds.
    pub fn is_valid(&self) -> bool {
        canonical_msisdn(&self.0).is_some()
    }

    fn comparison_key(&self) -> String {
        canonical_msisdn(&self.0).unwrap_or_else(|| self.0.clone())
    }
}

/// Identifier normalization heuristic.
///
/// Strip non-digits. A run that already is `7` + 10 digits is returned as is,
/// so inputs without a `9` such as `71234567890` are accepted too.
/// Otherwise everything before the leftmost `9` is dropped, the last 10 digits
/// are kept and `7` is prepended.
fn canonical_msisdn(input: &str) -> Option<String> {
    let digits = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>();

    if digits.len() == 11 && digits.starts_with('7') {
        return Some(digits);
    }

    let from_nine = match digits.find('9') {
        Some(idx) => &digits[idx..],
        None => digits.as_str(),
    };
    if from_nine.len() < 10 {
        return None;
    }

    Some(format!("7{}", &from_nine[from_nine.len() - 10..]))
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_key() == other.comparison_key()
    }
}

impl Eq for Object {}

impl std::hash::Hash for Object {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.comparison_key().hash(state);
    }
}

impl std::cmp::PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Object {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
/// Latitude or longitude in single precision.
///
/// Always rendered with exactly 8 decimal places.
pub struct Coordinate(f32);

impl Coordinate {
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Coordinate {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// E-mail address used as a notification target.
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a validated [`EmailAddress`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sub-account ("slave cabinet") number (`account`).
pub struct AccountId(u64);

impl AccountId {
    pub const FIELD: &'static str = "account";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Position request id returned by `pos_request` (`id`).
pub struct RequestId(i64);

impl RequestId {
    pub const FIELD: &'static str = "id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Event subscription id (`id`).
pub struct SubscriptionId(i64);

impl SubscriptionId {
    pub const FIELD: &'static str = "id";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Increasing event number.
pub struct EventId(i64);

impl EventId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Zero-based index, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Monitoring tariff plan.
///
/// The set is closed: tariffs drive billing, so an unknown value is a decode error.
pub enum TariffType {
    Manual,
    Minutes15,
    Minutes30,
    Hour,
    Hours3,
    Daily,
    Package,
}

impl TariffType {
    /// Query parameter name used by MoVizor (`tariff`).
    pub const FIELD: &'static str = "tariff";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Minutes15 => "15min",
            Self::Minutes30 => "30min",
            Self::Hour => "hour",
            Self::Hours3 => "3hour",
            Self::Daily => "daily",
            Self::Package => "package",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value {
            "manual" => Self::Manual,
            "15min" => Self::Minutes15,
            "30min" => Self::Minutes30,
            "hour" => Self::Hour,
            "3hour" => Self::Hours3,
            "daily" => Self::Daily,
            "package" => Self::Package,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
/// Mobile network operator.
pub enum Operator {
    Mts,
    Megafon,
    Beeline,
    Tele2,
    Other(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mts => "mts",
            Self::Megafon => "megafon",
            Self::Beeline => "beeline",
            Self::Tele2 => "tele2",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "mts" => Self::Mts,
            "megafon" => Self::Megafon,
            "beeline" => Self::Beeline,
            "tele2" => Self::Tele2,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
/// Paid add-on service listed next to the operator tariffs.
pub enum Service {
    EventSms,
    Autoinform,
    Other(String),
}

impl Service {
    pub fn as_str(&self) -> &str {
        match self {
            Self::EventSms => "eventsms",
            Self::Autoinform => "autoinform",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "eventsms" => Self::EventSms,
            "autoinform" => Self::Autoinform,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Tracking state of an object.
pub enum TrackingStatus {
    New,
    WaitOk,
    Ok,
    Rejected,
    WaitOff,
    Off,
    Other(String),
}

impl TrackingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::WaitOk => "wait_ok",
            Self::Ok => "ok",
            Self::Rejected => "rejected",
            Self::WaitOff => "wait_off",
            Self::Off => "off",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "new" => Self::New,
            "wait_ok" => Self::WaitOk,
            "ok" => Self::Ok,
            "rejected" => Self::Rejected,
            "wait_off" => Self::WaitOff,
            "off" => Self::Off,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// ETA forecast against the expected arrival time.
pub enum EtaStatus {
    InTime,
    Late,
    Finished,
    Other(String),
}

impl EtaStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InTime => "in_time",
            Self::Late => "late",
            Self::Finished => "finished",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "in_time" => Self::InTime,
            "late" => Self::Late,
            "finished" => Self::Finished,
            other => Self::Other(other.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
/// Event kinds reported by `events` and used for subscriptions.
pub enum EventType {
    Add,
    AutoOff,
    Off,
    RequestOk,
    RequestError,
    Confirm,
    Reject,
    RequestObjectOffline,
    RequestObjectInRoaming,
    Reactivate,
    ChangeTariff,
    InTime,
    Late,
    Finished,
    CallToDriver,
    NoConfirmation,
    ObjectLimited,
    OnRoute,
    ReturnRoute,
    LeftRoute,
    NotRoute,
    OnParking,
    OffParking,
    MStop,
    MStart,
    Other(String),
}

impl EventType {
    /// Query parameter name used by MoVizor (`events`).
    pub const FIELD: &'static str = "events";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::AutoOff => "auto_off",
            Self::Off => "off",
            Self::RequestOk => "request_ok",
            Self::RequestError => "request_error",
            Self::Confirm => "confirm",
            Self::Reject => "reject",
            Self::RequestObjectOffline => "request_offline",
            Self::RequestObjectInRoaming => "request_roaming",
            Self::Reactivate => "reactivate",
            Self::ChangeTariff => "change_tariff",
            Self::InTime => "in_time",
            Self::Late => "late",
            Self::Finished => "finished",
            Self::CallToDriver => "autoinform",
            Self::NoConfirmation => "no_confirm",
            Self::ObjectLimited => "limited",
            Self::OnRoute => "on_route",
            Self::ReturnRoute => "return_route",
            Self::LeftRoute => "left_route",
            Self::NotRoute => "not_route",
            Self::OnParking => "on_parking",
            Self::OffParking => "off_parking",
            Self::MStop => "mstop",
            Self::MStart => "mstart",
            Self::Other(value) => value,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "add" => Self::Add,
            "auto_off" => Self::AutoOff,
            "off" => Self::Off,
            "request_ok" => Self::RequestOk,
            "request_error" => Self::RequestError,
            "confirm" => Self::Confirm,
            "reject" => Self::Reject,
            "request_offline" => Self::RequestObjectOffline,
            "request_roaming" => Self::RequestObjectInRoaming,
            "reactivate" => Self::Reactivate,
            "change_tariff" => Self::ChangeTariff,
            "in_time" => Self::InTime,
            "late" => Self::Late,
            "finished" => Self::Finished,
            "autoinform" => Self::CallToDriver,
            "no_confirm" => Self::NoConfirmation,
            "limited" => Self::ObjectLimited,
            "on_route" => Self::OnRoute,
            "return_route" => Self::ReturnRoute,
            "left_route" => Self::LeftRoute,
            "not_route" => Self::NotRoute,
            "on_parking" => Self::OnParking,
            "off_parking" => Self::OffParking,
            "mstop" => Self::MStop,
            "mstart" => Self::MStart,
            other => Self::Other(other.to_owned()),
        }
    }
}
