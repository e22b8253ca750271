use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::request::{SubscribeEventOptions, SubscriptionTargets};
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Coordinate, EtaStatus, EventId, EventType, Object, Operator, RequestId, Service,
    SubscriptionId, TariffType, TrackingStatus,
};

/// Object metadata. An empty map also stands for the `[]` the API sends when
/// there is none.
pub type Metadata = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful envelope of an action without a payload.
pub struct ActionResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    /// Subscription fee (`abon`).
    pub abonent_payment: f64,
    /// Cost of one position request (`request`).
    pub request_cost: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Account balance and the tariffs available to it.
pub struct Balance {
    pub balance: f64,
    pub credit: f64,
    /// Contract type (`type`).
    pub contract_type: String,
    pub operator_tariffs: BTreeMap<Operator, BTreeMap<TariffType, Tariff>>,
    pub service_tariffs: BTreeMap<Service, Vec<Tariff>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: Coordinate,
    pub lon: Coordinate,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Forecast towards the final destination.
///
/// Empty when the object has no destination with an expected time. A zero
/// distance is a real value, not a missing one.
pub struct Forecast {
    /// Remaining distance in km.
    pub distance: Option<i64>,
    pub eta: Option<DateTime<Utc>>,
    pub eta_status: Option<EtaStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub text: String,
    pub coordinates: Coordinates,
    /// Expected time as rendered by the service.
    pub time: Option<String>,
    pub status: Option<EtaStatus>,
}

#[derive(Debug, Clone, PartialEq)]
/// Object details returned by `object_get`.
pub struct ObjectInfo {
    pub phone: Object,
    pub status: TrackingStatus,
    /// The subscriber confirmed tracking.
    pub confirmed: bool,
    pub title: String,
    pub tariff: TariffType,
    /// Tariff applied from the next day.
    pub tariff_new: Option<TariffType>,
    pub last_timestamp: Option<DateTime<Utc>>,
    /// A position request is in progress.
    pub at_request: bool,
    pub current: Option<Coordinates>,
    pub place: Option<String>,
    pub forecast: Forecast,
    pub on_parking: Option<bool>,
    pub destinations: Vec<Destination>,
    /// Time of the last known position.
    pub offline_time: Option<DateTime<Utc>>,
    /// The last position request failed.
    pub pos_error: bool,
    /// Automatic deactivation time.
    pub timestamp_off: Option<DateTime<Utc>>,
    pub timestamp_add: DateTime<Utc>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStatus {
    pub phone: Object,
    pub status: TrackingStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Objects returned by `object_list`.
pub struct ObjectList {
    pub objects: Vec<ObjectStatus>,
}

impl ObjectList {
    /// Compares canonical identifiers.
    pub fn contains(&self, object: &Object) -> bool {
        self.objects.iter().any(|it| &it.phone == object)
    }

    pub fn sort_by_phone(&mut self) {
        self.objects.sort_by(|a, b| a.phone.cmp(&b.phone));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub coordinates: Coordinates,
    /// Time the coordinates were obtained.
    pub timestamp: DateTime<Utc>,
    /// Time the position request was created.
    pub timestamp_request: Option<DateTime<Utc>>,
    /// Error radius in meters (`radius`).
    pub deviation: Option<i64>,
    pub place: Option<String>,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq)]
/// Entry of `pos_objects`.
pub struct ObjectPosition {
    pub phone: Object,
    pub coordinates: Coordinates,
    pub timestamp: DateTime<Utc>,
    pub deviation: Option<i64>,
    pub place: Option<String>,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    pub request_id: RequestId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    pub operator: Operator,
    pub title: String,
    /// Home region of the subscriber.
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEvent {
    pub id: EventId,
    pub timestamp: DateTime<Utc>,
    pub phone: Object,
    pub event: EventType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active subscription from `events_subscribe_list`.
pub struct SubscribedEvent {
    pub id: SubscriptionId,
    /// Subscribed for every object, including future ones (`phones_all`).
    pub all_objects: bool,
    pub objects: Vec<Object>,
    pub timestamp: DateTime<Utc>,
    pub event: EventType,
    /// SMS notification target.
    pub phone: Option<Object>,
    pub email: Option<String>,
    pub telegram: bool,
}

impl SubscribedEvent {
    /// Rebuild the options that would create this subscription.
    ///
    /// The channel is picked in order: SMS phone, e-mail, Telegram.
    pub fn make_options(&self) -> Result<SubscribeEventOptions, ValidationError> {
        let mut options = if self.all_objects {
            SubscribeEventOptions::all_objects(self.event.clone())
        } else {
            SubscribeEventOptions::for_objects(self.objects.clone(), self.event.clone())
        };

        match (&self.phone, &self.email) {
            (Some(phone), _) => options.set_sms_notification(phone.clone())?,
            (None, Some(email)) => options.set_email_notification(email.clone())?,
            (None, None) => options.set_telegram_notification(),
        }

        Ok(options)
    }

    /// Whether `object` is listed explicitly.
    pub fn targets_object(&self, object: &Object) -> bool {
        !self.all_objects && self.objects.contains(object)
    }
}

impl From<&SubscribedEvent> for SubscriptionTargets {
    fn from(value: &SubscribedEvent) -> Self {
        if value.all_objects {
            Self::AllObjects
        } else {
            Self::Objects(value.objects.clone())
        }
    }
}
