use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AccountId, Coordinate, EmailAddress, EventId, EventType, Object, TariffType, Weekday,
};

#[derive(Debug, Clone, PartialEq)]
/// One stop on the route of a tracked object.
pub struct DestinationOptions {
    /// Free-text label (`destination[i][text]`). Required.
    pub text: String,
    pub lat: Coordinate,
    pub lon: Coordinate,
    /// Expected arrival, wall-clock time of the service.
    pub expected_time: Option<NaiveDateTime>,
}

impl DestinationOptions {
    pub fn new(text: impl Into<String>, lat: Coordinate, lon: Coordinate) -> Self {
        Self {
            text: text.into(),
            lat,
            lon,
            expected_time: None,
        }
    }

    pub fn expected_at(mut self, time: NaiveDateTime) -> Self {
        self.expected_time = Some(time);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Schedule of position requests: enabled weekdays plus fire times (`HH:MM`).
pub struct SchedulingOptions {
    weekdays: [bool; 7],
    pub fire_at: Vec<NaiveTime>,
}

impl SchedulingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weekday_on(&mut self, day: Weekday) {
        self.weekdays[day.index()] = true;
    }

    pub fn weekday_off(&mut self, day: Weekday) {
        self.weekdays[day.index()] = false;
    }

    pub fn is_weekday_on(&self, day: Weekday) -> bool {
        self.weekdays[day.index()]
    }

    /// Enabled weekdays in Monday..Sunday order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.weekdays[day.index()])
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Options shared by `object_add` and `object_edit`.
///
/// Unset fields are not sent at all.
pub struct ObjectOptions {
    pub title: Option<String>,
    /// Sent comma-joined as `tags`.
    pub tags: Vec<String>,
    /// Automatic deactivation (`dateoff`).
    pub date_off: Option<NaiveDateTime>,
    pub tariff: Option<TariffType>,
    /// Automatically prolong a package tariff.
    pub package_prolong: bool,
    pub destinations: Vec<DestinationOptions>,
    pub schedule: Option<SchedulingOptions>,
    /// Each entry is sent as `metadata[<key>]`. Keys are not escaped.
    pub metadata: BTreeMap<String, String>,
    /// Voice notification of the driver (`autoinform`).
    pub call_to_driver: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectAddOptions {
    pub options: ObjectOptions,
    /// Add the object into a sub-account instead of the main one.
    pub account: Option<AccountId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectEditOptions {
    pub options: ObjectOptions,
    /// Apply immediately instead of from the next day.
    pub activate: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Filter for `pos_list`.
pub struct RequestPositionsOptions {
    pub request_limit: Option<u64>,
    pub offset: Option<u64>,
    pub time_from: Option<DateTime<Utc>>,
    pub time_to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Filter for `events`.
pub struct ObjectEventsOptions {
    pub request_limit: Option<u64>,
    /// Only events with a greater id are returned.
    pub after_event_id: Option<EventId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionTargets {
    /// Every object, including the ones added later.
    AllObjects,
    Objects(Vec<Object>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Sms(Object),
    Email(EmailAddress),
    /// Telegram account configured in the MoVizor profile.
    Telegram,
}

impl Notification {
    pub fn notify_type(&self) -> &'static str {
        match self {
            Self::Sms(_) => "sms",
            Self::Email(_) => "email",
            Self::Telegram => "telegram",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Event subscription for `events_subscribe_add`.
///
/// MoVizor honours a single notification channel per subscription, so setting a
/// channel replaces the previous one.
pub struct SubscribeEventOptions {
    pub targets: SubscriptionTargets,
    pub event: EventType,
    notification: Option<Notification>,
}

impl SubscribeEventOptions {
    /// Subscription for a single object.
    pub fn new(object: Object, event: EventType) -> Self {
        Self::for_objects(vec![object], event)
    }

    pub fn for_objects(objects: Vec<Object>, event: EventType) -> Self {
        Self {
            targets: SubscriptionTargets::Objects(objects),
            event,
            notification: None,
        }
    }

    pub fn all_objects(event: EventType) -> Self {
        Self {
            targets: SubscriptionTargets::AllObjects,
            event,
            notification: None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Notify by SMS. The phone must normalize to a valid identifier.
    pub fn set_sms_notification(&mut self, phone: Object) -> Result<(), ValidationError> {
        phone.canonical()?;
        self.set_notification(Notification::Sms(phone));
        Ok(())
    }

    pub fn set_email_notification(
        &mut self,
        email: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let email = EmailAddress::new(email)?;
        self.set_notification(Notification::Email(email));
        Ok(())
    }

    pub fn set_telegram_notification(&mut self) {
        self.set_notification(Notification::Telegram);
    }

    /// Drop one object from an explicit object list. Returns `true` if it was present.
    pub fn remove_object(&mut self, object: &Object) -> bool {
        match &mut self.targets {
            SubscriptionTargets::AllObjects => false,
            SubscriptionTargets::Objects(objects) => {
                let before = objects.len();
                objects.retain(|it| it != object);
                objects.len() != before
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_weekday_toggles() {
        let mut schedule = SchedulingOptions::new();
        for day in Weekday::ALL {
            assert!(!schedule.is_weekday_on(day));
            schedule.weekday_on(day);
            assert!(schedule.is_weekday_on(day));
        }
        schedule.weekday_off(Weekday::Wednesday);
        assert!(!schedule.is_weekday_on(Weekday::Wednesday));
        assert_eq!(schedule.weekdays().count(), 6);
    }

    #[test]
    fn last_notification_wins() {
        let mut options = SubscribeEventOptions::new(Object::new("89123456787"), EventType::Reject);
        options
            .set_sms_notification(Object::new("+7 912 000 11 22"))
            .unwrap();
        options.set_email_notification("ops@example.com").unwrap();
        assert_eq!(
            options.notification(),
            Some(&Notification::Email(
                EmailAddress::new("ops@example.com").unwrap()
            ))
        );

        options.set_telegram_notification();
        assert_eq!(options.notification(), Some(&Notification::Telegram));
    }

    #[test]
    fn invalid_channel_keeps_previous_notification() {
        let mut options = SubscribeEventOptions::all_objects(EventType::Late);
        options.set_telegram_notification();

        assert!(options.set_sms_notification(Object::new("123")).is_err());
        assert!(options.set_email_notification("not an email").is_err());
        assert_eq!(options.notification(), Some(&Notification::Telegram));
    }

    #[test]
    fn remove_object_matches_canonical_form() {
        let mut options = SubscribeEventOptions::for_objects(
            vec![Object::new("89123456787"), Object::new("79001112233")],
            EventType::Confirm,
        );
        assert!(options.remove_object(&Object::new("+7 912 345-67-87")));
        assert!(!options.remove_object(&Object::new("+7 912 345-67-87")));
        assert_eq!(
            options.targets,
            SubscriptionTargets::Objects(vec![Object::new("79001112233")])
        );

        let mut all = SubscribeEventOptions::all_objects(EventType::Confirm);
        assert!(!all.remove_object(&Object::new("79001112233")));
    }
}
