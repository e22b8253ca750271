use serde::Deserialize;

use super::error::{DecodeError, from_json};
use super::scalar::{TransportFlag, TransportNumber, TransportText, flag, non_empty};
use crate::domain::{
    EventId, EventType, Notification, Object, ObjectEvent, ObjectEventsOptions,
    SubscribeEventOptions, SubscribedEvent, SubscriptionId, SubscriptionTargets, ValidationError,
};

#[derive(Debug, Clone, Deserialize)]
struct ObjectEventJson {
    id: TransportNumber,
    timestamp: TransportNumber,
    phone: TransportText,
    #[serde(rename = "type")]
    event: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SubscribedEventJson {
    id: TransportNumber,
    #[serde(default)]
    phones_all: Option<TransportFlag>,
    #[serde(default)]
    phones: Option<Vec<TransportText>>,
    timestamp: TransportNumber,
    #[serde(rename = "type")]
    event: String,
    #[serde(default)]
    phone: Option<TransportText>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    telegram: Option<TransportFlag>,
}

pub fn encode_events_form(options: &ObjectEventsOptions) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    if let Some(limit) = options.request_limit {
        params.push(("req_limit".to_owned(), limit.to_string()));
    }
    if let Some(after) = options.after_event_id {
        params.push(("afterid".to_owned(), after.value().to_string()));
    }
    params
}

pub fn encode_subscribe_event_form(
    options: &SubscribeEventOptions,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = Vec::<(String, String)>::new();

    match &options.targets {
        SubscriptionTargets::AllObjects => {
            params.push(("phones_all".to_owned(), "1".to_owned()));
        }
        SubscriptionTargets::Objects(objects) if objects.is_empty() => {
            return Err(ValidationError::NoSubscriptionTargets);
        }
        SubscriptionTargets::Objects(objects) => {
            for object in objects {
                params.push(("phones[]".to_owned(), object.canonical()?));
            }
        }
    }

    let event = options.event.as_str();
    if event.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: EventType::FIELD,
        });
    }
    params.push((EventType::FIELD.to_owned(), event.to_owned()));

    let notification = options
        .notification()
        .ok_or(ValidationError::NoNotification)?;
    params.push((
        "notify_type".to_owned(),
        notification.notify_type().to_owned(),
    ));
    match notification {
        Notification::Sms(phone) => params.push(("notify_value".to_owned(), phone.canonical()?)),
        Notification::Email(email) => {
            params.push(("notify_value".to_owned(), email.as_str().to_owned()));
        }
        Notification::Telegram => {}
    }

    Ok(params)
}

pub fn encode_delete_subscription_form(id: SubscriptionId) -> Vec<(String, String)> {
    vec![(SubscriptionId::FIELD.to_owned(), id.value().to_string())]
}

pub fn decode_events(json: &str) -> Result<Vec<ObjectEvent>, DecodeError> {
    const ENTITY: &str = "ObjectEvent";

    let parsed: Option<Vec<ObjectEventJson>> = from_json(ENTITY, json)?;
    parsed
        .unwrap_or_default()
        .into_iter()
        .map(|it| {
            Ok(ObjectEvent {
                id: EventId::new(it.id.to_i64(ENTITY, "id")?),
                timestamp: it.timestamp.to_time(ENTITY, "timestamp")?,
                phone: Object::new(it.phone.into_string()),
                event: EventType::from_wire(&it.event),
            })
        })
        .collect()
}

pub fn decode_subscribed_events(json: &str) -> Result<Vec<SubscribedEvent>, DecodeError> {
    const ENTITY: &str = "SubscribedEvent";

    let parsed: Option<Vec<SubscribedEventJson>> = from_json(ENTITY, json)?;
    parsed
        .unwrap_or_default()
        .into_iter()
        .map(|it| {
            Ok(SubscribedEvent {
                id: SubscriptionId::new(it.id.to_i64(ENTITY, "id")?),
                all_objects: flag(it.phones_all.as_ref()),
                objects: it
                    .phones
                    .unwrap_or_default()
                    .into_iter()
                    .map(|phone| Object::new(phone.into_string()))
                    .collect(),
                timestamp: it.timestamp.to_time(ENTITY, "timestamp")?,
                event: EventType::from_wire(&it.event),
                phone: non_empty(it.phone.map(TransportText::into_string)).map(Object::new),
                email: non_empty(it.email),
                telegram: flag(it.telegram.as_ref()),
            })
        })
        .collect()
}
