use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use super::error::{DecodeError, from_json};
use super::position::{decode_coordinates, decode_forecast};
use super::scalar::{TransportFlag, TransportNumber, TransportText, flag, non_empty, optional};
use crate::domain::{
    AccountId, Destination, DestinationOptions, EtaStatus, Metadata, Object, ObjectAddOptions,
    ObjectEditOptions, ObjectInfo, ObjectList, ObjectOptions, ObjectStatus, SchedulingOptions,
    TariffType, TrackingStatus, ValidationError,
};

const DATE_OFF_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const DESTINATION_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";
const FIRE_TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Deserialize)]
struct ObjectInfoJson {
    phone: TransportText,
    status: String,
    #[serde(default)]
    confirmed: Option<TransportFlag>,
    #[serde(default)]
    title: Option<String>,
    tariff: String,
    #[serde(default)]
    tariff_new: Option<String>,
    #[serde(default)]
    last_timestamp: Option<TransportNumber>,
    #[serde(default)]
    at_request: Option<TransportFlag>,
    #[serde(default)]
    current_lat: Option<TransportNumber>,
    #[serde(default)]
    current_lon: Option<TransportNumber>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    distance: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_time: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_status: Option<String>,
    #[serde(default)]
    on_parking: Option<TransportFlag>,
    #[serde(default)]
    destination: Option<Vec<DestinationJson>>,
    #[serde(default)]
    offline_time: Option<TransportNumber>,
    #[serde(default)]
    pos_error: Option<TransportFlag>,
    #[serde(default)]
    timestamp_off: Option<TransportNumber>,
    timestamp_add: TransportNumber,
    #[serde(default)]
    metadata: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Deserialize)]
struct DestinationJson {
    text: String,
    lat: TransportNumber,
    lon: TransportNumber,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObjectStatusJson {
    phone: TransportText,
    status: String,
}

pub fn encode_object_form(object: &Object) -> Result<Vec<(String, String)>, ValidationError> {
    Ok(vec![(Object::FIELD.to_owned(), object.canonical()?)])
}

pub fn encode_add_object_form(
    object: &Object,
    options: &ObjectAddOptions,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = encode_object_form(object)?;
    params.extend(encode_object_options(&options.options)?);
    if let Some(account) = options.account {
        params.push((AccountId::FIELD.to_owned(), account.value().to_string()));
    }
    Ok(params)
}

pub fn encode_edit_object_form(
    object: &Object,
    options: &ObjectEditOptions,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = encode_object_form(object)?;
    params.extend(encode_object_options(&options.options)?);
    if options.activate {
        params.push(("activate".to_owned(), "1".to_owned()));
    }
    Ok(params)
}

/// Encode object options. Nothing is returned unless every part is valid.
pub fn encode_object_options(
    options: &ObjectOptions,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(title) = options.title.as_ref().filter(|it| !it.is_empty()) {
        params.push(("title".to_owned(), title.clone()));
    }
    if let Some(date_off) = options.date_off {
        params.push((
            "dateoff".to_owned(),
            date_off.format(DATE_OFF_FORMAT).to_string(),
        ));
    }
    if let Some(tariff) = options.tariff {
        params.push((TariffType::FIELD.to_owned(), tariff.as_str().to_owned()));
    }
    if options.package_prolong {
        params.push(("package_prolong".to_owned(), "1".to_owned()));
    }
    if !options.tags.is_empty() {
        params.push(("tags".to_owned(), options.tags.join(",")));
    }
    for (key, value) in &options.metadata {
        params.push((format!("metadata[{key}]"), value.clone()));
    }
    if options.call_to_driver {
        params.push(("autoinform".to_owned(), "1".to_owned()));
    }
    if let Some(schedule) = options.schedule.as_ref() {
        push_schedule(&mut params, schedule)?;
    }
    for (idx, destination) in options.destinations.iter().enumerate() {
        push_destination(&mut params, idx, destination)?;
    }

    Ok(params)
}

fn push_schedule(
    params: &mut Vec<(String, String)>,
    schedule: &SchedulingOptions,
) -> Result<(), ValidationError> {
    if schedule.fire_at.is_empty() {
        return Err(ValidationError::NoFireTimes);
    }
    if schedule.weekdays().next().is_none() {
        return Err(ValidationError::NoWeekdaySelected);
    }

    for day in schedule.weekdays() {
        params.push((format!("sw{}", day.index() + 1), "1".to_owned()));
    }
    for time in &schedule.fire_at {
        params.push(("st[]".to_owned(), time.format(FIRE_TIME_FORMAT).to_string()));
    }
    Ok(())
}

fn push_destination(
    params: &mut Vec<(String, String)>,
    idx: usize,
    destination: &DestinationOptions,
) -> Result<(), ValidationError> {
    if destination.text.trim().is_empty() {
        return Err(ValidationError::MissingDestinationText { index: idx });
    }

    params.push((
        format!("destination[{idx}][text]"),
        destination.text.clone(),
    ));
    params.push((
        format!("destination[{idx}][coord]"),
        format!("{},{}", destination.lat, destination.lon),
    ));
    if let Some(time) = destination.expected_time {
        params.push((
            format!("destination[{idx}][time]"),
            time.format(DESTINATION_TIME_FORMAT).to_string(),
        ));
    }
    Ok(())
}

pub fn decode_object_info(json: &str) -> Result<ObjectInfo, DecodeError> {
    const ENTITY: &str = "ObjectInfo";

    let parsed: ObjectInfoJson = from_json(ENTITY, json)?;

    let current = match (parsed.current_lat.as_ref(), parsed.current_lon.as_ref()) {
        (Some(lat), Some(lon)) if !lat.is_blank() && !lon.is_blank() => {
            Some(decode_coordinates(ENTITY, lat, lon)?)
        }
        _ => None,
    };

    let destinations = parsed
        .destination
        .unwrap_or_default()
        .into_iter()
        .map(|it| {
            Ok(Destination {
                text: it.text,
                coordinates: decode_coordinates("Destination", &it.lat, &it.lon)?,
                time: non_empty(it.time),
                status: non_empty(it.status).map(|status| EtaStatus::from_wire(&status)),
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    let tariff_new = non_empty(parsed.tariff_new)
        .map(|it| tariff_from_wire(ENTITY, "tariff_new", it))
        .transpose()?;

    Ok(ObjectInfo {
        phone: Object::new(parsed.phone.into_string()),
        status: TrackingStatus::from_wire(&parsed.status),
        confirmed: flag(parsed.confirmed.as_ref()),
        title: parsed.title.unwrap_or_default(),
        tariff: tariff_from_wire(ENTITY, "tariff", parsed.tariff)?,
        tariff_new,
        last_timestamp: optional(parsed.last_timestamp.as_ref(), |v| {
            v.to_time(ENTITY, "last_timestamp")
        })?,
        at_request: flag(parsed.at_request.as_ref()),
        current,
        place: non_empty(parsed.place),
        forecast: decode_forecast(
            ENTITY,
            parsed.distance.as_ref(),
            parsed.distance_forecast_time.as_ref(),
            parsed.distance_forecast_status,
        )?,
        on_parking: parsed.on_parking.as_ref().map(TransportFlag::is_set),
        destinations,
        offline_time: optional(parsed.offline_time.as_ref(), |v| {
            v.to_time(ENTITY, "offline_time")
        })?,
        pos_error: flag(parsed.pos_error.as_ref()),
        timestamp_off: optional(parsed.timestamp_off.as_ref(), |v| {
            v.to_time(ENTITY, "timestamp_off")
        })?,
        timestamp_add: parsed.timestamp_add.to_time(ENTITY, "timestamp_add")?,
        metadata: decode_metadata(parsed.metadata.as_deref())?,
    })
}

pub fn decode_object_list(json: &str) -> Result<ObjectList, DecodeError> {
    const ENTITY: &str = "ObjectStatus";

    let parsed: Option<Vec<ObjectStatusJson>> = from_json(ENTITY, json)?;
    let objects = parsed
        .unwrap_or_default()
        .into_iter()
        .map(|it| ObjectStatus {
            phone: Object::new(it.phone.into_string()),
            status: TrackingStatus::from_wire(&it.status),
        })
        .collect();

    Ok(ObjectList { objects })
}

/// Metadata is a JSON object, or an empty array when there is none.
fn decode_metadata(raw: Option<&RawValue>) -> Result<Metadata, DecodeError> {
    let Some(raw) = raw else {
        return Ok(Metadata::new());
    };

    if serde_json::from_str::<Vec<serde_json::Value>>(raw.get()).is_ok() {
        return Ok(Metadata::new());
    }

    let map: BTreeMap<String, TransportText> = serde_json::from_str(raw.get())
        .map_err(|err| DecodeError::field("ObjectInfo", "metadata", err.to_string()))?;
    Ok(map
        .into_iter()
        .map(|(key, value)| (key, value.into_string()))
        .collect())
}

fn tariff_from_wire(
    entity: &'static str,
    field: &'static str,
    value: String,
) -> Result<TariffType, DecodeError> {
    TariffType::from_wire(&value).ok_or(DecodeError::UnknownVariant {
        entity,
        field,
        value,
    })
}
