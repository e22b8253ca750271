use serde::Deserialize;

use super::error::{DecodeError, from_json};
use super::scalar::{TransportNumber, TransportText, non_empty, optional};
use crate::domain::{
    Coordinates, EtaStatus, Forecast, Object, ObjectPosition, Position, PositionRequest,
    RequestId, RequestPositionsOptions, ValidationError,
};
use crate::transport::object::encode_object_form;

#[derive(Debug, Clone, Deserialize)]
struct PositionJson {
    lat: TransportNumber,
    lon: TransportNumber,
    timestamp: TransportNumber,
    #[serde(default)]
    timestamp_request: Option<TransportNumber>,
    #[serde(default)]
    radius: Option<TransportNumber>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    distance: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_time: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ObjectPositionJson {
    phone: TransportText,
    lat: TransportNumber,
    lon: TransportNumber,
    timestamp: TransportNumber,
    #[serde(default)]
    radius: Option<TransportNumber>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    distance: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_time: Option<TransportNumber>,
    #[serde(default)]
    distance_forecast_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PositionRequestJson {
    request_id: TransportNumber,
}

pub fn encode_positions_form(
    object: &Object,
    options: &RequestPositionsOptions,
) -> Result<Vec<(String, String)>, ValidationError> {
    let mut params = encode_object_form(object)?;

    if let Some(limit) = options.request_limit {
        params.push(("req_limit".to_owned(), limit.to_string()));
    }
    if let Some(offset) = options.offset {
        params.push(("offset".to_owned(), offset.to_string()));
    }
    if let Some(from) = options.time_from {
        params.push(("date_start".to_owned(), from.timestamp().to_string()));
    }
    if let Some(to) = options.time_to {
        params.push(("date_end".to_owned(), to.timestamp().to_string()));
    }

    Ok(params)
}

pub fn encode_requested_position_form(request: PositionRequest) -> Vec<(String, String)> {
    vec![(
        RequestId::FIELD.to_owned(),
        request.request_id.value().to_string(),
    )]
}

pub fn decode_position(json: &str) -> Result<Position, DecodeError> {
    let parsed: PositionJson = from_json(ENTITY_POSITION, json)?;
    position_from_json(parsed)
}

pub fn decode_positions(json: &str) -> Result<Vec<Position>, DecodeError> {
    let parsed: Option<Vec<PositionJson>> = from_json(ENTITY_POSITION, json)?;
    parsed
        .unwrap_or_default()
        .into_iter()
        .map(position_from_json)
        .collect()
}

pub fn decode_object_positions(json: &str) -> Result<Vec<ObjectPosition>, DecodeError> {
    const ENTITY: &str = "ObjectPosition";

    let parsed: Option<Vec<ObjectPositionJson>> = from_json(ENTITY, json)?;
    parsed
        .unwrap_or_default()
        .into_iter()
        .map(|it| {
            Ok(ObjectPosition {
                phone: Object::new(it.phone.into_string()),
                coordinates: decode_coordinates(ENTITY, &it.lat, &it.lon)?,
                timestamp: it.timestamp.to_time(ENTITY, "timestamp")?,
                deviation: optional(it.radius.as_ref(), |v| v.to_i64(ENTITY, "radius"))?,
                place: non_empty(it.place),
                forecast: decode_forecast(
                    ENTITY,
                    it.distance.as_ref(),
                    it.distance_forecast_time.as_ref(),
                    it.distance_forecast_status,
                )?,
            })
        })
        .collect()
}

pub fn decode_position_request(json: &str) -> Result<PositionRequest, DecodeError> {
    const ENTITY: &str = "PositionRequest";

    let parsed: PositionRequestJson = from_json(ENTITY, json)?;
    Ok(PositionRequest {
        request_id: RequestId::new(parsed.request_id.to_i64(ENTITY, "request_id")?),
    })
}

const ENTITY_POSITION: &str = "Position";

fn position_from_json(it: PositionJson) -> Result<Position, DecodeError> {
    const ENTITY: &str = ENTITY_POSITION;

    Ok(Position {
        coordinates: decode_coordinates(ENTITY, &it.lat, &it.lon)?,
        timestamp: it.timestamp.to_time(ENTITY, "timestamp")?,
        timestamp_request: optional(it.timestamp_request.as_ref(), |v| {
            v.to_time(ENTITY, "timestamp_request")
        })?,
        deviation: optional(it.radius.as_ref(), |v| v.to_i64(ENTITY, "radius"))?,
        place: non_empty(it.place),
        forecast: decode_forecast(
            ENTITY,
            it.distance.as_ref(),
            it.distance_forecast_time.as_ref(),
            it.distance_forecast_status,
        )?,
    })
}

pub(crate) fn decode_coordinates(
    entity: &'static str,
    lat: &TransportNumber,
    lon: &TransportNumber,
) -> Result<Coordinates, DecodeError> {
    Ok(Coordinates {
        lat: lat.to_coordinate(entity, "lat")?,
        lon: lon.to_coordinate(entity, "lon")?,
    })
}

pub(crate) fn decode_forecast(
    entity: &'static str,
    distance: Option<&TransportNumber>,
    eta: Option<&TransportNumber>,
    eta_status: Option<String>,
) -> Result<Forecast, DecodeError> {
    Ok(Forecast {
        distance: optional(distance, |v| v.to_i64(entity, "distance"))?,
        eta: optional(eta, |v| v.to_time(entity, "distance_forecast_time"))?,
        eta_status: non_empty(eta_status).map(|it| EtaStatus::from_wire(&it)),
    })
}
