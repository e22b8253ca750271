//! Typed Rust client for the MoVizor GSM positioning HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks (quoted numbers, `0`/`1` flags, polymorphic payloads), and
//! a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use movizor::{Credentials, MovizorClient, Object, ObjectAddOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), movizor::MovizorError> {
//!     let client = MovizorClient::new(Credentials::new("project", "...")?);
//!     let truck = Object::new("+7 (921) 001-02-03");
//!     client.add_object(&truck, &ObjectAddOptions::default()).await?;
//!     let position = client.last_position(&truck).await?;
//!     println!("{} {}", position.coordinates.lat, position.coordinates.lon);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, MovizorClient, MovizorClientBuilder, MovizorError};
pub use domain::{
    AccountId, ActionResponse, ApiKey, Balance, Coordinate, Coordinates, Destination,
    DestinationOptions, EmailAddress, EtaStatus, EventId, EventType, Forecast, Metadata,
    Notification, Object, ObjectAddOptions, ObjectEditOptions, ObjectEvent, ObjectEventsOptions,
    ObjectInfo, ObjectList, ObjectOptions, ObjectPosition, ObjectStatus, Operator, OperatorInfo,
    Position, PositionRequest, Project, RequestId, RequestPositionsOptions, SchedulingOptions,
    Service, SubscribeEventOptions, SubscribedEvent, SubscriptionId, SubscriptionTargets, Tariff,
    TariffType, TrackingStatus, ValidationError, Weekday,
};
pub use transport::DecodeError;
