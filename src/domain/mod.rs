//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DestinationOptions, Notification, ObjectAddOptions, ObjectEditOptions, ObjectEventsOptions,
    ObjectOptions, RequestPositionsOptions, SchedulingOptions, SubscribeEventOptions,
    SubscriptionTargets,
};
pub use response::{
    ActionResponse, Balance, Coordinates, Destination, Forecast, Metadata, ObjectEvent,
    ObjectInfo, ObjectList, ObjectPosition, ObjectStatus, OperatorInfo, Position,
    PositionRequest, SubscribedEvent, Tariff,
};
pub use validation::ValidationError;
pub use value::{
    AccountId, ApiKey, Coordinate, EmailAddress, EtaStatus, EventId, EventType, Object,
    Operator, Project, RequestId, Service, SubscriptionId, TariffType, TrackingStatus, Weekday,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn project_rejects_empty() {
        assert!(matches!(
            Project::new(""),
            Err(ValidationError::Empty {
                field: Project::FIELD
            })
        ));
    }

    #[test]
    fn subscription_rebuilt_without_one_object() {
        let subscription = SubscribedEvent {
            id: SubscriptionId::new(1),
            all_objects: false,
            objects: vec![Object::new("79154546777"), Object::new("79001112233")],
            timestamp: chrono::DateTime::from_timestamp(1_548_084_632, 0).unwrap(),
            event: EventType::OnParking,
            phone: None,
            email: Some("ops@example.com".to_owned()),
            telegram: false,
        };

        let mut options = subscription.make_options().unwrap();
        assert!(options.remove_object(&Object::new("+7 915 454-67-77")));
        assert_eq!(
            options.targets,
            SubscriptionTargets::Objects(vec![Object::new("79001112233")])
        );
        assert_eq!(options.notification().map(Notification::notify_type), Some("email"));
    }
}
