//! Bulk maintenance of event subscriptions.
//!
//! MoVizor has no call to edit a subscription. Dropping objects from one means
//! deleting it and re-creating it with the remaining objects.

use super::{MovizorClient, MovizorError};
use crate::domain::{EventType, Object, SubscribedEvent};

impl MovizorClient {
    /// Delete every event subscription of the account.
    pub async fn clear_all_event_subscriptions(&self) -> Result<(), MovizorError> {
        for subscription in self.event_subscriptions().await? {
            self.delete_event_subscription(subscription.id).await?;
        }
        Ok(())
    }

    /// Drop `object` from every subscription that lists it explicitly.
    ///
    /// Subscriptions for all objects are left untouched.
    pub async fn unsubscribe_object(&self, object: &Object) -> Result<(), MovizorError> {
        self.clear_object_event_subscriptions(object, None).await
    }

    /// Like [`MovizorClient::unsubscribe_object`], limited to one event type when given.
    pub async fn clear_object_event_subscriptions(
        &self,
        object: &Object,
        event: Option<EventType>,
    ) -> Result<(), MovizorError> {
        object.canonical()?;

        for subscription in self.event_subscriptions().await? {
            if event.as_ref().is_some_and(|it| it != &subscription.event) {
                continue;
            }
            if subscription.targets_object(object) {
                self.remove_objects(&subscription, std::slice::from_ref(object))
                    .await?;
            }
        }
        Ok(())
    }

    /// Drop objects that are no longer on the account from every subscription.
    pub async fn clear_unused_subscriptions(&self) -> Result<(), MovizorError> {
        let subscriptions = self.event_subscriptions().await?;
        let objects = self.objects().await?;

        for subscription in subscriptions.iter().filter(|it| !it.all_objects) {
            let unused = subscription
                .objects
                .iter()
                .filter(|it| !objects.contains(it))
                .cloned()
                .collect::<Vec<_>>();
            self.remove_objects(subscription, &unused).await?;
        }
        Ok(())
    }

    async fn remove_objects(
        &self,
        subscription: &SubscribedEvent,
        objects: &[Object],
    ) -> Result<(), MovizorError> {
        if objects.is_empty() {
            return Ok(());
        }

        let keeps_others = subscription
            .objects
            .iter()
            .any(|it| !objects.contains(it));
        let replacement = if keeps_others {
            let mut options = subscription.make_options()?;
            for object in objects {
                options.remove_object(object);
            }
            Some(options)
        } else {
            None
        };

        tracing::debug!(
            subscription = subscription.id.value(),
            removed = objects.len(),
            recreate = replacement.is_some(),
            "removing objects from event subscription"
        );

        self.delete_event_subscription(subscription.id).await?;
        if let Some(options) = replacement {
            self.subscribe_event(&options).await?;
        }
        Ok(())
    }
}
