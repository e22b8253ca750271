use std::io;

use movizor::{Credentials, EventType, MovizorClient, Object, SubscribeEventOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let project = std::env::var("MOVIZOR_PROJECT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIZOR_PROJECT environment variable is required",
        )
    })?;
    let key = std::env::var("MOVIZOR_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIZOR_KEY environment variable is required",
        )
    })?;
    let phone = std::env::var("MOVIZOR_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MOVIZOR_PHONE environment variable is required",
        )
    })?;

    let client = MovizorClient::new(Credentials::new(project, key)?);

    let mut options = SubscribeEventOptions::new(Object::new(phone), EventType::Confirm);
    match std::env::var("MOVIZOR_NOTIFY_EMAIL") {
        Ok(email) => options.set_email_notification(email)?,
        Err(_) => options.set_telegram_notification(),
    }

    let response = client.subscribe_event(&options).await?;
    println!("code: {}, message: {}", response.code, response.message);

    for subscription in client.event_subscriptions().await? {
        println!(
            "#{} {} all={} objects={:?}",
            subscription.id.value(),
            subscription.event.as_str(),
            subscription.all_objects,
            subscription.objects
        );
    }

    Ok(())
}
