use std::io;
use std::time::Duration;

use movizor::{Credentials, MovizorClient, Object};

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

    let client = MovizorClient::builder(Credentials::new(project, key)?)
        .timeout(Duration::from_secs(30))
        .build()?;

    let object = Object::new(phone);
    let position = client.last_position(&object).await?;
    println!(
        "lat: {}, lon: {}, at: {}, place: {:?}, deviation: {:?}, forecast: {:?}",
        position.coordinates.lat,
        position.coordinates.lon,
        position.timestamp,
        position.place,
        position.deviation,
        position.forecast
    );

    let operator = client.operator_info(&object).await?;
    println!("operator: {} ({:?})", operator.title, operator.region);

    Ok(())
}
