use std::io;

use chrono::NaiveTime;
use movizor::{
    Credentials, MovizorClient, Object, ObjectAddOptions, ObjectOptions, SchedulingOptions,
    TariffType, Weekday,
};

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

    let mut schedule = SchedulingOptions::new();
    for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday] {
        schedule.weekday_on(day);
    }
    schedule.fire_at = vec![NaiveTime::from_hms_opt(9, 0, 0).ok_or("invalid fire time")?];

    let options = ObjectAddOptions {
        options: ObjectOptions {
            title: Some("Demo truck".to_owned()),
            tags: vec!["demo".to_owned()],
            tariff: Some(TariffType::Manual),
            schedule: Some(schedule),
            ..Default::default()
        },
        account: None,
    };

    let object = Object::new(phone);
    let response = client.add_object(&object, &options).await?;
    println!("code: {}, message: {}", response.code, response.message);

    let info = client.object_info(&object).await?;
    println!("status: {:?}, tariff: {:?}", info.status, info.tariff);

    Ok(())
}
