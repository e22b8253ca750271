use std::io;

use movizor::{Credentials, MovizorClient};

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

    let client = MovizorClient::new(Credentials::new(project, key)?);
    let balance = client.balance().await?;
    println!(
        "balance: {}, credit: {}, contract: {:?}",
        balance.balance, balance.credit, balance.contract_type
    );
    for (operator, tariffs) in &balance.operator_tariffs {
        for (tariff, details) in tariffs {
            println!(
                "{} {}: abon {}, request {} ({})",
                operator.as_str(),
                tariff.as_str(),
                details.abonent_payment,
                details.request_cost,
                details.title
            );
        }
    }
    for (service, tariffs) in &balance.service_tariffs {
        println!("{}: {:?}", service.as_str(), tariffs);
    }

    Ok(())
}
