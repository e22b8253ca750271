use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::{DecodeError, from_json};
use super::scalar::{TransportNumber, non_empty};
use crate::domain::{Balance, Operator, OperatorInfo, Service, Tariff, TariffType};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    balance: TransportNumber,
    credit: TransportNumber,
    #[serde(default, rename = "type")]
    contract_type: Option<String>,
    #[serde(default)]
    tariff: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
struct TariffJson {
    abon: TransportNumber,
    request: TransportNumber,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct OperatorInfoJson {
    operator: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// Decode `balance` data.
///
/// Entries of `tariff` are told apart by shape: an object is an operator's
/// table keyed by tariff type, an array is a list of service tariffs.
pub fn decode_balance(json: &str) -> Result<Balance, DecodeError> {
    const ENTITY: &str = "Balance";

    let parsed: BalanceJson = from_json(ENTITY, json)?;

    let mut operator_tariffs = BTreeMap::<Operator, BTreeMap<TariffType, Tariff>>::new();
    let mut service_tariffs = BTreeMap::<Service, Vec<Tariff>>::new();

    for (key, value) in parsed.tariff.unwrap_or_default() {
        match value {
            serde_json::Value::Object(_) => {
                let table: BTreeMap<String, TariffJson> = from_value(value)?;
                let table = table
                    .into_iter()
                    .map(|(tariff, entry)| {
                        let tariff_type = TariffType::from_wire(&tariff).ok_or(
                            DecodeError::UnknownVariant {
                                entity: ENTITY,
                                field: "tariff",
                                value: tariff,
                            },
                        )?;
                        Ok((tariff_type, tariff_from_json(entry)?))
                    })
                    .collect::<Result<BTreeMap<_, _>, DecodeError>>()?;
                operator_tariffs.insert(Operator::from_wire(&key), table);
            }
            serde_json::Value::Array(_) => {
                let list: Vec<TariffJson> = from_value(value)?;
                let list = list
                    .into_iter()
                    .map(tariff_from_json)
                    .collect::<Result<Vec<_>, DecodeError>>()?;
                service_tariffs.insert(Service::from_wire(&key), list);
            }
            _ => return Err(DecodeError::TariffShape { key }),
        }
    }

    Ok(Balance {
        balance: parsed.balance.to_f64(ENTITY, "balance")?,
        credit: parsed.credit.to_f64(ENTITY, "credit")?,
        contract_type: parsed.contract_type.unwrap_or_default(),
        operator_tariffs,
        service_tariffs,
    })
}

pub fn decode_operator_info(json: &str) -> Result<OperatorInfo, DecodeError> {
    let parsed: OperatorInfoJson = from_json("OperatorInfo", json)?;
    Ok(OperatorInfo {
        operator: Operator::from_wire(&parsed.operator),
        title: parsed.title.unwrap_or_default(),
        region: non_empty(parsed.region),
    })
}

fn from_value<T>(value: serde_json::Value) -> Result<T, DecodeError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(|source| DecodeError::Json {
        entity: "Tariff",
        source,
    })
}

fn tariff_from_json(entry: TariffJson) -> Result<Tariff, DecodeError> {
    const ENTITY: &str = "Tariff";

    Ok(Tariff {
        abonent_payment: entry.abon.to_f64(ENTITY, "abon")?,
        request_cost: entry.request.to_f64(ENTITY, "request")?,
        title: entry.title.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_balance_classifies_tariffs() {
        let json = r#"{
            "balance":"476.50",
            "credit":0,
            "type":"postpay",
            "tariff":{
                "mts":{
                    "manual":{"abon":"0.00","request":"2.50","title":"Manual"},
                    "daily":{"abon":150,"request":0,"title":"Daily"}
                },
                "eventsms":[{"abon":"0","request":"1.20","title":"SMS notice"}]
            }
        }"#;

        let balance = decode_balance(json).unwrap();
        assert_eq!(balance.balance, 476.5);
        assert_eq!(balance.credit, 0.0);
        assert_eq!(balance.contract_type, "postpay");

        let mts = &balance.operator_tariffs[&Operator::Mts];
        assert_eq!(mts[&TariffType::Manual].request_cost, 2.5);
        assert_eq!(mts[&TariffType::Daily].abonent_payment, 150.0);

        let sms = &balance.service_tariffs[&Service::EventSms];
        assert_eq!(sms.len(), 1);
        assert_eq!(sms[0].title, "SMS notice");
    }

    #[test]
    fn decode_balance_without_tariffs() {
        let balance = decode_balance(r#"{"balance":10,"credit":"5.5"}"#).unwrap();
        assert_eq!(balance.credit, 5.5);
        assert!(balance.operator_tariffs.is_empty());
        assert!(balance.service_tariffs.is_empty());
    }

    #[test]
    fn decode_balance_rejects_scalar_tariff_entry() {
        let json = r#"{"balance":1,"credit":0,"tariff":{"mts":"n/a"}}"#;
        assert!(matches!(
            decode_balance(json),
            Err(DecodeError::TariffShape { key }) if key == "mts"
        ));
    }

    #[test]
    fn decode_balance_rejects_unknown_tariff_type() {
        let json = r#"{"balance":1,"credit":0,"tariff":{"mts":{"weekly":{"abon":1,"request":1}}}}"#;
        assert!(matches!(
            decode_balance(json),
            Err(DecodeError::UnknownVariant { value, .. }) if value == "weekly"
        ));
    }

    #[test]
    fn decode_operator() {
        let info =
            decode_operator_info(r#"{"operator":"megafon","title":"MegaFon","region":""}"#).unwrap();
        assert_eq!(info.operator, Operator::Megafon);
        assert_eq!(info.title, "MegaFon");
        assert_eq!(info.region, None);
    }
}
