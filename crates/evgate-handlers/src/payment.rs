use evgate_types::{Currency, Envelope, NormalizedRecord, PaymentRecord};
use serde_json::{Map, Value};

use crate::fields::FieldReader;

/// Processing fee, as a fraction of the amount.
const FEE_RATE: f64 = 0.025;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Validate and normalize a PAYMENT event.
///
/// Requires `amount` (strictly positive number) and `currency` (BHD, USD or
/// EUR, case-folded). Normalization computes the fee and the net amount,
/// both rounded to 2 decimals.
pub fn handle(event: &Map<String, Value>) -> Envelope {
    let mut fields = FieldReader::new(event);

    let amount = match fields.number("amount") {
        Some(value) if value > 0.0 => Some(value),
        Some(_) => {
            fields.reject("amount must be positive");
            None
        }
        None => None,
    };

    let currency = match fields.string("currency") {
        Some(value) => match Currency::parse(value) {
            Some(currency) => Some(currency),
            None => {
                fields.reject("unsupported currency");
                None
            }
        },
        None => None,
    };

    let errors = fields.finish();
    match (amount, currency) {
        (Some(amount), Some(currency)) if errors.is_empty() => {
            let fee = round2(amount * FEE_RATE);
            let net = round2(amount - fee);
            Envelope::ok(
                "payment processed",
                NormalizedRecord::Payment(PaymentRecord::new(amount, currency, fee, net)),
            )
        }
        _ => Envelope::error("validation failed", errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evgate_types::Status;
    use serde_json::json;

    fn payment(value: Value) -> Envelope {
        handle(value.as_object().unwrap())
    }

    fn payment_record(envelope: Envelope) -> PaymentRecord {
        match envelope.data {
            NormalizedRecord::Payment(record) => record,
            other => panic!("expected payment record, got {other:?}"),
        }
    }

    #[test]
    fn test_fee_and_net_for_100_usd() {
        let envelope = payment(json!({ "amount": 100, "currency": "USD" }));
        assert_eq!(envelope.status, Status::Ok);
        assert_eq!(envelope.message, "payment processed");
        let record = payment_record(envelope);
        assert_eq!(record.amount, 100.0);
        assert_eq!(record.currency, Currency::Usd);
        assert_eq!(record.fee, 2.5);
        assert_eq!(record.net, 97.5);
        assert_eq!(record.status, "processed");
    }

    #[test]
    fn test_fee_plus_net_equals_amount_up_to_rounding() {
        for amount in [0.01, 1.0, 19.99, 100.0, 1234.56, 99999.99] {
            let record = payment_record(payment(json!({ "amount": amount, "currency": "EUR" })));
            assert!(
                (record.fee + record.net - amount).abs() < 0.011,
                "fee {} + net {} drifted from amount {}",
                record.fee,
                record.net,
                amount
            );
        }
    }

    #[test]
    fn test_fee_is_deterministic() {
        let first = payment_record(payment(json!({ "amount": 19.99, "currency": "BHD" })));
        let second = payment_record(payment(json!({ "amount": 19.99, "currency": "BHD" })));
        assert_eq!(first.fee, second.fee);
        assert_eq!(first.net, second.net);
    }

    #[test]
    fn test_zero_and_negative_amounts_are_rejected() {
        for amount in [0, -5] {
            let envelope = payment(json!({ "amount": amount, "currency": "USD" }));
            assert_eq!(envelope.status, Status::Error);
            assert_eq!(envelope.errors, vec!["amount must be positive"]);
            assert!(envelope.data.is_empty());
        }
    }

    #[test]
    fn test_unsupported_currency() {
        let envelope = payment(json!({ "amount": 10, "currency": "GBP" }));
        assert_eq!(envelope.errors, vec!["unsupported currency"]);
    }

    #[test]
    fn test_currency_is_case_folded() {
        let record = payment_record(payment(json!({ "amount": 10, "currency": "usd" })));
        assert_eq!(record.currency, Currency::Usd);
    }

    #[test]
    fn test_violations_accumulate() {
        let envelope = payment(json!({ "amount": -1, "currency": "XRP" }));
        assert_eq!(
            envelope.errors,
            vec!["amount must be positive", "unsupported currency"]
        );
    }
}
