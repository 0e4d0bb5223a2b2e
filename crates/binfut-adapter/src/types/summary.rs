/*
[INPUT]:  Raw JSON order responses
[OUTPUT]: Allow-listed user-facing summary fields
[POS]:    Data layer - response summarization for CLI output
[UPDATE]: When the allow-list of summary fields changes
*/

use serde_json::Value;

/// Fields surfaced to the user, in display order. Everything else in the
/// response is ignored.
const SUMMARY_FIELDS: [&str; 9] = [
    "symbol",
    "orderId",
    "status",
    "avgPrice",
    "price",
    "origQty",
    "executedQty",
    "side",
    "type",
];

/// A compact user-facing view of an order response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    fields: Vec<(&'static str, String)>,
}

impl OrderSummary {
    /// Extract the allow-listed fields from a raw response.
    ///
    /// Never fails; absent fields are simply omitted.
    pub fn from_response(response: &Value) -> Self {
        let mut fields = Vec::new();
        for name in SUMMARY_FIELDS {
            if let Some(value) = response.get(name) {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                fields.push((name, rendered));
            }
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_allow_listed_fields_in_order() {
        let response = json!({
            "orderId": 4055112,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-abc123",
            "price": "61500",
            "origQty": "1",
            "updateTime": 1700000000000u64,
        });
        let summary = OrderSummary::from_response(&response);
        let names: Vec<&str> = summary.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["symbol", "orderId", "status", "price", "origQty"]);
    }

    #[test]
    fn test_non_string_values_rendered() {
        let response = json!({"orderId": 4055112});
        let summary = OrderSummary::from_response(&response);
        assert_eq!(summary.fields(), &[("orderId", "4055112".to_string())]);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let response = json!({"cumQuote": "0", "workingType": "CONTRACT_PRICE"});
        let summary = OrderSummary::from_response(&response);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_never_fails_on_non_object() {
        let summary = OrderSummary::from_response(&json!(["not", "an", "object"]));
        assert!(summary.is_empty());
    }
}
