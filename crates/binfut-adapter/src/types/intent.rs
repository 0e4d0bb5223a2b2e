/*
[INPUT]:  User order intents (symbol, side, quantity, prices, time in force)
[OUTPUT]: Validated wire parameter mappings per order type
[POS]:    Data layer - order intent translation, pure and network-free
[UPDATE]: When order types, wire names, or validation rules change
*/

use rust_decimal::Decimal;

use crate::http::{AdapterError, QueryParams, Result};
use crate::types::enums::{Side, TimeInForce};

/// A user-specified order intent, one variant per supported order type.
///
/// Each variant carries exactly the fields legal for its type, so a
/// type-inconsistent parameter set cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderIntent {
    /// Immediate execution at the current market price
    Market {
        symbol: String,
        side: Side,
        quantity: Decimal,
        reduce_only: bool,
    },
    /// Rests on the book at `price` until filled or expired per `time_in_force`
    Limit {
        symbol: String,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    },
    /// Triggers at `stop_price`, then rests as a limit order at `price`.
    ///
    /// Sent as `type=STOP`. The exact trigger behavior depends on
    /// exchange-side flags (`workingType`, `priceProtect`, `closePosition`)
    /// that this client does not model; none are sent.
    StopLimit {
        symbol: String,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
        time_in_force: TimeInForce,
    },
}

impl OrderIntent {
    /// Wire value for the `type` parameter
    pub fn type_name(&self) -> &'static str {
        match self {
            OrderIntent::Market { .. } => "MARKET",
            OrderIntent::Limit { .. } => "LIMIT",
            OrderIntent::StopLimit { .. } => "STOP",
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            OrderIntent::Market { symbol, .. }
            | OrderIntent::Limit { symbol, .. }
            | OrderIntent::StopLimit { symbol, .. } => symbol,
        }
    }

    /// Translate the intent into wire parameters.
    ///
    /// Pure function, no I/O. Fails with `InvalidIntent` before any request
    /// is built if the symbol is empty or a quantity/price is not strictly
    /// positive. The symbol is case-normalized to uppercase.
    pub fn to_params(&self) -> Result<QueryParams> {
        self.validate()?;

        let mut params = QueryParams::new();
        params.push_str("symbol", &self.symbol().to_uppercase());
        match self {
            OrderIntent::Market {
                side,
                quantity,
                reduce_only,
                ..
            } => {
                params.push_str("side", side.as_wire());
                params.push_str("type", self.type_name());
                params.push_decimal("quantity", *quantity);
                params.push_bool("reduceOnly", *reduce_only);
            }
            OrderIntent::Limit {
                side,
                quantity,
                price,
                time_in_force,
                ..
            } => {
                params.push_str("side", side.as_wire());
                params.push_str("type", self.type_name());
                params.push_decimal("quantity", *quantity);
                params.push_decimal("price", *price);
                params.push_str("timeInForce", time_in_force.as_wire());
            }
            OrderIntent::StopLimit {
                side,
                quantity,
                price,
                stop_price,
                time_in_force,
                ..
            } => {
                params.push_str("side", side.as_wire());
                params.push_str("type", self.type_name());
                params.push_decimal("quantity", *quantity);
                params.push_decimal("price", *price);
                params.push_decimal("stopPrice", *stop_price);
                params.push_str("timeInForce", time_in_force.as_wire());
            }
        }
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        if self.symbol().trim().is_empty() {
            return Err(AdapterError::InvalidIntent(
                "symbol must not be empty".to_string(),
            ));
        }
        match self {
            OrderIntent::Market { quantity, .. } => {
                require_positive("quantity", *quantity)?;
            }
            OrderIntent::Limit {
                quantity, price, ..
            } => {
                require_positive("quantity", *quantity)?;
                require_positive("price", *price)?;
            }
            OrderIntent::StopLimit {
                quantity,
                price,
                stop_price,
                ..
            } => {
                require_positive("quantity", *quantity)?;
                require_positive("price", *price)?;
                require_positive("stop price", *stop_price)?;
            }
        }
        Ok(())
    }
}

fn require_positive(name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(AdapterError::InvalidIntent(format!(
            "{name} must be strictly positive, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn market_intent() -> OrderIntent {
        OrderIntent::Market {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec!(0.01),
            reduce_only: false,
        }
    }

    #[test]
    fn test_market_wire_type() {
        assert_eq!(market_intent().type_name(), "MARKET");
    }

    #[test]
    fn test_stop_limit_maps_to_stop() {
        let intent = OrderIntent::StopLimit {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: dec!(1),
            price: dec!(61500),
            stop_price: dec!(61000),
            time_in_force: TimeInForce::Gtc,
        };
        assert_eq!(intent.type_name(), "STOP");
    }

    #[test]
    fn test_symbol_uppercased() {
        let intent = OrderIntent::Market {
            symbol: "btcusdt".to_string(),
            side: Side::Buy,
            quantity: dec!(0.01),
            reduce_only: false,
        };
        let params = intent.to_params().unwrap();
        assert_eq!(params.get("symbol"), Some("BTCUSDT"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let intent = OrderIntent::Market {
            symbol: "BTCUSDT".to_string(),
            side: Side::Buy,
            quantity: Decimal::ZERO,
            reduce_only: false,
        };
        let err = intent.to_params().unwrap_err();
        assert!(matches!(err, AdapterError::InvalidIntent(_)));
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let intent = OrderIntent::Market {
            symbol: "  ".to_string(),
            side: Side::Sell,
            quantity: dec!(0.01),
            reduce_only: false,
        };
        assert!(intent.to_params().is_err());
    }
}
