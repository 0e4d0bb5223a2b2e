/*
[INPUT]:  Order schema definitions
[OUTPUT]: Typed order intents, wire enums, and response summaries
[POS]:    Data layer - type definitions for order translation
[UPDATE]: When order types or wire parameters change
*/

pub mod enums;
pub mod intent;
pub mod summary;

pub use enums::{Side, TimeInForce};
pub use intent::OrderIntent;
pub use summary::OrderSummary;
