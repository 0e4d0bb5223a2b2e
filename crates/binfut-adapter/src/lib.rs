/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod diag;
pub mod http;
pub mod types;

// Re-export commonly used types from diag
pub use diag::{
    DiagnosticEvent,
    DiagnosticSink,
    FileSink,
    MemorySink,
    NullSink,
};

// Re-export commonly used types from http
pub use http::{
    AdapterError,
    ClientConfig,
    Credentials,
    FuturesClient,
    QueryParams,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
