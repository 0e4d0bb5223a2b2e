/*
[INPUT]:  CLI arguments, credential environment variables
[OUTPUT]: One placed order (or a classified failure exit code)
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, exit codes, or output format
*/

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use binfut_adapter::{
    AdapterError, ClientConfig, Credentials, DiagnosticSink, FileSink, FuturesClient,
    OrderIntent, OrderSummary, Side, TimeInForce,
};

const API_KEY_VAR: &str = "BINANCE_API_KEY";
const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

// Exit codes: 1 = caught locally before any network call, 2 = remote/transport
const EXIT_USAGE: u8 = 1;
const EXIT_REMOTE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "binfut",
    version,
    about = "Binance USDT-M futures testnet order placement"
)]
struct Cli {
    /// Trading symbol (e.g. BTCUSDT)
    #[arg(long)]
    symbol: String,

    /// Order side
    #[arg(long, value_enum, ignore_case = true)]
    side: SideArg,

    /// Order type
    #[arg(long = "type", value_enum, ignore_case = true)]
    order_type: TypeArg,

    /// Quantity in contract/lot decimal
    #[arg(long)]
    quantity: Decimal,

    /// Limit price, required for LIMIT and STOPLIMIT
    #[arg(long)]
    price: Option<Decimal>,

    /// Trigger price, required for STOPLIMIT
    #[arg(long = "stop-price")]
    stop_price: Option<Decimal>,

    /// Time in force for LIMIT and STOPLIMIT
    #[arg(long = "time-in-force", value_enum, ignore_case = true, default_value = "GTC")]
    time_in_force: TifArg,

    /// Only reduce an existing position (MARKET orders)
    #[arg(long = "reduce-only")]
    reduce_only: bool,

    /// Override the API base URL
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// Log level filter for console diagnostics
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Append-only request/response log file
    #[arg(long = "log-file", value_name = "PATH", default_value = "binfut.log")]
    log_file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SideArg {
    #[value(name = "BUY")]
    Buy,
    #[value(name = "SELL")]
    Sell,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Side::Buy,
            SideArg::Sell => Side::Sell,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TypeArg {
    #[value(name = "MARKET")]
    Market,
    #[value(name = "LIMIT")]
    Limit,
    #[value(name = "STOPLIMIT")]
    StopLimit,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TifArg {
    #[value(name = "GTC")]
    Gtc,
    #[value(name = "IOC")]
    Ioc,
    #[value(name = "FOK")]
    Fok,
}

impl From<TifArg> for TimeInForce {
    fn from(tif: TifArg) -> Self {
        match tif {
            TifArg::Gtc => TimeInForce::Gtc,
            TifArg::Ioc => TimeInForce::Ioc,
            TifArg::Fok => TimeInForce::Fok,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("error: {err}");
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&args).await {
        Ok(summary) => {
            println!("Order placed. Response snippet:");
            for (name, value) in summary.fields() {
                println!("{name}: {value}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "order failed");
            eprintln!("error: {err}");
            if err.is_usage_error() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::from(EXIT_REMOTE)
            }
        }
    }
}

async fn run(args: &Cli) -> Result<OrderSummary, AdapterError> {
    let credentials = load_credentials()?;
    let intent = build_intent(args)?;

    let sink: Arc<dyn DiagnosticSink> = Arc::new(FileSink::open(&args.log_file).map_err(
        |err| {
            AdapterError::Config(format!(
                "cannot open log file {}: {err}",
                args.log_file.display()
            ))
        },
    )?);

    let mut config = ClientConfig::default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    let client = FuturesClient::new(credentials, config, sink)?;

    info!(
        order_type = intent.type_name(),
        symbol = intent.symbol(),
        "submitting order"
    );
    let response = client.place_order(&intent).await?;
    info!("order accepted");
    Ok(OrderSummary::from_response(&response))
}

fn load_credentials() -> Result<Credentials, AdapterError> {
    let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
    let api_secret = std::env::var(API_SECRET_VAR).unwrap_or_default();
    if api_key.is_empty() || api_secret.is_empty() {
        return Err(AdapterError::Config(format!(
            "{API_KEY_VAR} and {API_SECRET_VAR} must be set in the environment"
        )));
    }
    Credentials::new(api_key, api_secret)
}

/// Map the flag surface onto an order intent.
///
/// Conditional requirements (price for LIMIT, stop price for STOPLIMIT) are
/// checked here so they fail before credentials are used for anything.
fn build_intent(args: &Cli) -> Result<OrderIntent, AdapterError> {
    match args.order_type {
        TypeArg::Market => Ok(OrderIntent::Market {
            symbol: args.symbol.clone(),
            side: args.side.into(),
            quantity: args.quantity,
            reduce_only: args.reduce_only,
        }),
        TypeArg::Limit => {
            let price = args.price.ok_or_else(|| {
                AdapterError::InvalidIntent("LIMIT order requires --price".to_string())
            })?;
            Ok(OrderIntent::Limit {
                symbol: args.symbol.clone(),
                side: args.side.into(),
                quantity: args.quantity,
                price,
                time_in_force: args.time_in_force.into(),
            })
        }
        TypeArg::StopLimit => {
            let price = args.price.ok_or_else(|| {
                AdapterError::InvalidIntent("STOPLIMIT order requires --price".to_string())
            })?;
            let stop_price = args.stop_price.ok_or_else(|| {
                AdapterError::InvalidIntent("STOPLIMIT order requires --stop-price".to_string())
            })?;
            Ok(OrderIntent::StopLimit {
                symbol: args.symbol.clone(),
                side: args.side.into(),
                quantity: args.quantity,
                price,
                stop_price,
                time_in_force: args.time_in_force.into(),
            })
        }
    }
}

fn init_tracing(log_level: &str) -> Result<(), AdapterError> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|err| AdapterError::Config(format!("invalid log level: {err}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| AdapterError::Config(format!("failed to initialize logging: {err}")))?;
    Ok(())
}
