//! Fincalc demonstration binary.
//!
//! Builds a calculator from configuration and prints a sample
//! compound-interest result.

use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fincalc_core::FinancialCalculator;
use fincalc_shared::{AppConfig, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fincalc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let amount = run().inspect_err(|err| error!(code = err.error_code(), %err, "Demo failed"))?;
    println!("Compound interest: {amount}");

    Ok(())
}

fn run() -> AppResult<Decimal> {
    let config = AppConfig::load()?;
    let calc = FinancialCalculator::from_config(&config.calculator)?;
    info!(
        base_currency = calc.base_currency(),
        rates = calc.rates().len(),
        "Calculator configured"
    );

    Ok(calc.calculate_compound_interest(Decimal::from(1000), Decimal::from(5), 10)?)
}
