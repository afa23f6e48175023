pub mod config;
pub mod convert;
pub mod error;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod ui;

use anyhow::Result;
use comfy_table::Cell;
use providers::open_exchange_rates::LatestRates;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        base: String,
        target: String,
        amount: f64,
    },
    Rates {
        base: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert {
            base,
            target,
            amount,
        } => {
            let provider = providers::exchange_rate_api::ExchangeRateApiProvider::new(
                config.exchange_rate_api_url(),
                &config.exchange_rate_api_key()?,
            );

            let result = convert::convert(&provider, &base, &target, amount).await?;

            println!(
                "\n{amount} {base} = {} {}",
                ui::style_text(
                    &format!("{:.2}", result.converted_amount),
                    ui::StyleType::ResultValue
                ),
                ui::style_text(&target, ui::StyleType::ResultLabel),
            );
            println!(
                "{}",
                ui::style_text(
                    &format!("1 {base} = {} {target}", result.rate),
                    ui::StyleType::Subtle
                )
            );
            Ok(())
        }
        AppCommand::Rates { base } => {
            let provider = providers::open_exchange_rates::OpenExchangeRatesProvider::new(
                config.open_exchange_rates_url(),
                &config.open_exchange_app_id()?,
            );

            let rates = provider.latest_rates(&base).await?;
            println!("{}", rates.display_as_table());
            Ok(())
        }
    }
}

impl LatestRates {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Rate (1 {})", self.base)),
        ]);

        let mut codes: Vec<&String> = self.rates.keys().collect();
        codes.sort();

        for code in codes {
            table.add_row(vec![Cell::new(code), ui::rate_cell(self.rates[code])]);
        }

        format!(
            "Latest rates: {}\n\n{}",
            ui::style_text(&self.base, ui::StyleType::Title),
            table
        )
    }
}
