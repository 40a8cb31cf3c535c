use clap::Parser;
use reporter_core::{AzureChatClient, Config, WeatherApiClient, weather_report};
use std::process::ExitCode;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-reporter", version, about = "Narrated weather report for a city")]
pub struct Cli {
    /// City name to report on.
    #[arg(default_value = "Jakarta")]
    pub city: String,
}

impl Cli {
    pub async fn run(self) -> ExitCode {
        let (output, code) = match self.report().await {
            Ok(report) => (report, ExitCode::SUCCESS),
            Err(error) => (format!("{error:#}"), ExitCode::FAILURE),
        };

        println!("\nWeather Report:\n--------------\n{output}");
        code
    }

    async fn report(&self) -> anyhow::Result<String> {
        let config = Config::from_env()?;
        let source = WeatherApiClient::new(config.weather_api_key);
        let generator = AzureChatClient::new(config.azure);

        let report = weather_report(&source, &generator, &self.city).await?;
        Ok(report)
    }
}
