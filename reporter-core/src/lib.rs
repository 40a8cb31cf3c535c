//! Core library for the `weather-reporter` CLI.
//!
//! This crate defines:
//! - Credential handling for the two upstream services
//! - The weather snapshot model and the WeatherAPI.com client
//! - Prompt construction and report generation against an Azure OpenAI
//!   deployment
//!
//! It is used by `reporter-cli`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod weather;

pub use config::{AzureOpenAiConfig, Config};
pub use error::ReportError;
pub use model::WeatherSnapshot;
pub use report::{AzureChatClient, ReportGenerator, build_prompt};
pub use weather::{WeatherApiClient, WeatherSource};

/// Fetch current conditions for `location` and narrate them as a report.
///
/// The two steps run strictly in sequence; generation is never attempted when
/// the fetch fails.
pub async fn weather_report(
    source: &dyn WeatherSource,
    generator: &dyn ReportGenerator,
    location: &str,
) -> Result<String, ReportError> {
    let snapshot = source.current(location).await?;
    generator.generate(&snapshot, location).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubSource {
        result: Result<WeatherSnapshot, ReportError>,
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        async fn current(&self, _location: &str) -> Result<WeatherSnapshot, ReportError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct CountingGenerator {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ReportGenerator for CountingGenerator {
        async fn generate(
            &self,
            snapshot: &WeatherSnapshot,
            location: &str,
        ) -> Result<String, ReportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ReportError::Generation { message: "model unavailable".to_string() });
            }
            Ok(format!("{location}: {}", snapshot.condition))
        }
    }

    fn sample_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature_c: 29.5,
            humidity_pct: 70,
            condition: "Partly cloudy".to_string(),
            wind_kph: 12.3,
        }
    }

    #[tokio::test]
    async fn narrates_the_fetched_snapshot() {
        let source = StubSource { result: Ok(sample_snapshot()) };
        let generator = CountingGenerator::default();

        let report = weather_report(&source, &generator, "Jakarta").await.expect("must succeed");

        assert_eq!(report, "Jakarta: Partly cloudy");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_failure_skips_generation() {
        let source = StubSource {
            result: Err(ReportError::FetchStatus {
                status: 401,
                body: r#"{"error":"invalid key"}"#.to_string(),
            }),
        };
        let generator = CountingGenerator::default();

        let err = weather_report(&source, &generator, "Jakarta").await.unwrap_err();

        assert_eq!(err.to_string(), "Error: Unable to fetch weather data. Status code: 401");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transport_failure_skips_generation() {
        let source = StubSource {
            result: Err(ReportError::FetchTransport {
                message: "connection refused".to_string(),
            }),
        };
        let generator = CountingGenerator::default();

        let err = weather_report(&source, &generator, "Jakarta").await.unwrap_err();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generation_failure_is_propagated_verbatim() {
        let source = StubSource { result: Ok(sample_snapshot()) };
        let generator = CountingGenerator { fail: true, ..Default::default() };

        let err = weather_report(&source, &generator, "Jakarta").await.unwrap_err();

        assert_eq!(err.to_string(), "Error generating weather report: model unavailable");
    }
}
