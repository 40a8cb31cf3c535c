use thiserror::Error;

/// Everything that can go wrong between the CLI argument and the printed
/// report.
///
/// The `Display` texts are the tool's output contract: they are printed
/// verbatim in place of a report, so the fetch variants keep the `Error:`
/// prefix and the generation variant keeps the
/// `Error generating weather report:` prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The weather provider answered with a non-success status.
    ///
    /// Carries the raw response body for diagnostics; only the status code is
    /// part of the printed message.
    #[error("Error: Unable to fetch weather data. Status code: {status}")]
    FetchStatus { status: u16, body: String },

    /// The weather request never produced a usable body: DNS, connect or read
    /// failures, or JSON that does not parse.
    #[error("Error: {message}")]
    FetchTransport { message: String },

    /// The chat-completion call failed at any point.
    #[error("Error generating weather report: {message}")]
    Generation { message: String },
}

impl ReportError {
    pub(crate) fn fetch_transport(err: impl Into<anyhow::Error>) -> Self {
        let err: anyhow::Error = err.into();
        ReportError::FetchTransport { message: format!("{err:#}") }
    }

    pub(crate) fn generation(err: impl Into<anyhow::Error>) -> Self {
        let err: anyhow::Error = err.into();
        ReportError::Generation { message: format!("{err:#}") }
    }
}
