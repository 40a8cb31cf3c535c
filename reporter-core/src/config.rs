use anyhow::{Result, anyhow};

/// Settings for the hosted chat-completion client.
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub api_key: String,
    pub api_version: String,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: String,
}

/// Read-once credentials for the two upstream services.
///
/// Loaded from the process environment; there is no configuration file.
#[derive(Debug, Clone)]
pub struct Config {
    pub weather_api_key: String,
    pub azure: AzureOpenAiConfig,
}

impl Config {
    /// Load credentials from the process environment.
    ///
    /// Fails on the first variable that is unset or blank, naming it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            weather_api_key: require(&lookup, "WEATHERAPI_KEY")?,
            azure: AzureOpenAiConfig {
                api_key: require(&lookup, "AZURE_OPENAI_API_KEY")?,
                api_version: require(&lookup, "AZURE_OPENAI_API_VERSION")?,
                endpoint: require(&lookup, "AZURE_OPENAI_ENDPOINT")?,
            },
        })
    }
}

fn require<F>(lookup: &F, key: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            anyhow!("{key} is not set.\nHint: export {key} before running `weather-reporter`.")
        })
}
