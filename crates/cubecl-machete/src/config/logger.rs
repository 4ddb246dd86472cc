/// Logging configuration for kernel selection.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoggerConfig {
    /// Which selection decisions are forwarded to the `log` crate.
    #[serde(default)]
    pub level: SelectionLogLevel,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SelectionLogLevel {
    #[serde(rename = "disabled")]
    Disabled,
    /// Only rejected problems are logged.
    #[default]
    #[serde(rename = "minimal")]
    Minimal,
    /// Accepted problems are logged too.
    #[serde(rename = "full")]
    Full,
}

impl SelectionLogLevel {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "disabled" | "0" => Some(Self::Disabled),
            "minimal" | "1" => Some(Self::Minimal),
            "full" | "2" => Some(Self::Full),
            _ => None,
        }
    }
}
