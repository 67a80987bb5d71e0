#[derive(Debug)]
pub enum ConfigError {
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct PrometheusConfig {
    pub datasource_uid: String,
    pub metric_name: String,
}

impl PrometheusConfig {
    pub fn new(
        datasource_uid: impl Into<String>,
        metric_name: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let datasource_uid = datasource_uid.into();
        let metric_name = metric_name.into();

        if datasource_uid.is_empty() {
            return Err(ConfigError::Validation(
                "datasource UID must not be empty".into(),
            ));
        }
        if metric_name.is_empty() {
            return Err(ConfigError::Validation(
                "metric name must not be empty".into(),
            ));
        }

        Ok(Self {
            datasource_uid,
            metric_name,
        })
    }
}
