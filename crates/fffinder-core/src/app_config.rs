/// Runtime settings for loading the permit dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin the dataset is served from; the dataset path is appended to it.
    pub data_base_url: String,
    pub log_level: String,
    pub user_agent: String,
}
