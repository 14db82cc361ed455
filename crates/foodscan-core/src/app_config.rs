/// Process-wide settings read from `FOODSCAN_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Origin of the Open Food Facts API, without the `/api/v0` path.
    pub off_base_url: String,
    /// Origin of the UPCitemdb API, without the `/prod/trial` path.
    pub upcitemdb_base_url: String,
    pub request_timeout_secs: u64,
    /// Sent as `User-Agent` only when set; requests carry no custom headers otherwise.
    pub user_agent: Option<String>,
    /// Upper bound on barcodes looked up at once by the CLI.
    pub max_concurrent: usize,
}
