#[derive(Debug, Clone)]
pub struct Config {
    pub ergast_base_url: String,
    pub request_timeout_secs: u64,
    pub health_timeout_secs: u64,
}

impl Config {
    pub fn init() -> Self {
        Config {
            ergast_base_url: std::env::var("ERGAST_BASE_URL")
                .unwrap_or_else(|_| "https://api.jolpi.ca/ergast/f1".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            health_timeout_secs: std::env::var("HEALTH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}
