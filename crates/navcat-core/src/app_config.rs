/// Application configuration for the feed sync pipeline.
///
/// Hand-tuned constants (retry counts, minimum sentence length, line-scan key
/// length) live here as named fields rather than being scattered through the
/// pipeline code.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the Google Shopping XML feed.
    pub feed_url: String,
    /// Timeout for the feed document fetch, in seconds.
    pub feed_timeout_secs: u64,
    /// Timeout for each per-entry product page fetch, in seconds.
    pub page_timeout_secs: u64,
    pub user_agent: String,
    /// Additional fetch attempts after the first failure.
    pub max_retries: u32,
    /// Fixed delay between retry attempts, in seconds.
    pub retry_delay_secs: u64,
    /// Pause between consecutive feed entries, in milliseconds.
    pub inter_request_delay_ms: u64,
    /// Sentences at or below this length are discarded as noise.
    pub min_sentence_len: usize,
    /// Bullet points shorter than this are dropped after formatting.
    pub min_point_len: usize,
    /// Maximum key length accepted by the full-page line-scan fallback.
    pub max_line_key_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: String::new(),
            feed_timeout_secs: 30,
            page_timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
            max_retries: 3,
            retry_delay_secs: 3,
            inter_request_delay_ms: 1000,
            min_sentence_len: 15,
            min_point_len: 10,
            max_line_key_len: 50,
        }
    }
}
