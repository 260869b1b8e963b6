//! Default configuration values

/// Default temporary workspace used during the install
pub const DEFAULT_TEMP_DIR: &str = "/tmp/veloc";

/// Name of the local build directory reset before the top-level build
pub const BUILD_DIR_NAME: &str = "build";

/// Listing page scraped for the Boost source archive link
pub const BOOST_DOWNLOAD_PAGE: &str = "https://www.boost.org/users/download";

/// Pattern selecting a downloadable Boost source archive href
pub const ARCHIVE_LINK_PATTERN: &str = r#"href="([^"]+\.tar\.bz2)""#;

/// User-Agent sent with listing and download requests; the Boost
/// download page rejects requests without a browser User-Agent
pub const HTTP_USER_AGENT: &str = "Mozilla/5.0";

/// Maximum number of download retry attempts
pub const MAX_DOWNLOAD_RETRIES: u32 = 3;

/// Base delay for download retry backoff (in milliseconds)
pub const RETRY_BASE_DELAY_MS: u64 = 1000;

/// Request timeout for archive downloads (in seconds)
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Connect timeout for HTTP requests (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 30;
