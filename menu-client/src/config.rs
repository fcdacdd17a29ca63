//! Client configuration

use crate::{ClientResult, NetworkHttpClient};

/// Production API root
pub const DEFAULT_API_BASE_URL: &str =
    "https://api.foodmenuwebbuilder.technolitics.com/api/v1/foodmenu-website-builder";

/// Host that serves uploaded images by file name
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://technolitics-s3-bucket.s3.ap-south-1.amazonaws.com/foodmenu-websitebuilder-s3-bucket/";

/// Client configuration for connecting to the menu backend
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | MENU_API_BASE_URL | [`DEFAULT_API_BASE_URL`] |
/// | MENU_IMAGE_BASE_URL | [`DEFAULT_IMAGE_BASE_URL`] |
/// | MENU_REQUEST_TIMEOUT_SECS | unset (requests never time out) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub api_base_url: String,

    /// Image host prefix, joined with stored file names verbatim
    pub image_base_url: String,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration for the given API root
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Load from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("MENU_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
        );
        if let Ok(base) = std::env::var("MENU_IMAGE_BASE_URL") {
            config.image_base_url = base;
        }
        config.timeout = std::env::var("MENU_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());
        config
    }

    /// Set the image host prefix
    pub fn with_image_base_url(mut self, base: impl Into<String>) -> Self {
        self.image_base_url = base.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Full URL of a stored image
    pub fn image_url(&self, file_name: &str) -> String {
        shared::util::image_url(&self.image_base_url, file_name)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
