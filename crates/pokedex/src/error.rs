/// Failures talking to the catalog API
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse catalog response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
