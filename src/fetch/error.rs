use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Malformed XML in forecast response")]
    Xml(#[from] quick_xml::Error),

    #[error("Forecast response is not an XML document: {0:?}")]
    NotXml(String),

    #[error("Forecast response ended with {0} unclosed elements")]
    Truncated(usize),

    // The service answers HTTP 200 with an error code in the XML header
    #[error("Forecast service returned result code {code}: {message}")]
    Service { code: String, message: String },
}
