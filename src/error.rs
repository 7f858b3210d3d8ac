use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaveError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("data url payload is not valid base64: {0}")]
    SourceDecode(#[from] base64::DecodeError),

    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
