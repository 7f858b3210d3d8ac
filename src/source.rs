use std::fs;
use std::io::Read;
use std::time::Duration;

use base64::Engine;

use crate::error::WaveError;

const MAX_FETCH_BYTES: u64 = 10 * 1024 * 1024;

/// Resolves a source string to encoded image bytes. Accepts base64 data
/// urls, http(s) urls and filesystem paths, in that match order.
pub fn load_source(source: &str) -> Result<Vec<u8>, WaveError> {
    if let Some(rest) = source.strip_prefix("data:") {
        return decode_data_url(rest);
    }
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetch_url(source);
    }
    Ok(fs::read(source)?)
}

fn decode_data_url(rest: &str) -> Result<Vec<u8>, WaveError> {
    // data:[<mediatype>][;base64],<payload>
    let Some((meta, payload)) = rest.split_once(',') else {
        return Err(WaveError::UnsupportedSource(
            "data url without a payload separator".to_string(),
        ));
    };
    if !meta.ends_with(";base64") {
        return Err(WaveError::UnsupportedSource(format!(
            "data url must be base64-encoded, got {meta:?}"
        )));
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
}

fn fetch_url(url: &str) -> Result<Vec<u8>, WaveError> {
    let resp = http_agent()
        .get(url)
        .call()
        .map_err(|e| WaveError::Fetch {
            url: url.to_string(),
            source: Box::new(e),
        })?;

    if let Some(len) = resp.header("Content-Length") {
        if let Ok(n) = len.parse::<u64>() {
            if n > MAX_FETCH_BYTES {
                return Err(WaveError::UnsupportedSource(format!(
                    "remote image too large ({n} bytes)"
                )));
            }
        }
    }

    let mut bytes = Vec::new();
    resp.into_reader()
        .take(MAX_FETCH_BYTES)
        .read_to_end(&mut bytes)?;
    log::debug!("fetched {} bytes from {url}", bytes.len());
    Ok(bytes)
}

fn http_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(8))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_data_url_round_trip() {
        let payload = b"not really a png";
        let encoded = base64::engine::general_purpose::STANDARD.encode(payload);
        let url = format!("data:image/png;base64,{encoded}");
        assert_eq!(load_source(&url).unwrap(), payload);
    }

    #[test]
    fn test_data_url_without_payload() {
        let err = load_source("data:image/png;base64").unwrap_err();
        assert!(matches!(err, WaveError::UnsupportedSource(_)));
    }

    #[test]
    fn test_data_url_not_base64() {
        let err = load_source("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, WaveError::UnsupportedSource(_)));
    }

    #[test]
    fn test_data_url_bad_base64_payload() {
        let err = load_source("data:image/png;base64,%%%%").unwrap_err();
        assert!(matches!(err, WaveError::SourceDecode(_)));
    }

    #[test]
    fn test_file_path_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n").unwrap();
        let bytes = load_source(file.path().to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"\x89PNG\r\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_source("/no/such/wave/source.png").unwrap_err();
        assert!(matches!(err, WaveError::Io(_)));
    }
}
