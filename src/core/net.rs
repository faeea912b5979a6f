use crate::core::YfError;

/// Read the response body as text, mapping non-success statuses to [`YfError::Status`].
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, YfError> {
    let status = resp.status();
    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::warn!(endpoint, status = status.as_u16(), "non-success response");
        #[cfg(not(feature = "tracing"))]
        let _ = endpoint;

        return Err(YfError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}
