//! HTTP client for the optional form-processing endpoint.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

/// POST the form as multipart data. `Ok` only for a 2xx response; anything
/// else, including network failures, comes back as an error string.
pub async fn post_form(endpoint: &str, form: &HtmlFormElement) -> Result<(), String> {
    let body = FormData::new_with_form(form).map_err(|e| format!("{:?}", e))?;
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .map_err(|err| format!("request failed: {err}"))?
        .send()
        .await
        .map_err(|err| format!("fetch error: {err}"))?;

    if !response.ok() {
        return Err(format!("{} {}", response.status(), response.status_text()));
    }
    Ok(())
}
