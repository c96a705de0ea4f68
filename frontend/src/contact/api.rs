use contracts::{ContactReceipt, ContactRequest};
#[cfg(not(feature = "simulated-contact"))]
use gloo_net::http::Request;
#[cfg(feature = "simulated-contact")]
use gloo_timers::future::TimeoutFuture;
use log::debug;
#[cfg(not(feature = "simulated-contact"))]
use log::error;
#[cfg(not(feature = "simulated-contact"))]
use serde::Deserialize;

use crate::config;

#[cfg(not(feature = "simulated-contact"))]
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sends a validated submission to `POST /api/contact`. Every failure is
/// turned into a message fit for the inline error banner.
#[cfg(not(feature = "simulated-contact"))]
pub async fn submit(request: &ContactRequest) -> Result<ContactReceipt, String> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| {
            error!("Failed to encode contact submission: {}", e);
            "Something went wrong preparing your message.".to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            error!("Contact request failed: {}", e);
            "Could not reach our server. Please try again.".to_string()
        })?;

    if response.ok() {
        return response.json::<ContactReceipt>().await.map_err(|e| {
            error!("Unexpected contact response: {}", e);
            "Your message may not have been delivered. Please try again.".to_string()
        });
    }

    let status = response.status();
    debug!("Contact submission rejected with status {}", status);
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Request failed with status {}", status)),
    }
}

/// Waits a fixed delay, logs the request and acknowledges it locally.
#[cfg(feature = "simulated-contact")]
pub async fn submit(request: &ContactRequest) -> Result<ContactReceipt, String> {
    TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;
    debug!("Form data: {:?}", request);
    let now = chrono::Utc::now();
    Ok(ContactReceipt {
        id: format!("local-{}", now.timestamp_millis()),
        received_at: now.to_rfc3339(),
    })
}
