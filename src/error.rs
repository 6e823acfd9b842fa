//! Error type shared by the API client and graph preparation.

use thiserror::Error;

/// Result alias used across the dashboard.
pub type Result<T> = std::result::Result<T, AppError>;

/// Everything that can go wrong between the API and the canvas.
///
/// Errors carry rendered strings rather than source errors so they stay
/// `Clone + PartialEq` and can be stored in resources and memos.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
	/// The request never produced a response.
	#[error("Network error: {0}")]
	Network(String),

	/// The API answered with a non-success status.
	#[error("Request to {url} failed with status {status}")]
	Status { url: String, status: u16 },

	/// The response body was not the JSON we expected.
	#[error("Decode error: {0}")]
	Decode(String),

	/// The payload decoded but violates a structural requirement.
	#[error("Malformed payload: {0}")]
	MalformedPayload(String),
}

impl From<serde_json::Error> for AppError {
	fn from(err: serde_json::Error) -> Self {
		AppError::Decode(err.to_string())
	}
}

impl AppError {
	/// Wrap a JS exception thrown by `fetch` or its body readers.
	pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
		let message = value
			.as_string()
			.or_else(|| {
				js_sys::Reflect::get(&value, &"message".into())
					.ok()
					.and_then(|m| m.as_string())
			})
			.unwrap_or_else(|| format!("{:?}", value));
		AppError::Network(message)
	}
}
