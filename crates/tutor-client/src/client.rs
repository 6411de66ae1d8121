//! Tutor API HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use tutor_core::{
    AboutContent, FaqItem, LessonPreview, PricingPlan, PricingQuote, ServiceItem, Testimonial,
};

use crate::error::ClientError;
use crate::types::ApiErrorResponse;

/// Tutor API client.
///
/// Provides typed access to the content endpoints and the pricing quote.
#[derive(Debug, Clone)]
pub struct TutorClient {
    client: Client,
    base_url: String,
}

impl TutorClient {
    /// Create a new tutor API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the tutor service (e.g., `"http://localhost:8000"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new tutor API client with custom options.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built (should not happen with
    /// default settings).
    #[must_use]
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the about page content.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_about(&self) -> Result<AboutContent, ClientError> {
        self.get_json("/about").await
    }

    /// Get the offered services.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_services(&self) -> Result<Vec<ServiceItem>, ClientError> {
        self.get_json("/services").await
    }

    /// Get the pre-built pricing plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_pricing(&self) -> Result<Vec<PricingPlan>, ClientError> {
        self.get_json("/pricing").await
    }

    /// Get the testimonials.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        self.get_json("/testimonials").await
    }

    /// Get the FAQ entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_faq(&self) -> Result<Vec<FaqItem>, ClientError> {
        self.get_json("/faq").await
    }

    /// Get the lesson preview cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_lessons(&self) -> Result<Vec<LessonPreview>, ClientError> {
        self.get_json("/lessons").await
    }

    /// Get a subscription pricing quote for a lesson package.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidInput` if the server rejects the inputs
    /// (e.g. zero lessons), or another error if the request fails.
    pub async fn get_quote(
        &self,
        unit_price: f64,
        lessons: u32,
    ) -> Result<PricingQuote, ClientError> {
        let url = format!("{}/pricing/quote", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("unit_price", unit_price.to_string()),
                ("lessons", lessons.to_string()),
            ])
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Fetch a JSON payload from a content endpoint.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        tracing::debug!(status = %status, "API request returned an error");

        // Try to parse error response
        let error_body: Result<ApiErrorResponse, _> = response.json().await;

        match error_body {
            Ok(api_error) => {
                let code = api_error.error.code.as_str();
                let message = api_error.error.message;

                // Map specific error codes to typed errors
                match code {
                    "not_found" => Err(ClientError::NotFound { message }),
                    "bad_request" => Err(ClientError::InvalidInput { message }),
                    _ => Err(ClientError::Api {
                        code: code.to_string(),
                        message,
                        status: status.as_u16(),
                    }),
                }
            }
            Err(_) => Err(ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            }),
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
