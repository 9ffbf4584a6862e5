use log::{info, warn};
use reqwest::Client;

use crate::error::ApiError;
use crate::models::{ApiErrorBody, Recipe, RecipeRequest};

pub struct RecipeApi;

impl RecipeApi {
    /// Absolute URL for `endpoint`; paths are taken relative to the page origin.
    fn resolve_url(endpoint: &str) -> Result<String, ApiError> {
        let endpoint = endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(endpoint.to_string());
        }
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| ApiError::Endpoint(endpoint.to_string()))?;
        Ok(Self::join(&origin, endpoint))
    }

    fn join(origin: &str, path: &str) -> String {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Asks the generation service for a recipe matching `request`.
    pub async fn generate(endpoint: &str, request: &RecipeRequest) -> Result<Recipe, ApiError> {
        let client = Client::new();
        let url = Self::resolve_url(endpoint)?;
        info!("requesting recipe for {:?} ({} servings)", request.prompt, request.servings);

        let resp = client.post(url).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            warn!("recipe service failed with {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let recipe = resp.json::<Recipe>().await?;
        Ok(Self::with_base_servings(recipe, request.servings))
    }

    // The service may omit servings; the requested count is what quantities were written for.
    fn with_base_servings(mut recipe: Recipe, requested: u32) -> Recipe {
        if recipe.base_servings().is_none() {
            recipe.servings = Some(requested);
        }
        recipe
    }
}
