use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

/// Shown when the metadata service answered but carried no poster path
pub const NO_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Poster";

/// Shown when the poster request failed at the transport or HTTP level
pub const POSTER_ERROR_URL: &str = "https://via.placeholder.com/500x750?text=Error+Loading+Poster";

/// Shown when the response could not be interpreted at all
pub const POSTER_FALLBACK_URL: &str = "https://via.placeholder.com/500x750?text=Error";

/// Resolves an external movie identifier to a display-ready poster URL.
///
/// Resolution never fails: every error path degrades to a placeholder URL
/// so a single bad poster cannot abort a whole recommendation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PosterResolver: Send + Sync {
    async fn resolve_poster(&self, movie_id: i64) -> String;
}

/// The subset of the TMDB movie details response we consume
#[derive(Debug, Deserialize)]
struct MovieDetails {
    #[serde(default)]
    poster_path: Option<String>,
}

/// Poster resolver backed by the TMDB metadata service
#[derive(Clone)]
pub struct TmdbPosterResolver {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cdn_url: String,
}

impl TmdbPosterResolver {
    pub fn new(api_key: String, api_url: String, cdn_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            cdn_url,
        }
    }

    fn compose_cdn_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.cdn_url, poster_path)
    }
}

#[async_trait]
impl PosterResolver for TmdbPosterResolver {
    async fn resolve_poster(&self, movie_id: i64) -> String {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = match self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(movie_id, error = %e, "Poster request failed");
                return POSTER_ERROR_URL.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::error!(
                movie_id,
                status = %response.status(),
                "Metadata service returned an error status"
            );
            return POSTER_ERROR_URL.to_string();
        }

        match response.json::<MovieDetails>().await {
            Ok(MovieDetails {
                poster_path: Some(path),
            }) => self.compose_cdn_url(&path),
            Ok(MovieDetails { poster_path: None }) => {
                tracing::warn!(movie_id, "No poster path in metadata response");
                NO_POSTER_URL.to_string()
            }
            Err(e) => {
                tracing::error!(movie_id, error = %e, "Failed to decode metadata response");
                POSTER_FALLBACK_URL.to_string()
            }
        }
    }
}
