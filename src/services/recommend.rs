use crate::{
    error::{AppError, AppResult},
    models::{RecommendedMovie, Recommendations},
    services::poster::PosterResolver,
    store::Catalog,
};

/// Fixed number of recommendation slots
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Computes up to five movies most similar to `title`.
///
/// The matched row itself always ranks first in its own similarity row, so
/// self-exclusion drops sorted position 0 unconditionally rather than
/// filtering by index. Posters are resolved sequentially, one call per
/// retained entry.
pub async fn recommend(
    title: &str,
    catalog: &Catalog,
    posters: &dyn PosterResolver,
) -> AppResult<Recommendations> {
    let titles = catalog.titles()?;

    // First-match, case-sensitive exact lookup
    let index = titles
        .iter()
        .position(|t| t == title)
        .ok_or_else(|| AppError::TitleNotFound(title.to_string()))?;

    let scores = catalog.similarity_row(index)?;
    let ranked = rank_neighbors(scores, MAX_RECOMMENDATIONS);

    let mut results = Vec::with_capacity(ranked.len());
    for (neighbor, score) in ranked {
        let record = match catalog.record(neighbor) {
            Some(record) => record,
            None => {
                tracing::warn!(
                    index = neighbor,
                    "Ranked index outside the movie table, skipping entry"
                );
                continue;
            }
        };

        let movie_id = record
            .movie_id
            .ok_or_else(|| AppError::MissingColumn("movie_id".to_string()))?;

        let poster_url = posters.resolve_poster(movie_id).await;

        tracing::debug!(
            movie = %record.title,
            movie_id,
            score,
            "Recommendation entry resolved"
        );

        results.push(RecommendedMovie {
            title: record.title,
            poster_url,
        });
    }

    tracing::info!(
        movie = %title,
        results = results.len(),
        "Recommendations computed"
    );

    Ok(Recommendations {
        movie: title.to_string(),
        results,
    })
}

/// Pairs every index with its score, stable-sorts descending by score
/// (ties keep ascending index order), drops the leading self entry and
/// keeps at most `top_k` neighbors.
fn rank_neighbors(scores: &[f64], top_k: usize) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().skip(1).take(top_k).collect()
}
