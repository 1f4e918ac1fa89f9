use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;

/// On-disk movie table: a mapping of column names to parallel value arrays.
/// Columns beyond the two we consume are ignored.
#[derive(Debug, Deserialize)]
struct MovieColumns {
    #[serde(default)]
    title: Option<Vec<String>>,
    #[serde(default)]
    movie_id: Option<Vec<i64>>,
}

/// Immutable movie table plus similarity matrix, loaded once at startup.
///
/// Row `i` of the similarity matrix is aligned with row `i` of the movie
/// table; alignment is the artifact producer's responsibility. Lookups on
/// ranked entries are bounds-checked, the initial row fetch is not.
#[derive(Debug)]
pub struct Catalog {
    titles: Option<Vec<String>>,
    movie_ids: Option<Vec<i64>>,
    similarity: Vec<Vec<f64>>,
}

impl Catalog {
    /// Loads both artifacts from disk. Failures are fatal to the session,
    /// so the error names the offending file and how to point elsewhere.
    pub fn load(movies_path: &str, similarity_path: &str) -> anyhow::Result<Self> {
        let columns: MovieColumns = read_json(movies_path).with_context(|| {
            format!(
                "failed to load movie table from '{}' (set MOVIES_PATH to the artifact location)",
                movies_path
            )
        })?;

        let similarity: Vec<Vec<f64>> = read_json(similarity_path).with_context(|| {
            format!(
                "failed to load similarity matrix from '{}' (set SIMILARITY_PATH to the artifact location)",
                similarity_path
            )
        })?;

        Ok(Self {
            titles: columns.title,
            movie_ids: columns.movie_id,
            similarity,
        })
    }

    /// Builds a catalog directly from in-memory columns
    pub fn from_parts(
        titles: Option<Vec<String>>,
        movie_ids: Option<Vec<i64>>,
        similarity: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            titles,
            movie_ids,
            similarity,
        }
    }

    /// All titles in table order, for populating the selector
    pub fn titles(&self) -> AppResult<&[String]> {
        self.titles
            .as_deref()
            .ok_or_else(|| AppError::MissingColumn("title".to_string()))
    }

    /// Number of rows in the movie table
    pub fn len(&self) -> usize {
        self.titles.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The movie table row at `index`, or `None` when the index falls
    /// outside the table (a matrix/table misalignment).
    pub fn record(&self, index: usize) -> Option<MovieRecord> {
        let title = self.titles.as_ref()?.get(index)?.clone();
        let movie_id = self
            .movie_ids
            .as_ref()
            .and_then(|ids| ids.get(index).copied());
        Some(MovieRecord {
            index,
            movie_id,
            title,
        })
    }

    /// Similarity scores of `index` against every row
    pub fn similarity_row(&self, index: usize) -> AppResult<&[f64]> {
        self.similarity
            .get(index)
            .map(Vec::as_slice)
            .ok_or(AppError::MatrixRowMissing(index))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let file = File::open(path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    Ok(value)
}
