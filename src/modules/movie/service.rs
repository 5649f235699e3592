use super::dto::{cross_reference, MovieDetail, MovieSummary};
use crate::common::error::AppError;
use crate::infrastructure::omdb::models::OmdbLookup;
use crate::state::AppState;
use tracing::{debug, info};

pub struct MovieService;

impl MovieService {
    pub async fn popular(state: &AppState) -> Result<Vec<MovieSummary>, AppError> {
        let movies = state.tmdb.popular_movies().await?;
        Ok(movies.into_iter().map(MovieSummary::from).collect())
    }

    /// A blank term yields no results without calling upstream.
    pub async fn search(state: &AppState, term: &str) -> Result<Vec<MovieSummary>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let movies = state.tmdb.search_movies(term).await?;
        if movies.is_empty() {
            info!(query = term, "No movies found");
        }

        Ok(movies.into_iter().map(MovieSummary::from).collect())
    }

    /// Primary lookup, then the secondary lookup keyed by the primary's
    /// cross-reference. A missing cross-reference or a provider-side miss is
    /// `NotFound`; any call failure is `Upstream`.
    pub async fn details(state: &AppState, id: &str) -> Result<MovieDetail, AppError> {
        let id = id.trim();
        // "." and ".." would be swallowed by URL segment normalization.
        if id.is_empty() || id == "." || id == ".." {
            return Err(AppError::NotFound("movie".to_string()));
        }

        debug!(movie_id = id, "Fetching movie details");
        let primary = state.tmdb.movie(id).await?;

        let imdb_id = cross_reference(&primary)
            .ok_or_else(|| AppError::NotFound(format!("cross-reference for movie {id}")))?;

        match state.omdb.by_imdb_id(&imdb_id).await? {
            OmdbLookup::Found(secondary) => {
                Ok(MovieDetail::from_sources(primary, imdb_id, secondary))
            }
            OmdbLookup::NotFound(reason) => {
                debug!(%imdb_id, reason = ?reason, "Secondary provider has no match");
                Err(AppError::NotFound(format!("movie {imdb_id}")))
            }
        }
    }
}
