use serde::Deserialize;
use utoipa::IntoParams;

use crate::infrastructure::omdb::models::OmdbMovie;
use crate::infrastructure::tmdb::models::{TmdbMovie, TmdbMovieDetails};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// `/search` accepts both `query` and the shorter `q`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Movie title to search for
    pub query: Option<String>,
    /// Alias for `query`
    pub q: Option<String>,
}

impl SearchParams {
    /// First non-blank term, trimmed. Empty when neither is usable.
    pub fn term(&self) -> String {
        [self.query.as_deref(), self.q.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
            .unwrap_or_default()
            .to_string()
    }
}

// --- LISTING ---

#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    pub fn poster_url(&self) -> Option<String> {
        poster_url(self.poster_path.as_deref())
    }

    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }

    pub fn rating(&self) -> Option<String> {
        self.vote_average
            .filter(|v| *v > 0.0)
            .map(|v| format!("{v:.1}"))
    }
}

impl From<TmdbMovie> for MovieSummary {
    fn from(m: TmdbMovie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            overview: m.overview,
            poster_path: m.poster_path,
            release_date: m.release_date,
            vote_average: m.vote_average,
        }
    }
}

// --- DETAILS ---

/// Primary record merged with the secondary lookup. Fields from the
/// secondary provider win where both exist.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: u64,
    pub imdb_id: String,
    pub title: String,
    pub tagline: Option<String>,
    pub plot: String,
    pub poster_url: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub imdb_rating: Option<String>,
}

impl MovieDetail {
    pub fn from_sources(primary: TmdbMovieDetails, imdb_id: String, secondary: OmdbMovie) -> Self {
        let plot = available(secondary.plot)
            .or_else(|| Some(primary.overview).filter(|o| !o.trim().is_empty()))
            .unwrap_or_default();

        Self {
            id: primary.id,
            imdb_id,
            title: available(secondary.title).unwrap_or(primary.title),
            tagline: primary.tagline.filter(|t| !t.trim().is_empty()),
            plot,
            poster_url: poster_url(primary.poster_path.as_deref())
                .or_else(|| available(secondary.poster)),
            year: available(secondary.year)
                .or_else(|| primary.release_date.and_then(|d| d.get(..4).map(str::to_string))),
            rated: available(secondary.rated),
            runtime: available(secondary.runtime)
                .or_else(|| primary.runtime.filter(|r| *r > 0).map(|r| format!("{r} min"))),
            genre: available(secondary.genre),
            director: available(secondary.director),
            actors: available(secondary.actors),
            imdb_rating: available(secondary.imdb_rating),
        }
    }
}

/// The primary record's cross-reference, if it has a usable one.
pub fn cross_reference(primary: &TmdbMovieDetails) -> Option<String> {
    primary
        .imdb_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn poster_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{POSTER_BASE_URL}{p}"))
}

// OMDb spells missing values "N/A".
fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != "N/A"
    })
}
