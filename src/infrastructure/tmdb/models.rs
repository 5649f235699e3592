use serde::Deserialize;

/// One page of a list endpoint. `results` is required: a payload without it
/// is malformed, not empty.
#[derive(Debug, Deserialize)]
pub struct TmdbPage<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub tagline: Option<String>,
    pub runtime: Option<u32>,
    /// Cross-reference into the OMDb namespace.
    pub imdb_id: Option<String>,
}
