use serde::Deserialize;

/// OMDb answers 200 for misses too; `Response` carries the verdict.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    pub response: String,
    pub error: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
}

impl OmdbMovie {
    pub fn found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Clone)]
pub enum OmdbLookup {
    Found(OmdbMovie),
    /// Provider reported no match, with its reason when given.
    NotFound(Option<String>),
}
