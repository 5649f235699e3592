use askama::Template;

use super::dto::{MovieDetail, MovieSummary};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub movies: Vec<MovieSummary>,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub query: String,
    pub movies: Vec<MovieSummary>,
}

#[derive(Template)]
#[template(path = "movie.html")]
pub struct MovieTemplate {
    pub movie: MovieDetail,
}
