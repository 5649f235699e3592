pub mod error;
pub mod http;
pub mod omdb;
pub mod openai;
pub mod tmdb;
