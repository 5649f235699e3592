pub mod movie;
pub mod recommendation;
