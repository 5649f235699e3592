use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::home,
        crate::modules::movie::handler::search,
        crate::modules::movie::handler::get_movie,
        crate::modules::recommendation::handler::recommendations,
    ),
    tags(
        (name = "Movies", description = "Popular listing, title search and movie details"),
        (name = "Recommendations", description = "Generated movie suggestions")
    ),
    info(
        title = "cinematch",
        description = "Server-rendered movie browser. Every route returns HTML."
    )
)]
pub struct ApiDoc;
