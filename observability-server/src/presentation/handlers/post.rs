use crate::domain::error::DomainError;
use crate::infrastructure::posts_client::PostsClient;
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, get, web};
use tracing::info;

#[get("/posts")]
async fn get_posts(
    req: HttpRequest,
    client: web::Data<PostsClient>,
) -> Result<HttpResponse, DomainError> {
    let posts = client.fetch_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts proxied"
    );

    Ok(HttpResponse::Ok().json(posts))
}
