use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

/// Home handler
pub async fn home() -> HttpResponse {
    // Display the landing page
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("home.html"))
}

/// Favicon handler, there is no icon to serve
pub async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
