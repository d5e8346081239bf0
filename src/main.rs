use axum::{
    extract::Extension,
    routing::get,
    Router,
};
use dotenv::dotenv;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

mod model;
mod routes;
use routes::users::users_router;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Connect to PostgreSQL
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&database_url).await.expect("Failed to connect to Postgres");

    let app = Router::new()
        // Merge users routes (read-only listing)
        .merge(users_router())
        .route("/health", get(|| async { "ok" }))
        // Add database pool
        .layer(Extension(pool))
        // Add CORS for frontend
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let addr = "127.0.0.1:8000";
    println!("🚀 Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
