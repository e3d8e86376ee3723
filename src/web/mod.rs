mod handlers;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::platform::KeyValueStore;
use state::AppState;

/// Serve the advisor UI and JSON API on localhost.
pub async fn start_server(port: u16, store: Box<dyn KeyValueStore + Send>) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(store));

    tracing::info!("starting crop advisor web server on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(data.clone())
            // Static files
            .route("/", web::get().to(handlers::index_html))
            .route("/app.js", web::get().to(handlers::app_js))
            .route("/style.css", web::get().to(handlers::style_css))
            // API routes
            .route("/api/crops", web::get().to(handlers::crops))
            .route("/api/recommend", web::post().to(handlers::recommend))
            .route("/api/explain", web::post().to(handlers::explain))
            .route("/api/chat", web::post().to(handlers::chat))
            .route("/api/state", web::get().to(handlers::get_state))
            .route("/api/state", web::put().to(handlers::put_state))
            .route("/api/lang", web::get().to(handlers::get_lang))
            .route("/api/lang", web::put().to(handlers::put_lang))
            .route("/api/i18n/{lang}", web::get().to(handlers::i18n))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
