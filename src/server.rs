use actix_files::Files;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};

use crate::config::Config;
use crate::error::Result;
use crate::fal::FalClient;
use crate::models::GenerationRequest;

pub const DEFAULT_PORT: u16 = 7860;

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../index.html"))
}

/// `POST /generate` — the body is parsed leniently: a missing or
/// unparsable body falls back to the default mood descriptor.
async fn generate(client: web::Data<FalClient>, body: web::Bytes) -> Result<HttpResponse> {
    let request: GenerationRequest = serde_json::from_slice(&body).unwrap_or_default();
    log::info!(
        "Generation request: emotion='{}' style='{}'",
        request.emotion,
        request.style
    );

    let result = client.generate(request).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Bind and serve until shutdown. One `FalClient` is shared across all
/// workers; saved images are served back from the static mount.
pub async fn run(config: Config) -> Result<()> {
    let port = config.port.unwrap_or(DEFAULT_PORT);
    std::fs::create_dir_all(&config.static_dir)?;

    let client = web::Data::new(FalClient::new(config.fal.clone(), &config.static_dir)?);
    let static_dir = config.static_dir.clone();

    log::info!("🌐 Listening on http://127.0.0.1:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .route("/", web::get().to(index))
            .route("/generate", web::post().to(generate))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await?;

    Ok(())
}
