// src/main.rs

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use todo_api::config::Config;
use todo_api::memory_store::MemoryTaskService;
use todo_api::rest::TaskHandler;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let handler = TaskHandler::new(Arc::new(MemoryTaskService::new()));

    info!("Server running at http://{}", config.server_address);
    info!("Allowed CORS Origin: {}", config.frontend_origin);

    let server_address = config.server_address.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.frontend_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::PayloadConfig::new(config.max_body_bytes))
            .configure(|cfg| handler.register(cfg))
    })
        .bind(server_address)?
        .run()
        .await
}
