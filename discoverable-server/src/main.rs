#![deny(missing_docs)]
//! Discoverable server executable.
//!
//! Hosts HTTP endpoints for lead-capture enquiries and on-demand SEO and
//! AI visibility analysis.

mod mail;
mod openapi;
mod routes;
mod templates;

#[cfg(not(test))]
use actix_cors::Cors;
#[cfg(not(test))]
use actix_web::{App, HttpServer, http::header, web};
#[cfg(not(test))]
use dotenvy::dotenv;

#[allow(unused_imports)]
use std::str::FromStr;

#[cfg(not(test))]
use crate::mail::MailService;
#[cfg(not(test))]
use crate::routes::{AppState, analyze, contact, health, openapi_json};

#[cfg(not(test))]
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize the blocking mail client synchronously before the async
    // runtime starts. This prevents the panic caused by creating a
    // `reqwest::blocking::Client` inside the Actix runtime.
    let mail = MailService::from_env();
    let state = web::Data::new(AppState { mail });

    let listen_addr =
        std::env::var("DISCOVERABLE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listen_port = u16::from_str(
        &std::env::var("DISCOVERABLE_PORT").unwrap_or_else(|_| "8080".to_string()),
    )
    .expect("DISCOVERABLE_PORT must be a u16 number");
    let err_msg = format!("Can't bind {}:{}", &listen_addr, listen_port);

    // Manually start the Actix system
    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            // The enquiry form posts from any marketing page origin.
            let cors = Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![header::CONTENT_TYPE])
                .max_age(3600);
            App::new()
                .wrap(actix_web::middleware::Logger::default())
                .wrap(cors)
                .app_data(state.clone())
                .service(contact)
                .service(analyze)
                .service(health)
                .service(openapi_json)
        })
        .bind((listen_addr, listen_port))
        .expect(&err_msg)
        .run()
        .await
    })
}

#[cfg(test)]
fn main() {}
