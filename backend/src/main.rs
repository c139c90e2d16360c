//! Career Recommender Backend - Main Entry Point
//!
//! Starts the web API server for the career recommendation frontend.

use career_recommender::{run_server, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Career Recommender                           ║");
    println!("║   Interests + Strengths → Careers + Roadmaps   ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("[CONFIG] {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    run_server(&config).await
}
