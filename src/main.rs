use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use testcase_gen::api::{configure_routes, AppState};
use testcase_gen::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // A missing .env is fine; the variables may come from the real environment.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env().map_err(std::io::Error::other)?;

    if app_config.openai.api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; generation requests will fail until it is");
    }

    let bind_addr = (app_config.host.clone(), app_config.port);
    log::info!(
        "Using model {} (temperature {}, output mode {:?})",
        app_config.model,
        app_config.temperature,
        app_config.output_mode
    );

    let state = AppState::new(app_config).map_err(std::io::Error::other)?;

    println!("🚀 Starting server on http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
