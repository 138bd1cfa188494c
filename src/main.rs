use actix_web::{middleware::Logger, web, App, HttpServer};

use fsnd_server::{
    app_state::AppState, auth::AuthMiddleware, config::Config, middleware::RequestIdMiddleware,
    routes,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if cfg!(not(debug_assertions)) {
        config
            .validate_for_production()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(AuthMiddleware)
            .wrap(routes::cors())
            .wrap(Logger::new(r#"%a "%r" %s %b %T %{x-request-id}o"#))
            .wrap(RequestIdMiddleware)
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
