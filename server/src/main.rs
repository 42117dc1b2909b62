use actix_web::{App, HttpServer, web};

use server::classifier::ClassifierService;
use server::classifier::labels::ClassLabelTable;
use server::classifier::model::OnnxClassifier;
use server::config::AppConfig;
use server::error::StartupError;
use server::routes::configure_routes;
use server::storage::TransientStore;

fn fatal(err: StartupError) -> std::io::Error {
    log::error!("{}", err);
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!(
        "model={} labels={} locale={}",
        config.model_path,
        config.labels_path,
        config.label_locale
    );

    // Model and label table are loaded exactly once; if either is
    // missing or malformed the process refuses to start.
    let labels = ClassLabelTable::load(&config.labels_path, config.label_locale).map_err(fatal)?;
    let model = OnnxClassifier::load(&config.model_path).map_err(fatal)?;
    let service = web::Data::new(ClassifierService::new(Box::new(model), labels));
    let store = web::Data::new(TransientStore::new(&config.upload_dir)?);

    let bind_address = format!("{}:{}", config.bind_addr, config.port);
    log::info!("Starting server on {}", bind_address);

    let config_data = web::Data::new(config.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(store.clone())
            .app_data(config_data.clone())
            .configure(|cfg| configure_routes(cfg, config.static_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
