use shared::LabelLocale;
use std::env;
use std::path::PathBuf;

/// Upload size cap, enforced while streaming the multipart body.
pub const MAX_UPLOAD_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub model_path: String,
    pub labels_path: String,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub label_locale: LabelLocale,
}

impl AppConfig {
    /// Reads configuration from the environment (a `.env` file is picked
    /// up when present). Every variable has a default; the two model
    /// variants are expressed as `MODEL_PATH` + `LABEL_LOCALE`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8081);
        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "model/vgg16.onnx".to_string());
        let labels_path = env::var("LABELS_PATH")
            .unwrap_or_else(|_| "data/imagenet_class_index.json".to_string());
        let upload_dir = PathBuf::from(env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()));
        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()));
        let label_locale = env::var("LABEL_LOCALE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LabelLocale::En);

        Self {
            bind_addr,
            port,
            model_path,
            labels_path,
            upload_dir,
            static_dir,
            label_locale,
        }
    }
}
