use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use handsign::classifier::{GestureClassifier, GestureModel};
use handsign::runtime::RuntimeConfig;
use handsign::server::{run_server, AppState, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Path to the ONNX model artifact. Defaults to gesture_model.onnx
    /// next to the executable, independent of the working directory.
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Directory holding the landing page and frontend assets
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

fn default_model_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("gesture_model.onnx")))
        .unwrap_or_else(|| PathBuf::from("gesture_model.onnx"))
}

/// Attempts the one startup load. A failure leaves the service running
/// with no model; every prediction then fails deterministically.
fn load_model(model_path: &Path) -> Option<Arc<dyn GestureModel>> {
    match GestureClassifier::load(model_path, &RuntimeConfig::default()) {
        Ok(classifier) => {
            info!("Model loaded successfully from {}", model_path.display());
            Some(Arc::new(classifier))
        }
        Err(e) => {
            error!("Error loading model: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    let args = Args::parse();

    let model_path = args.model.unwrap_or_else(default_model_path);
    let model = load_model(&model_path);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        static_dir: Some(args.static_dir),
    };

    let state = Arc::new(AppState::new(config, model));
    run_server(state).await
}
