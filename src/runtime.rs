use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;
use std::sync::Once;

static INIT: Once = Once::new();

/// Threading configuration for ONNX Runtime session construction.
///
/// The gesture model is a small dense network, so the graph optimization
/// level is fixed at the maximum; only the thread pools are configurable.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Threads for parallel graph execution. 0 lets ONNX Runtime decide.
    pub inter_threads: usize,
    /// Threads within individual operators. 0 lets ONNX Runtime decide.
    pub intra_threads: usize,
}

fn init_onnx_environment() -> OrtResult<()> {
    ort::init()
        .with_name("handsign")
        .commit()?;
    Ok(())
}

/// Initializes the process-wide ONNX Runtime environment exactly once.
pub fn ensure_initialized() -> OrtResult<()> {
    INIT.call_once(|| {
        init_onnx_environment().expect("Failed to initialize ONNX Runtime environment");
    });
    Ok(())
}

pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let mut builder = Session::builder()?;

    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }

    builder.with_optimization_level(GraphOptimizationLevel::Level3)
}
