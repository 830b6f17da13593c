//! An HTTP inference service wrapping a pre-trained hand-gesture
//! classification model.
//!
//! The service loads an ONNX model once at startup, then answers
//! `POST /predict` requests carrying a flattened hand-landmark vector with
//! the most probable gesture label and its confidence.
//!
//! # Library Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use handsign::{GestureClassifier, GestureModel, RuntimeConfig};
//!
//! let classifier = GestureClassifier::load("gesture_model.onnx", &RuntimeConfig::default())?;
//! let landmarks = vec![0.0; classifier.input_size()];
//! let prediction = classifier.predict(&landmarks)?;
//! println!("{} ({:.2})", prediction.gesture, prediction.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is immutable after construction and `Send + Sync`, so a
//! single instance behind an `Arc` serves concurrent requests without
//! locking. The underlying ONNX Runtime session takes `&self` for
//! inference and handles its own internal synchronization.

pub mod classifier;
pub mod runtime;
pub mod server;

pub use classifier::{
    GestureClassifier, GestureModel, ModelError, PredictError, Prediction, GESTURES,
};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use server::{create_router, AppState, ServerConfig};

pub fn init_logger() {
    env_logger::init();
}
