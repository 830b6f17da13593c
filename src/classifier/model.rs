use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::info;
use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;

use super::error::{ModelError, PredictError};
use super::{decode, Prediction, DEFAULT_INPUT_SIZE, GESTURES};
use crate::runtime::{create_session_builder, RuntimeConfig};

/// The seam between request handling and the numeric runtime.
///
/// Handlers only see this trait, so the per-request state machine can be
/// exercised without an ONNX artifact on disk.
pub trait GestureModel: Send + Sync {
    /// Length of the flattened landmark vector the model accepts.
    fn input_size(&self) -> usize;

    /// Runs a batch-of-one forward pass, returning the probability
    /// distribution over the gesture alphabet.
    fn forward(&self, landmarks: &[f32]) -> Result<Vec<f32>, PredictError>;

    /// Validates the input vector, runs the forward pass, and decodes the
    /// output distribution into a labeled prediction.
    ///
    /// # Errors
    /// - `MissingInput` if the landmark vector is empty
    /// - `InvalidShape` if its length differs from `input_size()`
    /// - `Internal` for any failure inside the forward pass or decode
    fn predict(&self, landmarks: &[f32]) -> Result<Prediction, PredictError> {
        if landmarks.is_empty() {
            return Err(PredictError::MissingInput);
        }

        let expected = self.input_size();
        if landmarks.len() != expected {
            return Err(PredictError::InvalidShape { expected });
        }

        let probs = self.forward(landmarks)?;
        decode(&probs)
    }
}

/// A gesture classifier backed by an ONNX Runtime session.
///
/// Loaded exactly once at startup and never replaced. All fields are
/// immutable after construction, so the classifier is shared across
/// request handlers behind an `Arc` without locking.
#[derive(Debug)]
pub struct GestureClassifier {
    session: Arc<Session>,
    input_name: String,
    input_size: usize,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<GestureClassifier>();
    }
};

impl GestureClassifier {
    /// Loads the model artifact from `model_path`.
    ///
    /// Exactly one load attempt is made; the caller decides what an error
    /// means (the service logs it and runs without a model).
    ///
    /// # Errors
    /// - `NotFound` if the file does not exist
    /// - `Load` if ONNX Runtime rejects the artifact
    /// - `InvalidStructure` if the graph shape cannot serve the alphabet
    pub fn load(
        model_path: impl AsRef<Path>,
        config: &RuntimeConfig,
    ) -> Result<Self, ModelError> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            return Err(ModelError::NotFound(model_path.to_path_buf()));
        }

        let session = create_session_builder(config)?.commit_from_file(model_path)?;
        Self::validate_model(&session)?;

        let input_name = session.inputs[0].name.clone();
        let input_size = Self::infer_input_size(&session);
        info!(
            "Model loaded: input '{}' expects {} values",
            input_name, input_size
        );

        Ok(Self {
            session: Arc::new(session),
            input_name,
            input_size,
        })
    }

    /// Validates that the graph has the expected input/output structure.
    fn validate_model(session: &Session) -> Result<(), ModelError> {
        if session.inputs.len() != 1 {
            return Err(ModelError::InvalidStructure(format!(
                "Model must have exactly 1 input (the landmark vector), found {}",
                session.inputs.len()
            )));
        }

        if session.outputs.is_empty() {
            return Err(ModelError::InvalidStructure(
                "Model must have at least 1 output for class probabilities".to_string(),
            ));
        }

        // Reject artifacts whose output arity cannot cover the alphabet.
        if let Some(classes) = Self::trailing_dimension(&session.outputs[0].output_type) {
            if classes != GESTURES.len() {
                return Err(ModelError::InvalidStructure(format!(
                    "Model outputs {} classes, expected {}",
                    classes,
                    GESTURES.len()
                )));
            }
        }

        Ok(())
    }

    /// Reads the landmark vector length from the input tensor shape.
    /// Dynamic dimensions fall back to the known artifact layout.
    fn infer_input_size(session: &Session) -> usize {
        Self::trailing_dimension(&session.inputs[0].input_type).unwrap_or(DEFAULT_INPUT_SIZE)
    }

    /// Last tensor dimension, if the graph declares it statically.
    fn trailing_dimension(value_type: &ort::value::ValueType) -> Option<usize> {
        value_type
            .tensor_dimensions()
            .and_then(|dims| dims.last())
            .and_then(|&dim| usize::try_from(dim).ok())
    }
}

impl GestureModel for GestureClassifier {
    fn input_size(&self) -> usize {
        self.input_size
    }

    fn forward(&self, landmarks: &[f32]) -> Result<Vec<f32>, PredictError> {
        let input_array = Array2::from_shape_vec((1, landmarks.len()), landmarks.to_vec())
            .map_err(|e| PredictError::Internal(format!("Failed to create input array: {}", e)))?;
        let input_dyn = input_array.into_dyn();
        let input = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&input).map_err(|e| {
                PredictError::Internal(format!("Failed to create input tensor: {}", e))
            })?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| PredictError::Internal(format!("Failed to run model: {}", e)))?;
        let output_tensor = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictError::Internal(format!("Failed to extract output tensor: {}", e)))?;

        // Batch of one: the flattened tensor is the single output row.
        Ok(output_tensor.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_not_found() {
        let result = GestureClassifier::load(
            "definitely/not/here/gesture_model.onnx",
            &RuntimeConfig::default(),
        );
        assert!(matches!(result, Err(ModelError::NotFound(_))));
    }

    struct ConstantModel {
        probs: Vec<f32>,
    }

    impl GestureModel for ConstantModel {
        fn input_size(&self) -> usize {
            DEFAULT_INPUT_SIZE
        }

        fn forward(&self, _landmarks: &[f32]) -> Result<Vec<f32>, PredictError> {
            Ok(self.probs.clone())
        }
    }

    #[test]
    fn test_predict_rejects_empty_input() {
        let model = ConstantModel { probs: vec![0.1; 10] };
        assert!(matches!(model.predict(&[]), Err(PredictError::MissingInput)));
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let model = ConstantModel { probs: vec![0.1; 10] };
        let result = model.predict(&[0.5; 10]);
        assert!(matches!(
            result,
            Err(PredictError::InvalidShape { expected: DEFAULT_INPUT_SIZE })
        ));
    }

    #[test]
    fn test_predict_decodes_forward_output() {
        let mut probs = vec![0.02; 10];
        probs[3] = 0.84;
        let model = ConstantModel { probs };
        let prediction = model.predict(&[0.0; DEFAULT_INPUT_SIZE]).unwrap();
        assert_eq!(prediction.gesture, "D");
        assert!((prediction.confidence - 0.84).abs() < f32::EPSILON);
    }
}
