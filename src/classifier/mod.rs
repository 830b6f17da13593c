//! Gesture classification: the label alphabet, the ONNX-backed model, and
//! the argmax decode from a probability distribution to a labeled
//! prediction.

mod error;
mod model;

pub use error::{ModelError, PredictError};
pub use model::{GestureClassifier, GestureModel};

use serde::Serialize;

/// The fixed gesture alphabet the model was trained to recognize, in
/// output-index order. Immutable for the process lifetime.
pub const GESTURES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Default landmark vector length: 21 hand keypoints, 3 coordinates each.
/// Used when the model reports a dynamic input dimension.
pub const DEFAULT_INPUT_SIZE: usize = 63;

/// A decoded model output: the most probable gesture and its probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub gesture: &'static str,
    pub confidence: f32,
}

/// Maps a probability distribution to the highest-scoring gesture label.
///
/// Ties are broken by the lowest index. That is the incidental behavior of
/// a first-max scan, assumed rather than contractual.
pub(crate) fn decode(probs: &[f32]) -> Result<Prediction, PredictError> {
    if probs.len() != GESTURES.len() {
        return Err(PredictError::Internal(format!(
            "Model returned {} probabilities for {} labels",
            probs.len(),
            GESTURES.len()
        )));
    }

    let mut best = 0;
    let mut confidence = probs[0];
    for (i, &p) in probs.iter().enumerate().skip(1) {
        if p > confidence {
            best = i;
            confidence = p;
        }
    }

    Ok(Prediction {
        gesture: GESTURES[best],
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_picks_max() {
        let mut probs = vec![0.01; 10];
        probs[7] = 0.91;
        let prediction = decode(&probs).unwrap();
        assert_eq!(prediction.gesture, "H");
        assert!((prediction.confidence - 0.91).abs() < f32::EPSILON);
    }

    #[test]
    fn test_decode_tie_takes_lowest_index() {
        let mut probs = vec![0.0; 10];
        probs[2] = 0.5;
        probs[6] = 0.5;
        let prediction = decode(&probs).unwrap();
        assert_eq!(prediction.gesture, "C");
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        let result = decode(&[0.5, 0.5]);
        assert!(matches!(result, Err(PredictError::Internal(_))));
    }

    #[test]
    fn test_decode_all_zeros_is_first_label() {
        let prediction = decode(&[0.0; 10]).unwrap();
        assert_eq!(prediction.gesture, "A");
        assert_eq!(prediction.confidence, 0.0);
    }

    #[test]
    fn test_alphabet_is_ten_unique_labels() {
        let mut labels: Vec<_> = GESTURES.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 10);
    }
}
