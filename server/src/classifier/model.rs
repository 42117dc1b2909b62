use log::info;
use tract_onnx::prelude::*;

use crate::classifier::labels::IMAGENET_CLASSES;
use crate::classifier::preprocess::INPUT_SIZE;
use crate::error::{PipelineError, StartupError};

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// The opaque classifier boundary: a pure, synchronous function from one
/// preprocessed image tensor to the 1000-class probability vector. No
/// retries, no caching, no batching.
pub trait ImageClassifier: Send + Sync {
    fn predict(&self, input: &tract_ndarray::Array4<f32>) -> Result<Vec<f32>, PipelineError>;
}

/// ONNX-backed classifier. The graph is loaded and optimized exactly
/// once at startup and shared read-only across requests; loading is far
/// too expensive to repeat per request.
pub struct OnnxClassifier {
    plan: OnnxPlan,
}

impl OnnxClassifier {
    pub fn load(path: &str) -> Result<Self, StartupError> {
        let side = INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, side, side, 3)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| StartupError::Model {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        info!("loaded classifier from {}", path);
        Ok(Self { plan })
    }
}

impl ImageClassifier for OnnxClassifier {
    fn predict(&self, input: &tract_ndarray::Array4<f32>) -> Result<Vec<f32>, PipelineError> {
        let outputs = self
            .plan
            .run(tvec!(input.clone().into_tensor().into_tvalue()))
            .map_err(|e| PipelineError::Inference(e.to_string()))?;
        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        let probabilities: Vec<f32> = scores.iter().copied().collect();
        if probabilities.len() != IMAGENET_CLASSES {
            return Err(PipelineError::Inference(format!(
                "expected {} class probabilities, model produced {}",
                IMAGENET_CLASSES,
                probabilities.len()
            )));
        }
        Ok(probabilities)
    }
}
