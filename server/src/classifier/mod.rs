pub mod labels;
pub mod model;
pub mod preprocess;
pub mod rank;

use shared::Prediction;
use tract_onnx::prelude::tract_ndarray::Array4;

use crate::error::PipelineError;
use labels::ClassLabelTable;
use model::ImageClassifier;
use rank::{TOP_K, top_predictions};

/// Process-lifetime classifier service: the loaded network plus the
/// label table, constructed once at startup and injected into request
/// handlers. Read-only after construction.
pub struct ClassifierService {
    model: Box<dyn ImageClassifier>,
    labels: ClassLabelTable,
}

impl ClassifierService {
    pub fn new(model: Box<dyn ImageClassifier>, labels: ClassLabelTable) -> Self {
        Self { model, labels }
    }

    /// Inference half of the pipeline: preprocessed tensor in, ranked
    /// top-5 out.
    pub fn classify(&self, input: &Array4<f32>) -> Result<Vec<Prediction>, PipelineError> {
        let probabilities = self.model.predict(input)?;
        Ok(top_predictions(&probabilities, &self.labels, TOP_K))
    }
}
