//! End-to-end regression check against a real exported model. This is a
//! wiring check, not exact-value equality: the network is the source of
//! variation, so it only asserts that a clear subject dominates the
//! ranking.
//!
//! Run with the artifact paths set:
//!   MODEL_PATH=... LABELS_PATH=... CALIBRATION_IMAGE=cat.jpg \
//!   cargo test --test calibration -- --ignored

use server::classifier::labels::ClassLabelTable;
use server::classifier::model::{ImageClassifier, OnnxClassifier};
use server::classifier::preprocess;
use server::classifier::rank::{TOP_K, top_predictions};
use shared::LabelLocale;

#[test]
#[ignore = "requires a real model; set MODEL_PATH, LABELS_PATH and CALIBRATION_IMAGE"]
fn reference_photo_clears_calibration_threshold() {
    let model_path = std::env::var("MODEL_PATH").expect("MODEL_PATH not set");
    let labels_path = std::env::var("LABELS_PATH").expect("LABELS_PATH not set");
    let image_path = std::env::var("CALIBRATION_IMAGE").expect("CALIBRATION_IMAGE not set");

    let labels = ClassLabelTable::load(&labels_path, LabelLocale::En).unwrap();
    let classifier = OnnxClassifier::load(&model_path).unwrap();

    let image = preprocess::decode_image(std::path::Path::new(&image_path)).unwrap();
    let tensor = preprocess::to_input_tensor(&image);
    let probabilities = classifier.predict(&tensor).unwrap();
    let top = top_predictions(&probabilities, &labels, TOP_K);

    assert_eq!(top.len(), 5);
    for pair in top.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(
        top[0].score > 50.0,
        "top-1 {:?} only scored {}",
        top[0].label,
        top[0].score
    );
}
