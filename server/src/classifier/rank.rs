use shared::Prediction;

use crate::classifier::labels::ClassLabelTable;

/// The result view always shows the five best classes.
pub const TOP_K: usize = 5;

/// Converts a probability to a display percentage truncated (never
/// rounded) to four decimal digits: floor(p * 1e6) / 1e4.
pub fn truncate_score(probability: f32) -> f64 {
    (f64::from(probability) * 1_000_000.0).floor() / 10_000.0
}

/// Selects the top `k` classes by descending probability. Ties keep the
/// original class-index order, so the ranking is stable across runs.
pub fn top_predictions(
    probabilities: &[f32],
    labels: &ClassLabelTable,
    k: usize,
) -> Vec<Prediction> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|&a, &b| {
        probabilities[b]
            .total_cmp(&probabilities[a])
            .then(a.cmp(&b))
    });
    indices
        .into_iter()
        .take(k)
        .map(|i| Prediction {
            label: labels.name(i).to_string(),
            score: truncate_score(probabilities[i]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> ClassLabelTable {
        ClassLabelTable::from_names((0..n).map(|i| format!("class-{i}")).collect())
    }

    #[test]
    fn truncates_never_rounds() {
        assert_eq!(truncate_score(0.123456789), 12.3456);
        assert_eq!(truncate_score(1.0), 100.0);
        assert_eq!(truncate_score(0.0), 0.0);
        assert_eq!(truncate_score(0.5), 50.0);
    }

    #[test]
    fn returns_exactly_five_sorted_entries() {
        let mut probabilities = vec![0.0f32; 1000];
        probabilities[7] = 0.5;
        probabilities[3] = 0.25;
        probabilities[900] = 0.125;
        probabilities[41] = 0.0625;
        probabilities[42] = 0.03125;

        let top = top_predictions(&probabilities, &table(1000), TOP_K);
        assert_eq!(top.len(), 5);
        let labels: Vec<&str> = top.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["class-7", "class-3", "class-900", "class-41", "class-42"]);
        for pair in top.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(top[0].score, 50.0);
        assert_eq!(top[2].score, 12.5);
    }

    #[test]
    fn ties_keep_class_index_order() {
        let mut probabilities = vec![0.001f32; 1000];
        probabilities[10] = 0.2;
        probabilities[500] = 0.2;
        probabilities[2] = 0.2;

        let top = top_predictions(&probabilities, &table(1000), 3);
        let labels: Vec<&str> = top.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["class-2", "class-10", "class-500"]);
    }
}
