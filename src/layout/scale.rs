use crate::ir::BubbleRecord;
use serde::{Deserialize, Serialize};

/// How magnitudes map to bubble diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeMapping {
    /// Five fixed buckets. Keeps small magnitudes readable on sparse data.
    #[default]
    Step,
    /// Linear interpolation between the dataset extremes.
    Linear,
}

const STEP_THRESHOLDS: [f32; 4] = [200.0, 400.0, 600.0, 800.0];
const STEP_SIZES: [f32; 5] = [20.0, 50.0, 70.0, 80.0, 90.0];

const LINEAR_MIN_SIZE: f32 = 20.0;
const LINEAR_MAX_SIZE: f32 = 90.0;

/// Bubble diameter for `magnitude`, scaled by `scale`. `extremes` is the
/// (min, max) magnitude over the whole dataset; the step mapping ignores it.
pub fn bubble_size(magnitude: f32, mapping: SizeMapping, scale: f32, extremes: (f32, f32)) -> f32 {
    let base = match mapping {
        SizeMapping::Step => {
            let bucket = STEP_THRESHOLDS
                .iter()
                .position(|threshold| magnitude <= *threshold)
                .unwrap_or(STEP_THRESHOLDS.len());
            STEP_SIZES[bucket]
        }
        SizeMapping::Linear => {
            let (min, max) = extremes;
            let range = max - min;
            if range <= 0.0 {
                (LINEAR_MIN_SIZE + LINEAR_MAX_SIZE) / 2.0
            } else {
                let t = ((magnitude - min) / range).clamp(0.0, 1.0);
                LINEAR_MIN_SIZE + t * (LINEAR_MAX_SIZE - LINEAR_MIN_SIZE)
            }
        }
    };
    base * scale
}

/// Indices of `records` sorted by descending magnitude. The sort is stable:
/// ties keep their input order. Bigger bubbles are processed first so they get
/// first pick of label space and draw below smaller ones.
pub fn processing_order(records: &[BubbleRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| {
        records[b]
            .magnitude
            .partial_cmp(&records[a].magnitude)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
