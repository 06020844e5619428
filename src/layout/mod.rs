pub mod candidates;
pub mod error;
pub mod geometry;
pub mod occupancy;
pub mod placement;
pub mod scale;
pub mod types;
pub mod visibility;

pub use error::LayoutError;
pub use geometry::{Circle, Rect};
pub use occupancy::OccupancyMap;
pub use placement::{LabelRequest, PlacedLabel, place_labels};
pub use types::{BubbleLayout, ChartLayout};

use crate::config::ChartConfig;
use crate::ir::Dataset;
use crate::text_metrics::measure_label;
use crate::theme::Theme;

const PADDING: f32 = 40.0;
const Y_AXIS_WIDTH: f32 = 60.0;
const X_AXIS_HEIGHT: f32 = 40.0;
const TITLE_HEIGHT: f32 = 30.0;
const TICK_COUNT: usize = 5;

/// Map the dataset into pixel space and run label placement. Bubbles keep
/// their input order in the result; processing happens big-to-small
/// internally.
pub fn compute_layout(
    dataset: &Dataset,
    theme: &Theme,
    config: &ChartConfig,
) -> Result<ChartLayout, LayoutError> {
    let title_height = if dataset.title.is_some() {
        TITLE_HEIGHT
    } else {
        0.0
    };
    let plot_x = PADDING + Y_AXIS_WIDTH;
    let plot_y = PADDING + title_height;
    let plot_width = (config.width - plot_x - PADDING).max(1.0);
    let plot_height = (config.height - plot_y - X_AXIS_HEIGHT - PADDING).max(1.0);
    let plot = Rect::new(plot_x, plot_y, plot_width, plot_height);

    // Value axis pinned to zero on the left, like a share-of-market axis.
    let x_max = dataset
        .records
        .iter()
        .map(|record| record.x_value)
        .fold(0.0_f32, f32::max)
        .max(1.0);
    let y_min = dataset
        .records
        .iter()
        .map(|record| record.y_value)
        .fold(0.0_f32, f32::min)
        .min(0.0);
    let y_max = dataset
        .records
        .iter()
        .map(|record| record.y_value)
        .fold(0.0_f32, f32::max);
    let y_range = (y_max - y_min).max(1e-6);

    let extremes = magnitude_extremes(dataset);

    let mut bubbles = Vec::with_capacity(dataset.records.len());
    let order = scale::processing_order(&dataset.records);
    let mut ranks = vec![0usize; dataset.records.len()];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank;
    }
    for (index, record) in dataset.records.iter().enumerate() {
        let cx = plot_x + (record.x_value / x_max) * plot_width;
        let cy = plot_y + plot_height - ((record.y_value - y_min) / y_range) * plot_height;
        let size = scale::bubble_size(
            record.magnitude,
            config.size_mapping,
            config.bubble_scale,
            extremes,
        );
        bubbles.push(BubbleLayout {
            label: record.label.clone(),
            cx,
            cy,
            radius: size / 2.0,
            priority: ranks[index] as f32,
            magnitude: record.magnitude,
            category: record.category,
            color: theme.category_color(record.category).to_string(),
        });
    }

    let mut occupancy = OccupancyMap::new();
    // Reserve everything outside the plot area, so labels never drift into
    // the axis bands or off the canvas.
    occupancy.push_rect(Rect::new(0.0, 0.0, config.width, plot_y));
    occupancy.push_rect(Rect::new(0.0, plot.max_y(), config.width, config.height - plot.max_y()));
    occupancy.push_rect(Rect::new(0.0, 0.0, plot_x, config.height));
    occupancy.push_rect(Rect::new(
        plot.max_x(),
        0.0,
        config.width - plot.max_x(),
        config.height,
    ));

    let requests: Vec<LabelRequest> = order
        .iter()
        .map(|&index| {
            let bubble = &bubbles[index];
            let (width, height) =
                measure_label(&bubble.label, theme.font_size, &theme.font_family);
            LabelRequest {
                circle: Circle::new(bubble.cx, bubble.cy, bubble.radius, bubble.priority),
                width,
                height,
            }
        })
        .collect();
    let placed = place_labels(&requests, &config.placement, &mut occupancy)?;

    let mut labels = vec![
        PlacedLabel {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0),
            attachment: None,
            bound_exceeded: false,
        };
        dataset.records.len()
    ];
    for (rank, label) in placed.into_iter().enumerate() {
        labels[order[rank]] = label;
    }

    let x_ticks = (0..=TICK_COUNT)
        .map(|i| {
            let value = (i as f32 / TICK_COUNT as f32) * x_max;
            let x = plot_x + (i as f32 / TICK_COUNT as f32) * plot_width;
            (format!("{value:.0}"), x)
        })
        .collect();
    let y_ticks = (0..=TICK_COUNT)
        .map(|i| {
            let value = y_min + (i as f32 / TICK_COUNT as f32) * y_range;
            let y = plot_y + plot_height - (i as f32 / TICK_COUNT as f32) * plot_height;
            let text = if config.y_axis_percent {
                format!("{:.0}%", value * 100.0)
            } else {
                format!("{value:.0}")
            };
            (text, y)
        })
        .collect();

    Ok(ChartLayout {
        width: config.width,
        height: config.height,
        plot,
        title: dataset.title.clone(),
        bubbles,
        labels,
        x_ticks,
        y_ticks,
    })
}

fn magnitude_extremes(dataset: &Dataset) -> (f32, f32) {
    let min = dataset
        .records
        .iter()
        .map(|record| record.magnitude)
        .fold(f32::INFINITY, f32::min);
    let max = dataset
        .records
        .iter()
        .map(|record| record.magnitude)
        .fold(f32::NEG_INFINITY, f32::max);
    if min.is_finite() && max.is_finite() {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}
