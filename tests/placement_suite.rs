use std::path::Path;

use bubbleplot::layout::{Circle, Rect};
use bubbleplot::layout_dump::dump_to_string;
use bubbleplot::{
    BubbleRecord, Category, ChartConfig, ChartLayout, Dataset, Theme, compute_layout,
    parse_dataset,
};

fn layout_fixture(path: &Path) -> (Dataset, ChartLayout) {
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    let dataset = parse_dataset(&input).expect("parse failed");
    let theme = Theme::default();
    let config = ChartConfig::default();
    let layout = compute_layout(&dataset, &theme, &config).expect("layout failed");
    (dataset, layout)
}

fn assert_valid_placement(layout: &ChartLayout, fixture: &str) {
    let margin = ChartConfig::default().placement.margin;
    assert_eq!(
        layout.labels.len(),
        layout.bubbles.len(),
        "{fixture}: every bubble needs a label slot"
    );

    for (i, label) in layout.labels.iter().enumerate() {
        assert!(
            !label.bound_exceeded,
            "{fixture}: label {i} exceeded the search bound"
        );
        assert!(
            label.rect.x >= layout.plot.x
                && label.rect.y >= layout.plot.y
                && label.rect.max_x() <= layout.plot.max_x()
                && label.rect.max_y() <= layout.plot.max_y(),
            "{fixture}: label {i} escaped the plot area"
        );
        if let Some((ax, ay)) = label.attachment {
            let bubble = &layout.bubbles[i];
            let dist = ((ax - bubble.cx).powi(2) + (ay - bubble.cy).powi(2)).sqrt();
            assert!(
                dist <= bubble.radius + 1.0,
                "{fixture}: label {i} leader line starts outside its bubble"
            );
        }
    }

    // Pairwise clearance between labels.
    for i in 0..layout.labels.len() {
        for j in (i + 1)..layout.labels.len() {
            let a = &layout.labels[i].rect;
            let b = &layout.labels[j].rect;
            assert!(
                !a.overlaps_with_clearance(b, margin),
                "{fixture}: labels {i} and {j} are closer than the margin"
            );
        }
    }

    // Labels never cross a bubble outline (flush against a rim is fine,
    // margin clearance applies to rects only).
    for (i, label) in layout.labels.iter().enumerate() {
        for bubble in &layout.bubbles {
            let circle = Circle::new(bubble.cx, bubble.cy, bubble.radius, bubble.priority);
            assert!(
                !label.rect.overlaps_circle(&circle),
                "{fixture}: label {i} overlaps the bubble for {}",
                bubble.label
            );
        }
    }
}

#[test]
fn place_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    let candidates = ["single.json5", "basic.json5", "dense.json5"];

    for rel in candidates {
        let path = root.join(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let (dataset, layout) = layout_fixture(&path);
        assert_eq!(layout.bubbles.len(), dataset.records.len());
        assert_valid_placement(&layout, rel);
    }
}

#[test]
fn layout_is_deterministic() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("dense.json5");
    let theme = Theme::default();
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let dataset = parse_dataset(&input).expect("parse failed");
    let config = ChartConfig::default();

    let first = compute_layout(&dataset, &theme, &config).expect("layout failed");
    let second = compute_layout(&dataset, &theme, &config).expect("layout failed");
    let first_dump = dump_to_string(&first, &theme).expect("dump failed");
    let second_dump = dump_to_string(&second, &theme).expect("dump failed");
    assert_eq!(first_dump, second_dump);
}

#[test]
fn leader_lines_can_be_disabled() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("basic.json5");
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let dataset = parse_dataset(&input).expect("parse failed");
    let theme = Theme::default();
    let mut config = ChartConfig::default();
    config.placement.leader_lines = false;

    let layout = compute_layout(&dataset, &theme, &config).expect("layout failed");
    assert!(layout.labels.iter().all(|label| label.attachment.is_none()));
}

// Small deterministic generator, enough to stress the sweep without pulling
// in a random-number crate.
fn lcg_dataset(count: usize, seed: u64) -> Dataset {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) as f32) / (u32::MAX as f32 / 2.0)
    };
    let categories = [Category::A, Category::B, Category::C];
    let records = (0..count)
        .map(|i| BubbleRecord {
            label: format!("Site {i}"),
            x_value: 5.0 + next() * 90.0,
            y_value: 0.01 + next() * 0.25,
            magnitude: 30.0 + next() * 1000.0,
            category: categories[i % categories.len()],
        })
        .collect();
    Dataset {
        title: Some("Synthetic".to_string()),
        records,
    }
}

#[test]
fn crowded_synthetic_chart_places_every_label() {
    let dataset = lcg_dataset(40, 0x5eed);
    let theme = Theme::default();
    let config = ChartConfig::default();
    let layout = compute_layout(&dataset, &theme, &config).expect("layout failed");

    assert_eq!(layout.labels.len(), 40);
    let margin = config.placement.margin;
    for i in 0..layout.labels.len() {
        let a: &Rect = &layout.labels[i].rect;
        assert!(!layout.labels[i].bound_exceeded, "label {i} hit the bound");
        for j in (i + 1)..layout.labels.len() {
            assert!(
                !a.overlaps_with_clearance(&layout.labels[j].rect, margin),
                "labels {i} and {j} collide"
            );
        }
    }
}
