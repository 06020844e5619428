use crate::layout::ChartLayout;
use crate::theme::Theme;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON snapshot of a computed layout, for downstream renderers and for
/// golden-file diffing in tests.
#[derive(Debug, Serialize)]
pub struct ChartDump {
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub title: Option<String>,
    pub plot: [f32; 4],
    pub bubbles: Vec<BubbleDump>,
    pub labels: Vec<LabelDump>,
    pub x_ticks: Vec<TickDump>,
    pub y_ticks: Vec<TickDump>,
}

#[derive(Debug, Serialize)]
pub struct BubbleDump {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub priority: f32,
    pub magnitude: f32,
    pub category: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub attachment: Option<[f32; 2]>,
    pub bound_exceeded: bool,
}

#[derive(Debug, Serialize)]
pub struct TickDump {
    pub text: String,
    pub at: f32,
}

impl ChartDump {
    pub fn from_layout(layout: &ChartLayout, theme: &Theme) -> Self {
        let bubbles = layout
            .bubbles
            .iter()
            .map(|bubble| BubbleDump {
                label: bubble.label.clone(),
                x: bubble.cx,
                y: bubble.cy,
                radius: bubble.radius,
                priority: bubble.priority,
                magnitude: bubble.magnitude,
                category: format!("{:?}", bubble.category),
                color: bubble.color.clone(),
            })
            .collect();
        let labels = layout
            .labels
            .iter()
            .map(|label| LabelDump {
                x: label.rect.x,
                y: label.rect.y,
                width: label.rect.width,
                height: label.rect.height,
                attachment: label.attachment.map(|(x, y)| [x, y]),
                bound_exceeded: label.bound_exceeded,
            })
            .collect();
        ChartDump {
            width: layout.width,
            height: layout.height,
            background: theme.background.clone(),
            title: layout.title.clone(),
            plot: [
                layout.plot.x,
                layout.plot.y,
                layout.plot.width,
                layout.plot.height,
            ],
            bubbles,
            labels,
            x_ticks: layout
                .x_ticks
                .iter()
                .map(|(text, at)| TickDump {
                    text: text.clone(),
                    at: *at,
                })
                .collect(),
            y_ticks: layout
                .y_ticks
                .iter()
                .map(|(text, at)| TickDump {
                    text: text.clone(),
                    at: *at,
                })
                .collect(),
        }
    }
}

pub fn dump_to_string(layout: &ChartLayout, theme: &Theme) -> anyhow::Result<String> {
    let dump = ChartDump::from_layout(layout, theme);
    Ok(serde_json::to_string_pretty(&dump)?)
}

pub fn write_chart_dump(path: &Path, layout: &ChartLayout, theme: &Theme) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = ChartDump::from_layout(layout, theme);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
