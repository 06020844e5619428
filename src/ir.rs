use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Bubble grouping, mapped to a palette slot by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    A,
    B,
    #[default]
    C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleRecord {
    pub label: String,
    pub x_value: f32,
    pub y_value: f32,
    pub magnitude: f32,
    pub category: Category,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub title: Option<String>,
    pub records: Vec<BubbleRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetFile {
    title: Option<String>,
    records: Vec<RecordFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFile {
    label: Option<String>,
    x_value: Option<f32>,
    y_value: Option<f32>,
    magnitude: Option<f32>,
    category: Option<Category>,
}

/// Parse a dataset from JSON5 text (plain JSON works too). Rows with a
/// missing label or missing/non-finite numbers are dropped, the same way a
/// sheet row with empty cells would be skipped; a missing category falls back
/// to [`Category::C`].
pub fn parse_dataset(input: &str) -> anyhow::Result<Dataset> {
    let parsed: DatasetFile = json5::from_str(input).context("invalid dataset")?;
    let records = parsed
        .records
        .into_iter()
        .filter_map(|row| {
            let label = row.label.filter(|label| !label.trim().is_empty())?;
            let x_value = row.x_value.filter(|value| value.is_finite())?;
            let y_value = row.y_value.filter(|value| value.is_finite())?;
            let magnitude = row.magnitude.filter(|value| value.is_finite())?;
            Some(BubbleRecord {
                label,
                x_value,
                y_value,
                magnitude,
                category: row.category.unwrap_or_default(),
            })
        })
        .collect();
    Ok(Dataset {
        title: parsed.title,
        records,
    })
}
