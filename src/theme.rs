use crate::ir::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub label_color: String,
    pub axis_color: String,
    pub leader_line_color: String,
    pub bubble_stroke: String,
    pub category_a_color: String,
    pub category_b_color: String,
    pub category_c_color: String,
}

impl Theme {
    /// Palette close to a spreadsheet chart's defaults.
    pub fn office() -> Self {
        Self {
            font_family: "Calibri, Segoe UI, sans-serif".to_string(),
            font_size: 16.0,
            background: "#FFFFFF".to_string(),
            label_color: "#333333".to_string(),
            axis_color: "#808080".to_string(),
            leader_line_color: "#808080".to_string(),
            bubble_stroke: "#FFFFFF".to_string(),
            category_a_color: "#4472C4".to_string(),
            category_b_color: "#ED7D31".to_string(),
            category_c_color: "#A5A5A5".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            background: "#FFFFFF".to_string(),
            label_color: "#1C2430".to_string(),
            axis_color: "#7A8AA6".to_string(),
            leader_line_color: "#7A8AA6".to_string(),
            bubble_stroke: "#FFFFFF".to_string(),
            category_a_color: "#3B82F6".to_string(),
            category_b_color: "#F59E0B".to_string(),
            category_c_color: "#94A3B8".to_string(),
        }
    }

    pub fn category_color(&self, category: Category) -> &str {
        match category {
            Category::A => &self.category_a_color,
            Category::B => &self.category_b_color,
            Category::C => &self.category_c_color,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::office()
    }
}
