use crate::layout::scale::SizeMapping;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of the placement engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Minimum clearance kept between a label and everything else, and the
    /// gap between a bubble rim and the base candidate.
    pub margin: f32,
    /// Angular sweep resolution: a full circle is divided into this many
    /// steps (the sweep itself visits `rotation_steps + 1` angles, both ends
    /// inclusive).
    pub rotation_steps: usize,
    /// Radial escalation per exhausted sweep, in pixels.
    pub radial_step: f32,
    /// Upper bound on escalation rings before the search gives up.
    pub max_radial_steps: usize,
    /// When false, labels float free and no attachment search runs.
    pub leader_lines: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 5.0,
            rotation_steps: 16,
            radial_step: 5.0,
            max_radial_steps: 200,
            leader_lines: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub bubble_scale: f32,
    pub size_mapping: SizeMapping,
    /// Format the y axis as percentages (vacancy-rate style data).
    pub y_axis_percent: bool,
    pub placement: PlacementConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 700.0,
            bubble_scale: 1.0,
            size_mapping: SizeMapping::default(),
            y_axis_percent: true,
            placement: PlacementConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct PlacementConfigFile {
    margin: Option<f32>,
    rotation_steps: Option<usize>,
    radial_step: Option<f32>,
    max_radial_steps: Option<usize>,
    leader_lines: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeFile {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    label_color: Option<String>,
    axis_color: Option<String>,
    leader_line_color: Option<String>,
    bubble_stroke: Option<String>,
    category_a_color: Option<String>,
    category_b_color: Option<String>,
    category_c_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeFile>,
    width: Option<f32>,
    height: Option<f32>,
    bubble_scale: Option<f32>,
    size_mapping: Option<SizeMapping>,
    y_axis_percent: Option<bool>,
    placement: Option<PlacementConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "office" || theme_name == "default" {
            config.theme = Theme::office();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.axis_color {
            config.theme.axis_color = v;
        }
        if let Some(v) = vars.leader_line_color {
            config.theme.leader_line_color = v;
        }
        if let Some(v) = vars.bubble_stroke {
            config.theme.bubble_stroke = v;
        }
        if let Some(v) = vars.category_a_color {
            config.theme.category_a_color = v;
        }
        if let Some(v) = vars.category_b_color {
            config.theme.category_b_color = v;
        }
        if let Some(v) = vars.category_c_color {
            config.theme.category_c_color = v;
        }
    }

    if let Some(v) = parsed.width {
        config.chart.width = v;
    }
    if let Some(v) = parsed.height {
        config.chart.height = v;
    }
    if let Some(v) = parsed.bubble_scale {
        config.chart.bubble_scale = v;
    }
    if let Some(v) = parsed.size_mapping {
        config.chart.size_mapping = v;
    }
    if let Some(v) = parsed.y_axis_percent {
        config.chart.y_axis_percent = v;
    }
    if let Some(placement) = parsed.placement {
        if let Some(v) = placement.margin {
            config.chart.placement.margin = v;
        }
        if let Some(v) = placement.rotation_steps {
            config.chart.placement.rotation_steps = v;
        }
        if let Some(v) = placement.radial_step {
            config.chart.placement.radial_step = v;
        }
        if let Some(v) = placement.max_radial_steps {
            config.chart.placement.max_radial_steps = v;
        }
        if let Some(v) = placement.leader_lines {
            config.chart.placement.leader_lines = v;
        }
    }

    Ok(config)
}
