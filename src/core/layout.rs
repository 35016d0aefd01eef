use crate::core::dataset::LaunchTable;
use crate::domain::model::ALL_SITES;
use serde::Serialize;

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Upper bound on slider marks; the interval widens past this.
pub const MAX_SLIDER_MARKS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial `[low, high]`, the data's payload bounds.
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlaceholder {
    pub id: &'static str,
}

/// Static widget tree served to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: &'static str,
    pub site_dropdown: Dropdown,
    pub pie_chart: ChartPlaceholder,
    pub payload_slider: RangeSlider,
    pub scatter_chart: ChartPlaceholder,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSettings {
    pub step: f64,
    pub mark_interval: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            step: 1000.0,
            mark_interval: 2500.0,
        }
    }
}

pub fn build_layout(table: &LaunchTable, slider: SliderSettings) -> Layout {
    let mut options = vec![DropdownOption {
        label: ALL_SITES.to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(table.sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    Layout {
        title: PAGE_TITLE,
        site_dropdown: Dropdown {
            id: SITE_DROPDOWN_ID,
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here",
            searchable: true,
        },
        pie_chart: ChartPlaceholder { id: PIE_CHART_ID },
        payload_slider: build_slider(table, slider),
        scatter_chart: ChartPlaceholder {
            id: SCATTER_CHART_ID,
        },
    }
}

fn build_slider(table: &LaunchTable, settings: SliderSettings) -> RangeSlider {
    let min = (table.min_payload() / settings.step).floor() * settings.step;
    let mut max = (table.max_payload() / settings.step).ceil() * settings.step;
    if max <= min {
        max = min + settings.step;
    }

    RangeSlider {
        id: PAYLOAD_SLIDER_ID,
        label: "Payload range (Kg):",
        min,
        max,
        step: settings.step,
        marks: build_marks(min, max, settings.mark_interval),
        value: [table.min_payload(), table.max_payload()],
    }
}

fn build_marks(min: f64, max: f64, interval: f64) -> Vec<SliderMark> {
    // 極端的離群值會讓刻度數爆量，改用 interval 的整數倍
    let max_steps = (MAX_SLIDER_MARKS - 1) as f64;
    let steps = (max - min) / interval;
    let interval = if steps > max_steps {
        interval * (steps / max_steps).ceil()
    } else {
        interval
    };

    let mut marks = Vec::new();
    let mut value = (min / interval).ceil() * interval;
    while value <= max {
        marks.push(SliderMark {
            value,
            label: format!("{} KG", value),
        });
        value += interval;
    }
    marks
}
