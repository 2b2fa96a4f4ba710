// The JSON document handed to the chart renderer.

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;

use survey_charts::catalog;
use survey_charts::host::{ChartView, RenderMode};
use survey_charts::*;

fn series_to_json(series: &Series) -> JSValue {
    match series {
        Series::Labels(l) => json!(l),
        Series::Values(v) => json!(v),
    }
}

fn trace_to_json(trace: &Trace) -> JSValue {
    let mut js: JSMap<String, JSValue> = JSMap::new();
    match trace.kind {
        TraceKind::Bar(orientation) => {
            js.insert("type".to_string(), json!("bar"));
            let o = match orientation {
                Orientation::Horizontal => "h",
                Orientation::Vertical => "v",
            };
            js.insert("orientation".to_string(), json!(o));
        }
        TraceKind::Scatter(mode) => {
            js.insert("type".to_string(), json!("scatter"));
            let m = match mode {
                ScatterMode::Lines => "lines",
                ScatterMode::Markers => "markers",
                ScatterMode::MarkersText => "markers+text",
            };
            js.insert("mode".to_string(), json!(m));
        }
        TraceKind::Heatmap => {
            js.insert("type".to_string(), json!("heatmap"));
        }
    }
    if let Some(name) = &trace.name {
        js.insert("name".to_string(), json!(name));
    }
    js.insert("x".to_string(), series_to_json(&trace.x));
    js.insert("y".to_string(), series_to_json(&trace.y));
    if let Some(cells) = &trace.cells {
        js.insert("z".to_string(), json!(cells.z));
        js.insert("text".to_string(), json!(cells.text));
        js.insert("textColors".to_string(), json!(cells.text_colors));
    } else if !trace.text.is_empty() {
        js.insert("text".to_string(), json!(trace.text));
    }
    if !trace.custom_data.is_empty() {
        js.insert("customdata".to_string(), json!(trace.custom_data));
    }

    let mut marker: JSMap<String, JSValue> = JSMap::new();
    if !trace.point_colors.is_empty() {
        marker.insert("color".to_string(), json!(trace.point_colors));
    } else if let Some(color) = &trace.color {
        marker.insert("color".to_string(), json!(color));
    }
    if !trace.opacities.is_empty() {
        marker.insert("opacity".to_string(), json!(trace.opacities));
    }
    if let Some(size) = trace.marker_size {
        marker.insert("size".to_string(), json!(size));
    }
    if !marker.is_empty() {
        js.insert("marker".to_string(), JSValue::Object(marker));
    }

    if trace.line_width.is_some() || trace.dashed {
        let mut line: JSMap<String, JSValue> = JSMap::new();
        if let Some(color) = &trace.color {
            line.insert("color".to_string(), json!(color));
        }
        if let Some(width) = trace.line_width {
            line.insert("width".to_string(), json!(width));
        }
        if trace.dashed {
            line.insert("dash".to_string(), json!("dot"));
        }
        js.insert("line".to_string(), JSValue::Object(line));
    }
    if let Some(opacity) = trace.opacity {
        js.insert("opacity".to_string(), json!(opacity));
    }
    if let Some(template) = &trace.hover_template {
        js.insert("hovertemplate".to_string(), json!(template));
    }
    if !trace.show_legend {
        js.insert("showlegend".to_string(), json!(false));
    }
    JSValue::Object(js)
}

fn axis_to_json(axis: &AxisLayout) -> JSValue {
    let mut js: JSMap<String, JSValue> = JSMap::new();
    if let Some(title) = &axis.title {
        let mut t = json!({ "text": title });
        if let Some(standoff) = axis.title_standoff {
            t["standoff"] = json!(standoff);
        }
        js.insert("title".to_string(), t);
    }
    if let Some(suffix) = &axis.tick_suffix {
        js.insert("ticksuffix".to_string(), json!(suffix));
    }
    if axis.category {
        js.insert("type".to_string(), json!("category"));
    }
    if let Some(dtick) = axis.dtick {
        js.insert("dtick".to_string(), json!(dtick));
    }
    if let Some((low, high)) = axis.range {
        js.insert("range".to_string(), json!([low, high]));
    }
    if axis.on_top {
        js.insert("side".to_string(), json!("top"));
    }
    JSValue::Object(js)
}

fn layout_to_json(layout: &Layout) -> JSValue {
    let mut js: JSMap<String, JSValue> = JSMap::new();
    if let Some(mode) = layout.bar_mode {
        let m = match mode {
            BarMode::Stack => "stack",
            BarMode::Group => "group",
        };
        js.insert("barmode".to_string(), json!(m));
    }
    js.insert("xaxis".to_string(), axis_to_json(&layout.x_axis));
    js.insert("yaxis".to_string(), axis_to_json(&layout.y_axis));
    if let Some(height) = layout.height {
        js.insert("height".to_string(), json!(height));
    }
    if layout.hide_legend {
        js.insert("showlegend".to_string(), json!(false));
    } else if layout.horizontal_legend {
        js.insert("legend".to_string(), json!({ "orientation": "h" }));
    }
    if layout.square_axes {
        js["yaxis"]["scaleanchor"] = json!("x");
    }
    JSValue::Object(js)
}

fn stats_to_json(stats: &ChartStats) -> JSValue {
    let mut js = json!({ "numberOfResponses": stats.number_of_responses });
    if let Some(eligible) = stats.total_eligible {
        js["totalEligible"] = json!(eligible);
    }
    js
}

pub fn view_to_json(view: &ChartView) -> JSValue {
    let mode = match view.mode {
        RenderMode::SingleYear => "single",
        RenderMode::Comparison => "comparison",
    };
    let traces: Vec<JSValue> = view.traces.iter().map(trace_to_json).collect();
    json!({
        "id": view.chart.id,
        "title": view.chart.title,
        "mode": mode,
        "year": view.year,
        "compareYear": view.compare_year,
        "traces": traces,
        "layout": layout_to_json(&view.layout),
        "stats": stats_to_json(&view.stats),
        // Rounded so that reference files stay readable.
        "responseRate": (view.response_rate * 10.0).round() / 10.0,
    })
}

pub fn build_summary_js(years: &[String], views: &[ChartView]) -> JSValue {
    let charts: Vec<JSValue> = views.iter().map(view_to_json).collect();
    json!({
        "years": years,
        "charts": charts,
    })
}

pub fn page_name(page: Page) -> &'static str {
    match page {
        Page::Demographic => "demographic",
        Page::GeneralAwareness => "general-awareness",
        Page::RoleOfDigitalSustainability => "role-of-digital-sustainability",
        Page::SustainabilityInTasks => "sustainability-in-tasks",
        Page::Explore => "explore",
    }
}

/// One line per chart of the catalog: id, page and title.
pub fn catalog_listing() -> Vec<String> {
    catalog::CHARTS
        .iter()
        .map(|c| format!("{:<45} {:<32} {}", c.id, page_name(c.page), c.title))
        .collect()
}
