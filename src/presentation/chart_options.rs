// Chart renderer - ChartData to ECharts option objects
use crate::domain::chart::{CategoryData, ChartBody, ChartData, PieData, ScatterData};
use html_escape::encode_double_quoted_attribute;
use serde_json::{json, Map, Value};

const DEFAULT_SERIES_COLOR: &str = "#3b82f6";

fn color_or_default(color: &Option<String>) -> &str {
    color.as_deref().unwrap_or(DEFAULT_SERIES_COLOR)
}

/// Title, tooltip, grid and legend shared by every chart.
fn base_option(chart: &ChartData) -> Map<String, Value> {
    let mut option = Map::new();
    option.insert(
        "title".to_string(),
        json!({
            "text": chart.title,
            "left": "center",
            "textStyle": { "fontSize": 16, "fontWeight": "bold" }
        }),
    );
    option.insert(
        "tooltip".to_string(),
        json!({ "trigger": "axis", "axisPointer": { "type": "cross" } }),
    );
    option.insert(
        "grid".to_string(),
        json!({ "left": "3%", "right": "4%", "bottom": "3%", "containLabel": true }),
    );
    option.insert(
        "legend".to_string(),
        json!({ "data": chart.series_names(), "top": "bottom" }),
    );
    option
}

fn category_axes(option: &mut Map<String, Value>, data: &CategoryData) {
    option.insert(
        "xAxis".to_string(),
        json!({ "type": "category", "data": data.categories, "axisLabel": { "rotate": 45 } }),
    );
    option.insert("yAxis".to_string(), json!({ "type": "value" }));
}

fn bar_series(data: &CategoryData) -> Value {
    data.series
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "type": "bar",
                "data": s.data,
                "itemStyle": { "color": color_or_default(&s.color) }
            })
        })
        .collect()
}

fn line_series(data: &CategoryData) -> Value {
    data.series
        .iter()
        .map(|s| {
            let color = color_or_default(&s.color);
            json!({
                "name": s.name,
                "type": "line",
                "data": s.data,
                "smooth": true,
                "lineStyle": { "color": color },
                "itemStyle": { "color": color }
            })
        })
        .collect()
}

fn pie_series(title: &str, data: &PieData) -> Value {
    let slices = data
        .series
        .first()
        .map(|s| json!(s.data))
        .unwrap_or_else(|| json!([]));

    json!([{
        "name": title,
        "type": "pie",
        "radius": "50%",
        "data": slices,
        "emphasis": {
            "itemStyle": {
                "shadowBlur": 10,
                "shadowOffsetX": 0,
                "shadowColor": "rgba(0, 0, 0, 0.5)"
            }
        }
    }])
}

fn scatter_axes(option: &mut Map<String, Value>, data: &ScatterData) {
    option.insert(
        "xAxis".to_string(),
        json!({ "type": "value", "name": data.x_axis_name.as_deref().unwrap_or("X Axis") }),
    );
    option.insert(
        "yAxis".to_string(),
        json!({ "type": "value", "name": data.y_axis_name.as_deref().unwrap_or("Y Axis") }),
    );
}

fn scatter_series(data: &ScatterData) -> Value {
    data.series
        .iter()
        .map(|s| {
            json!({
                "name": s.name,
                "type": "scatter",
                "data": s.data,
                "symbolSize": 8,
                "itemStyle": { "color": color_or_default(&s.color) }
            })
        })
        .collect()
}

/// Build the ECharts option for one chart. Unknown chart types get the bare
/// frame with no series. Backend-supplied `options` win over generated keys.
pub fn chart_option(chart: &ChartData) -> Value {
    let mut option = base_option(chart);

    let series = match &chart.body {
        ChartBody::Bar(data) => {
            category_axes(&mut option, data);
            bar_series(data)
        }
        ChartBody::Line(data) => {
            category_axes(&mut option, data);
            line_series(data)
        }
        ChartBody::Pie(data) => pie_series(&chart.title, data),
        ChartBody::Scatter(data) => {
            scatter_axes(&mut option, data);
            scatter_series(data)
        }
        ChartBody::Unknown { kind, .. } => {
            tracing::debug!("No renderer for chart type '{}'", kind);
            json!([])
        }
    };
    option.insert("series".to_string(), series);

    if let Some(Value::Object(overrides)) = &chart.options {
        for (key, value) in overrides {
            option.insert(key.clone(), value.clone());
        }
    }

    Value::Object(option)
}

/// The "Data Visualizations" card. Each chart's option is embedded as JSON
/// next to its container and drawn by the page script.
pub fn charts_section(charts: &[ChartData]) -> String {
    if charts.is_empty() {
        return String::new();
    }

    let mut cells = String::new();
    for (index, chart) in charts.iter().enumerate() {
        // `</` cannot appear inside a script element.
        let option = chart_option(chart).to_string().replace("</", "<\\/");
        cells.push_str(&format!(
            r#"<div class="chart-cell"><div class="chart" data-option="chart-option-{index}" aria-label="{title}"></div><script type="application/json" id="chart-option-{index}">{option}</script></div>"#,
            index = index,
            title = encode_double_quoted_attribute(&chart.title),
            option = option,
        ));
    }

    format!(
        r#"<section class="card"><h2>Data Visualizations</h2><p class="description">Interactive charts generated from your dataset</p><div class="chart-grid">{}</div></section>"#,
        cells
    )
}
