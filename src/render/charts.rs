//! Chart-ready tables turned into Plotly figures.
//!
//! Each chart is a Plotly figure (`data` + `layout`) serialized to JSON and
//! drawn in the browser by `plotly.js`. The page embeds an empty container
//! per chart plus one script that initializes every container on load.

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::models::{CountRow, DayValue};

/// Where `plotly.js` is loaded from
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Plotly's default qualitative palette, cycled for per-series colors
const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A Plotly trace type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Pie,
    Scatter,
}

/// One Plotly trace; empty fields are left out of the JSON
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            name: None,
            mode: None,
            x: Vec::new(),
            y: Vec::new(),
            labels: Vec::new(),
            values: Vec::new(),
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Text {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Text,
}

impl Axis {
    fn titled(text: &'static str) -> Self {
        Self { title: Text { text } }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

/// The `data` and `layout` handed to `Plotly.newPlot`
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// A chart with its HTML container id and Plotly figure
#[derive(Debug, Clone)]
pub struct Chart {
    /// The HTML element id of the container (kebab-case)
    pub id: &'static str,
    pub figure: Figure,
}

impl Chart {
    /// The empty container the figure is drawn into
    pub fn container(&self) -> Markup {
        html! {
            div id=(self.id) class="chart" {}
        }
    }
}

/// One personal bar chart of hours per day
pub fn watch_time_chart(rows: &[DayValue]) -> Chart {
    let mut trace = Trace::new(TraceKind::Bar);
    trace.x = days(rows);
    trace.y = values(rows);

    Chart {
        id: "weekly-watch-time",
        figure: Figure {
            data: vec![trace],
            layout: Layout {
                title: Text { text: "Weekly Watch Time" },
                xaxis: Some(Axis::titled("Day")),
                yaxis: Some(Axis::titled("Hours Watched")),
                showlegend: None,
            },
        },
    }
}

pub fn genre_distribution_chart(rows: &[CountRow]) -> Chart {
    let mut trace = Trace::new(TraceKind::Pie);
    trace.labels = rows.iter().map(|r| r.label.clone()).collect();
    trace.values = rows.iter().map(|r| r.count as f64).collect();

    Chart {
        id: "genre-distribution",
        figure: Figure {
            data: vec![trace],
            layout: Layout {
                title: Text { text: "Preferred Genres Distribution" },
                xaxis: None,
                yaxis: None,
                showlegend: None,
            },
        },
    }
}

/// A bar per series, each its own trace so every series gets its own color
/// and legend entry
pub fn series_popularity_chart(rows: &[CountRow]) -> Chart {
    let traces = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut trace = Trace::new(TraceKind::Bar);
            trace.name = Some(row.label.clone());
            trace.x = vec![row.label.clone()];
            trace.y = vec![row.count as f64];
            trace.marker = Some(Marker {
                color: PALETTE[i % PALETTE.len()],
            });
            trace
        })
        .collect();

    Chart {
        id: "series-popularity",
        figure: Figure {
            data: traces,
            layout: Layout {
                title: Text { text: "Most Watched Series" },
                xaxis: Some(Axis::titled("Series")),
                yaxis: Some(Axis::titled("Count")),
                showlegend: Some(true),
            },
        },
    }
}

/// The synthetic weekly average line chart
pub fn weekly_average_chart(rows: &[DayValue]) -> Chart {
    let mut trace = Trace::new(TraceKind::Scatter);
    trace.mode = Some("lines");
    trace.x = days(rows);
    trace.y = values(rows);

    Chart {
        id: "weekly-average",
        figure: Figure {
            data: vec![trace],
            layout: Layout {
                title: Text { text: "Average Weekly Watch Time" },
                xaxis: Some(Axis::titled("Day")),
                yaxis: Some(Axis::titled("Average Hours")),
                showlegend: None,
            },
        },
    }
}

/// Script that draws every chart once the DOM is ready
pub fn charts_script(charts: &[&Chart]) -> Markup {
    let calls = charts
        .iter()
        .map(|chart| {
            format!(
                r#"Plotly.newPlot("{}", {}, {}, {{"responsive": true}});"#,
                chart.id,
                script_safe(&chart.figure.data, "[]"),
                script_safe(&chart.figure.layout, "{}"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html! {
        script {
            (PreEscaped(format!(
                "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
                calls
            )))
        }
    }
}

fn days(rows: &[DayValue]) -> Vec<String> {
    rows.iter().map(|r| r.day.clone()).collect()
}

fn values(rows: &[DayValue]) -> Vec<f64> {
    rows.iter().map(|r| r.value).collect()
}

/// JSON that can sit inside a `<script>` element; labels come from the
/// dataset and may contain `</script>`.
fn script_safe<T: Serialize>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| fallback.to_string())
        .replace('<', "\\u003c")
}
