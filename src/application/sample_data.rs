// Static sample dataset shown when the backend analysis is unavailable
use crate::domain::chart::{
    AxisLabel, CategoryData, ChartBody, ChartData, NumericSeries, PieData, PieSeries, PieSlice,
    ScatterData, ScatterSeries,
};
use crate::domain::insight::{Insight, InsightKind};

fn labels(names: &[&str]) -> Vec<AxisLabel> {
    names.iter().map(|name| AxisLabel::from(*name)).collect()
}

fn series(name: &str, data: &[f64], color: &str) -> NumericSeries {
    NumericSeries {
        name: name.to_string(),
        data: data.to_vec(),
        color: Some(color.to_string()),
    }
}

fn slice(value: f64, name: &str) -> PieSlice {
    PieSlice {
        value,
        name: name.to_string(),
    }
}

pub fn sample_charts() -> Vec<ChartData> {
    vec![
        ChartData::new(
            "Department Distribution",
            ChartBody::Bar(CategoryData {
                categories: labels(&["Engineering", "Marketing", "Sales", "HR", "Finance"]),
                series: vec![series("Employees", &[45.0, 23.0, 18.0, 12.0, 8.0], "#3b82f6")],
            }),
        ),
        ChartData::new(
            "Performance Score Trend",
            ChartBody::Line(CategoryData {
                categories: labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
                series: vec![series(
                    "Average Score",
                    &[75.0, 78.0, 82.0, 85.0, 88.0, 90.0],
                    "#10b981",
                )],
            }),
        ),
        ChartData::new(
            "Salary Distribution",
            ChartBody::Pie(PieData {
                series: vec![PieSeries {
                    name: "Salary Ranges".to_string(),
                    data: vec![
                        slice(35.0, "$50k - $70k"),
                        slice(45.0, "$70k - $90k"),
                        slice(15.0, "$90k - $110k"),
                        slice(5.0, "$110k+"),
                    ],
                }],
            }),
        ),
        ChartData::new(
            "Age vs Performance Score",
            ChartBody::Scatter(ScatterData {
                x_axis_name: Some("Age".to_string()),
                y_axis_name: Some("Performance Score".to_string()),
                series: vec![ScatterSeries {
                    name: "Employees".to_string(),
                    data: vec![
                        [25.0, 85.0],
                        [30.0, 78.0],
                        [35.0, 92.0],
                        [28.0, 88.0],
                        [32.0, 75.0],
                        [27.0, 90.0],
                        [33.0, 82.0],
                        [29.0, 86.0],
                        [31.0, 79.0],
                        [26.0, 93.0],
                    ],
                    color: Some("#8b5cf6".to_string()),
                }],
            }),
        ),
    ]
}

pub fn sample_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "insight_1",
            "Performance Improvement Trend",
            "Employee performance scores have shown a consistent upward trend over the past 6 months, with an average increase of 2.5 points per month. This suggests effective management practices and employee development programs.",
            InsightKind::Trend,
        ),
        Insight::new(
            "insight_2",
            "Salary Anomaly Detected",
            "Three employees in the Engineering department have salaries significantly above the department average (150%+ higher). This may indicate specialized roles or potential data entry errors that require review.",
            InsightKind::Anomaly,
        ),
        Insight::new(
            "insight_3",
            "Age-Performance Correlation",
            "Strong positive correlation (r=0.73) found between employee age and performance scores. Employees aged 30-35 show the highest performance levels, suggesting optimal experience-to-energy ratio.",
            InsightKind::Correlation,
        ),
        Insight::new(
            "insight_4",
            "Department Performance Summary",
            "Engineering leads in both headcount (45 employees) and average performance (87.2), while Finance shows the smallest team (8 employees) but maintains competitive performance scores (84.1).",
            InsightKind::Summary,
        ),
    ]
}
