//! Example chart series shown next to a plan. These are fixed illustration
//! values and are not derived from the user's profile or the model output.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Point {
    pub label: &'static str,
    pub value: f32,
}

#[derive(Debug, Serialize)]
pub struct Chart {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub unit: &'static str,
    pub points: Vec<Point>,
}

#[derive(Debug, Serialize)]
pub struct ChartSet {
    pub illustrative: bool,
    pub charts: Vec<Chart>,
}

fn points(pairs: &[(&'static str, f32)]) -> Vec<Point> {
    pairs
        .iter()
        .map(|&(label, value)| Point { label, value })
        .collect()
}

pub fn example_charts() -> ChartSet {
    ChartSet {
        illustrative: true,
        charts: vec![
            Chart {
                id: "weekly_burn",
                title: "Calories burned per workout",
                kind: "bar",
                unit: "kcal",
                points: points(&[
                    ("Sun", 320.0),
                    ("Mon", 450.0),
                    ("Tue", 410.0),
                    ("Wed", 380.0),
                    ("Thu", 460.0),
                    ("Fri", 420.0),
                    ("Sat", 150.0),
                ]),
            },
            Chart {
                id: "macro_split",
                title: "Daily macro split",
                kind: "pie",
                unit: "%",
                points: points(&[("Protein", 30.0), ("Carbs", 45.0), ("Fats", 25.0)]),
            },
            Chart {
                id: "weight_trend",
                title: "Projected weight",
                kind: "line",
                unit: "kg",
                points: (1..=12)
                    .map(|week| Point {
                        label: WEEK_LABELS[week - 1],
                        value: 80.0 - 0.5 * week as f32,
                    })
                    .collect(),
            },
        ],
    }
}

const WEEK_LABELS: [&str; 12] = [
    "W1", "W2", "W3", "W4", "W5", "W6", "W7", "W8", "W9", "W10", "W11", "W12",
];

#[cfg(test)]
mod chart_tests {
    use super::*;

    #[test]
    fn charts_are_static() {
        let set = example_charts();
        assert!(set.illustrative);
        assert_eq!(set.charts.len(), 3);
        assert_eq!(set.charts[0].points.len(), 7);
        let macros: f32 = set.charts[1].points.iter().map(|p| p.value).sum();
        assert_eq!(macros, 100.0);
        assert_eq!(set.charts[2].points[11].label, "W12");
        assert_eq!(set.charts[2].points[11].value, 74.0);
    }
}
