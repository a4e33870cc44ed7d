//! Report line rendering.

use crate::config::ReportFormat;
use crate::models::ComputedMetrics;

/// Renders the fixed-format summary line, every number to three decimals.
pub fn format_metrics(metrics: &ComputedMetrics) -> String {
    format!(
        "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
        metrics.activity_label,
        metrics.duration_hours,
        metrics.distance_km,
        metrics.mean_speed_kmh,
        metrics.calories_kcal,
    )
}

/// Renders one output line in the requested format.
pub fn render(
    metrics: &ComputedMetrics,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(format_metrics(metrics)),
        ReportFormat::Json => serde_json::to_string(metrics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim() -> ComputedMetrics {
        ComputedMetrics {
            activity_label: "Swimming",
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_text_template() {
        assert_eq!(
            format_metrics(&swim()),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let metrics = swim();
        assert_eq!(format_metrics(&metrics), format_metrics(&metrics.clone()));
    }

    #[test]
    fn test_json_line() {
        let line = render(&swim(), ReportFormat::Json).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["activity_label"], "Swimming");
        assert_eq!(value["mean_speed_kmh"], 1.0);
    }

    #[test]
    fn test_text_render_matches_template() {
        let metrics = swim();
        assert_eq!(
            render(&metrics, ReportFormat::Text).unwrap(),
            format_metrics(&metrics)
        );
    }
}
