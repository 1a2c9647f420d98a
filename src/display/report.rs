//! Report formatting utilities for terminal output

/// Format a margin percentage the way the gauges label it
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an amount in millions for chart axis labels, e.g. "12.3M"
pub fn format_millions(units: f64) -> String {
    format!("{:.1}M", units / 1_000_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(60.0), "60.00%");
        assert_eq!(format_percentage(43.333), "43.33%");
        assert_eq!(format_percentage(-5.0), "-5.00%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-3.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(12_345_678.0), "12.3M");
        assert_eq!(format_millions(0.0), "0.0M");
    }
}
