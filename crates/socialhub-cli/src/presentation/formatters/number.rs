/// Compact follower/post counts the way the page shows them ("856", "1.2K", "5.7M")
pub fn format_compact(count: u64) -> String {
    if count >= 1_000_000 {
        with_suffix(count as f64 / 1_000_000.0, "M")
    } else if count >= 1_000 {
        with_suffix(count as f64 / 1_000.0, "K")
    } else {
        count.to_string()
    }
}

fn with_suffix(value: f64, suffix: &str) -> String {
    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", trimmed, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_thousand_is_verbatim() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(856), "856");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn test_thousands() {
        insta::assert_snapshot!(format_compact(1_200), @"1.2K");
        insta::assert_snapshot!(format_compact(12_500), @"12.5K");
        insta::assert_snapshot!(format_compact(15_700), @"15.7K");
        assert_eq!(format_compact(1_000), "1K");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_compact(2_000_000), "2M");
        assert_eq!(format_compact(3_400_000), "3.4M");
    }
}
