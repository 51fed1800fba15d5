use benchdash::units::{TimeUnit, format_nanos, normalize_to_nanos};

#[test]
fn test_normalize_uses_exact_multipliers() {
    assert_eq!(normalize_to_nanos(12.0, "ns").unwrap(), 12.0);
    assert_eq!(normalize_to_nanos(5.0, "us").unwrap(), 5_000.0);
    assert_eq!(normalize_to_nanos(12.0, "ms").unwrap(), 12_000_000.0);
    assert_eq!(normalize_to_nanos(2.0, "s").unwrap(), 2_000_000_000.0);
}

#[test]
fn test_normalize_accepts_both_micro_glyphs() {
    assert_eq!(normalize_to_nanos(1.5, "\u{b5}s").unwrap(), 1_500.0);
    assert_eq!(normalize_to_nanos(1.5, "\u{3bc}s").unwrap(), 1_500.0);
}

#[test]
fn test_normalize_rejects_unknown_unit() {
    let err = normalize_to_nanos(1.0, "fortnights").unwrap_err();
    assert!(err.to_string().contains("unknown time unit"));
}

#[test]
fn test_normalize_rejects_negative_magnitude() {
    let err = normalize_to_nanos(-3.0, "ms").unwrap_err();
    assert!(err.to_string().contains("negative"));
}

#[test]
fn test_normalize_is_monotonic_per_unit() {
    for unit in ["ns", "us", "ms", "s"] {
        let a = normalize_to_nanos(1.0, unit).unwrap();
        let b = normalize_to_nanos(2.0, unit).unwrap();
        let c = normalize_to_nanos(3.0, unit).unwrap();
        assert!(a < b && b < c, "ordering broken for unit {unit}");
    }
}

#[test]
fn test_unit_parse_variants() {
    assert_eq!(TimeUnit::parse("ns"), Some(TimeUnit::Nanos));
    assert_eq!(TimeUnit::parse("us"), Some(TimeUnit::Micros));
    assert_eq!(TimeUnit::parse("\u{b5}s"), Some(TimeUnit::Micros));
    assert_eq!(TimeUnit::parse("\u{3bc}s"), Some(TimeUnit::Micros));
    assert_eq!(TimeUnit::parse("ms"), Some(TimeUnit::Millis));
    assert_eq!(TimeUnit::parse("s"), Some(TimeUnit::Secs));
    assert_eq!(TimeUnit::parse("sec"), None);
    assert_eq!(TimeUnit::parse(""), None);
}

#[test]
fn test_format_tier_boundaries() {
    assert_eq!(format_nanos(999.0), "999 ns");
    assert_eq!(format_nanos(1_000.0), "1.0 \u{3bc}s");
    assert_eq!(format_nanos(999_999.0), "1000.0 \u{3bc}s");
    assert_eq!(format_nanos(1_000_000.0), "1.0 ms");
    assert_eq!(format_nanos(999_999_999.0), "1000.0 ms");
    assert_eq!(format_nanos(1_000_000_000.0), "1.00 s");
}

#[test]
fn test_format_mid_tier_values() {
    assert_eq!(format_nanos(0.0), "0 ns");
    assert_eq!(format_nanos(12_000_000.0), "12.0 ms");
    assert_eq!(format_nanos(1_500.0), "1.5 \u{3bc}s");
    assert_eq!(format_nanos(2_340_000_000.0), "2.34 s");
}
