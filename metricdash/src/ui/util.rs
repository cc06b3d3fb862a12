//! Presentation helpers: byte conversions, percentages and labels.

use chrono::{DateTime, Utc};

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn gib(b: i64) -> f64 {
    b as f64 / GIB
}

pub fn mib(b: i64) -> f64 {
    b as f64 / MIB
}

/// `used / total * 100` with no clamping; a zero total yields NaN or infinity,
/// a negative counter a negative percentage.
pub fn pct(used: i64, total: i64) -> f64 {
    used as f64 / total as f64 * 100.0
}

/// Two decimals, exact halves rounded away from zero.
///
/// `{:.2}` rounds an exactly representable half (1.125, 0.125) to even;
/// dashboards elsewhere show those rounded up, so ties are settled here.
pub fn to_fixed2(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    // v is a tie iff v * 200 is exactly an odd integer; mul_add checks exactness
    let y = v * 200.0;
    let tie = y.fract() == 0.0 && y.abs() % 2.0 == 1.0 && v.mul_add(200.0, -y) == 0.0;
    if !tie {
        return format!("{v:.2}");
    }
    // odd integers only exist below 2^53, so this is exact
    let hundredths = ((y.abs() + 1.0) / 2.0) as u64;
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100)
}

pub fn fmt_gb(b: i64) -> String {
    format!("{} GB", to_fixed2(gib(b)))
}

pub fn fmt_mb(b: i64) -> String {
    format!("{} MB", to_fixed2(mib(b)))
}

pub fn fmt_pct(v: f64) -> String {
    format!("{}%", to_fixed2(v))
}

/// HTTP-date style, e.g. `Fri, 16 Oct 2026 09:30:00 GMT`.
pub fn fmt_updated(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn conversions() {
        assert_eq!(fmt_gb(2 * 1024 * 1024 * 1024), "2.00 GB");
        assert_eq!(fmt_gb(1536 * 1024 * 1024), "1.50 GB");
        assert_eq!(fmt_mb(1048576), "1.00 MB");
        assert_eq!(fmt_mb(0), "0.00 MB");
    }

    #[test]
    fn percentages_are_not_clamped() {
        assert_eq!(fmt_pct(pct(1, 3)), "33.33%");
        assert_eq!(fmt_pct(pct(3, 2)), "150.00%");
        assert_eq!(fmt_pct(pct(-1, 4)), "-25.00%");
        assert!(pct(0, 0).is_nan());
        assert!(pct(1, 0).is_infinite());
        assert_eq!(fmt_pct(pct(0, 0)), "NaN%");
        assert_eq!(fmt_pct(pct(1, 0)), "Infinity%");
    }

    #[test]
    fn exact_halves_round_up() {
        // 1.125 GiB, 1.125 MiB, 0.125 %
        assert_eq!(fmt_gb(1207959552), "1.13 GB");
        assert_eq!(fmt_mb(1179648), "1.13 MB");
        assert_eq!(fmt_pct(pct(1, 800)), "0.13%");
        assert_eq!(to_fixed2(2.5), "2.50");
        assert_eq!(to_fixed2(0.375), "0.38");
        assert_eq!(to_fixed2(-1.125), "-1.13");
        assert_eq!(to_fixed2(1099511627775.625), "1099511627775.63");
    }

    #[test]
    fn non_ties_keep_nearest_rounding() {
        // 1.005 is stored slightly below the half
        assert_eq!(to_fixed2(1.005), "1.00");
        assert_eq!(to_fixed2(1.0051), "1.01");
        assert_eq!(to_fixed2(0.0), "0.00");
        assert_eq!(to_fixed2(-0.001), "-0.00");
        assert_eq!(fmt_gb(-1073741824), "-1.00 GB");
    }

    #[test]
    fn updated_label_format() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap();
        assert_eq!(fmt_updated(t), "Fri, 16 Oct 2026 09:05:03 GMT");
    }
}
