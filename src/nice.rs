const UNITS: [&str; 4] = ["B", "k", "M", "G"];
const BASE: u64 = 1024;

/// Human-readable size, e.g. `512B`, `1.5k` or `2.0M`.
///
/// Anything from 1024 GiB upwards falls back to the plain byte count.
pub fn nice_size(bytes: u64) -> String {
    let mut base = 1u64;
    for (i, unit) in UNITS.iter().enumerate() {
        let limit = base.saturating_mul(BASE);
        if bytes < limit {
            return if i == 0 {
                format!("{bytes}{unit}")
            } else {
                // Ties round away from zero, so 1280 is 1.3k.
                let tenths = (bytes as f64 / base as f64 * 10.0).round();
                format!("{:.1}{unit}", tenths / 10.0)
            };
        }
        base = limit;
    }

    bytes.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, "0B")]
    #[case(512, "512B")]
    #[case(1023, "1023B")]
    #[case(1024, "1.0k")]
    #[case(1280, "1.3k")]
    #[case(1536, "1.5k")]
    #[case(758_000, "740.2k")]
    #[case(2 * 1024 * 1024, "2.0M")]
    #[case(3 * 1024 * 1024 * 1024 + 1024 * 1024 * 1024 / 2, "3.5G")]
    #[case(1024 * 1024 * 1024 * 1024, "1099511627776")]
    fn test_nice_size(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(nice_size(bytes), expected);
    }
}
