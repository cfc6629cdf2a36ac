/// Single approximate salary for an optional (lower, upper) bound pair.
///
/// A two-sided range averages out; a one-sided bound is scaled by a fixed
/// factor. Listings with no bounds at all produce no estimate and are
/// excluded from statistics further up the pipeline.
pub fn estimate_salary(lower: Option<i64>, upper: Option<i64>) -> Option<i64> {
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2),
        (Some(lower), None) => Some((lower as f64 * 1.2) as i64),
        (None, Some(upper)) => Some((upper as f64 * 0.8) as i64),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_a_full_range() {
        assert_eq!(estimate_salary(Some(100_000), Some(150_000)), Some(125_000));
    }

    #[test]
    fn scales_a_lone_lower_bound_up() {
        assert_eq!(estimate_salary(Some(100_000), None), Some(120_000));
    }

    #[test]
    fn scales_a_lone_upper_bound_down() {
        assert_eq!(estimate_salary(None, Some(80_000)), Some(64_000));
    }

    #[test]
    fn no_bounds_means_no_estimate() {
        assert_eq!(estimate_salary(None, None), None);
    }

    #[test]
    fn truncates_odd_averages() {
        assert_eq!(estimate_salary(Some(1), Some(2)), Some(1));
    }

    #[test]
    fn zero_is_a_value_not_an_absence() {
        assert_eq!(estimate_salary(Some(0), Some(100_000)), Some(50_000));
        assert_eq!(estimate_salary(Some(0), None), Some(0));
    }
}
