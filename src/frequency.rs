use serde::{Deserialize, Serialize};

/// Zero/one counts and percentages of a generated bit string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub zeros: usize,
    pub ones: usize,
    pub total: usize,
    pub zero_percentage: f64,
    pub one_percentage: f64,
}

/// Counts the '0' and '1' symbols of a bit string and derives their
/// relative frequencies.
///
/// `total` is the input length in characters; the contract assumes the
/// input is composed solely of '0'/'1'. Both percentages are `0` for an
/// empty input.
///
/// # Examples
///
/// ```
/// use blum_blum_shub::frequency;
///
/// let report = frequency::analyze_bit_frequency("0011");
///
/// assert_eq!(report.zeros, 2);
/// assert_eq!(report.ones, 2);
/// assert_eq!(report.zero_percentage, 50.0);
/// ```
pub fn analyze_bit_frequency(bits: &str) -> FrequencyReport {
    let zeros = bits.chars().filter(|&c| c == '0').count();
    let ones = bits.chars().filter(|&c| c == '1').count();
    let total = bits.chars().count();

    let (zero_percentage, one_percentage) = if total > 0 {
        (
            zeros as f64 / total as f64 * 100.0,
            ones as f64 / total as f64 * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    FrequencyReport { zeros, ones, total, zero_percentage, one_percentage }
}
