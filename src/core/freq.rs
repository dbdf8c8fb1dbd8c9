use super::types::Frequency;

/// Converts a recurring amount into its yearly-equivalent total.
///
/// `repeat_count` is the "every N units" part of a schedule, so an amount of
/// 3000 every 3 months annualizes to 12000. A zero repeat count marks a blank
/// row and contributes nothing.
pub fn annualize(amount: f64, repeat_count: f64, unit: Frequency) -> f64 {
    let multiplier = match unit {
        Frequency::Week => 52.0,
        Frequency::Fortnight => 26.0,
        Frequency::Month => 12.0,
        Frequency::Quarter => 4.0,
        Frequency::Year => 1.0,
    };
    if repeat_count == 0.0 {
        return 0.0;
    }
    amount * multiplier / repeat_count
}
