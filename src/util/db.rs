//! Decibel conversion helpers shared by the plot and waterfall stages.

/// Smallest linear power admitted into the pipeline after normalization.
pub const POWER_FLOOR: f32 = 1.0e-20;

/// Floor applied to aggregated column values before any logarithm.
pub const COLUMN_FLOOR: f32 = f32::MIN_POSITIVE;

/// Natural log to decibel conversion factor: 10 / ln(10) ~= 4.342944819.
const LN_TO_DB: f32 = 4.342_944_8;

/// Convert linear power to decibels. Non-positive input is floored first.
#[inline(always)]
pub fn power_to_db(power: f32) -> f32 {
    power.max(COLUMN_FLOOR).ln() * LN_TO_DB
}

#[inline(always)]
pub fn db_to_power(db: f32) -> f32 {
    10.0_f32.powf(db / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_and_db_round_trip() {
        for db in [-150.0_f32, -60.0, -3.0, 0.0, 20.0] {
            let back = power_to_db(db_to_power(db));
            assert!((back - db).abs() < 1e-3, "{db} -> {back}");
        }
    }

    #[test]
    fn zero_power_is_finite() {
        assert!(power_to_db(0.0).is_finite());
        assert!(power_to_db(-1.0).is_finite());
    }
}
