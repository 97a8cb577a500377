//! Ingestion progress display value.

/// Last-received processing progress, clamped for display.
///
/// Out-of-range values from the pipeline are clamped, not rejected; updates
/// are idempotent last-value-wins with no ordering requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProcessingProgress(f32);

impl ProcessingProgress {
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(0.0, 100.0))
    }

    /// Percentage in `[0, 100]`.
    pub fn percent(self) -> f32 {
        self.0
    }

    /// Fraction in `[0, 1]`, for width-based renderers.
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(ProcessingProgress::new(-5.0).percent(), 0.0);
        assert_eq!(ProcessingProgress::new(250.0).percent(), 100.0);
        assert_eq!(ProcessingProgress::new(42.5).percent(), 42.5);
    }

    #[test]
    fn fraction_is_percent_over_one_hundred() {
        assert_eq!(ProcessingProgress::new(50.0).fraction(), 0.5);
        assert_eq!(ProcessingProgress::default().fraction(), 0.0);
    }
}
