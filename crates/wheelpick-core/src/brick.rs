//! Self-checks a widget runs before it is painted.
//!
//! A [`Brick`] lists the [`BrickAssertion`]s it promises and can report, at
//! any moment, which of them currently hold. Hosts use this to refuse to
//! show a wheel whose labels would be unreadable.

use std::time::Duration;

/// A checkable promise about rendered output.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// At least some text ends up on screen with non-zero alpha
    TextVisible,

    /// Label colour against background meets this ratio (4.5 is WCAG AA)
    ContrastRatio(f32),

    /// One paint pass fits in this many milliseconds
    MaxLatencyMs(u32),
}

/// Which assertions held on the last check.
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// Held
    pub passed: Vec<BrickAssertion>,
    /// Broken, each with a human-readable reason
    pub failed: Vec<(BrickAssertion, String)>,
    /// Wall time the check took
    pub verification_time: Duration,
}

impl BrickVerification {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Passed over total; a brick with nothing to check scores 1.0.
    #[must_use]
    pub fn score(&self) -> f32 {
        let total = self.passed.len() + self.failed.len();
        if total == 0 {
            1.0
        } else {
            self.passed.len() as f32 / total as f32
        }
    }
}

/// Assertions and static markup every widget exposes.
pub trait Brick: Send + Sync {
    /// Stable name used in markup class names and reports.
    fn brick_name(&self) -> &'static str;

    /// Everything this brick promises.
    fn assertions(&self) -> &[BrickAssertion];

    /// Evaluate [`Brick::assertions`] against current state.
    fn verify(&self) -> BrickVerification;

    /// Deterministic HTML for web targets.
    fn to_html(&self) -> String;

    /// Deterministic, scoped CSS for web targets.
    fn to_css(&self) -> String;

    /// Shorthand for `verify().is_valid()`.
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Caption(&'static str);

    impl Brick for Caption {
        fn brick_name(&self) -> &'static str {
            "Caption"
        }
        fn assertions(&self) -> &[BrickAssertion] {
            &[BrickAssertion::TextVisible]
        }
        fn verify(&self) -> BrickVerification {
            let mut check = BrickVerification::default();
            if self.0.is_empty() {
                check
                    .failed
                    .push((BrickAssertion::TextVisible, "empty caption".into()));
            } else {
                check.passed.push(BrickAssertion::TextVisible);
            }
            check
        }
        fn to_html(&self) -> String {
            format!("<span>{}</span>", self.0)
        }
        fn to_css(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn test_can_render_follows_verify() {
        assert!(Caption("Apple").can_render());
        assert!(!Caption("").can_render());
    }

    #[test]
    fn test_score_counts_failures() {
        let empty = BrickVerification::default();
        assert!(empty.is_valid());
        assert_eq!(empty.score(), 1.0);

        let low_contrast = BrickVerification {
            passed: vec![BrickAssertion::TextVisible],
            failed: vec![(BrickAssertion::ContrastRatio(4.5), "1.2:1".into())],
            verification_time: Duration::ZERO,
        };
        assert!(!low_contrast.is_valid());
        assert_eq!(low_contrast.score(), 0.5);
    }

    #[test]
    fn test_failed_reason_kept() {
        let check = Caption("").verify();
        assert_eq!(check.failed[0].1, "empty caption");
        assert_eq!(check.score(), 0.0);
    }
}
