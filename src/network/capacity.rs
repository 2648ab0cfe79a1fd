//! Total compute capacity available for extraction cycles
//!
//! All per-target rates are normalized against this total so targets can be
//! compared independent of how much capacity is thrown at them.

use crate::network::target::{NodeCategory, Target};

/// Sum capacity over accessible nodes
///
/// Hacknet nodes only count when `include_hacknet` is set. Negative or
/// non-finite capacities contribute nothing.
pub fn total_capacity(targets: &[Target], include_hacknet: bool) -> f64 {
    targets
        .iter()
        .filter(|t| t.has_access)
        .filter(|t| include_hacknet || t.category != NodeCategory::Hacknet)
        .map(|t| t.max_capacity)
        .filter(|c| c.is_finite() && *c > 0.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Vec<Target> {
        vec![
            Target::new("home", 0.0, 1.0, 1).owned().with_capacity(64.0),
            Target::new("n00dles", 1.0, 1.0, 1).with_capacity(4.0),
            Target::new("CSEC", 1.0, 1.0, 50).with_capacity(8.0).with_access(false),
            Target::new("hacknet-node-0", 0.0, 1.0, 1).owned().hacknet().with_capacity(16.0),
        ]
    }

    #[test]
    fn test_excludes_hacknet_by_default() {
        assert_eq!(total_capacity(&network(), false), 68.0);
    }

    #[test]
    fn test_includes_hacknet_on_request() {
        assert_eq!(total_capacity(&network(), true), 84.0);
    }

    #[test]
    fn test_ignores_bad_capacity() {
        let targets = vec![
            Target::new("a", 1.0, 1.0, 1).with_capacity(-5.0),
            Target::new("b", 1.0, 1.0, 1).with_capacity(f64::NAN),
            Target::new("c", 1.0, 1.0, 1).with_capacity(2.0),
        ];
        assert_eq!(total_capacity(&targets, true), 2.0);
        assert_eq!(total_capacity(&[], true), 0.0);
    }
}
