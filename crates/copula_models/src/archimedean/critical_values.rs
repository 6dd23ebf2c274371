//! Critical values of the Ali–Mikhail–Haq generator.
//!
//! For θ < 0 the AMH generator is k-monotone iff θ ≥ c_k, where c_k is the
//! largest root in (-1, 0) of `Li_{-k}`. The first few are known in closed
//! form; the rest are found once by a fixed-step scan and cached for the
//! lifetime of the process.

use super::Monotony;
use copula_core::math::special::eulerian_row;
use std::sync::OnceLock;
use tracing::debug;

/// Grid step of the critical-value scan.
pub const CRITICAL_VALUE_STEP: f64 = 1e-7;

/// Number of cached orders; monotonicity above it is reported as this bound.
const TABLE_CAPACITY: usize = 64;

/// Lazily populated, thread-safe cache of critical values `c_k`.
///
/// Each slot is computed at most once even under concurrent first access.
#[derive(Debug)]
pub struct CriticalValueTable {
    step: f64,
    slots: Vec<OnceLock<f64>>,
}

impl CriticalValueTable {
    /// Empty table scanning with grid step `step`.
    pub fn new(step: f64) -> Self {
        Self {
            step,
            slots: (0..=TABLE_CAPACITY).map(|_| OnceLock::new()).collect(),
        }
    }

    /// Highest order held by the table.
    pub fn capacity(&self) -> usize {
        TABLE_CAPACITY
    }

    /// Critical value `c_k`.
    ///
    /// `c_k = -1` for k ≤ 2, `√3 - 2` for k = 3 and `2√6 - 5` for k = 4.
    pub fn critical_value(&self, k: usize) -> f64 {
        match k {
            0..=2 => -1.0,
            3 => 3f64.sqrt() - 2.0,
            4 => 2.0 * 6f64.sqrt() - 5.0,
            _ => match self.slots.get(k) {
                Some(slot) => *slot.get_or_init(|| {
                    debug!(order = k, step = self.step, "scanning AMH critical value");
                    scan_critical_value(k, self.step)
                }),
                None => scan_critical_value(k, self.step),
            },
        }
    }

    /// Maximal monotonicity of the AMH generator with parameter `theta`.
    ///
    /// One less than the smallest k ≥ 3 with θ < c_k.
    pub fn max_monotony(&self, theta: f64) -> Monotony {
        if theta >= 0.0 {
            return Monotony::Infinite;
        }
        (3..=TABLE_CAPACITY)
            .find(|&k| theta < self.critical_value(k))
            .map_or(Monotony::Finite(TABLE_CAPACITY), |k| Monotony::Finite(k - 1))
    }
}

/// Process-wide table used by [`AmhGenerator`](super::AmhGenerator).
pub fn amh_critical_values() -> &'static CriticalValueTable {
    static TABLE: OnceLock<CriticalValueTable> = OnceLock::new();
    TABLE.get_or_init(|| CriticalValueTable::new(CRITICAL_VALUE_STEP))
}

/// Walk from 0 towards -1 and return the first grid point where
/// `Li_{-k}(x) > 0`; -1 if there is none.
fn scan_critical_value(k: usize, step: f64) -> f64 {
    let row = eulerian_row(k);
    let polylog = |x: f64| -> f64 {
        let w = 1.0 / (1.0 - x);
        let y = x * w;
        row.iter()
            .enumerate()
            .map(|(j, &a)| a * y.powi(j as i32 + 1) * w.powi((k - j) as i32))
            .sum()
    };

    let mut x = 0.0;
    while x > -1.0 {
        if polylog(x) > 0.0 {
            return x;
        }
        x -= step;
    }
    -1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use copula_core::math::special::polylog_neg;

    #[test]
    fn test_closed_form_values_are_roots() {
        let table = CriticalValueTable::new(CRITICAL_VALUE_STEP);
        assert_relative_eq!(polylog_neg(3, table.critical_value(3)), 0.0, epsilon = 1e-14);
        assert_relative_eq!(polylog_neg(4, table.critical_value(4)), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn test_scan_agrees_with_closed_form() {
        let scanned = scan_critical_value(4, 1e-5);
        assert!((scanned - (2.0 * 6f64.sqrt() - 5.0)).abs() < 1e-5);
    }

    #[test]
    fn test_scanned_value_brackets_root() {
        let table = CriticalValueTable::new(CRITICAL_VALUE_STEP);
        let c5 = table.critical_value(5);
        // Largest root of A₅(x) = 1 + 26x + 66x² + 26x³ + x⁴
        assert!((c5 + 0.043_096).abs() < 1e-5);
        assert!(polylog_neg(5, c5) > 0.0);
        assert!(polylog_neg(5, c5 + CRITICAL_VALUE_STEP) <= 0.0);
    }

    #[test]
    fn test_critical_values_increase_with_order() {
        let table = CriticalValueTable::new(CRITICAL_VALUE_STEP);
        let values: Vec<f64> = (2..=8).map(|k| table.critical_value(k)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
    }

    #[test]
    fn test_cached_value_is_stable() {
        let table = amh_critical_values();
        let first = table.critical_value(6);
        let second = table.critical_value(6);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_concurrent_first_access() {
        let table = CriticalValueTable::new(CRITICAL_VALUE_STEP);
        let values: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| table.critical_value(7)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(values.iter().all(|v| v.to_bits() == values[0].to_bits()));
    }

    #[test]
    fn test_max_monotony_for_tiny_negative_theta_is_bounded() {
        let table = amh_critical_values();
        assert_eq!(table.max_monotony(-1e-12), Monotony::Finite(TABLE_CAPACITY));
        assert_eq!(table.max_monotony(0.3), Monotony::Infinite);
    }
}
