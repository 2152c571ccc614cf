// =========================================================================
// FALSIFY-HT: pooled two-sample t-test contract (contrastar hypothesis)
//
// References:
//   - Student (1908) "The Probable Error of a Mean"
//   - Fisher (1925) "Statistical Methods for Research Workers"
// =========================================================================

use super::*;

/// FALSIFY-HT-001: Two-sample t-test p-value is in [0, 1]
#[test]
fn falsify_ht_001_pvalue_bounded() {
    let sample1 = vec![2.0, 2.5, 3.0, 3.5, 4.0];
    let sample2 = vec![2.2, 2.9, 3.1, 3.3, 4.2];
    let result = ttest_ind(&sample1, &sample2).expect("valid input");

    assert!(
        (0.0..=1.0).contains(&result.p_value),
        "FALSIFIED HT-001: p-value={} outside [0,1]",
        result.p_value
    );
}

/// FALSIFY-HT-002: Two-sample t-test detects significant difference
#[test]
fn falsify_ht_002_detects_difference() {
    // Two clearly different groups
    let group1 = vec![1.0, 1.1, 1.2, 0.9, 1.0, 1.1, 0.95, 1.05];
    let group2 = vec![5.0, 5.1, 5.2, 4.9, 5.0, 5.1, 4.95, 5.05];
    let result = ttest_ind(&group1, &group2).expect("valid input");

    assert!(
        result.p_value < 0.05,
        "FALSIFIED HT-002: p-value={} >= 0.05 for clearly different groups",
        result.p_value
    );
    assert!(
        result.statistic < 0.0,
        "FALSIFIED HT-002: statistic={} not negative for mean1 < mean2",
        result.statistic
    );
}

/// FALSIFY-HT-003: t-statistic is finite for finite inputs
#[test]
fn falsify_ht_003_finite_statistic() {
    let sample1 = vec![10.0, 12.0, 11.5, 13.0, 9.5];
    let sample2 = vec![10.5, 11.0, 12.5, 9.0];
    let result = ttest_ind(&sample1, &sample2).expect("valid input");

    assert!(
        result.statistic.is_finite(),
        "FALSIFIED HT-003: t-statistic is not finite"
    );
}

/// FALSIFY-HT-004: Swapping the samples negates the statistic, p unchanged
#[test]
fn falsify_ht_004_swap_antisymmetry() {
    let sample1 = vec![3.1, 4.2, 5.3, 6.4];
    let sample2 = vec![2.0, 3.5, 8.0, 4.5, 6.5];
    let ab = ttest_ind(&sample1, &sample2).expect("valid input");
    let ba = ttest_ind(&sample2, &sample1).expect("valid input");

    assert!(
        (ab.statistic + ba.statistic).abs() < 1e-12,
        "FALSIFIED HT-004: t(a,b)={} is not -t(b,a)={}",
        ab.statistic,
        ba.statistic
    );
    assert!(
        (ab.p_value - ba.p_value).abs() < 1e-12,
        "FALSIFIED HT-004: p(a,b)={} != p(b,a)={}",
        ab.p_value,
        ba.p_value
    );
}

/// FALSIFY-HT-005: Identical samples give t = 0 and p = 1
#[test]
fn falsify_ht_005_identical_samples() {
    let sample = vec![2.0, 4.0, 4.0, 7.5, 9.0];
    let result = ttest_ind(&sample, &sample).expect("valid input");

    assert!(
        result.statistic.abs() < 1e-15,
        "FALSIFIED HT-005: t={} for identical samples",
        result.statistic
    );
    assert!(
        (result.p_value - 1.0).abs() < 1e-15,
        "FALSIFIED HT-005: p={} for identical samples",
        result.p_value
    );
}

/// FALSIFY-HT-006: Zero pooled variance is rejected, not silently NaN
#[test]
fn falsify_ht_006_degenerate_variance_rejected() {
    let result = ttest_ind(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]);

    assert!(
        matches!(result, Err(ContrastarError::DegenerateVariance { .. })),
        "FALSIFIED HT-006: constant samples did not raise DegenerateVariance"
    );
}

mod hypothesis_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-HT-001-prop: p-value stays in [0, 1] for random samples
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn falsify_ht_001_prop_pvalue_bounded(
            a in proptest::collection::vec(-100.0f64..100.0, 2..10),
            b in proptest::collection::vec(-100.0f64..100.0, 2..10),
        ) {
            if let Ok(result) = ttest_ind(&a, &b) {
                prop_assert!(
                    (0.0..=1.0).contains(&result.p_value),
                    "FALSIFIED HT-001-prop: p-value={} outside [0,1]",
                    result.p_value
                );
            }
        }
    }

    /// FALSIFY-HT-004-prop: Swap antisymmetry for random samples
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn falsify_ht_004_prop_swap_antisymmetry(
            a in proptest::collection::vec(-100.0f64..100.0, 2..10),
            b in proptest::collection::vec(-100.0f64..100.0, 2..10),
        ) {
            if let (Ok(ab), Ok(ba)) = (ttest_ind(&a, &b), ttest_ind(&b, &a)) {
                prop_assert!(
                    (ab.statistic + ba.statistic).abs() < 1e-9 * (1.0 + ab.statistic.abs()),
                    "FALSIFIED HT-004-prop: t(a,b)={} t(b,a)={}",
                    ab.statistic, ba.statistic
                );
                prop_assert!(
                    (ab.p_value - ba.p_value).abs() < 1e-12,
                    "FALSIFIED HT-004-prop: p(a,b)={} p(b,a)={}",
                    ab.p_value, ba.p_value
                );
            }
        }
    }
}
