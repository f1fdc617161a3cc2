use finlib_core::time_value::{fv, ipmt, nper, npv, pmt, pv};
use finlib_core::PaymentTiming::{Begin, End};

const DELTA: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{what}: expected {expected}, got {actual}"
    );
}

fn assert_rel_close(actual: f64, expected: f64, what: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() / scale < 1e-6,
        "{what}: expected {expected}, got {actual}"
    );
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_fv_reference_values() {
    assert_close(fv(0.0, 3.0, 2.0, 7.0, Begin), -13.0, DELTA, "fv");
    assert_close(fv(1.0, 10.0, 100.0, 10000.0, End), -10342300.0, DELTA, "fv");
    assert_close(fv(1.0, 10.0, 100.0, 10000.0, Begin), -10444600.0, DELTA, "fv");
    assert_close(fv(2.0, 12.0, 120.0, 12000.0, End), -6409178400.0, DELTA, "fv");
    assert_close(fv(2.0, 12.0, 120.0, 12000.0, Begin), -6472951200.0, DELTA, "fv");
    assert_close(
        fv(2.95, 13.0, 13000.0, -4406.78544294496, End),
        333891.229919434,
        1e-6,
        "fv",
    );
    assert_close(
        fv(2.95, 13.0, 13000.0, -17406.7852148156, Begin),
        333891.227783203,
        1e-6,
        "fv",
    );
}

#[test]
fn test_pv_reference_values() {
    assert_close(pv(0.0, 3.0, 2.0, 7.0, Begin), -13.0, DELTA, "pv");
    assert_close(pv(1.0, 10.0, 100.0, 10000.0, End), -109.66796875, DELTA, "pv");
    assert_close(pv(1.0, 10.0, 100.0, 10000.0, Begin), -209.5703125, DELTA, "pv");
    assert_close(
        pv(2.95, 13.0, 13000.0, 333891.23, End),
        -4406.78544294496,
        DELTA,
        "pv",
    );
    assert_close(
        pv(2.95, 13.0, 13000.0, 333891.23, Begin),
        -17406.7852148156,
        DELTA,
        "pv",
    );
    assert_close(pv(2.0, 12.0, 120.0, -6409178400.0, End), 12000.0, DELTA, "pv");
    assert_close(pv(2.0, 12.0, 120.0, -6472951200.0, Begin), 12000.0, DELTA, "pv");
}

#[test]
fn test_pmt_reference_values() {
    assert_close(pmt(0.0, 3.0, 2.0, 7.0, Begin), -3.0, DELTA, "pmt");
    assert_close(pmt(1.0, 10.0, -109.66796875, 10000.0, End), 100.0, DELTA, "pmt");
    assert_close(pmt(1.0, 10.0, -209.5703125, 10000.0, Begin), 100.0, DELTA, "pmt");
    assert_close(pmt(2.0, 12.0, 12000.0, -6409178400.0, End), 120.0, DELTA, "pmt");
    assert_close(pmt(2.0, 12.0, 12000.0, -6472951200.0, Begin), 120.0, DELTA, "pmt");
}

#[test]
fn test_npv_reference_values() {
    assert_close(npv(1.0, &[100.0, 200.0, 300.0, 400.0]), 162.5, DELTA, "npv");
    assert_close(
        npv(2.5, &[1000.0, 666.66666, 333.33, 12.2768416]),
        347.99232604144827,
        DELTA,
        "npv",
    );
    assert_close(
        npv(12.33333, &[1000.0, 0.0, -900.0, -7777.5765]),
        74.3742433377061,
        DELTA,
        "npv",
    );
    assert_close(
        npv(
            0.05,
            &[200000.0, 300000.55, 400000.0, 1000000.0, 6000000.0, 7000000.0, -300000.0],
        ),
        11342283.423312401,
        DELTA,
        "npv",
    );
}

#[test]
fn test_nper_reference_values() {
    assert_close(nper(0.0, 7.0, 2.0, 3.0, End), -0.71428571429, DELTA, "nper");
    assert_close(nper(1.0, 100.0, -109.66796875, 10000.0, End), 10.0, DELTA, "nper");
    assert_close(nper(1.0, 100.0, -209.5703125, 10000.0, Begin), 10.0, DELTA, "nper");
    assert_close(nper(2.0, 120.0, 12000.0, -6409178400.0, End), 12.0, DELTA, "nper");
    assert_close(nper(2.0, 120.0, 12000.0, -6472951200.0, Begin), 12.0, DELTA, "nper");
}

#[test]
fn test_ipmt_reference_values() {
    let rate = 0.1 / 12.0;
    let n = 2.0 * 12.0;
    assert_close(
        ipmt(rate, 6, n, 100000.0, 1000000.0, End),
        928.8235718400465,
        DELTA,
        "ipmt",
    );
    assert_close(
        ipmt(rate, 6, n, 100000.0, 1000000.0, Begin),
        921.1473439736042,
        DELTA,
        "ipmt",
    );
    assert_close(ipmt(rate, 1, n, 100000.0, 1000000.0, Begin), 0.0, DELTA, "ipmt");
    assert_close(
        ipmt(rate, 1, n, 100000.0, 1000000.0, End),
        -833.3333333333334,
        DELTA,
        "ipmt",
    );
}

// ===========================================================================
// Zero-rate branches
// ===========================================================================

#[test]
fn test_zero_rate_is_linear_for_every_timing() {
    for timing in [Begin, End] {
        assert_eq!(fv(0.0, 4.0, -25.0, -100.0, timing), 200.0);
        assert_eq!(pv(0.0, 4.0, -25.0, 50.0, timing), 50.0);
        assert_eq!(pmt(0.0, 4.0, -100.0, 20.0, timing), 20.0);
        assert_eq!(nper(0.0, -25.0, 100.0, 0.0, timing), 4.0);
    }
}

#[test]
fn test_npv_zero_rate_sums_flows() {
    assert_eq!(npv(0.0, &[-100.0, 50.0, 50.0, 50.0]), 50.0);
}

// ===========================================================================
// Consistency between formulas
// ===========================================================================

#[test]
fn test_pv_fv_round_trip() {
    let cases = [
        (0.05, 10.0, -100.0, -1000.0),
        (0.0075, 360.0, -1500.0, 250000.0),
        (0.2, 7.5, 40.0, 900.0),
        (-0.02, 12.0, 15.0, -300.0),
    ];
    for (rate, n, payment, present) in cases {
        for timing in [Begin, End] {
            let future = fv(rate, n, payment, present, timing);
            assert_rel_close(pv(rate, n, payment, future, timing), present, "pv(fv(..))");

            let back = pv(rate, n, payment, present, timing);
            assert_rel_close(fv(rate, n, payment, back, timing), present, "fv(pv(..))");
        }
    }
}

#[test]
fn test_pmt_recovers_payment() {
    let cases = [
        (0.05, 10.0, -100.0, -1000.0),
        (0.01, 24.0, 250.0, 5000.0),
        (0.3, 3.0, -12.5, 80.0),
    ];
    for (rate, n, payment, present) in cases {
        for timing in [Begin, End] {
            let future = fv(rate, n, payment, present, timing);
            assert_rel_close(pmt(rate, n, present, future, timing), payment, "pmt(fv(..))");
        }
    }
}

#[test]
fn test_nper_recovers_period_count() {
    let (rate, payment, present) = (0.01, -200.0, 5000.0);
    for timing in [Begin, End] {
        let future = fv(rate, 18.0, payment, present, timing);
        assert_rel_close(nper(rate, payment, present, future, timing), 18.0, "nper");
    }
}

#[test]
fn test_ipmt_first_ordinary_period_is_full_interest() {
    for present in [1000.0, -2500.0, 0.0] {
        let rate = 0.04;
        assert_close(ipmt(rate, 1, 10.0, present, 0.0, End), -present * rate, DELTA, "ipmt");
        assert_eq!(ipmt(rate, 1, 10.0, present, 0.0, Begin), 0.0);
    }
}

// ===========================================================================
// Ordering and special values
// ===========================================================================

#[test]
fn test_npv_empty_is_zero_for_any_rate() {
    for rate in [-0.5, 0.0, 0.1, 3.0, -1.0] {
        assert_eq!(npv(rate, &[]), 0.0);
    }
}

#[test]
fn test_npv_is_order_sensitive() {
    let flows = [-1000.0, 200.0, 300.0, 900.0];
    let mut reversed = flows;
    reversed.reverse();
    assert!((npv(0.1, &flows) - npv(0.1, &reversed)).abs() > 1.0);
    // Equal at rate zero
    assert_eq!(npv(0.0, &flows), npv(0.0, &reversed));
}

#[test]
fn test_singular_inputs_propagate_ieee_values() {
    // rate = -1 collapses 1 + rate to zero
    assert!(!fv(-1.0, -2.0, 10.0, 100.0, End).is_finite());
    assert!(!pv(-1.0, 3.0, 10.0, 100.0, End).is_finite());
    // r1^nper == 1
    assert!(!pmt(0.05, 0.0, 1000.0, 0.0, End).is_finite());
    // log of a negative number
    assert!(nper(0.05, -10.0, 1000.0, 0.0, End).is_nan());
}

#[test]
fn test_formulas_are_deterministic() {
    let a = ipmt(0.0125, 7, 48.0, 20000.0, 0.0, End);
    let b = ipmt(0.0125, 7, 48.0, 20000.0, 0.0, End);
    assert_eq!(a.to_bits(), b.to_bits());
}
