use bondcurve_core::fixed_income::bond::Bond;
use bondcurve_core::fixed_income::valuation::{value_bond, BondValuationInput};
use bondcurve_core::BondCurveError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn build(
    settlement: &str,
    maturity: &str,
    last_coupon: &str,
    coupon_rate: Decimal,
    ytm: Decimal,
    face_value: Decimal,
) -> Result<Bond, BondCurveError> {
    Bond::new(
        date(settlement),
        date(maturity),
        date(last_coupon),
        coupon_rate,
        ytm,
        face_value,
        dec!(365),
        2,
    )
}

fn r2032() -> Bond {
    build("2024-05-16", "2032-03-31", "2024-03-31", dec!(0.0825), dec!(0.095), dec!(100)).unwrap()
}

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected ~{expected}, got {actual}"
    );
}

// ===========================================================================
// Construction
// ===========================================================================

#[test]
fn test_negative_terms_rejected() {
    for (coupon, ytm, face) in [
        (dec!(-0.0825), dec!(0.095), dec!(100)),
        (dec!(0.0825), dec!(-0.095), dec!(100)),
        (dec!(0.0825), dec!(0.095), dec!(-100)),
    ] {
        let result = build("2024-05-16", "2032-03-31", "2024-03-31", coupon, ytm, face);
        assert!(
            matches!(result, Err(BondCurveError::InvalidInput { .. })),
            "coupon={coupon} ytm={ytm} face={face} should be rejected"
        );
    }
}

#[test]
fn test_settlement_after_maturity_rejected() {
    let result = build("2032-05-16", "2032-03-31", "2024-03-31", dec!(0.0825), dec!(0.095), dec!(100));
    assert!(matches!(result, Err(BondCurveError::InvalidInput { .. })));
}

#[test]
fn test_settlement_on_maturity_rejected() {
    let result = build("2032-03-31", "2032-03-31", "2031-09-30", dec!(0.0825), dec!(0.095), dec!(100));
    assert!(matches!(result, Err(BondCurveError::InvalidInput { .. })));
}

#[test]
fn test_last_coupon_after_settlement_rejected() {
    let err = build("2024-05-16", "2032-03-31", "2024-06-01", dec!(0.0825), dec!(0.095), dec!(100))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input: last_coupon_date: Last coupon date must be on or before settlement date."
    );
}

#[test]
fn test_last_coupon_on_settlement_accepted() {
    let bond = build("2024-03-31", "2032-03-31", "2024-03-31", dec!(0.0825), dec!(0.095), dec!(100))
        .unwrap();
    assert_eq!(bond.calculate_accrued_interest(), Decimal::ZERO);
}

#[test]
fn test_terms_stored_verbatim() {
    let bond = r2032();
    assert_eq!(bond.settlement_date(), date("2024-05-16"));
    assert_eq!(bond.maturity_date(), date("2032-03-31"));
    assert_eq!(bond.last_coupon_date(), date("2024-03-31"));
    assert_eq!(bond.coupon_rate(), dec!(0.0825));
    assert_eq!(bond.yield_to_maturity(), dec!(0.095));
    assert_eq!(bond.face_value(), dec!(100));
}

// ===========================================================================
// Metrics
// ===========================================================================

#[test]
fn test_r2032_metrics_positive() {
    let bond = r2032();
    assert!(bond.calculate_accrued_interest() >= Decimal::ZERO);
    assert!(bond.calculate_present_value_of_face_value() > Decimal::ZERO);
    assert!(bond.calculate_present_value_of_coupons() > Decimal::ZERO);
    assert!(bond.calculate_all_in_price() > Decimal::ZERO);
    assert!(bond.calculate_clean_price() > Decimal::ZERO);
}

#[test]
fn test_r2032_regression_values() {
    let bond = r2032();
    let tol = dec!(0.001);
    assert_close(bond.calculate_accrued_interest(), dec!(1.039726), tol, "accrued");
    assert_close(bond.calculate_present_value_of_face_value(), dec!(48.127638), tol, "pv face");
    assert_close(bond.calculate_present_value_of_coupons(), dec!(46.044250), tol, "pv coupons");
    assert_close(bond.calculate_all_in_price(), dec!(94.171888), tol, "all-in");
    assert_close(bond.calculate_clean_price(), dec!(93.132162), tol, "clean");
}

#[test]
fn test_r186_regression_values() {
    let bond = build("2017-02-07", "2026-12-21", "2016-12-21", dec!(0.105), dec!(0.0875), dec!(100))
        .unwrap();
    let tol = dec!(0.001);
    assert_close(bond.calculate_accrued_interest(), dec!(1.380822), tol, "accrued");
    assert_close(bond.calculate_all_in_price(), dec!(112.739706), tol, "all-in");
    assert_close(bond.calculate_clean_price(), dec!(111.358885), tol, "clean");
}

#[test]
fn test_coupon_dates_bounded_by_maturity() {
    let bond = r2032();
    let dates = bond.generate_coupon_dates();
    assert!(!dates.is_empty());
    assert_eq!(dates.len(), 16);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
    assert!(*dates.first().unwrap() > bond.last_coupon_date());
    assert!(*dates.last().unwrap() <= bond.maturity_date());
}

#[test]
fn test_premium_bond_prices_above_par() {
    let bond = build("2024-05-16", "2032-03-31", "2024-03-31", dec!(0.10), dec!(0.05), dec!(100))
        .unwrap();
    assert!(bond.calculate_clean_price() > dec!(100));
    assert!(bond.calculate_all_in_price() > dec!(100));
}

#[test]
fn test_discount_bond_prices_below_par() {
    let bond = build("2024-05-16", "2032-03-31", "2024-03-31", dec!(0.05), dec!(0.10), dec!(100))
        .unwrap();
    assert!(bond.calculate_clean_price() < dec!(100));
    assert!(bond.calculate_all_in_price() < dec!(100));
}

#[test]
fn test_price_falls_as_yield_rises() {
    let bond = r2032();
    let prices: Vec<Decimal> = [dec!(0.0), dec!(0.03), dec!(0.06), dec!(0.09), dec!(0.12)]
        .into_iter()
        .map(|ytm| bond.with_yield_to_maturity(ytm).unwrap().calculate_all_in_price())
        .collect();
    assert!(
        prices.windows(2).all(|w| w[0] > w[1]),
        "all-in price should fall as yield rises: {prices:?}"
    );
}

#[test]
fn test_zero_coupon_has_no_coupon_value() {
    let bond = build("2024-05-16", "2032-03-31", "2024-03-31", Decimal::ZERO, dec!(0.095), dec!(100))
        .unwrap();
    assert_eq!(bond.calculate_present_value_of_coupons(), Decimal::ZERO);
    assert_eq!(bond.calculate_accrued_interest(), Decimal::ZERO);
    assert_eq!(bond.calculate_clean_price(), bond.calculate_present_value_of_face_value());
}

#[test]
fn test_short_bond_without_coupon_dates() {
    // Next coupon would fall after maturity
    let bond = build("2024-05-16", "2024-08-31", "2024-03-31", dec!(0.0825), dec!(0.095), dec!(100))
        .unwrap();
    assert!(bond.generate_coupon_dates().is_empty());
    assert_eq!(bond.calculate_present_value_of_coupons(), Decimal::ZERO);
    assert!(bond.calculate_all_in_price() > Decimal::ZERO);
}

#[test]
fn test_repeated_calls_are_identical() {
    let bond = r2032();
    assert_eq!(bond.calculate_clean_price(), bond.calculate_clean_price());
    assert_eq!(bond.calculate_all_in_price(), bond.calculate_all_in_price());
    assert_eq!(bond.generate_coupon_dates(), bond.generate_coupon_dates());
}

#[test]
fn test_bond_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Bond>();

    let bond = r2032();
    let expected = bond.calculate_clean_price();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| bond.calculate_clean_price()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

// ===========================================================================
// Valuation envelope
// ===========================================================================

#[test]
fn test_value_bond_from_json() {
    let json = r#"{
        "settlement_date": "2024-05-16",
        "maturity_date": "2032-03-31",
        "last_coupon_date": "2024-03-31",
        "coupon_rate": "0.0825",
        "yield_to_maturity": "0.095",
        "face_value": "100.00",
        "day_count_basis": "365",
        "coupon_frequency": 2
    }"#;
    let input: BondValuationInput = serde_json::from_str(json).unwrap();
    let out = value_bond(&input).unwrap().result;
    let bond = r2032();
    assert_eq!(out.clean_price, bond.calculate_clean_price());
    assert_eq!(out.all_in_price, bond.calculate_all_in_price());
    assert_eq!(out.coupon_schedule.len(), 16);
}

#[test]
fn test_stale_last_coupon_compounds_past_coupons_forward() {
    let input = BondValuationInput {
        settlement_date: date("2024-05-16"),
        maturity_date: date("2032-03-31"),
        last_coupon_date: date("2021-03-31"),
        coupon_rate: dec!(0.0825),
        yield_to_maturity: dec!(0.095),
        face_value: dec!(100),
        day_count_basis: dec!(365),
        coupon_frequency: 2,
    };
    let result = value_bond(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.coupon_schedule.len(), 22);
    assert_eq!(out.num_remaining_coupons, 16);
    assert_eq!(out.coupon_schedule[0].date, date("2021-09-30"));
    assert_eq!(out.coupon_schedule[0].days_from_settlement, -959);
    assert_eq!(out.coupon_schedule[5].date, date("2024-03-30"));
    assert_eq!(out.coupon_schedule[5].days_from_settlement, -47);
    assert_eq!(out.coupon_schedule[21].date, date("2032-03-30"));

    let tol = dec!(0.001);
    assert_close(out.coupon_schedule[0].present_value, dec!(5.264162), tol, "first past coupon");
    assert_close(out.coupon_schedule[5].present_value, dec!(4.174595), tol, "last past coupon");
    for c in &out.coupon_schedule[..6] {
        assert!(c.present_value > out.coupon_amount, "{} not compounded", c.date);
    }
    assert_close(out.accrued_interest, dec!(25.812329), tol, "accrued interest");
    assert_close(out.pv_coupons, dec!(74.262042), tol, "pv coupons");
    assert_close(out.clean_price, dec!(96.577351), tol, "clean price");

    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("6 scheduled coupon(s) on or before settlement")));
}
