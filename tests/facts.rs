use aquifer_outlook::math::{LinearModel, YearSeries};
use aquifer_outlook::projection::facts::{compute_facts, sign_change_year};
use aquifer_outlook::projection::{
    Depletion, ScenarioBound, ScenarioLabel, ScenarioProjection, TrendModels,
};

fn models(net_slope: f64) -> TrendModels {
    let line = LinearModel {
        slope: net_slope,
        intercept: 0.0,
    };
    TrendModels {
        inflow: line,
        outflow: line,
        net_change: line,
    }
}

#[test]
fn decline_per_decade_flips_sign() {
    let s = YearSeries::from_years(vec![2000, 2001]).unwrap();
    let f = compute_facts(&models(-0.226), &s, &[-5.4, -5.626], &[]).unwrap();
    assert!((f.decline_per_decade - 2.26).abs() < 1e-9);
}

#[test]
fn extremes_and_years() {
    let s = YearSeries::from_years(vec![2000, 2010, 2020, 2030]).unwrap();
    let f = compute_facts(&models(-0.2), &s, &[-5.4, -7.0, -9.0, -16.7], &[]).unwrap();
    assert_eq!(f.max_change.year, 2000);
    assert!((f.max_change.value + 5.4).abs() < 1e-12);
    assert_eq!(f.min_change.year, 2030);
    assert!((f.min_change.value + 16.7).abs() < 1e-12);
    assert_eq!(f.sign_change_year, None);
}

#[test]
fn ties_resolve_to_earliest_year() {
    let s = YearSeries::from_years(vec![2000, 2001, 2002]).unwrap();
    let f = compute_facts(&models(0.0), &s, &[1.0, 1.0, 1.0], &[]).unwrap();
    assert_eq!(f.max_change.year, 2000);
    assert_eq!(f.min_change.year, 2000);
}

#[test]
fn sign_change_detected() {
    let years = [2000, 2001, 2002, 2003];
    assert_eq!(sign_change_year(&years, &[2.0, 1.0, -0.5, -1.0]), Some(2002));
    assert_eq!(sign_change_year(&years, &[-2.0, -1.0, 0.0, 1.0]), Some(2002));
    assert_eq!(sign_change_year(&years, &[-2.0, -1.0, -0.5, -0.1]), None);
}

#[test]
fn touching_zero_is_not_a_sign_change() {
    let years = [2000, 2001, 2002, 2003, 2004];
    assert_eq!(sign_change_year(&years, &[-1.0, 0.0, -1.0, -2.0, -3.0]), None);
    assert_eq!(sign_change_year(&years, &[1.0, 0.0, 0.0, 1.0, 2.0]), None);
    assert_eq!(sign_change_year(&years, &[1.0, 0.0, 0.0, -1.0, -2.0]), Some(2001));
    assert_eq!(sign_change_year(&years, &[0.0, 0.0, 1.0, 2.0, -1.0]), Some(2004));
}

#[test]
fn depletion_carried_per_scenario() {
    let s = YearSeries::from_years(vec![2000, 2001]).unwrap();
    let scenarios = vec![
        ScenarioProjection {
            bound: ScenarioBound {
                label: ScenarioLabel::Low,
                initial_storage: 1.0,
            },
            storage: vec![1.0, -1.0],
            depletion: Depletion::Reached(2001),
        },
        ScenarioProjection {
            bound: ScenarioBound {
                label: ScenarioLabel::High,
                initial_storage: 9.0,
            },
            storage: vec![9.0, 7.0],
            depletion: Depletion::NotReached,
        },
    ];
    let f = compute_facts(&models(-1.0), &s, &[-1.0, -2.0], &scenarios).unwrap();
    assert_eq!(
        f.depletion,
        vec![
            (ScenarioLabel::Low, Depletion::Reached(2001)),
            (ScenarioLabel::High, Depletion::NotReached),
        ]
    );
}

#[test]
fn nan_change_is_rejected() {
    let s = YearSeries::from_years(vec![2000, 2001]).unwrap();
    assert!(compute_facts(&models(0.0), &s, &[0.0, f64::NAN], &[]).is_err());
}
