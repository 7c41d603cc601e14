use aquifer_outlook::math::{IntegrationMethod, LinearModel, YearSeries, cumulative};
use aquifer_outlook::projection::scenario::{depletion_year, project, project_scenarios};
use aquifer_outlook::projection::table::{build_table, net_change_column};
use aquifer_outlook::projection::{Depletion, ScenarioBound, ScenarioLabel};

fn series() -> YearSeries {
    YearSeries::new(2000, 2050, 1).unwrap()
}

fn net_cumulative() -> Vec<f64> {
    let net = LinearModel {
        slope: -0.226,
        intercept: 446.6,
    };
    cumulative(&net, 2000, &series(), IntegrationMethod::ClosedForm).unwrap()
}

fn bounds(low: f64, mean: f64, high: f64) -> Vec<ScenarioBound> {
    vec![
        ScenarioBound {
            label: ScenarioLabel::Low,
            initial_storage: low,
        },
        ScenarioBound {
            label: ScenarioLabel::Mean,
            initial_storage: mean,
        },
        ScenarioBound {
            label: ScenarioLabel::High,
            initial_storage: high,
        },
    ]
}

#[test]
fn depletion_years_for_default_scenarios() {
    let s = series();
    let c = net_cumulative();

    let low = depletion_year(&s, &project(190.0, &c));
    let year = low.year().unwrap();
    assert!((2022..=2024).contains(&year), "low depletion {}", year);
    assert_eq!(low, Depletion::Reached(2024));

    assert_eq!(depletion_year(&s, &project(350.0, &c)), Depletion::Reached(2037));
    assert_eq!(depletion_year(&s, &project(550.0, &c)), Depletion::Reached(2050));
}

#[test]
fn large_storage_is_not_reached() {
    let s = series();
    let c = net_cumulative();
    assert_eq!(depletion_year(&s, &project(600.0, &c)), Depletion::NotReached);
    assert_eq!(Depletion::NotReached.to_string(), "not reached");
    assert_eq!(Depletion::NotReached.year(), None);
}

#[test]
fn zero_storage_counts_as_depleted() {
    let s = YearSeries::from_years(vec![2000, 2001, 2002]).unwrap();
    assert_eq!(depletion_year(&s, &[5.0, 0.0, -1.0]), Depletion::Reached(2001));
}

#[test]
fn base_year_storage_equals_initial() {
    let c = net_cumulative();
    let scenarios = project_scenarios(&bounds(190.0, 350.0, 550.0), &series(), &c).unwrap();
    for s in &scenarios {
        assert_eq!(s.storage[0], s.bound.initial_storage);
    }
}

#[test]
fn storage_ordering_holds_every_year() {
    let s = series();
    let c = net_cumulative();
    let scenarios = project_scenarios(&bounds(190.0, 350.0, 550.0), &s, &c).unwrap();
    let ins = vec![12.0; s.len()];
    let outs = vec![20.0; s.len()];
    let table = build_table(&s, &ins, &outs, &c, &scenarios).unwrap();
    assert_eq!(table.len(), 51);
    for r in table.rows() {
        assert!(r.storage_high >= r.storage_mean);
        assert!(r.storage_mean >= r.storage_low);
    }
}

#[test]
fn table_change_is_inflow_minus_outflow() {
    let s = YearSeries::from_years(vec![2000, 2001]).unwrap();
    let c = vec![0.0, -1.0];
    let scenarios = project_scenarios(&bounds(1.0, 2.0, 3.0), &s, &c).unwrap();
    let table = build_table(&s, &[12.8, 12.75], &[18.2, 18.376], &c, &scenarios).unwrap();
    for r in table.rows() {
        assert_eq!(r.change, r.ins - r.outs);
    }
}

#[test]
fn length_mismatch_is_rejected() {
    let s = series();
    assert!(project_scenarios(&bounds(1.0, 2.0, 3.0), &s, &[0.0, 1.0]).is_err());
    assert!(net_change_column(&[1.0, 2.0], &[1.0]).is_err());
}

#[test]
fn missing_scenario_is_rejected() {
    let s = YearSeries::from_years(vec![2000]).unwrap();
    let c = vec![0.0];
    let only_low = project_scenarios(&bounds(1.0, 2.0, 3.0)[..1], &s, &c).unwrap();
    assert!(build_table(&s, &[1.0], &[1.0], &c, &only_low).is_err());
}
