use std::path::PathBuf;

use aquifer_outlook::ctx::Ctx;
use aquifer_outlook::io::summary::format_summary;
use aquifer_outlook::pipeline::Pipeline;

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(PathBuf::from("out"), None, false, false, false);
    Pipeline::validation().run(&mut ctx).unwrap();

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("aquifer-outlook v"));
    assert!(s.contains("Years: 2000-2050 (51 points), integrator=closed-form"));
    assert!(s.contains("Net change decline per decade: 2.26"));
    assert!(s.contains("Max net change: -5.40 x10^9 m^3/yr in 2000"));
    assert!(s.contains("Min net change: -16.70 x10^9 m^3/yr in 2050"));
    assert!(s.contains("Net change sign flip: none"));
    assert!(s.contains("Depletion (low, 190 x10^9 m^3): 2024"));
    assert!(s.contains("Depletion (mean, 350 x10^9 m^3): 2037"));
    assert!(s.contains("Depletion (high, 550 x10^9 m^3): 2050"));
}

#[test]
fn summary_requires_facts() {
    let ctx = Ctx::new(PathBuf::from("out"), None, false, false, false);
    assert!(format_summary(&ctx).is_err());
}
