use anyhow::Result;

use crate::ctx::Ctx;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let cfg = ctx.config()?;
    let series = ctx.series()?;
    let models = ctx.models()?;
    let facts = ctx.facts()?;

    let mut out = String::new();
    out.push_str(&format!("aquifer-outlook v{}\n", version));
    out.push_str(&format!(
        "Years: {}-{} ({} points), integrator={}\n",
        series.first(),
        series.last(),
        series.len(),
        cfg.integrator.as_str()
    ));
    out.push_str(&format!(
        "Net change model: {:+.4} * year {:+.4}\n",
        models.net_change.slope, models.net_change.intercept
    ));
    out.push_str(&format!(
        "Net change decline per decade: {:.2} x10^9 m^3/yr\n",
        facts.decline_per_decade
    ));
    out.push_str(&format!(
        "Max net change: {:+.2} x10^9 m^3/yr in {}\n",
        facts.max_change.value, facts.max_change.year
    ));
    out.push_str(&format!(
        "Min net change: {:+.2} x10^9 m^3/yr in {}\n",
        facts.min_change.value, facts.min_change.year
    ));
    match facts.sign_change_year {
        Some(year) => out.push_str(&format!("Net change sign flip: {}\n", year)),
        None => out.push_str("Net change sign flip: none\n"),
    }
    for s in &ctx.scenarios {
        out.push_str(&format!(
            "Depletion ({}, {:.0} x10^9 m^3): {}\n",
            s.bound.label.as_str(),
            s.bound.initial_storage,
            s.depletion
        ));
    }

    Ok(out)
}
