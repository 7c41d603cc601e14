use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::projection::facts::compute_facts;

pub struct Stage6Report;

impl Stage6Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Report {
    fn name(&self) -> &'static str {
        "stage6_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let facts = compute_facts(ctx.models()?, ctx.series()?, &ctx.net_change, &ctx.scenarios)?;
        info!(
            decline_per_decade = facts.decline_per_decade,
            max_year = facts.max_change.year,
            min_year = facts.min_change.year,
            "facts_ready"
        );
        ctx.facts = Some(facts);
        Ok(())
    }
}
