use anyhow::Result;
use tracing::info;

use crate::config;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage1Config;

impl Stage1Config {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Config {
    fn name(&self) -> &'static str {
        "stage1_config"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let mut cfg = config::load_effective(ctx.config_path.as_deref())?;
        if let Some(method) = ctx.integrator_override {
            cfg.integrator = method;
        }
        cfg.validate()?;

        info!(
            source = %ctx
                .config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in v1".to_string()),
            base_year = cfg.base_year,
            final_year = cfg.final_year,
            integrator = cfg.integrator.as_str(),
            "config_loaded"
        );
        ctx.config = Some(cfg);
        Ok(())
    }
}
