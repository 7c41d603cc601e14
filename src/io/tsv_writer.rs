use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ctx::Ctx;

pub const HEADER: &str = "year\tinflow\toutflow\tnet_change\tcumulative_change\tstorage_low\tstorage_mean\tstorage_high";

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let table = ctx.table()?;
    let series = ctx.series()?;
    if table.len() != series.len() {
        bail!(
            "table length mismatch: {} != {}",
            table.len(),
            series.len()
        );
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", HEADER)?;
    for r in table.rows() {
        writeln!(
            w,
            "{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            r.year,
            r.ins,
            r.outs,
            r.change,
            r.cumulative_loss,
            r.storage_low,
            r.storage_mean,
            r.storage_high
        )?;
    }
    w.flush()?;
    Ok(())
}
