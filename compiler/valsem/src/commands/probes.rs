//! `valsem probes`: run the probe catalog and render verdicts.

use std::fmt::Write as _;

use valsem_intern::InternPool;

use crate::probes::{ProbeReport, PROBES};
use crate::{CliError, ProbeConfig};

/// Run every probe whose name matches the configured filter.
pub fn run_probes(config: &ProbeConfig, pool: &InternPool) -> Result<Vec<ProbeReport>, CliError> {
    let selected: Vec<_> = PROBES
        .iter()
        .filter(|probe| match config.filter.as_deref() {
            Some(filter) => probe.name.contains(filter),
            None => true,
        })
        .collect();

    if selected.is_empty() {
        return Err(CliError::UnknownProbe {
            name: config.filter.clone().unwrap_or_default(),
        });
    }

    selected
        .into_iter()
        .map(|probe| {
            tracing::debug!(probe = probe.name, "running probe");
            (probe.run)(pool)
        })
        .collect()
}

pub fn render_reports(reports: &[ProbeReport], verbose: bool) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== {}", report.name);
        if verbose {
            let _ = writeln!(out, "   {}", report.summary);
        }
        for check in &report.checks {
            let _ = writeln!(out, "{}: {}", check.label, check.outcome);
        }
    }
    out
}
