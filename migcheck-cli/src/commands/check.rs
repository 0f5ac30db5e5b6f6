//! Check command - validate migrations and report the verdict

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use migcheck_core::{
    run_check, CheckReport, Execution, MigrationFile, RunConfiguration, ShellCommandRunner,
};

use crate::output;

pub fn run(root: &Path, json: bool, verbose: bool) -> Result<ExitCode> {
    let config = RunConfiguration::from_env().with_root(root);
    config.validate().context("Invalid configuration")?;

    // In JSON mode stdout carries only the report
    let runner = ShellCommandRunner::new(root).with_stdout_to_stderr(json);

    if !json {
        output::header(&format!("Rails {} file checker", config.migrations_dir.display()));
        if !config.skip_migration_execution {
            output::header(&format!("Rails {} file checker", config.schema_path.display()));
            println!("Running: {}", config.migration_command);
        }
    }

    let report = run_check(&config, &runner)
        .with_context(|| format!("Migration check failed in {}", root.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, verbose);
    }

    Ok(ExitCode::from(report.exit_code() as u8))
}

fn print_report(report: &CheckReport, verbose: bool) {
    if verbose && !report.migrations.is_empty() {
        println!("{}", migrations_table(&report.migrations));
    }

    match &report.execution {
        Execution::Finished(status) if !status.success => {
            let code = status
                .code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            output::warning(&format!("Migration command exited with {}", code));
        }
        Execution::NotStarted { reason } => output::warning(reason),
        _ => {}
    }

    for notice in &report.notices {
        output::info(notice);
    }

    if report.is_success() {
        output::success("All migrations look good.");
    } else {
        for error in &report.errors {
            output::problem(&error.message);
        }
    }
}

fn migrations_table(migrations: &[MigrationFile]) -> comfy_table::Table {
    let mut table = output::create_table();
    table.set_header(vec!["Migration", "Timestamp", "Name"]);

    for migration in migrations {
        let timestamp = match &migration.timestamp_prefix {
            Some(ts) => Cell::new(ts),
            None => Cell::new("invalid").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&migration.file_name),
            timestamp,
            Cell::new(migration.descriptive_slug.as_deref().unwrap_or("-")),
        ]);
    }

    table
}
