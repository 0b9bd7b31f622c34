use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info_span;

use fof_cli::report::ValidationReport;
use fof_cli::scaffold::{init_project, project_file_path};
use fof_model::{Coach, FileRole, LeagueInfo, Player, Record, Team};
use fof_persistence::{AppState, project_dir};

use crate::cli::{ColumnsArgs, InitArgs, RecordKindArg, ReportFormatArg, ValidateArgs};

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Returns whether every record passed.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let span = info_span!("validate", project = %args.project.display());
    let _guard = span.enter();

    let state = AppState::new();
    state
        .load_project(&args.project)
        .with_context(|| format!("open project {}", args.project.display()))?;
    let project = state.project().context("project missing after load")?;

    let league_info = match project.resolve_csv_path(FileRole::Info, project_dir(&args.project)) {
        Some(path) => fof_ingest::load_records::<LeagueInfo>(&path)
            .with_context(|| format!("read league info {}", path.display()))?,
        None => Vec::new(),
    };

    let mut report = ValidationReport::new(project.league_name);
    report.add_players(&state.players());
    report.add_coaches(&state.coaches());
    report.add_teams(&state.teams());
    report.add_league_info(&league_info);

    match args.format {
        ReportFormatArg::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serialize report")?
            );
        }
        ReportFormatArg::Table => print_report(&report),
    }
    Ok(report.is_valid())
}

fn print_report(report: &ValidationReport) {
    println!(
        "{}: {} players, {} coaches, {} teams",
        report.league, report.players, report.coaches, report.teams
    );
    if report.is_valid() {
        println!("No problems found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Record", "Row", "Name", "Field", "Problem"]);
    apply_table_style(&mut table);
    for violation in &report.violations {
        table.add_row(vec![
            violation.record.to_string(),
            violation.row.to_string(),
            violation.name.clone(),
            violation.field.clone(),
            violation.message.clone(),
        ]);
    }
    println!("{table}");
    println!("{} problem(s) found.", report.violations.len());
}

pub fn run_init(args: &InitArgs) -> Result<()> {
    let target = project_file_path(&args.dir, &args.identifier);
    if target.exists() {
        bail!("{} already exists", target.display());
    }
    let path = init_project(&args.dir, &args.name, &args.identifier, args.base_year)
        .with_context(|| format!("create project in {}", args.dir.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) {
    let table = match args.kind {
        RecordKindArg::Player => schema_table::<Player>(),
        RecordKindArg::Coach => schema_table::<Coach>(),
        RecordKindArg::Team => schema_table::<Team>(),
        RecordKindArg::LeagueInfo => schema_table::<LeagueInfo>(),
    };
    println!("{table}");
}

fn schema_table<R: Record>() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Field", "Type"]);
    apply_table_style(&mut table);
    for (index, field) in R::schema().iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            field.column.to_string(),
            field.name.to_string(),
            field.kind.to_string(),
        ]);
    }
    table
}
