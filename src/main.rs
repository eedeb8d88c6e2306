//! rewrap: wrap a call in a wrapper call's argument, or hoist it back out.
#![allow(clippy::multiple_crate_versions)]

use clap::{Args, Parser, Subcommand};
use rewrap::config::Config;
use rewrap::document::{Buffer, Document};
use rewrap::edit_plan::{Edit, EditPlan};
use rewrap::refactor::{Applied, Refactorer};
use rewrap::span::{Position, TextSpan};
use rewrap::wrap::WrapKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rewrap")]
#[command(about = "Wrap and unwrap call arguments in Python sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Wrap the call at the cursor as the `content` argument of a wrapper call
    Content(Target),
    /// Wrap the selected calls as the `controls` list of a wrapper call
    Controls(Target),
    /// Replace the wrapper call at the cursor with its content
    Unwrap(Target),
    /// List the refactors available at the cursor
    Actions(Target),
    /// Report how many calls the selection holds and whether it parses
    Classify(Target),
    /// Apply an edit plan produced with --plan
    ApplyPlan {
        #[arg(value_name = "PLAN")]
        plan: PathBuf,
    },
}

#[derive(Args)]
struct Target {
    /// Python source file to refactor
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Cursor position, or selection start, as LINE:COL (1-indexed, byte columns)
    #[arg(long, value_name = "LINE:COL")]
    at: Position,

    /// Selection end as LINE:COL
    #[arg(long, value_name = "LINE:COL")]
    to: Option<Position>,

    /// Name of the wrapper call to insert
    #[arg(long)]
    wrapper: Option<String>,

    /// Indent with tabs
    #[arg(long, conflicts_with = "tab_size")]
    tabs: bool,

    /// Indent with this many spaces
    #[arg(long, value_name = "N")]
    tab_size: Option<usize>,

    /// Rewrite the file in place instead of printing the result
    #[arg(long, short = 'w', conflicts_with = "plan")]
    write: bool,

    /// Print the edit as a JSON edit plan instead of applying it
    #[arg(long)]
    plan: bool,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = Config::load();

    match cli.command {
        Command::Content(target) => refactor(&target, &mut cfg, Some(WrapKind::Content)),
        Command::Controls(target) => refactor(&target, &mut cfg, Some(WrapKind::Controls)),
        Command::Unwrap(target) => refactor(&target, &mut cfg, None),
        Command::Actions(target) => {
            let (mut refactorer, buffer) = open(&target, &mut cfg)?;
            for action in refactorer.actions(&buffer) {
                println!("{}", action.title());
            }
            Ok(())
        }
        Command::Classify(target) => {
            let (mut refactorer, buffer) = open(&target, &mut cfg)?;
            let selected = buffer.text_in(buffer.selection()).unwrap_or_default();
            let result = refactorer.classify(selected);
            let json = serde_json::to_string_pretty(&result).map_err(io::Error::other)?;
            println!("{json}");
            Ok(())
        }
        Command::ApplyPlan { plan } => {
            let file_content = fs::read_to_string(&plan)?;
            let plan: EditPlan = serde_json::from_str(&file_content)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            plan.apply()
        }
    }
}

/// Reads the target file and builds a refactorer with the command line overriding rewrap.toml.
fn open(target: &Target, cfg: &mut Config) -> io::Result<(Refactorer, Buffer)> {
    // Override config with command line args
    if let Some(wrapper) = &target.wrapper {
        cfg.wrapper.clone_from(wrapper);
    }
    if target.tabs {
        cfg.insert_spaces = false;
    }
    if let Some(tab_size) = target.tab_size {
        cfg.insert_spaces = true;
        cfg.tab_size = tab_size;
    }

    let text = fs::read_to_string(&target.file)?;
    let selection = selection(&text, target.at, target.to)?;
    let buffer = Buffer::new(text, cfg.indentation()).with_selection(selection);
    let refactorer = Refactorer::python(cfg.wrapper.clone()).map_err(io::Error::other)?;
    Ok((refactorer, buffer))
}

fn selection(text: &str, at: Position, to: Option<Position>) -> io::Result<TextSpan> {
    let offset = |position: Position| {
        position.to_offset(text).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "position {}:{} is outside the file",
                    position.line, position.column
                ),
            )
        })
    };
    let start = offset(at)?;
    Ok(match to {
        Some(end) => TextSpan::new(start, offset(end)?),
        None => TextSpan::caret(start),
    })
}

/// Runs a wrap (`Some(kind)`) or an unwrap (`None`) and emits the result.
fn refactor(target: &Target, cfg: &mut Config, kind: Option<WrapKind>) -> io::Result<()> {
    let (mut refactorer, mut buffer) = open(target, cfg)?;
    let result = match kind {
        Some(kind) => refactorer.wrap(&mut buffer, kind),
        None => refactorer.unwrap(&mut buffer),
    };

    let applied = match result {
        Ok(applied) => applied,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    if target.plan {
        let action = kind.map_or_else(|| "unwrap".to_string(), |kind| format!("wrap {kind}"));
        let plan = plan_for(&target.file, action, &applied);
        let json = serde_json::to_string_pretty(&plan).map_err(io::Error::other)?;
        println!("{json}");
    } else if target.write {
        fs::write(&target.file, buffer.text())?;
    } else {
        print!("{}", buffer.into_text());
    }

    Ok(())
}

fn plan_for(file: &Path, action: String, applied: &Applied) -> EditPlan {
    EditPlan {
        edits: vec![Edit {
            file_name: file.to_string_lossy().to_string(),
            action,
            byte_start: applied.span.start,
            byte_end: applied.span.end,
            replacement: applied.replacement.clone(),
            selection: applied.selection,
        }],
    }
}
