use anyhow::Context;
use clap::Parser;
use mfg::domain::ModelDraft;
use mfg::kernel::config::load_config;
use mfg_inspector::args::{Cli, Command};
use mfg_inspector::{Inspector, InspectorSettings, References, read_json};
use mfg_logger::Logger;
use serde::Serialize;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings: InspectorSettings = match &cli.config {
        Some(path) => load_config(Some(path)).context("Critical: Configuration is malformed")?,
        None => InspectorSettings::default(),
    };
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init_with(&settings.logging)?;

    let inspector = Inspector::new(&settings)?;

    match cli.command {
        Command::Form { draft } => {
            let draft = draft.as_deref().map(read_json::<ModelDraft>).transpose()?;
            emit(&inspector.form(draft.as_ref()), cli.pretty)
        },
        Command::Validate { form, references } => {
            let book = references
                .as_deref()
                .map(read_json::<References>)
                .transpose()?
                .map(Into::into);
            let outcome = inspector.validate(read_json(&form)?, book.as_ref())?;
            emit(&outcome, cli.pretty)?;
            if !outcome.accepted {
                let blocking = outcome.report.errors().count();
                anyhow::bail!("Model draft rejected: {blocking} blocking violation(s)");
            }
            Ok(())
        },
        Command::Resolve { model, variant } => {
            let resolved = inspector.resolve(&read_json(&model)?, variant.as_deref())?;
            emit(&resolved, cli.pretty)
        },
        Command::Estimate { model, prices } => {
            let costs = inspector.estimate(read_json(&model)?, &read_json(&prices)?);
            emit(&costs, cli.pretty)
        },
    }
}

fn emit(value: &impl Serialize, pretty: bool) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
