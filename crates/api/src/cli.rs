//! Command-line front end over the case list store

use std::io::Write;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context as _};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use jurisrem_core::mappers::{
    case_type_label, document_type_label, format_claim_value, format_date, format_file_size,
    movement_type_label, status_label,
};
use jurisrem_core::CaseStore;
use jurisrem_domain::constants::NOT_INFORMED_LABEL;
use jurisrem_domain::{Case, CaseFilters, CaseStatus, CaseType, Config};

use crate::AppContext;

#[derive(Debug, Parser)]
#[command(name = "jurisrem", version, about = "Legal case management client", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Overrides the configured API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Overrides the configured bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List cases, newest first
    List(ListArgs),
    /// Show a case with its movements and documents
    Show(ShowArgs),
    /// Download a document attached to a case
    Download(DownloadArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long = "number")]
    pub case_number: Option<String>,

    #[arg(long)]
    pub client: Option<String>,

    /// Wire status value (ativo, suspenso, ...); repeatable
    #[arg(long = "status")]
    pub statuses: Vec<CaseStatus>,

    /// Wire case type value (civil, trabalhista, ...); repeatable
    #[arg(long = "type")]
    pub case_types: Vec<CaseType>,

    /// Created on or after (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Created on or before (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Number of pages to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Print the cases as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    fn filters(&self) -> CaseFilters {
        CaseFilters {
            title: self.title.clone(),
            case_number: self.case_number.clone(),
            client: self.client.clone(),
            statuses: self.statuses.clone(),
            case_types: self.case_types.clone(),
            from: self.from,
            to: self.to,
        }
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DownloadArgs {
    pub case_id: String,
    pub document_id: String,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.api.token = Some(token.clone());
        }
    }
}

pub async fn run(command: &Command, ctx: &AppContext, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::List(args) => list(args, ctx, out).await,
        Command::Show(args) => show(args, ctx, out).await,
        Command::Download(args) => download(args, ctx, out).await,
    }
}

async fn list(args: &ListArgs, ctx: &AppContext, out: &mut impl Write) -> anyhow::Result<()> {
    let store = match args.page_size {
        Some(per_page) => Arc::new(CaseStore::new(Arc::clone(&ctx.service), per_page)),
        None => Arc::clone(&ctx.store),
    };

    store.load_cases(Some(args.filters())).await;
    for _ in 1..args.pages {
        if !store.has_more() {
            break;
        }
        store.load_more().await;
    }

    let state = store.snapshot();
    if let Some(error) = state.error {
        bail!(error);
    }

    let cases = state.sorted_cases();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &cases)?;
        writeln!(out)?;
        return Ok(());
    }

    if !state.has_cases() {
        writeln!(out, "Nenhum processo encontrado")?;
        return Ok(());
    }

    for case in &cases {
        write_case_line(case, ctx, out)?;
    }
    writeln!(
        out,
        "Página {} de {} ({} processos)",
        state.page,
        state.total_pages.max(1),
        state.total_items
    )?;
    Ok(())
}

fn write_case_line(case: &Case, ctx: &AppContext, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{}  {}  [{}]  {}  {}  {}  {}",
        case.case_number,
        case.title,
        status_label(&case.status),
        case_type_label(&case.case_type),
        case.client,
        format_claim_value(case.claim_value_cents),
        format_date(&case.updated_at, ctx.timezone),
    )
}

async fn load_detail(store: &CaseStore, id: &str) -> anyhow::Result<Case> {
    store.load_case_detail(id).await;
    let state = store.snapshot();
    match (state.current, state.error) {
        (Some(case), _) if case.id == id => Ok(case),
        (_, Some(error)) => Err(anyhow!(error)),
        _ => Err(anyhow!("Processo {id} não encontrado")),
    }
}

async fn show(args: &ShowArgs, ctx: &AppContext, out: &mut impl Write) -> anyhow::Result<()> {
    let case = load_detail(&ctx.store, &args.id).await?;
    let tz = ctx.timezone;
    let or_not_informed = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_INFORMED_LABEL.to_string());

    writeln!(out, "{} - {}", case.case_number, case.title)?;
    writeln!(out, "Status: {}", status_label(&case.status))?;
    writeln!(out, "Área: {}", case_type_label(&case.case_type))?;
    writeln!(out, "Cliente: {}", case.client)?;
    writeln!(out, "Parte contrária: {}", or_not_informed(&case.opposing_party))?;
    writeln!(out, "Tribunal: {}", or_not_informed(&case.court))?;
    writeln!(out, "Valor da causa: {}", format_claim_value(case.claim_value_cents))?;
    writeln!(out, "Criado em: {}", format_date(&case.created_at, tz))?;
    writeln!(out, "Atualizado em: {}", format_date(&case.updated_at, tz))?;
    if !case.description.is_empty() {
        writeln!(out, "\n{}", case.description)?;
    }

    let mut movements = case.movements.clone().unwrap_or_default();
    movements.sort_by(|a, b| a.date.cmp_newest_first(&b.date));
    writeln!(out, "\nMovimentações ({})", movements.len())?;
    for movement in &movements {
        writeln!(
            out,
            "  {}  {}  {}",
            format_date(&movement.date, tz),
            movement_type_label(&movement.movement_type),
            movement.description
        )?;
    }

    let documents = case.documents.clone().unwrap_or_default();
    writeln!(out, "\nDocumentos ({})", documents.len())?;
    for document in &documents {
        writeln!(
            out,
            "  {}  {}  {}  {}",
            document.id,
            document.file_name,
            document_type_label(&document.document_type),
            format_file_size(document.size)
        )?;
    }
    Ok(())
}

async fn download(args: &DownloadArgs, ctx: &AppContext, out: &mut impl Write) -> anyhow::Result<()> {
    let case = load_detail(&ctx.store, &args.case_id).await?;
    let document = case
        .documents
        .unwrap_or_default()
        .into_iter()
        .find(|d| d.id == args.document_id)
        .ok_or_else(|| anyhow!("Documento {} não encontrado no processo {}", args.document_id, args.case_id))?;

    let path = ctx
        .service
        .download_document(&document)
        .await
        .with_context(|| format!("download of {} failed", document.file_name))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}
