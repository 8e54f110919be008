//! Presentation formatters (pt-BR)

use chrono_tz::Tz;
use jurisrem_domain::constants::{FALLBACK_STATUS_COLOR, INVALID_DATE_LABEL, NOT_INFORMED_LABEL};
use jurisrem_domain::{CaseStatus, CaseType, DocumentType, JurisError, MovementType, Result, Timestamp};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Claim value in cents as BRL, e.g. `R$ 1.234,56` (non-breaking space).
///
/// Absent and zero values render as "Não informado".
pub fn format_claim_value(cents: Option<i64>) -> String {
    let cents = match cents {
        Some(c) if c != 0 => c,
        _ => return NOT_INFORMED_LABEL.to_string(),
    };

    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}R$\u{a0}{},{:02}", group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Human-readable byte size, two decimals at most.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    let mut rounded = (scaled * 100.0).round() / 100.0;
    if rounded >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        rounded = ((rounded / 1024.0) * 100.0).round() / 100.0;
        unit += 1;
    }
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// `dd/mm/yyyy HH:MM` in the given zone.
pub fn format_date(timestamp: &Timestamp, tz: Tz) -> String {
    match timestamp.as_datetime() {
        Some(dt) => dt.with_timezone(&tz).format("%d/%m/%Y %H:%M").to_string(),
        None => INVALID_DATE_LABEL.to_string(),
    }
}

/// Resolve an IANA zone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_| JurisError::Config(format!("Unknown time zone: {name}")))
}

/// Badge colour for a status
pub fn status_color(status: &CaseStatus) -> &'static str {
    match status {
        CaseStatus::Draft => "secondary",
        CaseStatus::Active => "primary",
        CaseStatus::Awaiting => "warning",
        CaseStatus::Suspended => "info",
        CaseStatus::Archived => "dark",
        CaseStatus::Finalized => "success",
        CaseStatus::Unrecognized(_) => FALLBACK_STATUS_COLOR,
    }
}

pub fn status_label(status: &CaseStatus) -> &str {
    match status {
        CaseStatus::Draft => "Rascunho",
        CaseStatus::Active => "Ativo",
        CaseStatus::Awaiting => "Aguardando",
        CaseStatus::Suspended => "Suspenso",
        CaseStatus::Archived => "Arquivado",
        CaseStatus::Finalized => "Finalizado",
        CaseStatus::Unrecognized(raw) => raw,
    }
}

pub fn case_type_label(case_type: &CaseType) -> &str {
    match case_type {
        CaseType::Civil => "Civil",
        CaseType::Criminal => "Criminal",
        CaseType::Labor => "Trabalhista",
        CaseType::Tax => "Tributário",
        CaseType::Administrative => "Administrativo",
        CaseType::Family => "Família",
        CaseType::Corporate => "Empresarial",
        CaseType::Unrecognized(raw) => raw,
    }
}

pub fn movement_type_label(movement_type: &MovementType) -> &str {
    match movement_type {
        MovementType::Petition => "Petição",
        MovementType::Hearing => "Audiência",
        MovementType::Decision => "Decisão",
        MovementType::Appeal => "Recurso",
        MovementType::Order => "Despacho",
        MovementType::Ruling => "Sentença",
        MovementType::Citation => "Citação",
        MovementType::Notice => "Intimação",
        MovementType::Other => "Outros",
        MovementType::Unrecognized(raw) => raw,
    }
}

pub fn document_type_label(document_type: &DocumentType) -> &str {
    match document_type {
        DocumentType::InitialPetition => "Petição inicial",
        DocumentType::Answer => "Contestação",
        DocumentType::Evidence => "Prova",
        DocumentType::PowerOfAttorney => "Procuração",
        DocumentType::Contract => "Contrato",
        DocumentType::Certificate => "Certidão",
        DocumentType::Report => "Laudo",
        DocumentType::Minutes => "Ata",
        DocumentType::Other => "Outros",
        DocumentType::Unrecognized(raw) => raw,
    }
}
