//! Conversions between wire DTOs and domain entities
//!
//! Reading is total: unknown enum strings and malformed dates are kept in
//! their `Unrecognized` / `Invalid` forms instead of failing.

use jurisrem_domain::dto::{
    AtualizarProcessoDto, CriarMovimentacaoDto, CriarProcessoDto, DocumentoDto, FiltrosProcessoDto,
    MovimentacaoDto, PaginaDto, ProcessoDto,
};
use jurisrem_domain::{
    Case, CaseFilters, CaseStatus, CaseType, CaseUpdate, Document, DocumentType, Movement,
    MovementType, NewCase, NewMovement, Page, PageRequest, Timestamp,
};

pub fn case_from_dto(dto: ProcessoDto) -> Case {
    Case {
        id: dto.id,
        case_number: dto.numero_processo,
        title: dto.titulo,
        description: dto.descricao,
        status: CaseStatus::from_wire(&dto.status),
        case_type: CaseType::from_wire(&dto.area_juridica),
        created_at: Timestamp::parse(&dto.data_criacao),
        updated_at: Timestamp::parse(&dto.data_atualizacao),
        client: dto.cliente,
        opposing_party: dto.parte_contraria,
        claim_value_cents: dto.valor_causa,
        court: dto.tribunal,
        movements: dto.movimentacoes.map(|items| items.into_iter().map(movement_from_dto).collect()),
        documents: dto.documentos.map(|items| items.into_iter().map(document_from_dto).collect()),
    }
}

/// Inverse of [`case_from_dto`]
pub fn case_to_dto(case: &Case) -> ProcessoDto {
    ProcessoDto {
        id: case.id.clone(),
        numero_processo: case.case_number.clone(),
        titulo: case.title.clone(),
        descricao: case.description.clone(),
        status: case.status.as_str().to_string(),
        area_juridica: case.case_type.as_str().to_string(),
        data_criacao: case.created_at.to_wire(),
        data_atualizacao: case.updated_at.to_wire(),
        cliente: case.client.clone(),
        parte_contraria: case.opposing_party.clone(),
        valor_causa: case.claim_value_cents,
        tribunal: case.court.clone(),
        movimentacoes: case.movements.as_ref().map(|items| items.iter().map(movement_to_dto).collect()),
        documentos: case.documents.as_ref().map(|items| items.iter().map(document_to_dto).collect()),
    }
}

pub fn case_to_create_dto(input: &NewCase) -> CriarProcessoDto {
    CriarProcessoDto {
        numero_processo: input.case_number.clone(),
        titulo: input.title.clone(),
        descricao: input.description.clone(),
        area_juridica: input.case_type.as_str().to_string(),
        cliente: input.client.clone(),
        parte_contraria: input.opposing_party.clone(),
        valor_causa: input.claim_value_cents,
        tribunal: input.court.clone(),
    }
}

pub fn case_to_update_dto(update: &CaseUpdate) -> AtualizarProcessoDto {
    AtualizarProcessoDto {
        titulo: update.title.clone(),
        descricao: update.description.clone(),
        status: update.status.as_ref().map(|s| s.as_str().to_string()),
        parte_contraria: update.opposing_party.clone(),
        valor_causa: update.claim_value_cents.clone(),
        tribunal: update.court.clone(),
    }
}

pub fn movement_from_dto(dto: MovimentacaoDto) -> Movement {
    Movement {
        id: dto.id,
        case_id: dto.processo_id,
        movement_type: MovementType::from_wire(&dto.area_juridica),
        description: dto.descricao,
        date: Timestamp::parse(&dto.data),
        user: dto.usuario,
        notes: dto.observacoes,
    }
}

fn movement_to_dto(movement: &Movement) -> MovimentacaoDto {
    MovimentacaoDto {
        id: movement.id.clone(),
        processo_id: movement.case_id.clone(),
        area_juridica: movement.movement_type.as_str().to_string(),
        descricao: movement.description.clone(),
        data: movement.date.to_wire(),
        usuario: movement.user.clone(),
        observacoes: movement.notes.clone(),
    }
}

pub fn movement_to_create_dto(input: &NewMovement) -> CriarMovimentacaoDto {
    CriarMovimentacaoDto {
        processo_id: input.case_id.clone(),
        area_juridica: input.movement_type.as_str().to_string(),
        descricao: input.description.clone(),
        observacoes: input.notes.clone(),
    }
}

pub fn document_from_dto(dto: DocumentoDto) -> Document {
    Document {
        id: dto.id,
        case_id: dto.processo_id,
        file_name: dto.nome_arquivo,
        document_type: DocumentType::from_wire(&dto.area_juridica),
        size: dto.tamanho,
        mime_type: dto.mime_type,
        url: dto.url,
        uploaded_at: Timestamp::parse(&dto.data_upload),
        description: dto.descricao,
    }
}

fn document_to_dto(document: &Document) -> DocumentoDto {
    DocumentoDto {
        id: document.id.clone(),
        processo_id: document.case_id.clone(),
        nome_arquivo: document.file_name.clone(),
        area_juridica: document.document_type.as_str().to_string(),
        tamanho: document.size,
        mime_type: document.mime_type.clone(),
        url: document.url.clone(),
        data_upload: document.uploaded_at.to_wire(),
        descricao: document.description.clone(),
    }
}

/// Build list query parameters. Blank text filters are dropped.
pub fn filters_to_dto(filters: &CaseFilters, page: Option<PageRequest>) -> FiltrosProcessoDto {
    let text = |value: &Option<String>| {
        value.as_ref().map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
    };

    FiltrosProcessoDto {
        titulo: text(&filters.title),
        numero_processo: text(&filters.case_number),
        cliente: text(&filters.client),
        status: filters.statuses.iter().map(|s| s.as_str().to_string()).collect(),
        area_juridica: filters.case_types.iter().map(|t| t.as_str().to_string()).collect(),
        data_inicio: filters.from.map(|d| d.format("%Y-%m-%d").to_string()),
        data_fim: filters.to.map(|d| d.format("%Y-%m-%d").to_string()),
        pagina: page.map(|p| p.page),
        itens_por_pagina: page.map(|p| p.per_page),
    }
}

pub fn page_from_dto<T, U>(dto: PaginaDto<T>, map: impl FnMut(T) -> U) -> Page<U> {
    Page {
        items: dto.data.into_iter().map(map).collect(),
        total: dto.total,
        page: dto.pagina,
        per_page: dto.itens_por_pagina,
        total_pages: dto.total_paginas,
    }
}
