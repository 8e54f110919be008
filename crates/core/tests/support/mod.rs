//! Shared test helpers for `jurisrem-core` integration tests.
//!
//! In-memory implementations of the resource ports. Each mock records the
//! calls it receives and can be told to fail, so tests can assert on both
//! state and network traffic.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use jurisrem_core::{CaseApi, CaseService, DocumentApi, DownloadSink, MovementApi};
use jurisrem_domain::dto::{
    AtualizarProcessoDto, CriarMovimentacaoDto, CriarProcessoDto, DocumentoDto, FiltrosProcessoDto,
    MovimentacaoDto, PaginaDto, ProcessoDto, UploadDocumentoDto,
};
use jurisrem_domain::{JurisError, Result};
use parking_lot::Mutex;
use tokio::sync::{Barrier, Notify};

pub fn processo(id: &str, updated_at: &str) -> ProcessoDto {
    ProcessoDto {
        id: id.to_string(),
        numero_processo: format!("0000{id}-00.2024.8.26.0100"),
        titulo: format!("Processo {id}"),
        descricao: String::new(),
        status: "ativo".to_string(),
        area_juridica: "civil".to_string(),
        data_criacao: "2024-01-01T00:00:00.000Z".to_string(),
        data_atualizacao: updated_at.to_string(),
        cliente: "Cliente".to_string(),
        parte_contraria: None,
        valor_causa: None,
        tribunal: None,
        movimentacoes: None,
        documentos: None,
    }
}

/// `count` cases with ids `c1..=cN`, each updated on a later day than the previous.
pub fn processos(count: usize) -> Vec<ProcessoDto> {
    (1..=count).map(|i| processo(&format!("c{i}"), &format!("2024-03-{i:02}T12:00:00.000Z"))).collect()
}

pub fn movimentacao(id: &str, case_id: &str) -> MovimentacaoDto {
    MovimentacaoDto {
        id: id.to_string(),
        processo_id: case_id.to_string(),
        area_juridica: "despacho".to_string(),
        descricao: "Despacho proferido".to_string(),
        data: "2024-03-02T10:00:00.000Z".to_string(),
        usuario: Some("advogado".to_string()),
        observacoes: None,
    }
}

pub fn documento(id: &str, case_id: &str) -> DocumentoDto {
    DocumentoDto {
        id: id.to_string(),
        processo_id: case_id.to_string(),
        nome_arquivo: format!("{id}.pdf"),
        area_juridica: "procuracao".to_string(),
        tamanho: 2048,
        mime_type: "application/pdf".to_string(),
        url: format!("/documentos/{id}/download"),
        data_upload: "2024-03-03T10:00:00.000Z".to_string(),
        descricao: None,
    }
}

/// Holds one list call open until released.
#[derive(Clone, Default)]
pub struct ListGate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

fn not_found(what: &str, id: &str) -> JurisError {
    JurisError::Api { status: 404, message: format!("{what} {id} não encontrado"), details: None }
}

/// In-memory case resource, paginating over `records`.
#[derive(Default)]
pub struct MockCaseApi {
    pub records: Mutex<Vec<ProcessoDto>>,
    pub failure: Mutex<Option<JurisError>>,
    pub calls: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<FiltrosProcessoDto>>,
    pub updates: Mutex<Vec<AtualizarProcessoDto>>,
    pub gate: Mutex<Option<ListGate>>,
}

impl MockCaseApi {
    pub fn with_records(records: Vec<ProcessoDto>) -> Self {
        Self { records: Mutex::new(records), ..Default::default() }
    }

    pub fn fail_with(&self, err: JurisError) {
        *self.failure.lock() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock() = None;
    }

    /// Hold the next `list` call after it is recorded.
    pub fn hold_next_list(&self) -> ListGate {
        let gate = ListGate::default();
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CaseApi for MockCaseApi {
    async fn list(&self, filters: &FiltrosProcessoDto) -> Result<PaginaDto<ProcessoDto>> {
        let page = filters.pagina.unwrap_or(1);
        let per_page = filters.itens_por_pagina.unwrap_or(10);
        self.queries.lock().push(filters.clone());
        self.record(format!("list:{page}"))?;

        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        let records = self.records.lock();
        let total = records.len() as u64;
        let total_pages = records.len().div_ceil(per_page as usize) as u32;
        let data = records
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(PaginaDto { data, total, pagina: page, itens_por_pagina: per_page, total_paginas: total_pages })
    }

    async fn get(&self, id: &str) -> Result<ProcessoDto> {
        self.record(format!("get:{id}"))?;
        self.records.lock().iter().find(|p| p.id == id).cloned().ok_or_else(|| not_found("Processo", id))
    }

    async fn create(&self, dto: &CriarProcessoDto) -> Result<ProcessoDto> {
        self.record("create".to_string())?;
        let mut records = self.records.lock();
        let created = ProcessoDto {
            id: format!("new-{}", records.len() + 1),
            numero_processo: dto.numero_processo.clone(),
            titulo: dto.titulo.clone(),
            descricao: dto.descricao.clone(),
            status: "rascunho".to_string(),
            area_juridica: dto.area_juridica.clone(),
            data_criacao: "2024-04-01T08:00:00.000Z".to_string(),
            data_atualizacao: "2024-04-01T08:00:00.000Z".to_string(),
            cliente: dto.cliente.clone(),
            parte_contraria: dto.parte_contraria.clone(),
            valor_causa: dto.valor_causa,
            tribunal: dto.tribunal.clone(),
            movimentacoes: None,
            documentos: None,
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, dto: &AtualizarProcessoDto) -> Result<ProcessoDto> {
        self.record(format!("update:{id}"))?;
        self.updates.lock().push(dto.clone());

        let mut records = self.records.lock();
        let record = records.iter_mut().find(|p| p.id == id).ok_or_else(|| not_found("Processo", id))?;
        if let Some(titulo) = &dto.titulo {
            record.titulo.clone_from(titulo);
        }
        if let Some(descricao) = &dto.descricao {
            record.descricao.clone_from(descricao);
        }
        if let Some(status) = &dto.status {
            record.status.clone_from(status);
        }
        dto.parte_contraria.clone().apply_to(&mut record.parte_contraria);
        dto.valor_causa.clone().apply_to(&mut record.valor_causa);
        dto.tribunal.clone().apply_to(&mut record.tribunal);
        record.data_atualizacao = "2024-04-02T08:00:00.000Z".to_string();

        let mut echo = record.clone();
        echo.movimentacoes = None;
        echo.documentos = None;
        Ok(echo)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(format!("delete:{id}"))?;
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            return Err(not_found("Processo", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockMovementApi {
    pub records: Mutex<Vec<MovimentacaoDto>>,
    pub failure: Mutex<Option<JurisError>>,
    pub calls: Mutex<Vec<String>>,
    /// Awaited by `list_by_case` when set.
    pub barrier: Mutex<Option<Arc<Barrier>>>,
}

impl MockMovementApi {
    pub fn with_records(records: Vec<MovimentacaoDto>) -> Self {
        Self { records: Mutex::new(records), ..Default::default() }
    }

    pub fn fail_with(&self, err: JurisError) {
        *self.failure.lock() = Some(err);
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MovementApi for MockMovementApi {
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<MovimentacaoDto>> {
        let barrier = self.barrier.lock().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }
        self.record(format!("list:{case_id}"))?;
        Ok(self.records.lock().iter().filter(|m| m.processo_id == case_id).cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<MovimentacaoDto> {
        self.record(format!("get:{id}"))?;
        self.records.lock().iter().find(|m| m.id == id).cloned().ok_or_else(|| not_found("Movimentação", id))
    }

    async fn create(&self, dto: &CriarMovimentacaoDto) -> Result<MovimentacaoDto> {
        self.record("create".to_string())?;
        let mut records = self.records.lock();
        let created = MovimentacaoDto {
            id: format!("m-{}", records.len() + 1),
            processo_id: dto.processo_id.clone(),
            area_juridica: dto.area_juridica.clone(),
            descricao: dto.descricao.clone(),
            data: "2024-04-01T08:00:00.000Z".to_string(),
            usuario: None,
            observacoes: dto.observacoes.clone(),
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(format!("delete:{id}"))?;
        self.records.lock().retain(|m| m.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDocumentApi {
    pub records: Mutex<Vec<DocumentoDto>>,
    pub failure: Mutex<Option<JurisError>>,
    pub calls: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<UploadDocumentoDto>>,
    pub content: Mutex<Vec<u8>>,
    /// Awaited by `list_by_case` when set.
    pub barrier: Mutex<Option<Arc<Barrier>>>,
}

impl MockDocumentApi {
    pub fn with_records(records: Vec<DocumentoDto>) -> Self {
        Self { records: Mutex::new(records), ..Default::default() }
    }

    pub fn fail_with(&self, err: JurisError) {
        *self.failure.lock() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentApi for MockDocumentApi {
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<DocumentoDto>> {
        let barrier = self.barrier.lock().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }
        self.record(format!("list:{case_id}"))?;
        Ok(self.records.lock().iter().filter(|d| d.processo_id == case_id).cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<DocumentoDto> {
        self.record(format!("get:{id}"))?;
        self.records.lock().iter().find(|d| d.id == id).cloned().ok_or_else(|| not_found("Documento", id))
    }

    async fn upload(&self, dto: &UploadDocumentoDto) -> Result<DocumentoDto> {
        self.record("upload".to_string())?;
        self.uploads.lock().push(dto.clone());
        let mut records = self.records.lock();
        let created = DocumentoDto {
            id: format!("d-{}", records.len() + 1),
            processo_id: dto.processo_id.clone(),
            nome_arquivo: dto.arquivo.file_name.clone(),
            area_juridica: dto.area_juridica.clone(),
            tamanho: dto.arquivo.size(),
            mime_type: dto.arquivo.mime_type.clone(),
            url: "/documentos/novo/download".to_string(),
            data_upload: "2024-04-01T08:00:00.000Z".to_string(),
            descricao: dto.descricao.clone(),
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn download(&self, id: &str) -> Result<Vec<u8>> {
        self.record(format!("download:{id}"))?;
        Ok(self.content.lock().clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(format!("delete:{id}"))?;
        self.records.lock().retain(|d| d.id != id);
        Ok(())
    }
}

/// Keeps saved files in memory
#[derive(Default)]
pub struct MemoryDownloadSink {
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl DownloadSink for MemoryDownloadSink {
    async fn save(&self, file_name: &str, content: Vec<u8>) -> Result<PathBuf> {
        self.saved.lock().push((file_name.to_string(), content));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}

/// Mocks wired into a service, kept around for assertions.
pub struct Harness {
    pub cases: Arc<MockCaseApi>,
    pub movements: Arc<MockMovementApi>,
    pub documents: Arc<MockDocumentApi>,
    pub downloads: Arc<MemoryDownloadSink>,
    pub service: Arc<CaseService>,
}

impl Harness {
    pub fn new(cases: MockCaseApi, movements: MockMovementApi, documents: MockDocumentApi) -> Self {
        let cases = Arc::new(cases);
        let movements = Arc::new(movements);
        let documents = Arc::new(documents);
        let downloads = Arc::new(MemoryDownloadSink::default());
        let service = Arc::new(CaseService::new(
            cases.clone(),
            movements.clone(),
            documents.clone(),
            downloads.clone(),
        ));
        Self { cases, movements, documents, downloads, service }
    }

    pub fn with_cases(records: Vec<ProcessoDto>) -> Self {
        Self::new(MockCaseApi::with_records(records), MockMovementApi::default(), MockDocumentApi::default())
    }
}

pub fn server_error() -> JurisError {
    JurisError::Api { status: 500, message: "Erro 500: Internal Server Error".to_string(), details: None }
}
