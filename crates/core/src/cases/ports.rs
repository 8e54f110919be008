//! Port interfaces for the JurisREM resource APIs
//!
//! These traits define the boundaries between the case service and the
//! HTTP clients in infra. Implementations return wire DTOs and let errors
//! bubble up untouched.

use std::path::PathBuf;

use async_trait::async_trait;
use jurisrem_domain::dto::{
    AtualizarProcessoDto, CriarMovimentacaoDto, CriarProcessoDto, DocumentoDto, FiltrosProcessoDto,
    MovimentacaoDto, PaginaDto, ProcessoDto, UploadDocumentoDto,
};
use jurisrem_domain::Result;

/// Case (processo) resource
#[async_trait]
pub trait CaseApi: Send + Sync {
    /// List cases matching the filters, one page at a time
    async fn list(&self, filters: &FiltrosProcessoDto) -> Result<PaginaDto<ProcessoDto>>;

    /// Fetch a single case
    async fn get(&self, id: &str) -> Result<ProcessoDto>;

    async fn create(&self, dto: &CriarProcessoDto) -> Result<ProcessoDto>;

    async fn update(&self, id: &str, dto: &AtualizarProcessoDto) -> Result<ProcessoDto>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Movement (movimentação) resource
#[async_trait]
pub trait MovementApi: Send + Sync {
    /// All movements of a case
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<MovimentacaoDto>>;

    async fn get(&self, id: &str) -> Result<MovimentacaoDto>;

    async fn create(&self, dto: &CriarMovimentacaoDto) -> Result<MovimentacaoDto>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Document (documento) resource
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// All documents attached to a case
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<DocumentoDto>>;

    async fn get(&self, id: &str) -> Result<DocumentoDto>;

    /// Multipart upload
    async fn upload(&self, dto: &UploadDocumentoDto) -> Result<DocumentoDto>;

    /// Raw file content
    async fn download(&self, id: &str) -> Result<Vec<u8>>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// Destination for downloaded document content
///
/// Called exactly once per download. Implementations own any temporary
/// resources they create and release them before returning.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Persist the content under `file_name` and return where it ended up
    async fn save(&self, file_name: &str, content: Vec<u8>) -> Result<PathBuf>;
}
