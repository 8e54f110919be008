//! Client for the `/documentos` resource

use std::sync::Arc;

use async_trait::async_trait;
use jurisrem_core::DocumentApi;
use jurisrem_domain::dto::{DocumentoDto, UploadDocumentoDto};
use jurisrem_domain::Result;
use reqwest::multipart::{Form, Part};
use serde::de::IgnoredAny;
use tracing::debug;

use super::endpoints::{documentos, processos};
use super::errors::ApiError;
use crate::http::HttpClient;

pub struct DocumentApiClient {
    http: Arc<HttpClient>,
}

impl DocumentApiClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

/// Multipart body: `arquivo`, `processoId`, `tipo` and optionally `descricao`.
fn upload_form(dto: &UploadDocumentoDto) -> std::result::Result<Form, ApiError> {
    let file = Part::bytes(dto.arquivo.content.clone())
        .file_name(dto.arquivo.file_name.clone())
        .mime_str(&dto.arquivo.mime_type)
        .map_err(|e| ApiError::Request(format!("Erro na requisição: {e}")))?;

    let mut form = Form::new()
        .part("arquivo", file)
        .text("processoId", dto.processo_id.clone())
        .text("tipo", dto.area_juridica.clone());

    if let Some(descricao) = &dto.descricao {
        form = form.text("descricao", descricao.clone());
    }

    Ok(form)
}

#[async_trait]
impl DocumentApi for DocumentApiClient {
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<DocumentoDto>> {
        Ok(self.http.get(&processos::documentos(case_id), &[]).await?)
    }

    async fn get(&self, id: &str) -> Result<DocumentoDto> {
        Ok(self.http.get(&documentos::by_id(id), &[]).await?)
    }

    async fn upload(&self, dto: &UploadDocumentoDto) -> Result<DocumentoDto> {
        debug!(
            processo_id = %dto.processo_id,
            file_name = %dto.arquivo.file_name,
            size = dto.arquivo.size(),
            "uploading document"
        );
        let form = upload_form(dto)?;
        Ok(self.http.upload(documentos::UPLOAD, form).await?)
    }

    async fn download(&self, id: &str) -> Result<Vec<u8>> {
        Ok(self.http.download(&documentos::download(id)).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete::<IgnoredAny>(&documentos::by_id(id)).await?;
        Ok(())
    }
}
