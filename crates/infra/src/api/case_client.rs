//! Client for the `/processos` resource

use std::sync::Arc;

use async_trait::async_trait;
use jurisrem_core::CaseApi;
use jurisrem_domain::dto::{AtualizarProcessoDto, CriarProcessoDto, FiltrosProcessoDto, PaginaDto, ProcessoDto};
use jurisrem_domain::Result;
use serde::de::IgnoredAny;

use super::endpoints::processos;
use crate::http::HttpClient;

pub struct CaseApiClient {
    http: Arc<HttpClient>,
}

impl CaseApiClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CaseApi for CaseApiClient {
    async fn list(&self, filters: &FiltrosProcessoDto) -> Result<PaginaDto<ProcessoDto>> {
        Ok(self.http.get(processos::LISTAGEM, &filters.to_query_pairs()).await?)
    }

    async fn get(&self, id: &str) -> Result<ProcessoDto> {
        Ok(self.http.get(&processos::by_id(id), &[]).await?)
    }

    async fn create(&self, dto: &CriarProcessoDto) -> Result<ProcessoDto> {
        Ok(self.http.post(processos::CRIAR, dto).await?)
    }

    async fn update(&self, id: &str, dto: &AtualizarProcessoDto) -> Result<ProcessoDto> {
        Ok(self.http.put(&processos::by_id(id), dto).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete::<IgnoredAny>(&processos::by_id(id)).await?;
        Ok(())
    }
}
