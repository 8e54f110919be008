//! Client for the `/movimentacoes` resource

use std::sync::Arc;

use async_trait::async_trait;
use jurisrem_core::MovementApi;
use jurisrem_domain::dto::{CriarMovimentacaoDto, MovimentacaoDto};
use jurisrem_domain::Result;
use serde::de::IgnoredAny;

use super::endpoints::{movimentacoes, processos};
use crate::http::HttpClient;

pub struct MovementApiClient {
    http: Arc<HttpClient>,
}

impl MovementApiClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Replace a movement. Not part of the service surface.
    pub async fn update(&self, id: &str, dto: &CriarMovimentacaoDto) -> Result<MovimentacaoDto> {
        Ok(self.http.put(&movimentacoes::by_id(id), dto).await?)
    }
}

#[async_trait]
impl MovementApi for MovementApiClient {
    async fn list_by_case(&self, case_id: &str) -> Result<Vec<MovimentacaoDto>> {
        Ok(self.http.get(&processos::movimentacoes(case_id), &[]).await?)
    }

    async fn get(&self, id: &str) -> Result<MovimentacaoDto> {
        Ok(self.http.get(&movimentacoes::by_id(id), &[]).await?)
    }

    async fn create(&self, dto: &CriarMovimentacaoDto) -> Result<MovimentacaoDto> {
        Ok(self.http.post(movimentacoes::CRIAR, dto).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.http.delete::<IgnoredAny>(&movimentacoes::by_id(id)).await?;
        Ok(())
    }
}
