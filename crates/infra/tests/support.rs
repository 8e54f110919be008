//! Shared helpers for infra integration tests

use std::sync::Arc;

use jurisrem_infra::{CaseApiClient, DocumentApiClient, HttpClient, MovementApiClient, TokenStore};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Resource clients wired to a mock server under `/api`.
pub struct TestApi {
    pub server: MockServer,
    pub tokens: Arc<TokenStore>,
    pub http: Arc<HttpClient>,
    pub cases: CaseApiClient,
    pub movements: MovementApiClient,
    pub documents: DocumentApiClient,
}

impl TestApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let tokens = Arc::new(TokenStore::new(Some("test-token".to_string())));
        let http = Arc::new(
            HttpClient::builder()
                .base_url(format!("{}/api", server.uri()))
                .token_provider(tokens.clone())
                .build()
                .expect("http client should build"),
        );

        Self {
            cases: CaseApiClient::new(Arc::clone(&http)),
            movements: MovementApiClient::new(Arc::clone(&http)),
            documents: DocumentApiClient::new(Arc::clone(&http)),
            server,
            tokens,
            http,
        }
    }
}

pub fn processo_json(id: &str) -> Value {
    json!({
        "id": id,
        "numeroProcesso": "0001234-56.2024.8.26.0100",
        "titulo": format!("Processo {id}"),
        "descricao": "Ação de cobrança",
        "status": "ativo",
        "areaJuridica": "civil",
        "dataCriacao": "2024-03-01T12:00:00.000Z",
        "dataAtualizacao": "2024-03-02T12:00:00.000Z",
        "cliente": "Maria Souza",
        "valorCausa": 1500000
    })
}

pub fn movimentacao_json(id: &str, processo_id: &str) -> Value {
    json!({
        "id": id,
        "processoId": processo_id,
        "areaJuridica": "audiencia",
        "descricao": "Audiência de conciliação",
        "data": "2024-03-05T14:30:00.000Z",
        "usuario": "adv.silva"
    })
}

pub fn documento_json(id: &str, processo_id: &str) -> Value {
    json!({
        "id": id,
        "processoId": processo_id,
        "nomeArquivo": "procuracao.pdf",
        "areaJuridica": "procuracao",
        "tamanho": 2048,
        "mimeType": "application/pdf",
        "url": format!("https://files.example.com/{id}"),
        "dataUpload": "2024-03-06T09:00:00.000Z"
    })
}
