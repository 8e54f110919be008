use jurisrem_domain::Config;
use jurisrem_lib::AppContext;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// Context wired to a mock API, downloading into a temporary directory.
pub struct TestContext {
    pub server: MockServer,
    pub ctx: AppContext,
    /// Keep temporary directory alive for the lifetime of the context.
    pub downloads: TempDir,
}

pub fn test_config(server: &MockServer, downloads: &TempDir) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}/api", server.uri());
    config.api.timeout_ms = 2_000;
    config.api.token = Some("ctx-token".to_string());
    config.store.page_size = 2;
    config.downloads.directory = downloads.path().to_string_lossy().to_string();
    config
}

pub async fn setup_test_context() -> TestContext {
    let server = MockServer::start().await;
    let downloads = TempDir::new().expect("failed to create download directory");
    let ctx = AppContext::new_with_config(test_config(&server, &downloads)).expect("context should build");
    TestContext { server, ctx, downloads }
}

pub fn processo(id: &str, updated: &str) -> Value {
    json!({
        "id": id,
        "numeroProcesso": format!("000{id}-00.2024.8.26.0100"),
        "titulo": format!("Processo {id}"),
        "status": "ativo",
        "areaJuridica": "civil",
        "dataCriacao": "2024-01-01T10:00:00.000Z",
        "dataAtualizacao": updated,
        "cliente": "Maria Souza",
        "valorCausa": 123456
    })
}

pub fn page(items: Vec<Value>, total: u64, pagina: u32, total_paginas: u32) -> Value {
    json!({
        "data": items,
        "total": total,
        "pagina": pagina,
        "itensPorPagina": 2,
        "totalPaginas": total_paginas
    })
}
