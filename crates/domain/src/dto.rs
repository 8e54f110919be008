//! Wire-format payloads exchanged with the JurisREM API
//!
//! Field names follow the API (Portuguese, camelCase on the wire). Dates and
//! enums stay as strings here; conversion to domain types happens in the
//! mapper layer.

use serde::{Deserialize, Serialize};

use crate::types::{FileUpload, Patch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessoDto {
    pub id: String,
    pub numero_processo: String,
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    pub status: String,
    pub area_juridica: String,
    pub data_criacao: String,
    pub data_atualizacao: String,
    pub cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parte_contraria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_causa: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movimentacoes: Option<Vec<MovimentacaoDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentos: Option<Vec<DocumentoDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarProcessoDto {
    pub numero_processo: String,
    pub titulo: String,
    pub descricao: String,
    pub area_juridica: String,
    pub cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parte_contraria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_causa: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tribunal: Option<String>,
}

/// Update body. Absent keys are left untouched by the server; the nullable
/// fields send `null` to clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarProcessoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub parte_contraria: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub valor_causa: Patch<i64>,
    #[serde(skip_serializing_if = "Patch::is_unchanged")]
    pub tribunal: Patch<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovimentacaoDto {
    pub id: String,
    pub processo_id: String,
    pub area_juridica: String,
    pub descricao: String,
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarMovimentacaoDto {
    pub processo_id: String,
    pub area_juridica: String,
    pub descricao: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentoDto {
    pub id: String,
    pub processo_id: String,
    pub nome_arquivo: String,
    pub area_juridica: String,
    pub tamanho: u64,
    pub mime_type: String,
    pub url: String,
    pub data_upload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

/// Multipart upload payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDocumentoDto {
    pub processo_id: String,
    pub area_juridica: String,
    pub descricao: Option<String>,
    pub arquivo: FileUpload,
}

/// Paginated list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginaDto<T> {
    #[serde(alias = "processos")]
    pub data: Vec<T>,
    pub total: u64,
    pub pagina: u32,
    pub itens_por_pagina: u32,
    pub total_paginas: u32,
}

/// Query parameters for the case listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltrosProcessoDto {
    pub titulo: Option<String>,
    pub numero_processo: Option<String>,
    pub cliente: Option<String>,
    pub status: Vec<String>,
    pub area_juridica: Vec<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub pagina: Option<u32>,
    pub itens_por_pagina: Option<u32>,
}

impl FiltrosProcessoDto {
    /// Flatten into query pairs. Array filters repeat the `key[]` parameter.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let scalars = [
            ("titulo", &self.titulo),
            ("numeroProcesso", &self.numero_processo),
            ("cliente", &self.cliente),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs.extend(self.status.iter().map(|s| ("status[]".to_string(), s.clone())));
        pairs.extend(self.area_juridica.iter().map(|a| ("areaJuridica[]".to_string(), a.clone())));
        if let Some(date) = &self.data_inicio {
            pairs.push(("dataInicio".to_string(), date.clone()));
        }
        if let Some(date) = &self.data_fim {
            pairs.push(("dataFim".to_string(), date.clone()));
        }
        if let Some(page) = self.pagina {
            pairs.push(("pagina".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.itens_por_pagina {
            pairs.push(("itensPorPagina".to_string(), per_page.to_string()));
        }
        pairs
    }
}

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorDto {
    pub message: Option<String>,
    pub status_code: Option<u16>,
    pub error: Option<String>,
    pub details: Option<serde_json::Value>,
}
