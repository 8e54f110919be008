//! Case service - business operations over the resource APIs

use std::path::PathBuf;
use std::sync::Arc;

use jurisrem_domain::dto::UploadDocumentoDto;
use jurisrem_domain::{
    Case, CaseFilters, CaseUpdate, Document, DocumentUpload, JurisError, Movement, NewCase,
    NewMovement, Page, PageRequest, Result,
};
use tracing::{debug, error, warn};

use super::ports::{CaseApi, DocumentApi, DownloadSink, MovementApi};
use super::validation::{validate_new_case, validate_upload_file};
use crate::mappers::{
    case_from_dto, case_to_create_dto, case_to_update_dto, document_from_dto, filters_to_dto,
    movement_from_dto, movement_to_create_dto, page_from_dto,
};

const LIST_FAILED: &str = "Não foi possível carregar a lista de processos";
const DETAIL_FAILED: &str = "Não foi possível carregar os detalhes do processo";
const CREATE_FAILED: &str = "Não foi possível criar o processo";
const UPDATE_FAILED: &str = "Não foi possível atualizar o processo";
const DELETE_FAILED: &str = "Não foi possível remover o processo";
const ADD_MOVEMENT_FAILED: &str = "Não foi possível adicionar a movimentação";
const DELETE_MOVEMENT_FAILED: &str = "Não foi possível remover a movimentação";
const UPLOAD_FAILED: &str = "Não foi possível fazer upload do documento";
const DOWNLOAD_FAILED: &str = "Não foi possível baixar o documento";
const DELETE_DOCUMENT_FAILED: &str = "Não foi possível remover o documento";

/// Case service
///
/// The only layer that knows business rules. Local validation failures are
/// returned as [`JurisError::Validation`]; every other failure is logged and
/// replaced by [`JurisError::Operation`] with a generic message.
pub struct CaseService {
    cases: Arc<dyn CaseApi>,
    movements: Arc<dyn MovementApi>,
    documents: Arc<dyn DocumentApi>,
    downloads: Arc<dyn DownloadSink>,
}

impl CaseService {
    /// Create a new case service
    pub fn new(
        cases: Arc<dyn CaseApi>,
        movements: Arc<dyn MovementApi>,
        documents: Arc<dyn DocumentApi>,
        downloads: Arc<dyn DownloadSink>,
    ) -> Self {
        Self { cases, movements, documents, downloads }
    }

    /// List one page of cases. `None` filters behave like empty filters.
    pub async fn list_cases(
        &self,
        filters: Option<&CaseFilters>,
        page: Option<PageRequest>,
    ) -> Result<Page<Case>> {
        let query = filters_to_dto(filters.unwrap_or(&CaseFilters::default()), page);
        let dto = self.cases.list(&query).await.map_err(normalize("list cases", LIST_FAILED))?;
        Ok(page_from_dto(dto, case_from_dto))
    }

    /// Fetch a case with its movements and documents.
    ///
    /// Only the base record is required. The two sub-collections are fetched
    /// concurrently and fall back to empty lists on failure.
    pub async fn get_case_detail(&self, id: &str) -> Result<Case> {
        let dto = self.cases.get(id).await.map_err(normalize("load case detail", DETAIL_FAILED))?;
        let mut case = case_from_dto(dto);

        let (movements, documents) = tokio::join!(self.case_movements(id), self.case_documents(id));
        case.movements = Some(movements);
        case.documents = Some(documents);

        Ok(case)
    }

    /// Best-effort movement listing; failures yield an empty list
    pub async fn case_movements(&self, case_id: &str) -> Vec<Movement> {
        match self.movements.list_by_case(case_id).await {
            Ok(items) => items.into_iter().map(movement_from_dto).collect(),
            Err(err) => {
                warn!(case_id, error = %err, "Failed to load movements, using empty list");
                Vec::new()
            }
        }
    }

    /// Best-effort document listing; failures yield an empty list
    pub async fn case_documents(&self, case_id: &str) -> Vec<Document> {
        match self.documents.list_by_case(case_id).await {
            Ok(items) => items.into_iter().map(document_from_dto).collect(),
            Err(err) => {
                warn!(case_id, error = %err, "Failed to load documents, using empty list");
                Vec::new()
            }
        }
    }

    pub async fn create_case(&self, input: &NewCase) -> Result<Case> {
        validate_new_case(input)?;

        let dto = self
            .cases
            .create(&case_to_create_dto(input))
            .await
            .map_err(normalize("create case", CREATE_FAILED))?;
        debug!(case_id = %dto.id, "Case created");
        Ok(case_from_dto(dto))
    }

    pub async fn update_case(&self, id: &str, update: &CaseUpdate) -> Result<Case> {
        let dto = self
            .cases
            .update(id, &case_to_update_dto(update))
            .await
            .map_err(normalize("update case", UPDATE_FAILED))?;
        Ok(case_from_dto(dto))
    }

    pub async fn delete_case(&self, id: &str) -> Result<()> {
        self.cases.delete(id).await.map_err(normalize("delete case", DELETE_FAILED))
    }

    pub async fn add_movement(&self, input: &NewMovement) -> Result<Movement> {
        let dto = self
            .movements
            .create(&movement_to_create_dto(input))
            .await
            .map_err(normalize("add movement", ADD_MOVEMENT_FAILED))?;
        Ok(movement_from_dto(dto))
    }

    pub async fn delete_movement(&self, id: &str) -> Result<()> {
        self.movements.delete(id).await.map_err(normalize("delete movement", DELETE_MOVEMENT_FAILED))
    }

    /// Upload a document after checking its size and MIME type.
    pub async fn upload_document(&self, input: &DocumentUpload) -> Result<Document> {
        validate_upload_file(&input.file)?;

        let payload = UploadDocumentoDto {
            processo_id: input.case_id.clone(),
            area_juridica: input.document_type.as_str().to_string(),
            descricao: input.description.clone(),
            arquivo: input.file.clone(),
        };
        let dto = self
            .documents
            .upload(&payload)
            .await
            .map_err(normalize("upload document", UPLOAD_FAILED))?;
        Ok(document_from_dto(dto))
    }

    /// Download a document and hand it to the download sink once.
    pub async fn download_document(&self, document: &Document) -> Result<PathBuf> {
        let content = self
            .documents
            .download(&document.id)
            .await
            .map_err(normalize("download document", DOWNLOAD_FAILED))?;
        self.downloads
            .save(&document.file_name, content)
            .await
            .map_err(normalize("save downloaded document", DOWNLOAD_FAILED))
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        self.documents.delete(id).await.map_err(normalize("delete document", DELETE_DOCUMENT_FAILED))
    }
}

/// Log the original error and substitute the generic message.
fn normalize(operation: &'static str, message: &'static str) -> impl FnOnce(JurisError) -> JurisError {
    move |err| {
        if err.is_validation() {
            return err;
        }
        error!(operation, error = %err, status = ?err.status(), "Case service operation failed");
        JurisError::Operation(message.to_string())
    }
}
