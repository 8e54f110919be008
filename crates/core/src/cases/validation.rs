//! Request-level validation performed before any network call

use jurisrem_domain::constants::{ALLOWED_UPLOAD_MIME_TYPES, MAX_UPLOAD_BYTES};
use jurisrem_domain::{FileUpload, JurisError, NewCase, Result};

pub(crate) const MISSING_CASE_NUMBER: &str = "Número do processo é obrigatório";
pub(crate) const MISSING_TITLE: &str = "Título do processo é obrigatório";
pub(crate) const MISSING_CLIENT: &str = "Cliente é obrigatório";
pub(crate) const MISSING_CASE_TYPE: &str = "Tipo do processo é obrigatório";
pub(crate) const FILE_TOO_LARGE: &str = "Arquivo muito grande. Tamanho máximo: 10MB";
pub(crate) const FILE_TYPE_NOT_ALLOWED: &str =
    "Tipo de arquivo não permitido. Tipos aceitos: PDF, Word, imagens e texto";

/// Required fields of a new case, checked in a fixed order.
pub fn validate_new_case(input: &NewCase) -> Result<()> {
    require(&input.case_number, MISSING_CASE_NUMBER)?;
    require(&input.title, MISSING_TITLE)?;
    require(&input.client, MISSING_CLIENT)?;
    require(input.case_type.as_str(), MISSING_CASE_TYPE)
}

/// Size limit first, then the MIME allow-list.
pub fn validate_upload_file(file: &FileUpload) -> Result<()> {
    if file.size() > MAX_UPLOAD_BYTES {
        return Err(JurisError::Validation(FILE_TOO_LARGE.to_string()));
    }
    if !ALLOWED_UPLOAD_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(JurisError::Validation(FILE_TYPE_NOT_ALLOWED.to_string()));
    }
    Ok(())
}

fn require(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(JurisError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}
