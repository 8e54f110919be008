//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";

// Document upload limits
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_UPLOAD_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
    "text/plain",
];

// Display
pub const NOT_INFORMED_LABEL: &str = "Não informado";
pub const INVALID_DATE_LABEL: &str = "Data inválida";
pub const FALLBACK_STATUS_COLOR: &str = "secondary";

// Messages shown when the server gives no usable answer
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão: Servidor não está respondendo";
