//! Domain types and models

pub mod case;
pub mod document;
pub mod inputs;
pub mod movement;
pub mod page;
pub mod patch;
pub mod timestamp;

pub use case::{Case, CaseStatus, CaseType};
pub use document::{Document, DocumentType};
pub use inputs::{CaseFilters, CaseUpdate, DocumentUpload, FileUpload, NewCase, NewMovement, PageRequest};
pub use movement::{Movement, MovementType};
pub use page::Page;
pub use patch::Patch;
pub use timestamp::Timestamp;
