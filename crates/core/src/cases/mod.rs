//! Case management: ports, validation and the case service

pub mod ports;
pub mod service;
pub mod validation;

pub use ports::{CaseApi, DocumentApi, DownloadSink, MovementApi};
pub use service::CaseService;
