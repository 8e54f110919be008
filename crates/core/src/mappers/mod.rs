//! Mapper layer: DTO/entity conversion and display formatting

pub mod case;
pub mod formatters;

pub use case::{
    case_from_dto, case_to_create_dto, case_to_dto, case_to_update_dto, document_from_dto,
    filters_to_dto, movement_from_dto, movement_to_create_dto, page_from_dto,
};
pub use formatters::{
    case_type_label, document_type_label, format_claim_value, format_date, format_file_size,
    movement_type_label, parse_timezone, status_color, status_label,
};
