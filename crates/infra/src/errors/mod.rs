//! Error conversions for infrastructure failures

pub mod conversions;

pub(crate) use conversions::io_error;
