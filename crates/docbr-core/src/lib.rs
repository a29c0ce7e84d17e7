//! Core library for Brazilian document processing.
//!
//! This crate provides:
//! - Digit normalization and weighted-sum check digit verification
//!   (CPF, CNPJ, CNH, titulo de eleitor, PIS, RENAVAM, certidao)
//! - Pattern matching for vehicle plates, email addresses and phones
//! - Named attribute extraction and canonical masked formatting
//! - An order-preserving batch dispatcher that fans out with rayon

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod registry;

pub use dispatch::{AttributeColumn, AttributeMap, AttributeValue, Dispatcher};
pub use error::{BoundaryError, ConfigurationError, DocbrError, Result};
pub use io::{attributes, parse, validate, DocInput, Shaped};
pub use models::config::{DocbrConfig, EngineConfig, OutputConfig, OutputFormat};
pub use pipeline::{CheckDigitSpec, DocumentPipeline, PatternSpec, PipelineOptions};
pub use registry::{Category, DocumentDescriptor, DocumentRegistry, DocumentType};
