//! Registry of supported document types.
//!
//! Every type is described once by a [`DocumentDescriptor`]; the registry is
//! built on first use and shared read-only afterwards.

pub mod checkdigit;
pub mod pattern;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::engine::{AttributeExtractor, Format};
use crate::error::ConfigurationError;
use crate::pipeline::{CheckDigitSpec, DocumentPipeline, PatternSpec, PipelineOptions};

/// Supported document types, keyed by their short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Cadastro de Pessoas Fisicas.
    Cpf,
    /// Cadastro Nacional da Pessoa Juridica.
    Cnpj,
    /// Carteira Nacional de Habilitacao.
    Cnh,
    /// Titulo de eleitor.
    Te,
    /// PIS/PASEP.
    Pis,
    /// RENAVAM.
    Rnvam,
    /// Certidao de nascimento, casamento ou obito.
    Cert,
    /// Vehicle plate.
    Placa,
    Email,
    /// Phone number.
    Tfone,
}

impl DocumentType {
    /// All types in registry order.
    pub const ALL: [DocumentType; 10] = [
        DocumentType::Cpf,
        DocumentType::Cnpj,
        DocumentType::Cnh,
        DocumentType::Te,
        DocumentType::Pis,
        DocumentType::Rnvam,
        DocumentType::Cert,
        DocumentType::Placa,
        DocumentType::Email,
        DocumentType::Tfone,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "cpf",
            DocumentType::Cnpj => "cnpj",
            DocumentType::Cnh => "cnh",
            DocumentType::Te => "te",
            DocumentType::Pis => "pis",
            DocumentType::Rnvam => "rnvam",
            DocumentType::Cert => "cert",
            DocumentType::Placa => "placa",
            DocumentType::Email => "email",
            DocumentType::Tfone => "tfone",
        }
    }

    /// Comma-separated list of every key, for error messages.
    pub fn expected_keys() -> String {
        DocumentType::ALL
            .iter()
            .map(DocumentType::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ConfigurationError::UnknownDocumentType {
                key: s.to_string(),
                expected: DocumentType::expected_keys(),
            })
    }
}

/// How a document type is recognized.
#[derive(Debug, Clone, Copy)]
pub enum Category {
    CheckDigit(CheckDigitSpec),
    Pattern(PatternSpec),
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::CheckDigit(_) => "check-digit",
            Category::Pattern(_) => "pattern",
        }
    }

    /// The per-element pipeline for this category.
    pub fn pipeline(&self) -> &dyn DocumentPipeline {
        match self {
            Category::CheckDigit(spec) => spec,
            Category::Pattern(spec) => spec,
        }
    }
}

/// Everything needed to process one document type.
#[derive(Debug, Clone, Copy)]
pub struct DocumentDescriptor {
    pub kind: DocumentType,
    pub category: Category,
    pub format: Format,
    pub attributes: &'static [AttributeExtractor],
}

impl DocumentDescriptor {
    /// Parse one element, applying the display format when `mask` is set.
    pub fn parse_one(&self, raw: &str, mask: bool, options: &PipelineOptions) -> Option<String> {
        let value = self.category.pipeline().parse_one(raw, options)?;
        if mask {
            Some(self.format.apply(&value))
        } else {
            Some(value)
        }
    }

    pub fn validate_one(&self, raw: &str, lazy: bool, options: &PipelineOptions) -> bool {
        self.category.pipeline().validate_one(raw, lazy, options)
    }

    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|a| a.name).collect()
    }
}

/// Immutable table of document descriptors.
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    descriptors: Vec<DocumentDescriptor>,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: DocumentRegistry = DocumentRegistry::builtin();
}

impl DocumentRegistry {
    /// Registry with every built-in document type.
    pub fn builtin() -> Self {
        use checkdigit::*;
        use pattern::*;

        let descriptors = vec![
            check_digit(DocumentType::Cpf, CPF, CPF_FORMAT, CPF_ATTRIBUTES),
            check_digit(DocumentType::Cnpj, CNPJ, CNPJ_FORMAT, CNPJ_ATTRIBUTES),
            check_digit(DocumentType::Cnh, CNH, CNH_FORMAT, &[]),
            check_digit(DocumentType::Te, VOTER, VOTER_FORMAT, VOTER_ATTRIBUTES),
            check_digit(DocumentType::Pis, PIS, PIS_FORMAT, &[]),
            check_digit(DocumentType::Rnvam, RENAVAM, RENAVAM_FORMAT, &[]),
            check_digit(DocumentType::Cert, CERTIFICATE, CERTIFICATE_FORMAT, CERTIFICATE_ATTRIBUTES),
            pattern_match(DocumentType::Placa, plate(), PLATE_FORMAT, PLATE_ATTRIBUTES),
            pattern_match(DocumentType::Email, email(), Format::None, EMAIL_ATTRIBUTES),
            pattern_match(DocumentType::Tfone, phone(), PHONE_FORMAT, PHONE_ATTRIBUTES),
        ];

        Self { descriptors }
    }

    /// Shared built-in registry.
    pub fn global() -> &'static DocumentRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn get(&self, kind: DocumentType) -> Option<&DocumentDescriptor> {
        self.descriptors.iter().find(|d| d.kind == kind)
    }

    /// Resolve a type key.
    pub fn lookup(&self, key: &str) -> Result<&DocumentDescriptor, ConfigurationError> {
        let kind: DocumentType = key.parse()?;
        self.get(kind)
            .ok_or_else(|| ConfigurationError::UnknownDocumentType {
                key: key.to_string(),
                expected: self.keys().join(", "),
            })
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.kind.key()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn check_digit(
    kind: DocumentType,
    spec: CheckDigitSpec,
    format: Format,
    attributes: &'static [AttributeExtractor],
) -> DocumentDescriptor {
    DocumentDescriptor {
        kind,
        category: Category::CheckDigit(spec),
        format,
        attributes,
    }
}

fn pattern_match(
    kind: DocumentType,
    spec: PatternSpec,
    format: Format,
    attributes: &'static [AttributeExtractor],
) -> DocumentDescriptor {
    DocumentDescriptor {
        kind,
        category: Category::Pattern(spec),
        format,
        attributes,
    }
}
