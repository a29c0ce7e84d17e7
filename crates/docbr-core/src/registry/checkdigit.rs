//! Check-digit document definitions.

use crate::engine::attributes::{lookup, slice, slice_number};
use crate::engine::checksum::{
    eleven_minus, ten_to_one, ten_to_zero, zero_above_nine, ChecksumEngine, FederalUnitCheck,
    SpecialAdjustment, WeightPair,
};
use crate::engine::{AttributeExtractor, Format};
use crate::pipeline::CheckDigitSpec;

use super::tables::{CERTIFICATE_BOOKS, CERTIFICATE_KINDS, CPF_REGIONS, VOTER_STATES};

// CPF (individual taxpayer)
const CPF_PAIRS: [WeightPair; 2] = [
    WeightPair::new(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 0, 0], 9),
    WeightPair::new(&[11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 0], 10),
];

pub const CPF: CheckDigitSpec = CheckDigitSpec::new(11, ChecksumEngine::new(11, &CPF_PAIRS, eleven_minus));
pub const CPF_FORMAT: Format = Format::Mask("###.###.###-##");
pub const CPF_ATTRIBUTES: &[AttributeExtractor] = &[AttributeExtractor::new("regiao", cpf_region)];

fn cpf_region(value: &str) -> Option<String> {
    Some(lookup(value, 8, 8, &CPF_REGIONS))
}

// CNPJ (legal entity)
const CNPJ_PAIRS: [WeightPair; 2] = [
    WeightPair::new(&[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2, 0, 0], 12),
    WeightPair::new(&[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2, 0], 13),
];

pub const CNPJ: CheckDigitSpec = CheckDigitSpec::new(14, ChecksumEngine::new(11, &CNPJ_PAIRS, eleven_minus));
pub const CNPJ_FORMAT: Format = Format::Mask("##.###.###/####-##");
pub const CNPJ_ATTRIBUTES: &[AttributeExtractor] = &[
    AttributeExtractor::new("raiz", cnpj_root),
    AttributeExtractor::new("matriz_filial", cnpj_branch),
];

fn cnpj_root(value: &str) -> Option<String> {
    Some(slice(value, 0, 7))
}

fn cnpj_branch(value: &str) -> Option<String> {
    let kind = if slice_number(value, 8, 11) == Some(1) {
        "matriz"
    } else {
        "filial"
    };
    Some(kind.to_string())
}

// CNH (driver license)
const CNH_PAIRS: [WeightPair; 2] = [
    WeightPair::new(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0], 9),
    WeightPair::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0], 10),
];

pub const CNH: CheckDigitSpec = CheckDigitSpec::new(
    11,
    ChecksumEngine::new(11, &CNH_PAIRS, zero_above_nine).with_special(SpecialAdjustment::CnhCarry),
);
pub const CNH_FORMAT: Format = Format::Mask("### ### ### ##");

// Titulo de eleitor (voter registration)
const VOTER_PAIRS: [WeightPair; 2] = [
    WeightPair::new(&[2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0], 10),
    WeightPair::new(&[0, 0, 0, 0, 0, 0, 0, 0, 7, 8, 9, 0], 11),
];

pub const VOTER: CheckDigitSpec = CheckDigitSpec::new(12, ChecksumEngine::new(11, &VOTER_PAIRS, ten_to_zero))
    .with_federal_unit(FederalUnitCheck::new(8, 9));
pub const VOTER_FORMAT: Format = Format::Mask("#### #### ####");
pub const VOTER_ATTRIBUTES: &[AttributeExtractor] = &[AttributeExtractor::new("estado", voter_state)];

fn voter_state(value: &str) -> Option<String> {
    Some(lookup(value, 8, 9, &VOTER_STATES))
}

// PIS/PASEP (social integration)
const PIS_PAIRS: [WeightPair; 1] = [WeightPair::new(&[3, 2, 9, 8, 7, 6, 5, 4, 3, 2, 0], 10)];

pub const PIS: CheckDigitSpec = CheckDigitSpec::new(11, ChecksumEngine::new(11, &PIS_PAIRS, eleven_minus));
pub const PIS_FORMAT: Format = Format::Mask("###.#####.##-#");

// RENAVAM (vehicle registry)
const RENAVAM_PAIRS: [WeightPair; 1] = [WeightPair::new(&[3, 2, 9, 8, 7, 6, 5, 4, 3, 2, 0], 10)];

pub const RENAVAM: CheckDigitSpec =
    CheckDigitSpec::new(11, ChecksumEngine::new(11, &RENAVAM_PAIRS, eleven_minus));
pub const RENAVAM_FORMAT: Format = Format::Mask("##########-#");

// Certidao (civil registry certificate)
const CERTIFICATE_PAIRS: [WeightPair; 2] = [
    WeightPair::new(
        &[
            2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0,
        ],
        30,
    ),
    WeightPair::new(
        &[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0,
        ],
        31,
    ),
];

pub const CERTIFICATE: CheckDigitSpec =
    CheckDigitSpec::new(32, ChecksumEngine::new(11, &CERTIFICATE_PAIRS, ten_to_one));
pub const CERTIFICATE_FORMAT: Format = Format::Mask("######.##.##.####.#.#####.###.#######-##");
pub const CERTIFICATE_ATTRIBUTES: &[AttributeExtractor] = &[
    AttributeExtractor::new("cartorio", certificate_office),
    AttributeExtractor::new("acervo", certificate_collection),
    AttributeExtractor::new("nsrc", certificate_service),
    AttributeExtractor::new("ano", certificate_year),
    AttributeExtractor::new("tipo", certificate_kind),
    AttributeExtractor::new("tipo_livro", certificate_book_kind),
    AttributeExtractor::new("livro", certificate_book),
    AttributeExtractor::new("folha", certificate_page),
    AttributeExtractor::new("termo", certificate_term),
];

fn certificate_office(value: &str) -> Option<String> {
    Some(slice(value, 0, 5))
}

fn certificate_collection(value: &str) -> Option<String> {
    Some(slice(value, 6, 7))
}

fn certificate_service(value: &str) -> Option<String> {
    Some(slice(value, 8, 9))
}

fn certificate_year(value: &str) -> Option<String> {
    Some(slice(value, 10, 13))
}

fn certificate_kind(value: &str) -> Option<String> {
    Some(lookup(value, 14, 14, &CERTIFICATE_KINDS))
}

fn certificate_book_kind(value: &str) -> Option<String> {
    Some(lookup(value, 14, 14, &CERTIFICATE_BOOKS))
}

fn certificate_book(value: &str) -> Option<String> {
    Some(slice(value, 15, 19))
}

fn certificate_page(value: &str) -> Option<String> {
    Some(slice(value, 20, 22))
}

fn certificate_term(value: &str) -> Option<String> {
    Some(slice(value, 23, 29))
}
