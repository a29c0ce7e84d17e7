//! Static lookup tables used by attribute extractors.

/// CPF fiscal region by the ninth digit.
pub const CPF_REGIONS: [&str; 10] = [
    "RS",
    "DF/GO/MS/MT/TO",
    "AC/AM/AP/PA/RO/RR",
    "CE/MA/PI",
    "AL/PB/PE/RN",
    "BA/SE",
    "MG",
    "ES/RJ",
    "SP",
    "PR/SC",
];

/// Voter registration state by the two-digit federal unit code.
pub const VOTER_STATES: [&str; 29] = [
    "",
    "SP", "MG", "RJ", "RS",
    "BA", "PR", "CE", "PE",
    "SC", "GO", "MA", "PB",
    "PA", "ES", "PI", "RN",
    "AL", "MT", "MS", "DF",
    "SE", "AM", "RO", "AC",
    "AP", "RR", "TO", "ZZ",
];

/// Civil registry certificate kind by digit 14.
pub const CERTIFICATE_KINDS: [&str; 10] = [
    "",
    "nascimento",
    "casamento",
    "casamento religioso com efeito civil",
    "óbito",
    "natimorto",
    "registro de proclamas",
    "demais atos relativos ao registro civil",
    "emancipações",
    "interdições",
];

/// Civil registry book letter by digit 14.
pub const CERTIFICATE_BOOKS: [&str; 10] = ["", "A", "B", "B", "C", "C", "D", "E", "E", "E"];

/// State served by each two-digit area code (DDD); `None` for unassigned codes.
#[rustfmt::skip]
pub const DDD_STATES: [Option<&str>; 100] = [
    None,                                                                                                           // 00
    None,       None,       None,       None,       None,       None,       None,       None,       None,       None,       // 01-10
    Some("SP"), Some("SP"), Some("SP"), Some("SP"), Some("SP"), Some("SP"), Some("SP"), Some("SP"), Some("SP"), None,       // 11-20
    Some("RJ"), Some("RJ"), None,       Some("RJ"), None,       None,       Some("ES"), Some("ES"), None,       None,       // 21-30
    Some("MG"), Some("MG"), Some("MG"), Some("MG"), Some("MG"), None,       Some("MG"), Some("MG"), None,       None,       // 31-40
    Some("PR"), Some("PR"), Some("PR"), Some("PR"), Some("PR"), Some("PR"), Some("SC"), Some("SC"), Some("SC"), None,       // 41-50
    Some("RS"), None,       Some("RS"), Some("RS"), Some("RS"), None,       None,       None,       None,       None,       // 51-60
    Some("DF"), Some("GO"), Some("TO"), Some("GO"), Some("MT"), Some("MT"), Some("MS"), Some("AC"), Some("RO"), None,       // 61-70
    Some("BA"), None,       Some("BA"), Some("BA"), Some("BA"), None,       Some("BA"), None,       Some("SE"), None,       // 71-80
    Some("PB"), Some("AL"), Some("PA"), Some("RN"), Some("CE"), Some("PI"), Some("PB"), Some("CE"), Some("PI"), None,       // 81-90
    Some("PA"), Some("AM"), Some("PA"), Some("PA"), Some("RR"), Some("AP"), Some("AM"), None,       None,                   // 91-99
];
