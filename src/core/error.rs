use thiserror::Error;

use super::tax_id::TaxIdKind;

/// Reasons a CPF or CNPJ is rejected.
///
/// The boolean validators (`is_valid_cpf`, `is_valid_cnpj`, `is_valid_tax_id`)
/// never surface these; they exist for callers that want to tell the user
/// *why* an identifier was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// Cleaned input is neither 11 (CPF) nor 14 (CNPJ) digits long,
    /// or does not have the length the requested kind expects.
    #[error("expected {expected} digits, got {actual}")]
    InvalidLength {
        /// Accepted length(s), e.g. "11 or 14".
        expected: String,
        /// Number of digits left after cleaning.
        actual: usize,
    },

    /// Every digit is the same (e.g. "00000000000"), a pattern the
    /// Receita Federal never issues.
    #[error("{kind} with all digits identical")]
    RepeatedDigits {
        /// Scheme the input was checked against.
        kind: TaxIdKind,
    },

    /// A modulo-11 verifier digit does not match.
    #[error("{kind} check digit {position} is {found}, expected {expected}")]
    CheckDigit {
        /// Scheme the input was checked against.
        kind: TaxIdKind,
        /// 1 for the first verifier digit, 2 for the second.
        position: u8,
        /// Digit present in the input.
        found: u8,
        /// Digit the algorithm computed.
        expected: u8,
    },
}
