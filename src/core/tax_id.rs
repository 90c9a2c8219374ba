//! CPF / CNPJ cleaning, check-digit validation and display formatting.
//!
//! All free functions here are total: they never panic and never return
//! an error, so they can be called inline while rendering a table cell or
//! reacting to a keystroke. Use [`TaxId::parse`] when the reason for a
//! rejection matters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxIdError;

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

/// Weights for the second CNPJ verifier digit; the first digit uses `[1..]`.
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// The two Brazilian taxpayer-ID schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIdKind {
    /// Cadastro de Pessoas Físicas: 11 digits, individuals.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: 14 digits, organizations.
    Cnpj,
}

impl TaxIdKind {
    /// Number of digits in a complete identifier, verifier digits included.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Pick the scheme from a cleaned length. The two lengths are disjoint.
    pub fn for_len(len: usize) -> Option<Self> {
        match len {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Compute both verifier digits for a base number.
    ///
    /// `base` must be exactly 9 (CPF) or 12 (CNPJ) ASCII digits with no
    /// punctuation; anything else yields `None`.
    ///
    /// ```
    /// use opme::TaxIdKind;
    /// assert_eq!(TaxIdKind::Cpf.check_digits("529982247"), Some([2, 5]));
    /// assert_eq!(TaxIdKind::Cnpj.check_digits("114447770001"), Some([6, 1]));
    /// ```
    pub fn check_digits(&self, base: &str) -> Option<[u8; 2]> {
        if base.len() != self.digit_count() - 2 || !base.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut digits = to_digits(base);
        let first = self.verifier(&digits);
        digits.push(first);
        let second = self.verifier(&digits);
        Some([first, second])
    }

    /// Verifier digit that follows `digits` (modulo 11).
    fn verifier(&self, digits: &[u8]) -> u8 {
        let sum: u32 = match self {
            // weights 10..=2 for the first digit, 11..=2 for the second
            Self::Cpf => digits
                .iter()
                .zip((2..=digits.len() as u32 + 1).rev())
                .map(|(&d, w)| u32::from(d) * w)
                .sum(),
            Self::Cnpj => digits
                .iter()
                .zip(&CNPJ_WEIGHTS[CNPJ_WEIGHTS.len() - digits.len()..])
                .map(|(&d, &w)| u32::from(d) * w)
                .sum(),
        };
        match sum % 11 {
            rem if rem < 2 => 0,
            rem => (11 - rem) as u8,
        }
    }

    /// Full check of an already-cleaned digit sequence.
    fn verify(&self, digits: &[u8]) -> Result<(), TaxIdError> {
        if digits.len() != self.digit_count() {
            return Err(TaxIdError::InvalidLength {
                expected: self.digit_count().to_string(),
                actual: digits.len(),
            });
        }
        if digits.iter().all(|&d| d == digits[0]) {
            return Err(TaxIdError::RepeatedDigits { kind: *self });
        }

        let base = self.digit_count() - 2;
        for (position, idx) in [(1, base), (2, base + 1)] {
            let expected = self.verifier(&digits[..idx]);
            if digits[idx] != expected {
                return Err(TaxIdError::CheckDigit {
                    kind: *self,
                    position,
                    found: digits[idx],
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
        }
    }
}

/// Strip everything that is not an ASCII digit, keeping order.
///
/// Absent input yields an empty string.
///
/// ```
/// use opme::clean;
/// assert_eq!(clean("11.444.777/0001-61"), "11444777000161");
/// assert_eq!(clean(None), "");
/// ```
pub fn clean<'a>(input: impl Into<Option<&'a str>>) -> String {
    input
        .into()
        .map(|s| s.chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default()
}

/// Check a CPF (11-digit individual taxpayer ID). Punctuation is ignored.
pub fn is_valid_cpf(input: &str) -> bool {
    TaxIdKind::Cpf.verify(&to_digits(&clean(input))).is_ok()
}

/// Check a CNPJ (14-digit organization taxpayer ID). Punctuation is ignored.
pub fn is_valid_cnpj(input: &str) -> bool {
    TaxIdKind::Cnpj.verify(&to_digits(&clean(input))).is_ok()
}

/// Check either scheme, dispatching on the cleaned length.
///
/// Any length other than 11 or 14 is invalid.
pub fn is_valid_tax_id(input: &str) -> bool {
    let digits = clean(input);
    match TaxIdKind::for_len(digits.len()) {
        Some(kind) => kind.verify(&to_digits(&digits)).is_ok(),
        None => false,
    }
}

/// Punctuate a CPF as `###.###.###-##` or a CNPJ as `##.###.###/####-##`.
///
/// Inputs whose cleaned form is neither 11 nor 14 digits are returned
/// exactly as given, so a half-typed value is never mangled. Check digits
/// are not verified.
///
/// ```
/// use opme::format_tax_id;
/// assert_eq!(format_tax_id("52998224725"), "529.982.247-25");
/// assert_eq!(format_tax_id("11444777000161"), "11.444.777/0001-61");
/// assert_eq!(format_tax_id("114.447"), "114.447");
/// ```
pub fn format_tax_id<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };
    let digits = clean(input);
    match TaxIdKind::for_len(digits.len()) {
        Some(kind) => punctuate(kind, &digits),
        None => input.to_string(),
    }
}

fn punctuate(kind: TaxIdKind, d: &str) -> String {
    match kind {
        TaxIdKind::Cpf => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        TaxIdKind::Cnpj => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
    }
}

/// Caller guarantees `s` holds ASCII digits only.
fn to_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

/// A CPF or CNPJ whose check digits have been verified.
///
/// Stored as cleaned digits. `Display` renders the punctuated form;
/// serde uses the bare digit string and re-validates on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId {
    kind: TaxIdKind,
    digits: String,
}

impl TaxId {
    /// Parse either scheme, choosing by cleaned length.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let digits = clean(input);
        let kind = TaxIdKind::for_len(digits.len()).ok_or_else(|| TaxIdError::InvalidLength {
            expected: format!("{CPF_LEN} or {CNPJ_LEN}"),
            actual: digits.len(),
        })?;
        kind.verify(&to_digits(&digits))?;
        Ok(Self { kind, digits })
    }

    /// Parse, requiring a specific scheme.
    pub fn parse_as(kind: TaxIdKind, input: &str) -> Result<Self, TaxIdError> {
        let digits = clean(input);
        kind.verify(&to_digits(&digits))?;
        Ok(Self { kind, digits })
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// Cleaned digits, no punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Punctuated display form.
    pub fn formatted(&self) -> String {
        punctuate(self.kind, &self.digits)
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.digits
    }
}
