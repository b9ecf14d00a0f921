use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A value that passed the numeric check, kept exactly as the caller wrote it.
///
/// The gateway receives `raw` untouched (`"1e3"`, `"+2"`, `"5."`). The parsed
/// form is only used to decide whether the value is zero, and zero values are
/// never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericValue {
    raw: String,
    is_zero: bool,
}

impl NumericValue {
    /// Validates `raw` with the permissive "is numeric" rule.
    ///
    /// Accepts surrounding whitespace, an optional sign, digits with an
    /// optional fraction (`5.`, `.5`) and an optional exponent. Magnitude is
    /// not limited, so `1e40` is numeric even though it does not fit a
    /// `Decimal`.
    pub fn parse(raw: &str) -> Option<Self> {
        let is_zero = scan_numeric(raw)?;
        Some(Self {
            raw: raw.to_string(),
            is_zero,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// The value as a `Decimal`, or `None` when it is out of `Decimal` range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let trimmed = self.raw.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
    }
}

impl From<Decimal> for NumericValue {
    fn from(value: Decimal) -> Self {
        Self {
            raw: value.to_string(),
            is_zero: value.is_zero(),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns `Some(is_zero)` when `raw` is numeric.
fn scan_numeric(raw: &str) -> Option<bool> {
    let bytes = raw.trim().as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    let mut all_zero = true;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' => {
                digits += 1;
                all_zero &= b == b'0';
            }
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        pos += 1;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == start {
            return None;
        }
    }

    (pos == bytes.len()).then_some(all_zero)
}

/// Parses a string with the "is numeric" rule straight into a `Decimal`.
///
/// Plain decimals keep their scale (`"5.50"` stays `5.50`).
pub fn parse_numeric(raw: &str) -> Option<Decimal> {
    NumericValue::parse(raw)?.to_decimal()
}

/// Converts loosely-typed caller input into an optional numeric value.
///
/// Values that are not numeric become `None` ("absent") instead of an error,
/// so a malformed shipping cost or discount is simply left out of the payload.
pub trait IntoNumeric {
    fn into_numeric(self) -> Option<NumericValue>;
}

impl IntoNumeric for &str {
    fn into_numeric(self) -> Option<NumericValue> {
        NumericValue::parse(self)
    }
}

impl IntoNumeric for String {
    fn into_numeric(self) -> Option<NumericValue> {
        let is_zero = scan_numeric(&self)?;
        Some(NumericValue { raw: self, is_zero })
    }
}

impl IntoNumeric for &String {
    fn into_numeric(self) -> Option<NumericValue> {
        NumericValue::parse(self)
    }
}

impl IntoNumeric for Decimal {
    fn into_numeric(self) -> Option<NumericValue> {
        Some(NumericValue::from(self))
    }
}

impl IntoNumeric for NumericValue {
    fn into_numeric(self) -> Option<NumericValue> {
        Some(self)
    }
}

impl<T: IntoNumeric> IntoNumeric for Option<T> {
    fn into_numeric(self) -> Option<NumericValue> {
        self.and_then(IntoNumeric::into_numeric)
    }
}

macro_rules! impl_into_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoNumeric for $t {
                fn into_numeric(self) -> Option<NumericValue> {
                    Some(NumericValue::from(Decimal::from(self)))
                }
            }
        )*
    };
}

impl_into_numeric_for_int!(i32, i64, u32, u64);
