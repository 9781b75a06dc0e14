use crate::errors::MeshError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A NACA 4-digit designation of the form MPTT, where M is the maximum camber in percent of the
/// chord, P is the location of the maximum camber in tenths of the chord, and TT is the maximum
/// thickness in percent of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NacaCode {
    digits: [u8; 4],
}

impl NacaCode {
    pub fn new(digits: [u8; 4]) -> Result<NacaCode, MeshError> {
        if let Some(d) = digits.iter().find(|d| **d > 9) {
            return Err(MeshError::InvalidParameter(format!(
                "NACA digit {} is not in 0-9",
                d
            )));
        }
        Ok(NacaCode { digits })
    }

    /// Maximum camber as a fraction of the chord, 0.02 for a NACA 2412
    pub fn m(&self) -> f64 {
        self.digits[0] as f64 / 100.0
    }

    /// Chordwise position of the maximum camber as a fraction of the chord, 0.4 for a NACA 2412
    pub fn p(&self) -> f64 {
        self.digits[1] as f64 / 10.0
    }

    /// Maximum thickness as a fraction of the chord, 0.12 for a NACA 2412
    pub fn t(&self) -> f64 {
        (self.digits[2] as f64 * 10.0 + self.digits[3] as f64) / 100.0
    }

    pub fn is_symmetric(&self) -> bool {
        self.digits[0] == 0 || self.digits[1] == 0
    }
}

impl FromStr for NacaCode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(MeshError::InvalidParameter(format!(
                "NACA code must have exactly 4 digits, got {:?}",
                s
            )));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(MeshError::InvalidParameter(format!(
                "NACA code must contain only the digits 0-9, got {:?}",
                s
            )));
        }

        let mut digits = [0u8; 4];
        for (d, b) in digits.iter_mut().zip(bytes) {
            *d = b - b'0';
        }
        NacaCode::new(digits)
    }
}

impl Display for NacaCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for d in self.digits.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case("0012", 0.0, 0.0, 0.12)]
    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("4415", 0.04, 0.4, 0.15)]
    #[test_case("9999", 0.09, 0.9, 0.99)]
    #[test_case("0006", 0.0, 0.0, 0.06)]
    fn parse_valid_codes(code: &str, m: f64, p: f64, t: f64) {
        let naca: NacaCode = code.parse().unwrap();
        assert_relative_eq!(naca.m(), m, epsilon = 1e-12);
        assert_relative_eq!(naca.p(), p, epsilon = 1e-12);
        assert_relative_eq!(naca.t(), t, epsilon = 1e-12);
        assert_eq!(naca.to_string(), code);
    }

    #[test_case("12" ; "too short")]
    #[test_case("00120" ; "too long")]
    #[test_case("" ; "empty")]
    #[test_case("00a2" ; "letter")]
    #[test_case("-012" ; "sign")]
    #[test_case(" 012" ; "whitespace")]
    #[test_case("00１2" ; "non ascii digit")]
    fn reject_malformed_codes(code: &str) {
        let result = code.parse::<NacaCode>();
        assert!(matches!(result, Err(MeshError::InvalidParameter(_))));
    }

    #[test]
    fn digits_over_nine_are_rejected() {
        assert!(NacaCode::new([1, 2, 10, 0]).is_err());
    }

    #[test_case("0012", true)]
    #[test_case("2012", true)]
    #[test_case("2412", false)]
    fn symmetry(code: &str, expected: bool) {
        assert_eq!(code.parse::<NacaCode>().unwrap().is_symmetric(), expected);
    }
}
