use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use color_eyre::eyre::eyre;
use regex::Regex;
use serde::Serialize;

static ZIP_REG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").unwrap());

/// Ohio Energy Choice natural gas utilities
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Utility {
    /// CenterPoint Energy Ohio, Dayton / west-central Ohio
    Centerpoint,
    /// Duke Energy Ohio, Cincinnati area
    Duke,
    /// Enbridge Gas Ohio, northeast Ohio
    Enbridge,
    /// Columbia Gas of Ohio, the largest territory and the fallback
    Columbia,
}

impl Utility {
    pub const ALL: [Utility; 4] = [Utility::Centerpoint, Utility::Duke, Utility::Enbridge, Utility::Columbia];

    pub fn id(&self) -> &'static str {
        match self {
            Utility::Centerpoint => "centerpoint",
            Utility::Duke => "duke",
            Utility::Enbridge => "enbridge",
            Utility::Columbia => "columbia",
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// five digit, zero padded zip code
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    /// build a zip code from its numeric value, i.e. `4301` -> `"04301"`
    pub fn from_number(value: u32) -> Option<Self> {
        if value > 99_999 {
            return None;
        }
        Some(Self(format!("{:05}", value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// numeric value used by the range checks
    pub fn value(&self) -> u32 {
        // validated on construction, so every char is an ascii digit
        self.0.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl FromStr for ZipCode {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !ZIP_REG.is_match(s) {
            return Err(eyre!("invalid zip code: {:?}", s));
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// strip surrounding whitespace and a trailing "County" token
///
/// `"Cuyahoga County "` -> `"Cuyahoga"`. Case is preserved.
pub fn normalize_county(county: &str) -> &str {
    let county = county.trim();
    match county.strip_suffix("County") {
        Some(rest) if rest.ends_with(char::is_whitespace) => rest.trim_end(),
        _ => county,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_code_rejects_malformed_input() {
        assert!("4410".parse::<ZipCode>().is_err());
        assert!("441011".parse::<ZipCode>().is_err());
        assert!("44a01".parse::<ZipCode>().is_err());
        assert!("".parse::<ZipCode>().is_err());
        assert_eq!(" 44101 ".parse::<ZipCode>().unwrap().as_str(), "44101");
    }

    #[test]
    fn zip_code_numeric_value_and_padding() {
        let zip: ZipCode = "04301".parse().unwrap();
        assert_eq!(zip.value(), 4301);
        assert_eq!(ZipCode::from_number(4301), Some(zip));
        assert_eq!(ZipCode::from_number(100_000), None);
    }

    #[test]
    fn county_suffix_is_stripped() {
        assert_eq!(normalize_county("Cuyahoga County"), "Cuyahoga");
        assert_eq!(normalize_county("  Van Wert County "), "Van Wert");
        assert_eq!(normalize_county("Montgomery"), "Montgomery");
        assert_eq!(normalize_county("cuyahoga county"), "cuyahoga county");
        assert_eq!(normalize_county(""), "");
    }

    #[test]
    fn county_suffix_needs_a_word_boundary() {
        assert_eq!(normalize_county("XCounty"), "XCounty");
        assert_eq!(normalize_county("County"), "County");
        assert_eq!(normalize_county("Erie\tCounty"), "Erie");
    }

    #[test]
    fn utility_serializes_lowercase() {
        let json = serde_json::to_string(&Utility::ALL).unwrap();
        assert_eq!(json, r#"["centerpoint","duke","enbridge","columbia"]"#);
    }
}
