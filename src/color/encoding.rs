use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Output representation requested for extracted colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorEncoding {
    #[default]
    Hex,
    Rgb,
}

/// Outcome of validating a caller-supplied encoding name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEncoding {
    pub encoding: ColorEncoding,
    pub corrected: bool,
}

impl ColorEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorEncoding::Hex => "hex",
            ColorEncoding::Rgb => "rgb",
        }
    }

    /// Matches `"hex"` and `"rgb"` exactly. Anything else is not an encoding.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hex" => Some(ColorEncoding::Hex),
            "rgb" => Some(ColorEncoding::Rgb),
            _ => None,
        }
    }

    /// Resolves a requested encoding, falling back to `Hex` for unsupported names.
    ///
    /// A missing name silently means `Hex`. An unsupported name also becomes `Hex`, but
    /// emits exactly one warning and marks the result as corrected.
    pub fn resolve(requested: Option<&str>) -> ResolvedEncoding {
        let Some(name) = requested else {
            return ResolvedEncoding {
                encoding: ColorEncoding::default(),
                corrected: false,
            };
        };

        match Self::parse(name) {
            Some(encoding) => ResolvedEncoding {
                encoding,
                corrected: false,
            },
            None => {
                warn!(
                    requested = name,
                    "Unsupported format provided, supported values: 'hex' (Default) or 'rgb'"
                );
                ResolvedEncoding {
                    encoding: ColorEncoding::Hex,
                    corrected: true,
                }
            }
        }
    }
}

impl fmt::Display for ColorEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single color in one of the two canonical encodings.
///
/// Serializes untagged: a hex color is a plain string, an rgb color is a three element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Rgb([u8; 3]),
}

impl ColorValue {
    /// Encodes the given channels in the requested representation.
    pub fn from_channels(red: u8, green: u8, blue: u8, encoding: ColorEncoding) -> Self {
        match encoding {
            ColorEncoding::Hex => ColorValue::Hex(format!("#{red:02x}{green:02x}{blue:02x}")),
            ColorEncoding::Rgb => ColorValue::Rgb([red, green, blue]),
        }
    }

    pub fn encoding(&self) -> ColorEncoding {
        match self {
            ColorValue::Hex(_) => ColorEncoding::Hex,
            ColorValue::Rgb(_) => ColorEncoding::Rgb,
        }
    }

    /// True for the initial, never-extracted value.
    pub fn is_empty(&self) -> bool {
        matches!(self, ColorValue::Hex(hex) if hex.is_empty())
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            ColorValue::Hex(hex) => Some(hex),
            ColorValue::Rgb(_) => None,
        }
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        ColorValue::Hex(String::new())
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(hex) => f.write_str(hex),
            ColorValue::Rgb([r, g, b]) => write!(f, "[{r}, {g}, {b}]"),
        }
    }
}
