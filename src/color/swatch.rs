use serde::{Deserialize, Serialize};

/// Raw palette entry as handed back by a palette collaborator.
///
/// Carries both the hex string and the separate channels. Neither is recomputed from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Swatch {
    pub fn new(hex: impl Into<String>, (red, green, blue): (u8, u8, u8)) -> Self {
        Self {
            hex: hex.into(),
            red,
            green,
            blue,
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}
