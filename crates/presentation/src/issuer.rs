use serde::{Deserialize, Serialize};

/// The business an invoice is issued from (the "From" block).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub name: String,
    pub address_lines: Vec<String>,
}

impl Issuer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address_lines: Vec::new(),
        }
    }

    pub fn with_address_line(mut self, line: impl Into<String>) -> Self {
        self.address_lines.push(line.into());
        self
    }

    /// Split a `|`-separated address into lines, dropping blank segments.
    pub fn with_address(mut self, address: &str) -> Self {
        self.address_lines.extend(
            address
                .split('|')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        self
    }
}

impl Default for Issuer {
    fn default() -> Self {
        Self::new("Quickbill Tailoring")
    }
}
