use crate::numeric::parse_int;

/// One marketplace sale record, normalized across marketplaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Display name in the form `"<name>#<id>"`.
    pub title: String,
    pub price: f64,
    /// Mint address (MagicEden) or token address (Solanart).
    pub address: String,
}

/// Identifier pulled out of a listing title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Raw text after the first `#`, up to the next `#`.
    pub token: Option<String>,
    /// Integer value of the token, if it has one.
    pub value: Option<i64>,
}

impl Identifier {
    pub fn from_title(title: &str) -> Self {
        let token = title.split('#').nth(1).map(str::to_string);
        let value = token.as_deref().and_then(parse_int);
        Identifier { token, value }
    }
}

impl Listing {
    pub fn identifier(&self) -> Identifier {
        Identifier::from_title(&self.title)
    }
}
