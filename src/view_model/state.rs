//! Render model for the token list — sections of items, rebuilt wholesale.

use crate::domain::token::Token;

/// Identifier of a list section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Main,
}

impl SectionId {
    pub const ALL: [SectionId; 1] = [SectionId::Main];
}

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Item {
    Token(Token),
}

impl Item {
    /// Data a list row needs to draw itself.
    pub fn row(&self) -> TokenRow {
        match self {
            Item::Token(token) => TokenRow::from(token),
        }
    }
}

/// Presentation context for a token row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub logo_url: String,
    pub name: String,
    pub symbol: String,
    pub price_text: String,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            logo_url: token.logo_uri.clone(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            price_text: token.price_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }
}

/// Immutable snapshot of what the token list shows.
///
/// Never patched: every successful fetch produces a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenListState {
    sections: Vec<Section>,
}

impl TokenListState {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// One `Main` section holding the tokens in the order given.
    pub fn from_tokens(tokens: &[Token]) -> Self {
        Self::new(vec![Section {
            id: SectionId::Main,
            items: tokens.iter().cloned().map(Item::Token).collect(),
        }])
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Item count of the section at `section`, 0 if out of range.
    pub fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.items.len())
    }

    pub fn item(&self, section: usize, index: usize) -> Option<&Item> {
        self.sections.get(section)?.items.get(index)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
