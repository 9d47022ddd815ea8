use core::str::FromStr;

use serde::{Deserialize, Serialize};

use quickbill_core::{DomainError, Entity, LineItemId, Money};

use crate::input::{coerce_amount, coerce_quantity};

/// Editable field of a line item, as named by form edit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Description,
    #[serde(rename = "price")]
    UnitPrice,
    Quantity,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Description => "description",
            ItemField::UnitPrice => "price",
            ItemField::Quantity => "quantity",
        }
    }
}

impl FromStr for ItemField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "description" | "desc" => Ok(ItemField::Description),
            "price" | "unit_price" => Ok(ItemField::UnitPrice),
            "quantity" | "qty" => Ok(ItemField::Quantity),
            other => Err(DomainError::validation(format!(
                "unknown item field '{other}' (expected description, price or quantity)"
            ))),
        }
    }
}

/// One billable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    description: String,
    unit_price: Money,
    quantity: u32,
}

impl LineItem {
    /// Blank entry: empty description, zero price, quantity one.
    pub fn blank() -> Self {
        Self::new(String::new(), Money::ZERO, 1)
    }

    pub fn new(description: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            id: LineItemId::new(),
            description: description.into(),
            unit_price: unit_price.non_negative(),
            quantity,
        }
    }

    pub fn id_typed(&self) -> LineItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn amount(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price.non_negative();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Apply one raw form value to `field`; numeric fields are coerced.
    pub fn apply(&mut self, field: ItemField, raw: &str) {
        match field {
            ItemField::Description => self.set_description(raw),
            ItemField::UnitPrice => self.set_unit_price(coerce_amount(raw)),
            ItemField::Quantity => self.set_quantity(coerce_quantity(raw)),
        }
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
