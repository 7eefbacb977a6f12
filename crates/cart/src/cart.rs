use serde::{Deserialize, Serialize};
use taste_tailor_catalog::MenuItem;
use ulid::Ulid;

use crate::error::{CartError, CartResult};

/// Options picked in the item overlay. Lines only merge when these match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSelection {
    pub special_instructions: String,
    pub tastes: Vec<String>,
    pub recommended: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub line_id: Ulid,
    pub item_id: u32,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub image_url: Option<String>,
    pub selection: LineSelection,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of a menu item. A line with the same item and
    /// selection grows instead of a new line being appended.
    pub fn add_item(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        selection: LineSelection,
    ) -> CartResult<Ulid> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.ensure_capacity(None, quantity)?;

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.item_id == item.id && line.selection == selection)
        {
            line.quantity += quantity;
            tracing::debug!(line_id = %line.line_id, quantity = line.quantity, "cart line grown");
            return Ok(line.line_id);
        }

        let line_id = Ulid::new();
        self.items.push(CartItem {
            line_id,
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.actual_price,
            quantity,
            image_url: Some(item.image_url.clone()).filter(|url| !url.is_empty()),
            selection,
        });
        tracing::debug!(%line_id, item_id = item.id, quantity, "cart line added");

        Ok(line_id)
    }

    pub fn remove_item(&mut self, line_id: Ulid) -> CartResult<CartItem> {
        let position = self
            .items
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or(CartError::LineNotFound(line_id))?;

        Ok(self.items.remove(position))
    }

    /// Sets a line's quantity; `0` removes the line.
    pub fn update_quantity(&mut self, line_id: Ulid, quantity: u32) -> CartResult<()> {
        if quantity == 0 {
            return self.remove_item(line_id).map(|_| ());
        }

        if !self.items.iter().any(|line| line.line_id == line_id) {
            return Err(CartError::LineNotFound(line_id));
        }
        self.ensure_capacity(Some(line_id), quantity)?;

        if let Some(line) = self.items.iter_mut().find(|line| line.line_id == line_id) {
            line.quantity = quantity;
        }

        Ok(())
    }

    /// Total quantity must stay representable, so `item_count` cannot overflow.
    fn ensure_capacity(&self, replaced: Option<Ulid>, quantity: u32) -> CartResult<()> {
        let held: u32 = self
            .items
            .iter()
            .filter(|line| Some(line.line_id) != replaced)
            .map(|line| line.quantity)
            .sum();

        held.checked_add(quantity)
            .map(|_| ())
            .ok_or(CartError::QuantityOverflow)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
