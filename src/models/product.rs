use serde::{Deserialize, Serialize};

/// One line of the event's product list. Identity is `external_id` (the
/// catalog id of the product provider); duplicate lines are allowed and mean
/// distinct cart entries unless the controller merges them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub external_id: String,

    pub name: String,

    pub brand: String,

    pub quantity: u32,

    pub price: f64,

    pub image_url: String,
}

impl Product {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self {
            external_id: String::new(),
            name: String::new(),
            brand: String::new(),
            quantity: 1,
            price: 0.0,
            image_url: String::new(),
        }
    }
}
