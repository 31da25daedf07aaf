use serde::{Deserialize, Serialize};

/// Producto complementario ofrecido junto al envío
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedProduct {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
}
