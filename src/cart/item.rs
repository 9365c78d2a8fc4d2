//! Cart line items

use serde::{Deserialize, Deserializer, Serialize};

/// A product as handed to the cart, before it has a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: String,

    /// Display name
    pub title: String,

    /// Display image reference
    pub image_url: String,

    /// Unit price
    pub price: f64,
}

impl Product {
    /// Whether the price can be stored; JSON has no NaN or infinity
    pub fn has_finite_price(&self) -> bool {
        self.price.is_finite()
    }
}

/// One product line in the cart
///
/// Serialized with the field names `id, title, image_url, price, quantity`,
/// which is the shape already present in stored carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,

    /// `null` in stored data reads as 0
    #[serde(deserialize_with = "price_or_zero")]
    pub price: f64,

    /// Always at least 1 while the item is in the cart
    pub quantity: u32,
}

impl From<Product> for CartItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

fn price_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// What `add_to_cart` does when the product id is already in the cart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Append another line with quantity 1
    #[default]
    Append,
    /// Bump the quantity of the existing line
    Increment,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "increment" => Ok(Self::Increment),
            other => Err(format!(
                "invalid duplicate policy '{other}': expected 'append' or 'increment'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_becomes_single_item() {
        let item = CartItem::from(Product {
            id: "1".to_string(),
            title: "A".to_string(),
            image_url: "u".to_string(),
            price: 10.0,
        });

        assert_eq!(item.id, "1");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn reads_stored_shape() {
        let json = r#"[{"id":"1","title":"Mug","image_url":"https://img/mug.png",
            "price":12.5,"quantity":3}]"#;
        let items: Vec<CartItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].image_url, "https://img/mug.png");
        assert_eq!(items[0].quantity, 3);
    }

    #[test]
    fn writes_underscored_image_field() {
        let item = CartItem {
            id: "1".to_string(),
            title: "Mug".to_string(),
            image_url: "u".to_string(),
            price: 12.5,
            quantity: 1,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"image_url\":\"u\""));
        assert!(!json.contains("imageUrl"));
    }

    #[test]
    fn null_price_reads_as_zero() {
        let json = r#"[
            {"id":"a","title":"A","image_url":"u","price":null,"quantity":1},
            {"id":"b","title":"B","image_url":"u","price":5.0,"quantity":2}
        ]"#;
        let items: Vec<CartItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 0.0);
        assert_eq!(items[1].price, 5.0);
    }

    #[test]
    fn non_finite_price_detected() {
        let mut product = Product {
            id: "1".to_string(),
            title: "A".to_string(),
            image_url: "u".to_string(),
            price: f64::NAN,
        };
        assert!(!product.has_finite_price());

        product.price = f64::INFINITY;
        assert!(!product.has_finite_price());

        product.price = 0.5;
        assert!(product.has_finite_price());
    }

    #[test]
    fn duplicate_policy_parse() {
        assert_eq!("append".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Append));
        assert_eq!(
            "Increment".parse::<DuplicatePolicy>(),
            Ok(DuplicatePolicy::Increment)
        );
        assert!("merge".parse::<DuplicatePolicy>().is_err());
    }
}
