//! Static storefront catalog.
//!
//! The Denver-based outdoor storefront ships its category and featured
//! product data with the client rather than fetching it. Pricing here is
//! merchandising data, not inventory authority.

use rust_decimal::Decimal;

use crate::types::{Badge, Category, CategoryId, Product, ProductId};

/// Dollars-and-cents shorthand for catalog prices.
fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        image: format!("https://cdn.highcountrygear.shop/categories/{id}.jpg"),
    }
}

/// Category list shown on the home page grid.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category("headlamps", "Headlamps"),
        category("water-bottles", "Water Bottles"),
        category("cookware", "Camping Cookware"),
        category("knives", "Knives"),
        category("multi-tools", "Multi-Tools"),
        category("base-layers", "Base Layers"),
        category("hiking-socks", "Hiking Socks"),
        category("gloves", "Gloves"),
        category("hats", "Hats"),
    ]
}

/// Editor's pick / featured products.
#[must_use]
pub fn featured_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("hl-peak-200"),
            name: "Peak 200 Headlamp".to_owned(),
            price: usd(34_99),
            compare_at_price: Some(usd(44_99)),
            rating: 4.7,
            image: "https://cdn.highcountrygear.shop/products/hl-peak-200.jpg".to_owned(),
            badge: Some(Badge::BestSeller),
            category_id: CategoryId::new("headlamps"),
            description: Some(
                "Featherlight headlamp with 200 lumens, long-lasting battery, and \
                 weatherproof housing. Perfect for alpine starts."
                    .to_owned(),
            ),
            stock: Some(7),
        },
        Product {
            id: ProductId::new("wb-titan-1l"),
            name: "Titan 1L Bottle".to_owned(),
            price: usd(24_00),
            compare_at_price: Some(usd(32_00)),
            rating: 4.6,
            image: "https://cdn.highcountrygear.shop/products/wb-titan-1l.jpg".to_owned(),
            badge: Some(Badge::New),
            category_id: CategoryId::new("water-bottles"),
            description: Some(
                "Double-wall insulated titanium bottle keeps drinks cold for 24h and \
                 hot for 12h. Built to outlast the trail."
                    .to_owned(),
            ),
            stock: Some(23),
        },
        Product {
            id: ProductId::new("ck-trailset"),
            name: "Trailset Cookware Duo".to_owned(),
            price: usd(54_95),
            compare_at_price: Some(usd(69_95)),
            rating: 4.5,
            image: "https://cdn.highcountrygear.shop/products/ck-trailset.jpg".to_owned(),
            badge: None,
            category_id: CategoryId::new("cookware"),
            description: Some(
                "Ultralight anodized aluminum pot and pan set with heat-diffusing base \
                 and nested design to save pack space."
                    .to_owned(),
            ),
            stock: Some(5),
        },
        Product {
            id: ProductId::new("kn-edge-pro"),
            name: "Edge Pro Folding Knife".to_owned(),
            price: usd(69_00),
            compare_at_price: Some(usd(89_00)),
            rating: 4.8,
            image: "https://cdn.highcountrygear.shop/products/kn-edge-pro.jpg".to_owned(),
            badge: Some(Badge::Limited),
            category_id: CategoryId::new("knives"),
            description: Some(
                "Premium steel blade with secure lock and ergonomic grip for precision \
                 cutting in a compact, trail-ready form."
                    .to_owned(),
            ),
            stock: Some(3),
        },
        Product {
            id: ProductId::new("mt-compact"),
            name: "Compact Multi-Tool".to_owned(),
            price: usd(44_00),
            compare_at_price: Some(usd(59_00)),
            rating: 4.6,
            image: "https://cdn.highcountrygear.shop/products/mt-compact.jpg".to_owned(),
            badge: None,
            category_id: CategoryId::new("multi-tools"),
            description: Some(
                "14 essential functions packed into a pocket-sized body. Pliers, blade, \
                 drivers, and more with smooth pivots."
                    .to_owned(),
            ),
            stock: Some(15),
        },
        Product {
            id: ProductId::new("bl-thermal-crew"),
            name: "Thermal Crew Base Layer".to_owned(),
            price: usd(59_00),
            compare_at_price: Some(usd(79_00)),
            rating: 4.4,
            image: "https://cdn.highcountrygear.shop/products/bl-thermal-crew.jpg".to_owned(),
            badge: None,
            category_id: CategoryId::new("base-layers"),
            description: Some(
                "Moisture-wicking, fast-drying thermal crew that traps warmth and \
                 breathes during high-output ascents."
                    .to_owned(),
            ),
            stock: Some(11),
        },
    ]
}

/// Look up a featured product by id.
#[must_use]
pub fn product_by_id(id: &ProductId) -> Option<Product> {
    featured_products().into_iter().find(|p| &p.id == id)
}

/// Look up a category by id.
#[must_use]
pub fn category_by_id(id: &CategoryId) -> Option<Category> {
    categories().into_iter().find(|c| &c.id == id)
}
