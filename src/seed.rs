//! Bundled dataset a fresh store hydrates from when nothing durable exists
//! yet, plus the category taxonomy the storefront filters on.

use chrono::NaiveDate;

use crate::models::{ContactMessage, Product};

pub const CATEGORIES: [&str; 3] = ["Clothing", "Accessories", "Footwear"];

pub fn initial_products() -> Vec<Product> {
    let items = [
        (
            "1",
            "Classic White Tee",
            "Soft organic cotton tee with a relaxed fit. A wardrobe staple that pairs with everything.",
            24.99,
            "Clothing",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=800&h=800&fit=crop",
            true,
        ),
        (
            "2",
            "Linen Summer Dress",
            "Breathable linen dress with a flattering A-line cut, made for warm afternoons.",
            79.99,
            "Clothing",
            "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=800&h=800&fit=crop",
            true,
        ),
        (
            "3",
            "Leather Crossbody Bag",
            "Full-grain leather bag with an adjustable strap and brushed brass hardware.",
            129.0,
            "Accessories",
            "https://images.unsplash.com/photo-1548036328-c9fa89d128fa?w=800&h=800&fit=crop",
            true,
        ),
        (
            "4",
            "Minimalist Watch",
            "Slim stainless case on an Italian leather band. Quiet on the wrist, hard to miss.",
            159.5,
            "Accessories",
            "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=800&h=800&fit=crop",
            false,
        ),
        (
            "5",
            "Suede Ankle Boots",
            "Hand-finished suede boots with a stacked heel and cushioned insole.",
            189.99,
            "Footwear",
            "https://images.unsplash.com/photo-1543163521-1bf539c55dd2?w=800&h=800&fit=crop",
            true,
        ),
        (
            "6",
            "Canvas Low-Top Sneakers",
            "Everyday sneakers in heavyweight canvas with a vulcanized rubber sole.",
            64.99,
            "Footwear",
            "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?w=800&h=800&fit=crop",
            true,
        ),
    ];

    items
        .into_iter()
        .map(
            |(id, name, description, price, category, image, in_stock)| Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                image: image.to_string(),
                in_stock,
            },
        )
        .collect()
}

pub fn initial_messages() -> Vec<ContactMessage> {
    let items = [
        (
            "2",
            "Sofia Marquez",
            "sofia.marquez@example.com",
            "Restock question",
            "Hi! Will the minimalist watch be back in stock before the holidays?",
            (2025, 11, 2),
        ),
        (
            "1",
            "James Okafor",
            "james.okafor@example.com",
            "Order sizing",
            "Do the suede boots run true to size? I'm between a 42 and a 43.",
            (2025, 10, 27),
        ),
    ];

    items
        .into_iter()
        .map(|(id, name, email, subject, message, (y, m, d))| ContactMessage {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        })
        .collect()
}
