//! # Seed Data Generator
//!
//! Populates the database with the demo account and a starter catalog.
//!
//! ## Usage
//! ```bash
//! cargo run -p stride-db --bin seed
//!
//! # Specify database path
//! cargo run -p stride-db --bin seed -- --db ./data/stride.db
//! ```
//!
//! Seeds:
//! - Demo account: demo@example.com / demo123
//! - Categories: Running, Basketball, Lifestyle
//! - A sneaker catalog with per-size stock across EU sizes 40-45

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use std::env;

use stride_db::repository::catalog::NewProduct;
use stride_db::repository::user::NewUser;
use stride_db::{Database, DbConfig};

/// (name, brand, price in cents, category index, image slug)
const SNEAKERS: &[(&str, &str, i64, usize, &str)] = &[
    ("Air Jordan 1 Mid", "Nike", 19_999, 1, "air-jordan-1-mid"),
    ("Dunk Low Panda", "Nike", 11_999, 2, "dunk-low-panda"),
    ("Air Force 1 '07", "Nike", 11_499, 2, "air-force-1-07"),
    ("Pegasus 41", "Nike", 12_999, 0, "pegasus-41"),
    ("Ultraboost Light", "Adidas", 17_999, 0, "ultraboost-light"),
    ("Stan Smith", "Adidas", 9_999, 2, "stan-smith"),
    ("Samba OG", "Adidas", 10_999, 2, "samba-og"),
    ("Gel-Kayano 31", "Asics", 18_999, 0, "gel-kayano-31"),
    ("990v6", "New Balance", 19_999, 0, "990v6"),
    ("550 White Green", "New Balance", 12_499, 1, "550-white-green"),
    ("Suede Classic", "Puma", 7_999, 2, "suede-classic"),
    ("Old Skool", "Vans", 7_499, 2, "old-skool"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Running", "Road and trail running shoes"),
    ("Basketball", "Court shoes and retros"),
    ("Lifestyle", "Everyday sneakers"),
];

const SIZES: &[&str] = &["40", "41", "42", "42.5", "43", "44", "45"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./stride.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stride Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stride.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stride Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Idempotence guard: the demo account marks a seeded database
    if db.users().find_by_email("demo@example.com").await?.is_some() {
        println!();
        println!("⚠ Database already seeded (demo account exists)");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Demo account
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(b"demo123", &salt)
        .map_err(|e| format!("hashing failed: {e}"))?
        .to_string();

    db.users()
        .create(&NewUser {
            email: "demo@example.com".to_string(),
            password_hash,
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
        })
        .await?;

    println!("✓ Demo account created (demo@example.com / demo123)");

    // Categories
    let catalog = db.catalog();
    let mut category_ids = Vec::new();
    for (name, description) in CATEGORIES {
        category_ids.push(catalog.create_category(name, Some(description)).await?);
    }
    println!("✓ {} categories created", category_ids.len());

    // Catalog with per-size stock
    let mut product_count = 0;
    for (idx, (name, brand, price_cents, category_idx, slug)) in SNEAKERS.iter().enumerate() {
        let product_id = catalog
            .create_product(&NewProduct {
                name: name.to_string(),
                brand: Some(brand.to_string()),
                description: None,
                price_cents: *price_cents,
                image_url: Some(format!("/images/{}.jpg", slug)),
                category_id: Some(category_ids[*category_idx]),
            })
            .await?;

        for (size_idx, size) in SIZES.iter().enumerate() {
            // Deterministic spread of 0-12 per size, some pairs sold out
            let stock = ((idx * 7 + size_idx * 3) % 13) as i64;
            catalog.set_stock(product_id, size, stock).await?;
        }

        product_count += 1;
    }

    println!("✓ {} products with per-size stock created", product_count);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}
