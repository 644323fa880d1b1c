//! Catalog seeding command.
//!
//! Handlers never write to `products`; this command is the only producer.
//! Seeding is skipped when the catalog already has rows, so it is safe to
//! run on every deploy.

use super::CliError;

/// Demo catalog. Prices are integer cents.
const CATALOG: &[(&str, &str, i32, i32, &str)] = &[
    (
        "roberval",
        "Shirts",
        4990,
        25,
        "https://images.fashioncamp.dev/products/roberval.jpg",
    ),
    (
        "camiseta basica",
        "Shirts",
        2990,
        40,
        "https://images.fashioncamp.dev/products/camiseta-basica.jpg",
    ),
    (
        "vestido longo",
        "Dresses",
        12990,
        12,
        "https://images.fashioncamp.dev/products/vestido-longo.jpg",
    ),
    (
        "saia plissada",
        "Skirts",
        7990,
        18,
        "https://images.fashioncamp.dev/products/saia-plissada.jpg",
    ),
    (
        "jaqueta jeans",
        "Jackets",
        15990,
        8,
        "https://images.fashioncamp.dev/products/jaqueta-jeans.jpg",
    ),
    (
        "calca cargo",
        "Pants",
        9990,
        20,
        "https://images.fashioncamp.dev/products/calca-cargo.jpg",
    ),
    (
        "leque de porcelana",
        "China",
        5990,
        15,
        "https://images.fashioncamp.dev/products/leque-de-porcelana.jpg",
    ),
];

/// Insert the demo catalog if the `products` table is empty.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await?;

    if existing > 0 {
        tracing::info!("Catalog already has {existing} products, skipping seed");
        return Ok(());
    }

    for (name, category, price, stock, image) in CATALOG {
        sqlx::query(
            "INSERT INTO products (name, category, price, stock, image) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(stock)
        .bind(image)
        .execute(&pool)
        .await?;
    }

    tracing::info!("Seeded {} products", CATALOG.len());
    Ok(())
}
