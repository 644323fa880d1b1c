//! Product repository for catalog queries.
//!
//! The catalog is read-only here; writes happen through the seeding CLI.

use sqlx::{PgPool, Postgres, QueryBuilder};

use fashioncamp_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List products, optionally filtered by category and/or name substring.
    ///
    /// The substring match is case-insensitive (`ILIKE`). Both filters
    /// combine with AND when present.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, name, category, price, stock, image FROM products",
        );

        let mut prefix = " WHERE ";
        if let Some(category) = category {
            query.push(prefix).push("category = ").push_bind(category);
            prefix = " AND ";
        }
        if let Some(search) = search {
            query
                .push(prefix)
                .push("name ILIKE ")
                .push_bind(format!("%{search}%"));
        }
        query.push(" ORDER BY id");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }

    /// List the distinct categories present in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn categories(&self) -> Result<Vec<String>, RepositoryError> {
        let categories = sqlx::query_scalar::<_, String>(
            r"
            SELECT DISTINCT category
            FROM products
            ORDER BY category
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, category, price, stock, image
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }
}
