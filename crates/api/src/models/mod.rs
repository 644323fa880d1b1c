//! Domain models for the FashionCamp API.
//!
//! Row types derive `sqlx::FromRow` and double as domain objects; the typed
//! IDs and `Email` come from `fashioncamp-core` so a `CartId` can never be
//! passed where a `UserId` is expected.

pub mod cart;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartProductView, CartView};
pub use product::Product;
pub use session::Session;
pub use user::User;
