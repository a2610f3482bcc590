//! Pages
//!
//! Top-level page components, one per route.

pub mod add_product;
pub mod list_detail;
pub mod lists;
pub mod login;
pub mod register;

pub use add_product::AddProduct;
pub use list_detail::ListDetail;
pub use lists::Lists;
pub use login::Login;
pub use register::Register;
