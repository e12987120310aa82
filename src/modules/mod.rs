pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod menu;
pub mod payment;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;
