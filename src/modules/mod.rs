pub mod kitchen;
pub mod payment_method;
pub mod restaurant;

mod router;
pub use router::get_router;
