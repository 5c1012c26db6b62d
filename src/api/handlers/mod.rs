pub mod generate;
pub mod health;

pub use generate::generate_handler;
pub use health::health_handler;
