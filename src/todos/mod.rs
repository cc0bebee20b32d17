mod handlers;
mod store;
mod types;

pub use handlers::*;
pub use store::*;
pub use types::*;
