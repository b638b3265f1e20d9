pub mod analysis_handlers;
pub mod export_handlers;

pub use analysis_handlers::*;
pub use export_handlers::*;
