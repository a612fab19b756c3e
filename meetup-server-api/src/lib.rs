pub mod html;
pub mod http;

pub use http::{AppState, router, run};
