//! Emits the `config.js` script that hands machine-translation settings
//! (API keys and supported language lists) to browser-side code.
pub mod context;
pub mod emit_js;
pub mod loader;
pub mod provider;

pub use context::ConfigContext;
pub use emit_js::{emit, emit_with, EmitOptions, Layout, Quoting};
pub use loader::LoadError;
pub use provider::Provider;
