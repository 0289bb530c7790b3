/// JavaScript emitter for the `config.js` globals.
mod emit;
mod options;
mod writer;

pub use emit::{emit, emit_with};
pub use options::{EmitOptions, Layout, Quoting};
pub use writer::{escape_js_single, CodeWriter};
