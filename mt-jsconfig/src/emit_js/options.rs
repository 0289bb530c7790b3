//! Knobs for [`emit_with`](super::emit_with). The defaults reproduce the
//! historical `config.js` byte for byte.

/// How string values are placed between the single quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Interpolate as-is. A value containing `'` or a line break yields a
    /// broken script; callers must pass clean values.
    #[default]
    Verbatim,
    /// Escape so any string survives as a JS literal inside `<script>`.
    Escaped,
}

/// Array literal formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// `APERTIUM_LANGS` one entry per line, `MICROSOFT_LANGS` on one line.
    #[default]
    Compatible,
    /// Every language array one entry per line.
    Uniform,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub quoting: Quoting,
    pub layout: Layout,
}

impl EmitOptions {
    pub fn escaped(mut self) -> Self {
        self.quoting = Quoting::Escaped;
        self
    }

    pub fn uniform(mut self) -> Self {
        self.layout = Layout::Uniform;
        self
    }
}
