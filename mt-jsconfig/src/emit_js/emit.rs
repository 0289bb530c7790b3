/// Top-level composition: walks the providers in order and writes one
/// declaration per value present in the context.
use super::options::{EmitOptions, Layout, Quoting};
use super::writer::{escape_js_single, CodeWriter};
use crate::context::ConfigContext;
use crate::provider::Provider;

/// Emit the config script with the historical formatting.
pub fn emit(ctx: &ConfigContext) -> String {
    emit_with(ctx, &EmitOptions::default())
}

/// Emit the config script. Absent values produce no declaration, so an
/// empty context yields an empty string.
pub fn emit_with(ctx: &ConfigContext, opts: &EmitOptions) -> String {
    let mut w = CodeWriter::new();

    for provider in Provider::ALL {
        if let Some(key) = ctx.key(provider) {
            tracing::debug!(provider = provider.as_str(), "emitting api key");
            let literal = quote(provider.key_var(), key, opts.quoting);
            w.line(&format!("var {} = {literal};", provider.key_var()));
        }
        if let Some(langs) = ctx.langs(provider) {
            tracing::debug!(
                provider = provider.as_str(),
                count = langs.len(),
                "emitting language list"
            );
            emit_langs(&mut w, provider, langs, opts);
        }
    }

    w.finish()
}

/// Every entry is followed by a comma, the last one included.
fn emit_langs(w: &mut CodeWriter, provider: Provider, langs: &[String], opts: &EmitOptions) {
    let var = provider.langs_var();
    if multiline(provider, opts.layout) {
        w.open_array(&format!("var {var} ="));
        for lang in langs {
            w.line(&format!("{},", quote(var, lang, opts.quoting)));
        }
        w.close_array();
    } else {
        let items: String = langs
            .iter()
            .map(|lang| format!("{},", quote(var, lang, opts.quoting)))
            .collect();
        w.line(&format!("var {var} = [{items}];"));
    }
}

fn multiline(provider: Provider, layout: Layout) -> bool {
    match layout {
        Layout::Uniform => true,
        Layout::Compatible => provider == Provider::Apertium,
    }
}

fn quote(var: &str, value: &str, quoting: Quoting) -> String {
    match quoting {
        Quoting::Escaped => format!("'{}'", escape_js_single(value)),
        Quoting::Verbatim => {
            if breaks_literal(value) {
                tracing::warn!(var, "value cannot be quoted verbatim; generated script will be invalid");
            }
            format!("'{value}'")
        }
    }
}

/// A backslash only alters the value; these characters end the literal early.
fn breaks_literal(value: &str) -> bool {
    value.contains(['\'', '\n', '\r'])
}
