#![cfg(not(windows))]
/// Integration test: evaluates generated config scripts in embedded QuickJS
/// and reads the globals back out.
use mt_jsconfig::{emit, emit_with, ConfigContext, EmitOptions};
use quickjs_rs::Context;

fn eval_config(code: &str) -> Context {
    let ctx = Context::new().expect("create quickjs context");
    ctx.eval(code)
        .unwrap_or_else(|e| panic!("QuickJS eval error: {e:?}\n{code}"));
    ctx
}

fn global_json(js: &Context, name: &str) -> String {
    js.eval_as(&format!(
        "typeof {name} === \"undefined\" ? \"undefined\" : JSON.stringify({name})"
    ))
    .unwrap_or_else(|e| panic!("reading {name}: {e:?}"))
}

#[test]
fn test_full_context_defines_all_globals() {
    let ctx = ConfigContext::new()
        .apertium_api_key("apertium-key")
        .apertium_langs(["en", "es", "ca"])
        .microsoft_api_key("ms-key")
        .microsoft_langs(["cs", "de", "zh-CHT"]);

    let js = eval_config(&emit(&ctx));
    assert_eq!(global_json(&js, "APERTIUM_API_KEY"), "\"apertium-key\"");
    assert_eq!(global_json(&js, "APERTIUM_LANGS"), "[\"en\",\"es\",\"ca\"]");
    assert_eq!(global_json(&js, "MICROSOFT_API_KEY"), "\"ms-key\"");
    assert_eq!(
        global_json(&js, "MICROSOFT_LANGS"),
        "[\"cs\",\"de\",\"zh-CHT\"]"
    );
}

#[test]
fn test_absent_values_stay_undefined() {
    let ctx = ConfigContext::new().microsoft_langs(["en"]);

    let js = eval_config(&emit(&ctx));
    assert_eq!(global_json(&js, "APERTIUM_API_KEY"), "undefined");
    assert_eq!(global_json(&js, "APERTIUM_LANGS"), "undefined");
    assert_eq!(global_json(&js, "MICROSOFT_API_KEY"), "undefined");
    assert_eq!(global_json(&js, "MICROSOFT_LANGS"), "[\"en\"]");
}

#[test]
fn test_empty_lists_are_empty_arrays() {
    let ctx = ConfigContext::new()
        .apertium_langs(Vec::<String>::new())
        .microsoft_langs(Vec::<String>::new());

    let js = eval_config(&emit(&ctx));
    assert_eq!(global_json(&js, "APERTIUM_LANGS"), "[]");
    assert_eq!(global_json(&js, "MICROSOFT_LANGS"), "[]");
}

#[test]
fn test_escaped_values_survive_evaluation() {
    let ctx = ConfigContext::new()
        .apertium_api_key("it's\\a\nkey")
        .microsoft_langs(["</script>"]);

    let code = emit_with(&ctx, &EmitOptions::default().escaped().uniform());
    let js = eval_config(&code);
    assert_eq!(
        global_json(&js, "APERTIUM_API_KEY"),
        "\"it's\\\\a\\nkey\""
    );
    assert_eq!(global_json(&js, "MICROSOFT_LANGS"), "[\"</script>\"]");
}

#[test]
fn test_verbatim_quote_breaks_script() {
    let ctx = ConfigContext::new().apertium_api_key("it's");

    let js = Context::new().expect("create quickjs context");
    assert!(js.eval(&emit(&ctx)).is_err());
}
