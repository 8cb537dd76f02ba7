use crate::scripts::catalog::ScriptCatalog;
use crate::scripts::error::ScriptError;
use crate::version::context::VersionContext;

/// Replaces `{{run NAME}}`, `{{run-bg NAME}}` and `{{call NAME}}` with the
/// matching script invocation. Anything else between braces is left as is.
pub fn expand_placeholders(
    text: &str,
    scripts: &ScriptCatalog,
    ctx: &VersionContext,
) -> Result<String, ScriptError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let inner = &rest[start + 2..start + len];
        let words: Vec<&str> = inner.split_whitespace().collect();
        let replacement = match words.as_slice() {
            ["run", name] => Some(scripts.run_it(name, false, ctx)?),
            ["run-bg", name] => Some(scripts.run_it(name, true, ctx)?),
            ["call", name] => Some(scripts.call_script(name)?),
            _ => None,
        };

        out.push_str(&rest[..start]);
        match replacement {
            Some(expanded) => out.push_str(&expanded),
            None => out.push_str(&rest[start..start + len + 2]),
        }
        rest = &rest[start + len + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
