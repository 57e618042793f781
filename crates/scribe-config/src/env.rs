use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional fallback via `{{ env.VAR | default("fallback") }}`,
/// used when the variable is unset. Expansion happens on the raw config
/// text before deserialization so config structs stay plain
/// String/SecretString. Lines starting with `#` are passed through
/// unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: the scoped key (e.g. `env.GEMINI_API_KEY`)
        // Group 2: optional default value inside default("...")
        RE.get_or_init(|| {
            Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
                .expect("must be valid regex")
        })
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        // TOML comments keep their placeholders verbatim
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("match always has group 0");
            let key = captures.get(1).expect("regex has mandatory group 1").as_str();
            let fallback = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            let Some(var_name) = key.strip_prefix("env.").filter(|v| !v.contains('.')) else {
                return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
            };

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match fallback {
                    Some(default) => output.push_str(default),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
