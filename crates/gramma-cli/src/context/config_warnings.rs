use gramma_config::GrammaConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &GrammaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &GrammaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.llm.is_configured() && has_single_underscore_key(&env_keys, "GRAMMA_LLM") {
        warnings.push(
            "LLM config appears default while GRAMMA_LLM* env vars exist. Use double underscores (example: GRAMMA_LLM__API_KEY)."
                .to_string(),
        );
    }

    for (section, example) in [
        ("BACKEND", "GRAMMA_BACKEND__URL"),
        ("ASSISTANT", "GRAMMA_ASSISTANT__URL"),
        ("SERVER", "GRAMMA_SERVER__BIND"),
    ] {
        if has_single_underscore_key(&env_keys, &format!("GRAMMA_{section}")) {
            warnings.push(format!(
                "GRAMMA_{section}_* env vars are ignored. Use double underscores (example: {example})."
            ));
        }
    }

    warnings
}

/// A key like `GRAMMA_LLM_API_KEY` instead of `GRAMMA_LLM__API_KEY`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
