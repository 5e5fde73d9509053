use vk_config::VaultConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VaultConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VaultConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.notion.token.is_empty() && has_env_prefix(&env_keys, "VAULTKEEPER_NOTION") {
        warnings.push(
            "Notion config appears default while VAULTKEEPER_NOTION* env vars exist. Use double underscores (example: VAULTKEEPER_NOTION__TOKEN)."
                .to_string(),
        );
    }

    let stray = env_keys
        .iter()
        .filter(|key| key.starts_with("NOTION_") && !is_known_notion_key(key))
        .cloned()
        .collect::<Vec<_>>();
    if !config.notion.is_configured() && !stray.is_empty() {
        warnings.push(format!(
            "Notion config is incomplete and unrecognized variables are set: {}. Expected NOTION_TOKEN, NOTION_PAGE_ID or NOTION_DATABASE_ID.",
            stray.join(", ")
        ));
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn is_known_notion_key(key: &str) -> bool {
    matches!(key, "NOTION_TOKEN" | "NOTION_PAGE_ID" | "NOTION_DATABASE_ID")
}
