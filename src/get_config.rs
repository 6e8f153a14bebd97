use std::path::Path;

use tokio::fs::read_to_string;

use crate::smoke_config::SmokeConfig;

pub async fn get_config(config_path: impl AsRef<Path>) -> anyhow::Result<SmokeConfig> {
    let config = read_to_string(config_path).await?;
    let config = serde_json::from_str::<SmokeConfig>(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::get_config;

    #[tokio::test]
    async fn missing_config_file_is_an_error() {
        assert!(get_config("/definitely/not/a/config.json").await.is_err());
    }
}
