use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::{GameConfig, LogConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::Difficulty;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let file_path = get_temp_file_path();
        let mut config = Config::default();
        config.game.remember_mode(tictactoe_common::games::tictactoe::Mode::VsAi(Difficulty::Hard));
        config.game.seed = Some(12);

        get_config_manager(Some(file_path.clone())).set_config(&config).unwrap();
        let loaded = get_config_manager(Some(file_path.clone())).get_config().unwrap();

        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default_config() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_hand_written_yaml_is_accepted() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("game:\n  vs_ai: true\n  difficulty: Medium\n  ai_move_delay_ms: 0\n")
            .unwrap();

        let config = get_config_manager(Some(file_path.clone())).get_config().unwrap();

        assert!(config.game.vs_ai);
        assert_eq!(config.game.difficulty, Difficulty::Medium);
        assert_eq!(config.game.seed, None);
        assert_eq!(config.log, LogConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("game:\n  vs_ai: true\n  difficulty: Hard\n  ai_move_delay_ms: 60000\n")
            .unwrap();

        assert!(get_config_manager(Some(file_path.clone())).get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }
}
