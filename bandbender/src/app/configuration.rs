use crate::profile::DEFAULT_NUMBER_OF_POINTS;
use color_eyre::eyre::eyre;
use config::{Config, ConfigError, Environment, File};
use serde::{de::DeserializeOwned, Deserialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration<T> {
    pub(crate) global: GlobalConfiguration<T>,
    pub(crate) mesh: MeshConfiguration,
    pub(crate) output: OutputConfiguration,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GlobalConfiguration<T> {
    /// Used for devices which do not set their own temperature, in K
    pub(crate) temperature: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeshConfiguration {
    pub(crate) number_of_points: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutputConfiguration {
    pub(crate) directory: PathBuf,
}

impl<T: DeserializeOwned> Configuration<T> {
    pub(crate) fn build() -> color_eyre::Result<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::from_directory(Path::new(".config"), &run_mode)
            .map_err(|e| eyre!(format!("Failed to deserialize the config file: {:?}", e)))
    }

    /// Layers `default.toml` and `{run_mode}.toml` from `directory` over the built-in defaults,
    /// with `BANDBENDER__SECTION__KEY` environment variables taking precedence over both
    pub(crate) fn from_directory(directory: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("global.temperature", 300.0)?
            .set_default("mesh.number_of_points", DEFAULT_NUMBER_OF_POINTS as i64)?
            .set_default("output.directory", "results")?
            // The settings shipped with the repository
            .add_source(File::from(directory.join("default")).required(false))
            // The override settings which may be set by the user, optional
            .add_source(File::from(directory.join(run_mode)).required(false))
            .add_source(Environment::with_prefix("BANDBENDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use super::Configuration;
    use std::path::PathBuf;

    fn scratch_directory() -> PathBuf {
        let directory = std::env::temp_dir().join(format!("bandbender-{}", rand::random::<u64>()));
        std::fs::create_dir_all(&directory).unwrap();
        directory
    }

    #[test]
    fn defaults_apply_unless_the_environment_overrides_them() {
        let directory = scratch_directory();
        let config: Configuration<f64> =
            Configuration::from_directory(directory.as_path(), "development").unwrap();
        assert_eq!(config.mesh.number_of_points, 1000);
        assert_eq!(config.output.directory, PathBuf::from("results"));
        approx::assert_relative_eq!(config.global.temperature, 300.);

        std::env::set_var("BANDBENDER__GLOBAL__TEMPERATURE", "77");
        let overridden: Configuration<f64> =
            Configuration::from_directory(directory.as_path(), "development").unwrap();
        std::env::remove_var("BANDBENDER__GLOBAL__TEMPERATURE");
        approx::assert_relative_eq!(overridden.global.temperature, 77.);
    }

    #[test]
    fn run_mode_overrides_the_shipped_settings() {
        let directory = scratch_directory();
        std::fs::write(
            directory.as_path().join("default.toml"),
            "[mesh]\nnumber_of_points = 250\n\n[output]\ndirectory = \"out\"\n",
        )
        .unwrap();
        std::fs::write(
            directory.as_path().join("testing.toml"),
            "[output]\ndirectory = \"elsewhere\"\n",
        )
        .unwrap();

        let config: Configuration<f64> =
            Configuration::from_directory(directory.as_path(), "testing").unwrap();
        assert_eq!(config.mesh.number_of_points, 250);
        assert_eq!(config.output.directory, PathBuf::from("elsewhere"));
    }
}
