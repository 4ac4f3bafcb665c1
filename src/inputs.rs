use std::path::PathBuf;

use clap::value_t;
use clap::{App, Arg};

use crate::config::{Config, ConfigError};

/// Command line arguments of the aim trainer
#[derive(Debug)]
pub struct InputArguments {
    config_path: Option<PathBuf>,
    target_count: Option<usize>,
    seed: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
    log_level: Option<log::LevelFilter>,
    dump_config: bool,
}

impl InputArguments {
    fn get_app() -> App<'static, 'static> {
        App::new("aim_trainer")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Shoot the spheres before they move")
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .short("c")
                    .help("Path to a json config file")
                    .takes_value(true)
                    .value_name("file"),
            )
            .arg(
                Arg::with_name("targets")
                    .long("targets")
                    .short("n")
                    .help("Number of targets")
                    .takes_value(true)
                    .value_name("count"),
            )
            .arg(
                Arg::with_name("seed")
                    .long("seed")
                    .short("s")
                    .help("Seed for target placement")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("width")
                    .long("width")
                    .short("w")
                    .help("Window width")
                    .requires("height")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("height")
                    .long("height")
                    .short("h")
                    .help("Window height")
                    .requires("width")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("log-level")
                    .long("log-level")
                    .help("Log level, overrides RUST_LOG")
                    .takes_value(true)
                    .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                    .case_insensitive(true),
            )
            .arg(
                Arg::with_name("dump-config")
                    .long("dump-config")
                    .help("Print the effective config as json and exit"),
            )
    }

    fn from_matches(matches: clap::ArgMatches) -> Result<Self, clap::Error> {
        // only validate the values that were actually given
        fn optional<T: std::str::FromStr>(
            matches: &clap::ArgMatches,
            name: &str,
        ) -> Result<Option<T>, clap::Error> {
            if matches.is_present(name) {
                value_t!(matches, name, T).map(Some)
            } else {
                Ok(None)
            }
        }

        Ok(InputArguments {
            config_path: matches.value_of("config").map(PathBuf::from),
            target_count: optional(&matches, "targets")?,
            seed: optional(&matches, "seed")?,
            width: optional(&matches, "width")?,
            height: optional(&matches, "height")?,
            log_level: optional(&matches, "log-level")?,
            dump_config: matches.is_present("dump-config"),
        })
    }

    /// read the input arguments from the command line arguments,
    /// exits the process on malformed arguments
    pub fn read_cli() -> Self {
        Self::from_matches(Self::get_app().get_matches()).unwrap_or_else(|error| error.exit())
    }

    pub fn read_string(args: &str) -> Result<Self, clap::Error> {
        Self::from_matches(
            Self::get_app()
                .setting(clap::AppSettings::NoBinaryName)
                .get_matches_from_safe(args.split_whitespace())?,
        )
    }

    pub fn get_config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn get_target_count(&self) -> Option<usize> {
        self.target_count
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_window_size(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    pub fn get_log_level(&self) -> Option<log::LevelFilter> {
        self.log_level
    }

    pub fn get_dump_config(&self) -> bool {
        self.dump_config
    }

    /// Load the config file if one was given (defaults otherwise) and
    /// apply the overrides given on the command line.
    pub fn generate_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.get_config_path() {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(count) = self.get_target_count() {
            config.targets.count = count;
        }
        if let Some(seed) = self.get_seed() {
            config.targets.seed = Some(seed);
        }
        if let Some((width, height)) = self.get_window_size() {
            config.window.width = width;
            config.window.height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_arguments_empty() {
        let args = InputArguments::read_string("").unwrap();
        assert!(args.get_config_path().is_none());
        assert!(args.get_log_level().is_none());
        assert!(!args.get_dump_config());
        assert_eq!(args.generate_config().unwrap(), Config::default());
    }

    #[test]
    fn input_arguments_overrides() {
        let args = InputArguments::read_string(
            "--targets 3 --seed 42 -w 800 -h 600 --log-level DEBUG --dump-config",
        )
        .unwrap();
        assert_eq!(args.get_target_count(), Some(3));
        assert_eq!(args.get_seed(), Some(42));
        assert_eq!(args.get_window_size(), Some((800, 600)));
        assert_eq!(args.get_log_level(), Some(log::LevelFilter::Debug));
        assert!(args.get_dump_config());

        let config = args.generate_config().unwrap();
        assert_eq!(config.targets.count, 3);
        assert_eq!(config.targets.seed, Some(42));
        assert_eq!((config.window.width, config.window.height), (800, 600));
    }

    #[test]
    fn input_arguments_width_requires_height() {
        assert!(InputArguments::read_string("--width 800").is_err());
    }

    #[test]
    fn input_arguments_bad_number() {
        assert!(InputArguments::read_string("--targets many").is_err());
        assert!(InputArguments::read_string("--seed -1").is_err());
    }

    #[test]
    fn input_arguments_missing_config_file() {
        let args = InputArguments::read_string("--config /nonexistent/aim_trainer.json").unwrap();
        assert!(matches!(args.generate_config(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn input_arguments_config_file() {
        let path = std::env::temp_dir().join(format!(
            "aim_trainer_input_arguments_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "targets": { "count": 7, "seed": 1 } }"#).unwrap();

        let args =
            InputArguments::read_string(&format!("--config {} --seed 2", path.display())).unwrap();
        let config = args.generate_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.targets.count, 7);
        assert_eq!(config.targets.seed, Some(2));
    }
}
