use std::{backtrace::Backtrace, env, fmt, fs, io, path::PathBuf};

use configparser::ini::Ini;
use directories::ProjectDirs;

use crate::classical;

#[derive(Debug)]
pub enum ErrorKind {
    Io(io::Error),
    Ini(String),
}

#[derive(Debug)]
pub struct ErrorImpl {
    kind: ErrorKind,
    backtrace: Option<Backtrace>,
}

#[derive(Debug)]
pub struct Error {
    inner: Box<ErrorImpl>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(err) => err.fmt(f),
            ErrorKind::Ini(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Ini(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        let kind = ErrorKind::Io(err);
        Error::new(kind)
    }
}

impl Error {
    fn new(kind: ErrorKind) -> Error {
        let backtrace = Some(Backtrace::capture());
        let inner = Box::new(ErrorImpl { kind, backtrace });
        Error { inner }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    pub fn backtrace(&mut self) -> Option<Backtrace> {
        self.inner.backtrace.take()
    }

    fn ini(value: String) -> Error {
        let kind = ErrorKind::Ini(value);
        Error::new(kind)
    }
}

/// Resolved configuration.  Everything has a built-in default, so a missing
/// config file is not an error.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    shift: i32,
    keyword: String,
}

impl Config {
    pub fn shift(&self) -> i32 {
        self.shift
    }

    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }
}

struct IniSelector {
    section: &'static str,
    key: &'static str,
}

impl IniSelector {
    const fn new(section: &'static str, key: &'static str) -> IniSelector {
        IniSelector { section, key }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigBuilder {
    maybe_config_dir: Option<PathBuf>,
    shift: i32,
    keyword: String,
}

impl Default for ConfigBuilder {
    fn default() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl ConfigBuilder {
    const NAME: &'static str = "cipherlab";
    const CONFIG_FILE: &'static str = "cipherlab.ini";
    const ENV_CONFIG_DIR: &'static str = "CIPHERLAB_CONFIG_DIR";
    const ENV_SHIFT: &'static str = "CIPHERLAB_SHIFT";
    const ENV_KEYWORD: &'static str = "CIPHERLAB_KEYWORD";
    const INI_SHIFT: IniSelector = IniSelector::new("classical", "shift");
    const INI_KEYWORD: IniSelector = IniSelector::new("classical", "keyword");

    pub fn new() -> ConfigBuilder {
        ConfigBuilder {
            maybe_config_dir: None,
            shift: classical::DEFAULT_SHIFT,
            keyword: String::from(classical::DEFAULT_KEYWORD),
        }
    }

    pub fn with_dirs(
        mut self,
        getenv: &impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> ConfigBuilder {
        if let Ok(config_dir) = getenv(Self::ENV_CONFIG_DIR) {
            self.maybe_config_dir = Some(PathBuf::from(config_dir))
        } else if let Some(dirs) = ProjectDirs::from("", "", Self::NAME) {
            self.maybe_config_dir = Some(dirs.config_dir().to_path_buf())
        }
        self
    }

    pub fn with_config(mut self, maybe_input: Option<String>) -> Result<ConfigBuilder, Error> {
        let input = if let Some(input) = maybe_input {
            input
        } else if let Some(path) = self.config_file() {
            if !path.exists() {
                return Ok(self);
            }
            fs::read_to_string(path)?
        } else {
            return Ok(self);
        };

        let mut config = Ini::new();
        config.read(input).map_err(Error::ini)?;

        if let Some(shift) = config.get(Self::INI_SHIFT.section, Self::INI_SHIFT.key) {
            if let Ok(shift) = shift.parse::<i32>() {
                self.shift = shift
            }
        }

        if let Some(keyword) = config.get(Self::INI_KEYWORD.section, Self::INI_KEYWORD.key) {
            self.keyword = keyword
        }

        Ok(self)
    }

    pub fn with_env(
        mut self,
        getenv: &impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> ConfigBuilder {
        if let Ok(shift) = getenv(Self::ENV_SHIFT) {
            if let Ok(shift) = shift.parse::<i32>() {
                self.shift = shift
            }
        }

        if let Ok(keyword) = getenv(Self::ENV_KEYWORD) {
            self.keyword = keyword
        }

        self
    }

    pub fn build(self) -> Config {
        let shift = self.shift;
        let keyword = self.keyword;
        Config { shift, keyword }
    }

    fn config_file(&self) -> Option<PathBuf> {
        let mut path = self.maybe_config_dir.to_owned()?;
        path.push(Self::CONFIG_FILE);
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use std::env::VarError;

    use super::ConfigBuilder;

    #[test]
    fn with_config_parses_ini() {
        let input = String::from(
            "\
[classical]
shift=7
keyword=lemon
",
        );
        let config =
            ConfigBuilder::new().with_config(Some(input)).expect("should parse").build();
        assert_eq!(7, config.shift());
        assert_eq!("lemon", config.keyword());
    }

    #[test]
    fn with_config_parses_empty_ini() {
        let config =
            ConfigBuilder::new().with_config(Some(String::new())).expect("should parse").build();
        assert_eq!(3, config.shift());
        assert_eq!("key", config.keyword());
    }

    #[test]
    fn with_config_ignores_unparsable_shift() {
        let input = String::from(
            "\
[classical]
shift=nope
",
        );
        let config =
            ConfigBuilder::new().with_config(Some(input)).expect("should parse").build();
        assert_eq!(3, config.shift());
    }

    #[test]
    fn with_config_skips_missing_dir() {
        let builder = ConfigBuilder::new().with_config(None).expect("should skip");
        assert_eq!(ConfigBuilder::new(), builder);
    }

    #[test]
    fn with_env_parses_env() {
        let getenv = |s| match s {
            ConfigBuilder::ENV_SHIFT => Ok(String::from("11")),
            ConfigBuilder::ENV_KEYWORD => Ok(String::from("fortification")),
            _ => Err(VarError::NotPresent),
        };
        let config = ConfigBuilder::new().with_env(&getenv).build();
        assert_eq!(11, config.shift());
        assert_eq!("fortification", config.keyword());
    }

    #[test]
    fn with_env_overrides_config() {
        let input = String::from(
            "\
[classical]
shift=7
",
        );
        let getenv = |s| match s {
            ConfigBuilder::ENV_SHIFT => Ok(String::from("19")),
            _ => Err(VarError::NotPresent),
        };
        let config = ConfigBuilder::new()
            .with_config(Some(input))
            .expect("should parse")
            .with_env(&getenv)
            .build();
        assert_eq!(19, config.shift());
    }
}
