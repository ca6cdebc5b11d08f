/// Crate `config` provides the configuration of `splw`.
use {
    crate::types::{WatchError, WatchResult},
    std::path::PathBuf,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
splw: inspect and normalize a watch list dump

USAGE:
  splw [FLAGS] [OPTIONS] <watch-file>

FLAGS:
  -q, --quiet    Disable any progress message
  -s, --sort     Sort in the binary-first order
  -w, --sweep    Remove marked binary watches
  -c, --check    Fail if the result isn't in the binary-first order
  -h, --help     Print help information
  -V, --version  Print version information

OPTIONS:
  -o, --output <file>  Output filename (stdout by default)
  -l, --log <file>     Log filename (stdout by default)";

/// Configuration built from command line options
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// watch list dump to read
    pub watch_file: PathBuf,
    /// where the result goes; stdout if `None`
    pub output: Option<PathBuf>,
    /// where messages go; stdout if `None`
    pub log_file: Option<PathBuf>,
    /// Disable any progress message
    pub quiet_mode: bool,
    pub sort: bool,
    pub sweep: bool,
    pub check: bool,
    /// `--help` or `--version` was given
    pub show_help: bool,
    pub show_version: bool,
}

impl Config {
    /// update by command line arguments (without the program name).
    pub fn inject_from_args(&mut self, args: &[String]) -> WatchResult<()> {
        let mut iter = args.iter();
        let mut target: Option<PathBuf> = None;
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-q" | "--quiet" => self.quiet_mode = true,
                "-s" | "--sort" => self.sort = true,
                "-w" | "--sweep" => self.sweep = true,
                "-c" | "--check" => self.check = true,
                "-h" | "--help" => self.show_help = true,
                "-V" | "--version" => self.show_version = true,
                "-o" | "--output" => {
                    let Some(file) = iter.next() else {
                        return Err(WatchError::InvalidOption(arg.to_string()));
                    };
                    self.output = Some(PathBuf::from(file));
                }
                "-l" | "--log" => {
                    let Some(file) = iter.next() else {
                        return Err(WatchError::InvalidOption(arg.to_string()));
                    };
                    self.log_file = Some(PathBuf::from(file));
                }
                _ if arg.starts_with('-') => {
                    return Err(WatchError::InvalidOption(arg.to_string()));
                }
                _ if target.is_some() => {
                    return Err(WatchError::InvalidOption(arg.to_string()));
                }
                _ => target = Some(PathBuf::from(arg)),
            }
        }
        match target {
            Some(path) => self.watch_file = path,
            None if self.show_help || self.show_version => (),
            None => return Err(WatchError::InvalidOption("<watch-file>".to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inject_from_args() {
        let mut config = Config::default();
        assert!(config
            .inject_from_args(&args(&["-s", "--sweep", "-o", "out.txt", "ws.txt"]))
            .is_ok());
        assert!(config.sort && config.sweep && !config.check);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.watch_file, PathBuf::from("ws.txt"));
    }
    #[test]
    fn test_bad_args() {
        let mut config = Config::default();
        assert_eq!(
            config.inject_from_args(&args(&["--frobnicate", "ws.txt"])),
            Err(WatchError::InvalidOption("--frobnicate".to_string()))
        );
        let mut config = Config::default();
        assert!(config.inject_from_args(&args(&["-o"])).is_err());
        let mut config = Config::default();
        assert!(config.inject_from_args(&args(&[])).is_err());
        let mut config = Config::default();
        assert!(config.inject_from_args(&args(&["--help"])).is_ok());
    }
}
