// Watch list inspector
use {
    splr_watch::{
        cdb::{Watch, WatchListDumpIF, WatchListIF, WatchType},
        config::{Config, USAGE, VERSION},
        types::{Logger, WatchError, WatchResult},
    },
    std::{
        env,
        path::{Path, PathBuf},
        process::exit,
    },
};

/// an error and the file it happened on.
type Failure = (WatchError, Option<PathBuf>);

fn main() {
    let mut config = Config::default();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = config.inject_from_args(&args) {
        eprintln!("{e}\n{USAGE}");
        exit(2);
    }
    if config.show_help {
        println!("{USAGE}");
        exit(0);
    }
    if config.show_version {
        println!("splw {VERSION}");
        exit(0);
    }
    let mut logger = match &config.log_file {
        Some(file) => Logger::new(file.to_string_lossy()),
        None => Logger::default(),
    };
    match run(&config, &mut logger) {
        Ok(()) => (),
        Err((e, Some(path))) => {
            eprintln!("splw: {} ({})", e, path.display());
            exit(1);
        }
        Err((e, None)) => {
            eprintln!("splw: {e}");
            exit(1);
        }
    }
}

fn at(path: &Path) -> impl Fn(WatchError) -> Failure + '_ {
    move |e| (e, Some(path.to_path_buf()))
}

fn run(config: &Config, logger: &mut Logger) -> Result<(), Failure> {
    let input = config.watch_file.as_path();
    let log = |e: WatchError| (e, config.log_file.clone());
    let mut ws = Vec::<Watch>::load(input).map_err(at(input))?;
    if !config.quiet_mode {
        logger
            .dump(format!("# read {} watches: {}", ws.len(), summary(&ws)))
            .map_err(log)?;
    }
    if config.sweep {
        let n = ws.sweep_marked_bins();
        if !config.quiet_mode {
            logger
                .dump(format!("# swept {n} marked binary watches"))
                .map_err(log)?;
        }
    }
    if (config.sort || config.check) && ws.iter().any(|w| w.is_idx()) {
        if !config.quiet_mode {
            logger
                .dump("# idx watches have no binary-first order".to_string())
                .map_err(log)?;
        }
        return Err((WatchError::Unsorted, Some(input.to_path_buf())));
    }
    if config.sort {
        ws.sort_bin_first();
    }
    if config.check && !ws.is_bin_first() {
        return Err((WatchError::Unsorted, Some(input.to_path_buf())));
    }
    match &config.output {
        Some(path) => {
            ws.save(path).map_err(at(path))?;
            if !config.quiet_mode {
                logger
                    .dump(format!("# saved to {}", path.display()))
                    .map_err(log)?;
            }
        }
        None => print!("{}", ws.dump_to_string()),
    }
    Ok(())
}

fn summary(ws: &Vec<Watch>) -> String {
    format!(
        "{} clause, {} binary, {} bnn, {} idx",
        ws.count_of(WatchType::Clause),
        ws.count_of(WatchType::Binary),
        ws.count_of(WatchType::Bnn),
        ws.count_of(WatchType::Idx),
    )
}

#[cfg(test)]
mod tests {
    use {super::*, std::fs};

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("splw-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_quiet_idx_list() {
        let input = temp_file("quiet_idx.txt");
        let log = temp_file("quiet_idx.log");
        fs::write(&input, "i 3\nb 2 0 1\n").unwrap();
        let config = Config {
            watch_file: input.clone(),
            log_file: Some(log.clone()),
            quiet_mode: true,
            check: true,
            ..Config::default()
        };
        let mut logger = Logger::new(log.to_string_lossy());
        let result = run(&config, &mut logger);
        drop(logger);
        let logged = fs::read_to_string(&log).unwrap();
        fs::remove_file(&input).ok();
        fs::remove_file(&log).ok();
        assert_eq!(result, Err((WatchError::Unsorted, Some(input))));
        assert_eq!(logged, "");
    }
    #[test]
    fn test_save_failure_names_output() {
        let input = temp_file("save_failure.txt");
        let log = temp_file("save_failure.log");
        let output = temp_file("no_such_dir").join("out.txt");
        fs::write(&input, "b 2 0 1\n").unwrap();
        let config = Config {
            watch_file: input.clone(),
            output: Some(output.clone()),
            log_file: Some(log.clone()),
            ..Config::default()
        };
        let mut logger = Logger::new(log.to_string_lossy());
        let result = run(&config, &mut logger);
        fs::remove_file(&input).ok();
        fs::remove_file(&log).ok();
        assert_eq!(result, Err((WatchError::IOError, Some(output))));
    }
}
