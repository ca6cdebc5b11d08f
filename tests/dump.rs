extern crate splr_watch;
use {
    splr_watch::{cdb::*, types::*},
    std::{env, fs, path::PathBuf},
};

fn temp_file(name: &str) -> PathBuf {
    env::temp_dir().join(format!("splr-watch-{}-{name}", std::process::id()))
}

#[test]
fn save_then_load() {
    let mut ws: Vec<Watch> = Vec::new();
    ws.register_clause(ClOffset::try_from(77u64).unwrap(), Lit::from(-5i32));
    ws.register_binary(Lit::from(3i32), true, BinId::MAX);
    ws.register_bnn(2, BnnPropType::Out);
    ws.register_idx(11);
    ws[1].mark_bin();
    let path = temp_file("save_then_load.txt");
    ws.save(&path).unwrap();
    let loaded = Vec::<Watch>::load(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(loaded, ws);
}

#[test]
fn load_reports_the_line() {
    let path = temp_file("load_reports_the_line.txt");
    fs::write(&path, "# header\nb 1 0 3\nb 2 0\n").unwrap();
    let result = Vec::<Watch>::load(&path);
    fs::remove_file(&path).ok();
    assert_eq!(result, Err(WatchError::ParseError(3)));
    assert_eq!(
        Vec::<Watch>::load(&temp_file("no_such_file.txt")),
        Err(WatchError::IOError)
    );
}

#[test]
fn sweep_and_sort_a_loaded_list() {
    let text = "c 10 1\nb 4 1 2 m\nn 0 pos\nb -4 0 8\nb 4 0 5\n";
    let mut ws = Vec::<Watch>::from_text(text).unwrap();
    assert_eq!(ws.sweep_marked_bins(), 1);
    ws.sort_bin_first();
    assert_eq!(ws.dump_to_string(), "b -4 0 8\nb 4 0 5\nc 10 1\nn 0 pos\n");
}

#[test]
fn save_then_load_abstractions() {
    let ws: Vec<Watch> = (0..4u32)
        .map(|i| Watch::new_clause(ClOffset::try_from(i as u64 + 5).unwrap(), ClauseAbstraction(i)))
        .chain([Watch::default()])
        .collect();
    let path = temp_file("save_then_load_abstractions.txt");
    ws.save_with_abst(&path).unwrap();
    let with_abst = Vec::<Watch>::load(&path);
    ws.save(&path).unwrap();
    let with_blocker = Vec::<Watch>::load(&path);
    fs::remove_file(&path).ok();
    assert_eq!(with_abst, Ok(ws.clone()));
    assert_eq!(with_blocker, Ok(ws));
}
