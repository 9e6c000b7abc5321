use std::{collections::BTreeMap, fmt::Write, path::PathBuf};

const UP_SUFFIX: &str = ".up.sql";
const DOWN_SUFFIX: &str = ".down.sql";

fn main() {
    println!("cargo::rerun-if-changed=migrations");

    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let out = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("migrations.rs");

    std::fs::write(&out, render(&collect(&dir))).unwrap();
    println!("cargo::rustc-env=MIGRATIONS={}", out.display());
}

#[derive(Default)]
struct Scripts {
    up: String,
    down: String,
}

fn collect(dir: &PathBuf) -> BTreeMap<String, Scripts> {
    let mut out = BTreeMap::<String, Scripts>::new();
    for entry in dir.read_dir().unwrap() {
        let path = entry.unwrap().path();
        let Some(file_name) = path.file_name().and_then(|x| x.to_str()) else {
            continue;
        };
        if let Some(name) = file_name.strip_suffix(UP_SUFFIX) {
            out.entry(name.into()).or_default().up = std::fs::read_to_string(&path).unwrap();
        } else if let Some(name) = file_name.strip_suffix(DOWN_SUFFIX) {
            out.entry(name.into()).or_default().down = std::fs::read_to_string(&path).unwrap();
        }
    }
    out
}

fn render(migrations: &BTreeMap<String, Scripts>) -> String {
    let mut out = String::from("&[");
    for (name, Scripts { up, down }) in migrations {
        write!(out, "Migration{{name:{name:?},up:{up:?},down:{down:?}}},").unwrap();
    }
    out.push(']');
    out
}
