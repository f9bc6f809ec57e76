use std::collections::BTreeMap;
use std::env;
use std::path::MAIN_SEPARATOR;
use tracing::debug;
use super::system::{self, System, User};

pub const NAMES: &[&str] = &[
    "file.separator",
    "host.name",
    "line.separator",
    "os.arch",
    "os.name",
    "os.version",
    "path.separator",
    "user.dir",
    "user.home",
    "user.name",
];

#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";
#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";

#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";
#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";

pub fn get(name: &str) -> Option<String> {
    match NAMES.contains(&name) {
        true  => builtin(name),
        false => env::var(name).ok(),
    }
}

pub fn snapshot() -> BTreeMap<String, String> {
    NAMES.iter().flat_map(|&name| {
        Some((name.to_owned(), builtin(name)?))
    }).collect()
}

pub fn environ() -> BTreeMap<String, String> {
    env::vars().collect()
}

fn builtin(name: &str) -> Option<String> {
    let value = match name {
        "os.name"        => platform()?.name,
        "os.version"     => platform()?.version,
        "os.arch"        => platform()?.arch,
        "host.name"      => platform()?.host,
        "user.name"      => account()?.name,
        "user.home"      => account()?.home,
        "user.dir"       => dir()?,
        "file.separator" => MAIN_SEPARATOR.to_string(),
        "path.separator" => PATH_SEPARATOR.to_owned(),
        "line.separator" => LINE_SEPARATOR.to_owned(),
        _                => return None,
    };

    // an empty platform value reads as absent
    match value.is_empty() {
        false => Some(value),
        true  => None,
    }
}

fn platform() -> Option<System> {
    match system::system() {
        Ok(system) => Some(system),
        Err(e)     => {
            debug!("platform query failed: {e}");
            None
        },
    }
}

fn account() -> Option<User> {
    match system::user() {
        Ok(user) => Some(user),
        Err(e)   => {
            debug!("account query failed: {e}");
            None
        },
    }
}

fn dir() -> Option<String> {
    let dir = env::current_dir().ok()?;
    Some(dir.to_string_lossy().into_owned())
}
