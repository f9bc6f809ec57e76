use std::env;
use std::path::MAIN_SEPARATOR;
use super::{environ, get, snapshot, NAMES};
use super::system;

#[test]
fn platform_properties() {
    let system = system::system().unwrap();

    assert_eq!(Some(system.name),    get("os.name"));
    assert_eq!(Some(system.version), get("os.version"));
    assert_eq!(Some(system.arch),    get("os.arch"));
}

#[test]
fn undefined_property() {
    env::remove_var("nonexistent.key");
    assert_eq!(None, get("nonexistent.key"));
}

#[test]
fn environment_passthrough() {
    env::set_var("HOSTPROP_TEST_TOKEN", "sage");
    assert_eq!(Some("sage".to_owned()), get("HOSTPROP_TEST_TOKEN"));

    env::remove_var("HOSTPROP_TEST_TOKEN");
    assert_eq!(None, get("HOSTPROP_TEST_TOKEN"));

    if let Ok(path) = env::var("PATH") {
        assert_eq!(Some(path), get("PATH"));
    }
}

#[test]
fn reserved_names_not_shadowed() {
    let arch = get("os.arch");

    env::set_var("os.arch", "quantum");
    assert_eq!(arch, get("os.arch"));
    env::remove_var("os.arch");
}

#[test]
fn idempotent_reads() {
    for name in NAMES {
        assert_eq!(get(name), get(name));
    }
}

#[test]
fn snapshot_agrees_with_get() {
    let snapshot = snapshot();

    assert!(snapshot.contains_key("os.name"));

    for (name, value) in snapshot {
        assert_eq!(Some(value), get(&name));
    }
}

#[test]
fn separators() {
    assert_eq!(Some(MAIN_SEPARATOR.to_string()), get("file.separator"));
    assert!(get("path.separator").is_some());
    assert!(get("line.separator").is_some());
}

#[test]
fn current_dir() {
    let dir = env::current_dir().unwrap();
    assert_eq!(Some(dir.to_string_lossy().into_owned()), get("user.dir"));
}

#[test]
fn environ_matches_host() {
    if let Ok(path) = env::var("PATH") {
        assert_eq!(Some(&path), environ().get("PATH"));
    }
}
