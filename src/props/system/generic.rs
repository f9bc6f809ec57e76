use std::env::{self, consts};
use anyhow::Result;
use super::{System, User};

pub fn system() -> Result<System> {
    let host = env::var("COMPUTERNAME")
        .or_else(|_| env::var("HOSTNAME"))
        .unwrap_or_default();

    Ok(System {
        name:    consts::OS.to_owned(),
        version: String::new(),
        arch:    consts::ARCH.to_owned(),
        host,
    })
}

pub fn user() -> Result<User> {
    let name = env::var("USERNAME").or_else(|_| env::var("USER"))?;
    let home = env::var("USERPROFILE").or_else(|_| env::var("HOME"))?;

    Ok(User { name, home })
}
