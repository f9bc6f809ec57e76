use anyhow::{anyhow, Result};
use nix::sys::utsname::uname;
use nix::unistd::{gethostname, Uid, User as Account};
use super::{System, User};

pub fn system() -> Result<System> {
    let uts = uname();

    let mut buf = [0u8; 256];
    let host = gethostname(&mut buf)?.to_str()?.to_owned();

    Ok(System {
        name:    uts.sysname().to_owned(),
        version: uts.release().to_owned(),
        arch:    uts.machine().to_owned(),
        host,
    })
}

pub fn user() -> Result<User> {
    let uid     = Uid::effective();
    let account = Account::from_uid(uid)?.ok_or_else(|| anyhow!("unknown uid {}", uid.as_raw()))?;

    Ok(User {
        name: account.name,
        home: account.dir.to_string_lossy().into_owned(),
    })
}
