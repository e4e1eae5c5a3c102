//! Metadata commands.

use super::{Mode, Session};
use crate::cli::{MetaGetArgs, MetaSetArgs, PathArgs};
use lockrec::{LockError, Result};

/// Print `key=value` lines. A record that never had metadata prints nothing.
pub(super) fn cmd_meta_list(session: &Session, args: PathArgs) -> Result<()> {
    let lines = session.run(&args.path, Mode::Read, |handle| {
        match handle.get_metadata_all() {
            Ok(metadata) => Ok(metadata
                .iter()
                .map(|(key, value)| format!("{}={}", key, String::from_utf8_lossy(value)))
                .collect::<Vec<_>>()),
            Err(LockError::MetadataNil) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    })?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

pub(super) fn cmd_meta_get(session: &Session, args: MetaGetArgs) -> Result<()> {
    let value = session.run(&args.path, Mode::Read, |handle| {
        handle.get_metadata(&args.key).map(<[u8]>::to_vec)
    })?;
    println!("{}", String::from_utf8_lossy(&value));
    Ok(())
}

pub(super) fn cmd_meta_set(session: &Session, args: MetaSetArgs) -> Result<()> {
    session.run(&args.path, Mode::Update, |handle| {
        handle.set_metadata(args.key.as_str(), args.value.as_bytes())
    })?;
    Ok(())
}
