//! Command implementations for lockrec.
//!
//! Each command opens a `LockHandle` on the given path, loads it, applies one
//! operation and saves when the operation changes the record. With
//! `--exclusive` the whole sequence runs under the record's advisory guard.

mod meta;
mod owner;


use crate::cli::{Cli, Command, LockArgs, MetaAction, PathArgs};
use lockrec::{LockHandle, LockOptions, Result};
use std::path::Path;

/// How a command interacts with the record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Load, then run the operation.
    Read,
    /// Load, run the operation, then save.
    Update,
    /// Run the operation without loading; the operation persists on its own.
    Replace,
}

/// Settings shared by every command in one invocation.
#[derive(Debug, Clone, Copy)]
struct Session {
    options: LockOptions,
    exclusive: bool,
}

impl Session {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let mut options = match &cli.config {
            Some(path) => LockOptions::load(path)?,
            None => LockOptions::default(),
        };
        if cli.no_create {
            options = options.with_create_if_not_exists(false);
        }
        Ok(Self {
            options,
            exclusive: cli.exclusive,
        })
    }

    fn run<T, F>(&self, path: &Path, mode: Mode, op: F) -> Result<T>
    where
        F: FnOnce(&mut LockHandle) -> Result<T>,
    {
        let mut handle = LockHandle::with_options(path, self.options);
        let _guard = if self.exclusive {
            Some(handle.exclusive()?)
        } else {
            None
        };

        if mode != Mode::Replace {
            handle.load()?;
        }
        let value = op(&mut handle)?;
        if mode == Mode::Update {
            handle.save()?;
        }
        Ok(value)
    }
}

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let session = Session::from_cli(&cli)?;

    match cli.command {
        Command::Show(args) => cmd_show(&session, args),
        Command::Status(args) => cmd_status(&session, args),
        Command::Lock(args) => cmd_lock(&session, args),
        Command::Unlock(args) => cmd_unlock(&session, args),
        Command::Touch(args) => cmd_touch(&session, args),
        Command::Reset(args) => cmd_reset(&session, args),
        Command::Meta(meta_cmd) => match meta_cmd.action {
            MetaAction::List(args) => meta::cmd_meta_list(&session, args),
            MetaAction::Get(args) => meta::cmd_meta_get(&session, args),
            MetaAction::Set(args) => meta::cmd_meta_set(&session, args),
        },
    }
}

fn cmd_show(session: &Session, args: PathArgs) -> Result<()> {
    let dump = session.run(&args.path, Mode::Read, |handle| Ok(handle.dump()))?;
    println!("{}", dump);
    Ok(())
}

fn cmd_status(session: &Session, args: PathArgs) -> Result<()> {
    let locked = session.run(&args.path, Mode::Read, |handle| Ok(handle.is_locked()))?;
    println!("{}", if locked { "locked" } else { "unlocked" });
    Ok(())
}

fn cmd_lock(session: &Session, args: LockArgs) -> Result<()> {
    session.run(&args.path, Mode::Update, |handle| {
        if args.stamp_owner {
            for (key, value) in owner::owner_stamp() {
                handle.set_metadata(key, value)?;
            }
        }
        handle.lock();
        Ok(())
    })?;
    println!("Locked {}", args.path.display());
    Ok(())
}

fn cmd_unlock(session: &Session, args: PathArgs) -> Result<()> {
    session.run(&args.path, Mode::Update, |handle| {
        handle.unlock();
        Ok(())
    })?;
    println!("Unlocked {}", args.path.display());
    Ok(())
}

fn cmd_touch(session: &Session, args: PathArgs) -> Result<()> {
    session.run(&args.path, Mode::Update, |handle| {
        handle.touch();
        Ok(())
    })?;
    println!("Touched {}", args.path.display());
    Ok(())
}

fn cmd_reset(session: &Session, args: PathArgs) -> Result<()> {
    session.run(&args.path, Mode::Replace, |handle| handle.reset())?;
    println!("Reset {}", args.path.display());
    Ok(())
}
