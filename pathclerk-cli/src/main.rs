//! Main entry point for the pathclerk CLI.
//!
//! Path algebra commands print their result and never touch the disk.
//! Filesystem commands (`ls`, `copy`, `move`, `delete`, ...) and renames
//! with `--apply` do.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::Accessor;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // The logger is also installed behind the `log` facade so that the
    // library's operation traces show up with --verbose.
    pathclerk::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        format: cli.format.map(Into::into),
    };

    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Split(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Concat(cmd) => cmd.execute(&global),
        Command::Root(cmd) => cmd.execute(Accessor::Root, &global),
        Command::Trail(cmd) => cmd.execute(Accessor::Trail, &global),
        Command::Base(cmd) => cmd.execute(Accessor::Base, &global),
        Command::Basename(cmd) => cmd.execute(Accessor::Basename, &global),
        Command::Ext(cmd) => cmd.execute(Accessor::Ext, &global),
        Command::Depth(cmd) => cmd.execute(Accessor::Depth, &global),
        Command::Deconstruct(cmd) => cmd.execute(&global),
        Command::Bisect(cmd) => cmd.execute(&global),
        Command::Subpath(cmd) => cmd.execute(&global),
        Command::Index(cmd) => cmd.execute(&global),
        Command::Pop(cmd) => cmd.execute(&global),
        Command::Trim(cmd) => cmd.execute(&global),
        Command::Shared(cmd) => cmd.execute(&global),
        Command::Replace(cmd) => cmd.execute(&global),
        Command::Insert(cmd) => cmd.execute(&global),
        Command::Append(cmd) => cmd.execute(&global),
        Command::Remove(cmd) => cmd.execute(&global),
        Command::ChangeBase(cmd) => cmd.execute(&global),
        Command::Increment(cmd) => cmd.execute(&global),
        Command::Rename(cmd) => cmd.execute(&global),
        Command::ChangeBasename(cmd) => cmd.execute(&global),
        Command::ChangeExt(cmd) => cmd.execute(&global),
        Command::Hide(cmd) => cmd.execute(&global),
        Command::Reveal(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Find(cmd) => cmd.execute(&global),
        Command::Search(cmd) => cmd.execute(&global),
        Command::Kind(cmd) => cmd.execute(&global),
        Command::Size(cmd) => cmd.execute(&global),
        Command::Copy(cmd) => cmd.execute(&global),
        Command::Move(cmd) => cmd.execute(&global),
        Command::Delete(cmd) => cmd.execute(&global),
        Command::Mkdir(cmd) => cmd.execute(&global),
        Command::Touch(cmd) => cmd.execute(&global),
        Command::Duplicate(cmd) => cmd.execute(&global),
        #[cfg(unix)]
        Command::Perms(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            // A false check has already printed its answer.
            let message = e.to_string();
            if !message.is_empty() && !global.quiet {
                eprintln!("Error: {message}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
