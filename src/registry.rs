use std::io::{self, Write};

use crate::commands;

/// What the loop should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A handler receives the full argument vector (`args[0]` is the command
/// name) and writes all operator-visible text to the given sink. Its only
/// failure mode is a write error, which ends the session.
pub type Handler = fn(&[String], &mut dyn Write) -> io::Result<Flow>;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub run: Handler,
}

/// The command table. Built once at compile time; lookup is exact and
/// case-sensitive.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "help",
        summary: "show this command summary",
        run: commands::help,
    },
    Command {
        name: "list",
        usage: "list",
        summary: "list files in the current directory",
        run: commands::list,
    },
    Command {
        name: "read",
        usage: "read <path>",
        summary: "print the contents of a file",
        run: commands::read,
    },
    Command {
        name: "create",
        usage: "create <path>",
        summary: "create an empty file",
        run: commands::create,
    },
    Command {
        name: "delete",
        usage: "delete <path>",
        summary: "remove a file",
        run: commands::delete,
    },
    Command {
        name: "time",
        usage: "time",
        summary: "print the current date and time",
        run: commands::time,
    },
    Command {
        name: "calc",
        usage: "calc <n1> <op> <n2>",
        summary: "evaluate n1 op n2 (op: + - * / or x)",
        run: commands::calc,
    },
    Command {
        name: "clear",
        usage: "clear",
        summary: "clear the screen",
        run: commands::clear,
    },
    Command {
        name: "exit",
        usage: "exit",
        summary: "leave the shell",
        run: commands::exit,
    },
];

pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}
