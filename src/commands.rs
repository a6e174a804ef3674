use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::registry::{Flow, COMMANDS};

pub fn help(_args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    writeln!(out, "available commands:")?;
    for cmd in COMMANDS {
        writeln!(out, "  {:<22} {}", cmd.usage, cmd.summary)?;
    }
    Ok(Flow::Continue)
}

pub fn list(_args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    list_dir(Path::new("."), out)?;
    Ok(Flow::Continue)
}

// `read_dir` already skips `.` and `..`.
fn list_dir(dir: &Path, out: &mut dyn Write) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            writeln!(out, "error: cannot open directory: {e}")?;
            return Ok(());
        }
    };
    for entry in entries {
        match entry {
            Ok(entry) => writeln!(out, "{}", entry.file_name().to_string_lossy())?,
            Err(e) => writeln!(out, "error: cannot read directory entry: {e}")?,
        }
    }
    Ok(())
}

pub fn read(args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    if args.len() != 2 {
        writeln!(out, "usage: read <path>")?;
        return Ok(Flow::Continue);
    }
    match fs::read(&args[1]) {
        Ok(contents) => out.write_all(&contents)?,
        Err(e) => writeln!(out, "error: cannot open '{}': {e}", args[1])?,
    }
    Ok(Flow::Continue)
}

pub fn create(args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    if args.len() != 2 {
        writeln!(out, "usage: create <path>")?;
        return Ok(Flow::Continue);
    }
    if let Err(e) = fs::File::create(&args[1]) {
        writeln!(out, "error: cannot create '{}': {e}", args[1])?;
    }
    Ok(Flow::Continue)
}

pub fn delete(args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    if args.len() != 2 {
        writeln!(out, "usage: delete <path>")?;
        return Ok(Flow::Continue);
    }
    if let Err(e) = fs::remove_file(&args[1]) {
        writeln!(out, "error: cannot delete '{}': {e}", args[1])?;
    }
    Ok(Flow::Continue)
}

pub fn time(_args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    writeln!(out, "{}", format_timestamp(Local::now()))?;
    Ok(Flow::Continue)
}

fn format_timestamp(now: DateTime<Local>) -> String {
    now.format("%d-%m-%Y %H:%M:%S").to_string()
}

pub fn calc(args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    if args.len() != 4 {
        writeln!(out, "usage: calc <n1> <op> <n2>")?;
        return Ok(Flow::Continue);
    }

    // Numbers that fail to parse fall back to 0, a documented
    // simplification inherited from the original command set.
    let n1: f64 = args[1].parse().unwrap_or(0.0);
    let n2: f64 = args[3].parse().unwrap_or(0.0);
    let Some(op) = args[2].chars().next() else {
        writeln!(out, "usage: calc <n1> <op> <n2>")?;
        return Ok(Flow::Continue);
    };

    let result = match op {
        '+' => n1 + n2,
        '-' => n1 - n2,
        '*' | 'x' => n1 * n2,
        '/' => {
            if n2 == 0.0 {
                writeln!(out, "error: division by zero")?;
                return Ok(Flow::Continue);
            }
            n1 / n2
        }
        _ => {
            writeln!(out, "error: unknown operator '{op}' (use +, -, * or /)")?;
            return Ok(Flow::Continue);
        }
    };

    writeln!(out, "Result: {result:.2}")?;
    Ok(Flow::Continue)
}

pub fn clear(_args: &[String], out: &mut dyn Write) -> io::Result<Flow> {
    // ANSI: erase display, then cursor to home.
    write!(out, "\x1b[2J\x1b[1;1H")?;
    out.flush()?;
    Ok(Flow::Continue)
}

pub fn exit(_args: &[String], _out: &mut dyn Write) -> io::Result<Flow> {
    Ok(Flow::Exit)
}
