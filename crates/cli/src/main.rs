#![forbid(unsafe_code)]

use bx_schema::{SchemaError, SchemaStore};
use std::path::PathBuf;

fn usage() -> &'static str {
    "bx_migrate — manage the box factory database schema\n\n\
USAGE:\n\
  bx_migrate [--db PATH] <COMMAND>\n\n\
COMMANDS:\n\
  up [--steps N]              apply pending migrations (all by default)\n\
  down [--steps N | --to V]   revert applied migrations (newest first;\n\
                              default 1, or back to version V exclusive)\n\
  status [--json]             show applied and pending migrations\n\n\
NOTES:\n\
  - The database path defaults to BX_DB, then ./boxfactory.db.\n\
  - Reverting stops with an error at an irreversible migration; the\n\
    schema is left at the last step that could be undone.\n"
}

#[derive(Debug, PartialEq)]
enum Command {
    Up { steps: Option<usize> },
    Down { steps: Option<usize>, to: Option<i64> },
    Status { json: bool },
}

#[derive(Debug)]
struct CliConfig {
    db: PathBuf,
    command: Command,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_args() -> Result<CliConfig, String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", usage());
        std::process::exit(if args.is_empty() { 2 } else { 0 });
    }
    parse_arg_list(&args)
}

fn parse_arg_list(args: &[String]) -> Result<CliConfig, String> {
    let mut db: Option<PathBuf> = env_var("BX_DB").map(PathBuf::from);
    let mut command: Option<Command> = None;

    let mut i = 0usize;
    while i < args.len() {
        let a = args[i].as_str();
        match a {
            "--db" => {
                i += 1;
                let v = args.get(i).ok_or("--db requires PATH")?;
                db = Some(PathBuf::from(v));
            }
            "up" => {
                if command.is_some() {
                    return Err(format!("unexpected argument: {a}"));
                }
                command = Some(Command::Up { steps: None });
            }
            "down" => {
                if command.is_some() {
                    return Err(format!("unexpected argument: {a}"));
                }
                command = Some(Command::Down {
                    steps: None,
                    to: None,
                });
            }
            "status" => {
                if command.is_some() {
                    return Err(format!("unexpected argument: {a}"));
                }
                command = Some(Command::Status { json: false });
            }
            "--steps" => {
                i += 1;
                let v = args.get(i).ok_or("--steps requires N")?;
                let n = v
                    .parse::<usize>()
                    .map_err(|_| "--steps must be an integer")?;
                match command {
                    Some(Command::Up { ref mut steps })
                    | Some(Command::Down { ref mut steps, .. }) => *steps = Some(n),
                    _ => return Err("--steps is only valid after `up` or `down`".into()),
                }
            }
            "--to" => {
                i += 1;
                let v = args.get(i).ok_or("--to requires VERSION")?;
                let version = v
                    .parse::<i64>()
                    .map_err(|_| "--to must be a migration version (YYYYMMDDHHMMSS)")?;
                match command {
                    Some(Command::Down { ref mut to, .. }) => *to = Some(version),
                    _ => return Err("--to is only valid after `down`".into()),
                }
            }
            "--json" => match command {
                Some(Command::Status { ref mut json }) => *json = true,
                _ => return Err("--json is only valid after `status`".into()),
            },
            other => return Err(format!("unknown argument: {other}\n\n{}", usage())),
        }
        i += 1;
    }

    let command = command.ok_or_else(|| format!("missing command\n\n{}", usage()))?;
    if let Command::Down {
        steps: Some(_),
        to: Some(_),
    } = command
    {
        return Err("--steps and --to are mutually exclusive".into());
    }

    Ok(CliConfig {
        db: db.unwrap_or_else(|| PathBuf::from("boxfactory.db")),
        command,
    })
}

fn run(cfg: &CliConfig) -> Result<(), SchemaError> {
    let mut store = SchemaStore::open(&cfg.db)?;
    match &cfg.command {
        Command::Up { steps } => {
            let applied = match steps {
                Some(n) => store.apply_steps(*n)?,
                None => store.apply_all()?,
            };
            for version in &applied {
                println!("applied {version}");
            }
            if applied.is_empty() {
                println!("schema is up to date");
            }
        }
        Command::Down { steps, to } => {
            let reverted = match (steps, to) {
                (_, Some(version)) => store.revert_to(*version)?,
                (Some(n), None) => store.revert_steps(*n)?,
                (None, None) => vec![store.revert_last()?],
            };
            for version in &reverted {
                println!("reverted {version}");
            }
        }
        Command::Status { json } => {
            let report = store.status()?;
            if *json {
                println!("{}", report.to_json());
            } else {
                for entry in &report.entries {
                    let mark = if entry.applied_at_ms.is_some() { "x" } else { " " };
                    println!("[{mark}] {} {}", entry.version, entry.name);
                }
                println!(
                    "{} applied, {} pending",
                    report.entries.len() - report.pending(),
                    report.pending()
                );
            }
        }
    }
    Ok(())
}

fn main() {
    let cfg = match parse_args() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    if let Err(e) = run(&cfg) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, String> {
        let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>();
        parse_arg_list(&args)
    }

    #[test]
    fn parses_up_with_steps() {
        let cfg = parse(&["--db", "/tmp/x.db", "up", "--steps", "3"]).expect("parse");
        assert_eq!(cfg.db, PathBuf::from("/tmp/x.db"));
        assert_eq!(cfg.command, Command::Up { steps: Some(3) });
    }

    #[test]
    fn parses_down_to_version() {
        let cfg = parse(&["down", "--to", "20251109080411"]).expect("parse");
        assert_eq!(
            cfg.command,
            Command::Down {
                steps: None,
                to: Some(20251109080411),
            }
        );
    }

    #[test]
    fn rejects_steps_and_to_together() {
        let err = parse(&["down", "--steps", "2", "--to", "20251109080411"])
            .expect_err("should conflict");
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn rejects_flag_without_command() {
        let err = parse(&["--steps", "2"]).expect_err("should fail");
        assert!(err.contains("only valid after"));
    }

    #[test]
    fn status_json_flag() {
        let cfg = parse(&["status", "--json"]).expect("parse");
        assert_eq!(cfg.command, Command::Status { json: true });
    }
}
