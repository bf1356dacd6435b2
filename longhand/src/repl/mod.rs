//! REPL (Read-Eval-Print Loop) for longhand phrases

use crate::config::Config;
use crate::error::report_error;
use crate::lexer::tokenize;
use crate::parser::{Width, parse_longhand};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

const PROMPT: &str = "> ";
const HISTORY_FILE: &str = ".longhand_history";
const INPUT_NAME: &str = "<repl>";

/// What the REPL should do after a `:` command
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    width: Width,
    color: bool,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Create a new REPL
    pub fn new(config: &Config) -> RlResult<Self> {
        let editor = DefaultEditor::new()?;

        // Try to find history file in home directory
        let history_path = dirs_home().map(|h| h.join(HISTORY_FILE));

        let mut repl = Repl {
            editor,
            width: config.width,
            color: config.color,
            history_path,
        };

        // Load history if available
        if let Some(ref path) = repl.history_path {
            let _ = repl.editor.load_history(path);
        }

        Ok(repl)
    }

    /// Run the REPL
    pub fn run(&mut self) -> RlResult<()> {
        println!("longhand REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type :help for help, :quit to exit.\n");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line);

                    if line.starts_with(':') {
                        if self.handle_command(line) == Action::Quit {
                            break;
                        }
                        continue;
                    }

                    self.eval_input(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = self.editor.save_history(path);
        }

        Ok(())
    }

    /// Handle REPL commands (starting with :)
    fn handle_command(&mut self, line: &str) -> Action {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            ":quit" | ":q" | ":exit" => {
                println!("Goodbye!");
                Action::Quit
            }
            ":help" | ":h" | ":?" => {
                self.print_help();
                Action::Continue
            }
            ":width" => {
                match parse_width(arg) {
                    Some(width) => {
                        self.width = width;
                        println!("width set to {width}");
                    }
                    None if arg.is_empty() => println!("width is {}", self.width),
                    None => println!("Unknown width: {arg} (expected i32 or i64)"),
                }
                Action::Continue
            }
            ":tokens" => {
                self.print_tokens(arg);
                Action::Continue
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                Action::Continue
            }
        }
    }

    fn print_help(&self) {
        println!("longhand REPL Commands:");
        println!("  :help, :h, :?     Show this help");
        println!("  :quit, :q         Exit the REPL");
        println!("  :width [i32|i64]  Show or set the integer width");
        println!("  :tokens <phrase>  Show how a phrase is split into words");
        println!();
        println!("Anything else is parsed as a number phrase, e.g.:");
        println!("  seven thousand two hundred and thirty-one");
        println!("  negative nineteen twenty");
    }

    fn print_tokens(&self, phrase: &str) {
        match tokenize(phrase) {
            Ok(tokens) => {
                for (tok, span) in &tokens {
                    println!("{tok} @ {span}");
                }
            }
            Err(err) => report_error(INPUT_NAME, phrase, &err, self.color),
        }
    }

    fn eval_input(&self, phrase: &str) {
        match parse_longhand(phrase, self.width) {
            Ok(value) => println!("{value}"),
            Err(err) => report_error(INPUT_NAME, phrase, &err, self.color),
        }
    }
}

fn parse_width(arg: &str) -> Option<Width> {
    match arg {
        "i32" | "32" => Some(Width::I32),
        "i64" | "64" => Some(Width::I64),
        _ => None,
    }
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
