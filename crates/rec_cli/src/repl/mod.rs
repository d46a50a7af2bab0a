//! Interactive loop: line editing, history and printing around [`ReplCore`].

mod core;
mod output;

use self::core::ReplCore;
use output::{Flow, ReplMsg, ReplReply};

use rustyline::error::ReadlineError;
use tracing::warn;

use crate::completer::RecHelper;
use crate::config::RecConfig;

pub struct Repl {
    core: ReplCore,
    history_size: usize,
}

impl Repl {
    pub fn new(config: &RecConfig) -> Self {
        Self {
            core: ReplCore::new(config),
            history_size: config.history_size,
        }
    }

    /// Print a ReplReply to stdout/stderr.
    pub fn print_reply(&self, reply: ReplReply) {
        for msg in reply {
            match msg {
                ReplMsg::Output(s) | ReplMsg::Info(s) | ReplMsg::Steps(s) => println!("{s}"),
                ReplMsg::Error(s) => eprintln!("{s}"),
            }
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Recurrence Relation Solver");
        println!("Type 'help' for commands, 'quit' to leave.");

        let config = rustyline::Config::builder()
            .max_history_size(self.history_size)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl =
            rustyline::Editor::<RecHelper, rustyline::history::DefaultHistory>::with_config(
                config,
            )?;
        rl.set_helper(Some(RecHelper::new()));

        // History file path: ~/.recsolve_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".recsolve_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".recsolve_history"));

        // Missing history is normal on first run
        let _ = rl.load_history(&history_path);

        loop {
            match rl.readline("rec> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    let (flow, reply) = self.core.handle_line(line);
                    self.print_reply(reply);
                    if flow == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Err(e) = rl.save_history(&history_path) {
            warn!(path = %history_path.display(), error = %e, "could not save history");
        }
        Ok(())
    }
}
