//! Operator console.
//!
//! Drives a scoreboard session from the terminal: `demo` runs a scripted
//! bout, `repl` reads operator commands line by line. The audience display
//! is rendered as `[BOARD]` lines on stdout.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sb_core::{
    apply_command_json, snapshot_json, Corner, DisplayError, DisplaySink, MainTickEvent, Session,
    TickDriver, TICK_INTERVAL,
};

#[derive(Parser)]
#[command(name = "sb_console")]
#[command(about = "Wrestling scoreboard operator console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted demonstration bout
    Demo {
        /// Pace ticks against the wall clock instead of running flat out
        #[arg(long, default_value = "false")]
        realtime: bool,
    },

    /// Interactive console: one JSON command per line, plus `tick [N]`,
    /// `state`, `help` and `quit`
    Repl,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { realtime } => run_demo(realtime),
        Commands::Repl => run_repl(),
    }
}

/// Renders every display push as a `[BOARD]` line.
struct TerminalDisplay;

impl TerminalDisplay {
    fn line(&self, text: String) -> Result<(), DisplayError> {
        println!("[BOARD] {text}");
        Ok(())
    }
}

impl DisplaySink for TerminalDisplay {
    fn update_score(&mut self, red: u32, blue: u32) -> Result<(), DisplayError> {
        self.line(format!("RED {red} : {blue} BLUE"))
    }

    fn update_timer(&mut self, time: &str) -> Result<(), DisplayError> {
        self.line(format!("clock {time}"))
    }

    fn update_rest_timer(&mut self, corner: Corner, time: &str) -> Result<(), DisplayError> {
        self.line(format!("rest {} {time}", corner.label()))
    }

    fn update_period(&mut self, period: u8) -> Result<(), DisplayError> {
        self.line(format!("PERIOD {period}"))
    }

    fn update_wrestlers(&mut self, red: &str, blue: &str) -> Result<(), DisplayError> {
        self.line(format!("{red} vs {blue}"))
    }

    fn update_weight_category(&mut self, label: &str) -> Result<(), DisplayError> {
        self.line(format!("weight {label}"))
    }

    fn update_stage(&mut self, label: &str) -> Result<(), DisplayError> {
        self.line(format!("stage {label}"))
    }

    fn update_style(&mut self, label: &str) -> Result<(), DisplayError> {
        self.line(format!("style {label}"))
    }

    fn show_winner(&mut self, winner: Option<Corner>) -> Result<(), DisplayError> {
        match winner {
            Some(corner) => self.line(format!("*** WINNER: {} ***", corner.label())),
            None => self.line("winner banner hidden".to_string()),
        }
    }

    fn show_break(&mut self, active: bool, seconds: u32) -> Result<(), DisplayError> {
        if active {
            self.line(format!("BREAK {seconds} s"))
        } else {
            self.line("break over".to_string())
        }
    }
}

fn run_demo(realtime: bool) -> Result<()> {
    let mut session = Session::with_display(Box::new(TerminalDisplay));

    println!("== scripted bout ==");
    for request in [
        r#"{"cmd":"set_wrestlers","red":"N. Makhin","blue":"P. Orlov"}"#,
        r#"{"cmd":"set_weight_category","label":"65 kg"}"#,
        r#"{"cmd":"set_stage","label":"FINAL 1-2"}"#,
        r#"{"cmd":"set_main_clock","seconds":8}"#,
        r#"{"cmd":"start_main_clock"}"#,
    ] {
        apply_command_json(&mut session, request)?;
    }

    tick(&mut session, 3, realtime);
    apply_command_json(&mut session, r#"{"cmd":"adjust_score","corner":"red","delta":2}"#)?;

    tick(&mut session, 2, realtime);
    apply_command_json(&mut session, r#"{"cmd":"adjust_score","corner":"blue","delta":4}"#)?;

    println!("== 5 second break ==");
    session.start_break_for(5);
    tick(&mut session, 6, realtime);

    println!("== period runs out ==");
    apply_command_json(&mut session, r#"{"cmd":"start_main_clock"}"#)?;
    tick(&mut session, 8, realtime);

    println!("== second period ==");
    for request in [
        r#"{"cmd":"set_period","period":2}"#,
        r#"{"cmd":"set_main_clock","seconds":5}"#,
        r#"{"cmd":"start_main_clock"}"#,
        r#"{"cmd":"adjust_score","corner":"red","delta":3}"#,
    ] {
        apply_command_json(&mut session, request)?;
    }
    tick(&mut session, 5, realtime);

    match session.board().leader() {
        Some(corner) => session.declare_winner(corner),
        None => println!("bout tied, judges decide"),
    }

    println!("== final snapshot ==");
    println!("{}", snapshot_json(&session)?);
    Ok(())
}

/// Advance `seconds` scheduler ticks, optionally paced by the wall clock.
fn tick(session: &mut Session, seconds: u32, realtime: bool) {
    if realtime {
        let mut driver = TickDriver::start();
        let mut remaining = seconds;
        while remaining > 0 {
            thread::sleep(TICK_INTERVAL / 4);
            for _ in 0..driver.due_ticks(Instant::now()).min(remaining) {
                report_tick(session.tick_second());
                remaining -= 1;
            }
        }
    } else {
        for _ in 0..seconds {
            report_tick(session.tick_second());
        }
    }
}

fn report_tick(report: sb_core::TickReport) {
    if report.main == MainTickEvent::PeriodExpired {
        println!(">> period time expired");
    }
}

fn run_repl() -> Result<()> {
    let mut session = Session::with_display(Box::new(TerminalDisplay));
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "state" => println!("{}", snapshot_json(&session)?),
            _ if line == "tick" || line.starts_with("tick ") => {
                let count: u32 = line
                    .strip_prefix("tick")
                    .unwrap_or("")
                    .trim()
                    .parse()
                    .unwrap_or(1);
                for _ in 0..count {
                    report_tick(session.tick_second());
                }
            }
            request => match apply_command_json(&mut session, request) {
                Ok(snapshot) => println!("{snapshot}"),
                Err(err) => eprintln!("!! {err}"),
            },
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  tick [N]   advance the clocks N seconds (default 1)");
    println!("  state      print the board snapshot");
    println!("  quit       leave the console");
    println!("  any JSON command, e.g.:");
    println!(r#"  {{"cmd":"adjust_score","corner":"red","delta":2}}"#);
    println!(r#"  {{"cmd":"set_period","period":2}}"#);
    println!(r#"  {{"cmd":"start_main_clock"}}  {{"cmd":"start_break"}}"#);
}
