use std::io::{self, BufRead, Write};

use calcbot::Calculator;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calcbot evaluates arithmetic expressions and single-letter variable
/// assignments, one command per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The account variables are stored under.
    #[arg(short, long, default_value = "cli")]
    account: String,

    /// Runs the given command and exits instead of reading standard input.
    /// May be given several times.
    #[arg(short, long, value_name = "COMMAND")]
    eval: Vec<String>,

    /// Logs evaluation errors to standard error.
    #[arg(short, long)]
    log_errors: bool,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcbot=info"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn prompt(stdout: &mut impl Write) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

fn run_interactive(calculator: &mut Calculator, account: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if !input.is_empty() {
            writeln!(stdout, "{}", calculator.execute(input, account))?;
        }
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn run_batch(calculator: &mut Calculator, commands: &[String], account: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    for command in commands {
        writeln!(stdout, "{}", calculator.execute(command, account))?;
    }
    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut calculator = Calculator::new().with_error_logging(args.log_errors);

    let result = if args.eval.is_empty() {
        run_interactive(&mut calculator, &args.account)
    } else {
        run_batch(&mut calculator, &args.eval, &args.account)
    };

    // The session is over; its variables go with it.
    calculator.delete_variables(&args.account);

    if let Err(e) = result {
        eprintln!("Session I/O failed: {e}");
        std::process::exit(1);
    }
}
