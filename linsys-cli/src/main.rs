use crossterm::{
    cursor, execute,
    event::{read, Event, KeyCode},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::error::Error;
use std::io::{self, stdout, BufRead, Write};

use linsys::io::{parse_row, read_system_csv, save_report, SolveReport};
use linsys::prelude::*;
use linsys::solvers::{MAX_UNKNOWNS, MIN_UNKNOWNS};

mod config;
mod render;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = config::options_from_env()?;
    let solver = Solver::new().with_options(options);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return run_batch(&solver, &args);
    }
    run_interactive(&solver)
}

// ─── Batch mode ─────────────────────────────────────────────────────────────

const USAGE: &str =
    "usage: linsys-solve [<system.csv> [cramer|jordan|substitution] [--json] [--save <report.json>]]";

fn run_batch(solver: &Solver, args: &[String]) -> Result<(), Box<dyn Error>> {
    let mut path = None;
    let mut method = Method::Cramer;
    let mut json = false;
    let mut save_to = None;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--save" => save_to = Some(args.next().ok_or(USAGE)?.clone()),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other if path.is_none() => path = Some(other.to_string()),
            other => method = other.parse()?,
        }
    }
    let path = path.ok_or(USAGE)?;

    let (a, b) = read_system_csv(&path)?;
    log::info!("loaded {}x{} system from {}", a.rows(), a.cols(), path);

    let result = solver.solve(method, &a, &b);
    let report = SolveReport::from_result(method, &a, &b, &result);

    if json {
        println!("{}", report.to_json()?);
    } else {
        render::print_report(&mut stdout(), &report)?;
    }
    if let Some(out) = save_to {
        save_report(&report, &out)?;
        log::info!("report written to {}", out);
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

// ─── Interactive mode ───────────────────────────────────────────────────────

fn description(method: Method) -> &'static str {
    match method {
        Method::Cramer => {
            "Cramer's rule solves the system through determinants, x_i = det(A_i) / det(A).\n\
             It needs a nonzero determinant; singular systems are rejected."
        }
        Method::Jordan => {
            "Gauss-Jordan elimination reduces [A | b] to reduced row echelon form.\n\
             Pivots are taken from the diagonal in order, without row exchanges."
        }
        Method::Substitution => {
            "Forward substitution solves for one variable at a time, substituting it\n\
             into the following equations. A should be lower-triangular."
        }
    }
}

fn run_interactive(solver: &Solver) -> Result<(), Box<dyn Error>> {
    let mut stdout = stdout();

    enable_raw_mode()?;
    execute!(stdout, Clear(ClearType::All), cursor::Hide, cursor::MoveTo(0, 0))?;

    let mut menu_items: Vec<String> = Method::ALL
        .iter()
        .map(|m| format!("  {:<26}", m.title()))
        .collect();
    menu_items.push(format!("  {:<26}", "Exit"));

    let mut selected_index = 0;

    loop {
        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Green),
            Print("    Linear Equation Solver\n"),
            ResetColor,
            SetForegroundColor(Color::DarkGrey),
            Print("    Pick a method, enter A and b, get x.\n"),
            Print("    Use [Up/Down] to navigate, [Enter] to select, [q] to quit\n\n"),
            ResetColor,
        )?;

        for (i, item) in menu_items.iter().enumerate() {
            execute!(stdout, cursor::MoveTo(4, (7 + i * 2) as u16))?;
            if i == selected_index {
                execute!(
                    stdout,
                    SetForegroundColor(Color::Green),
                    Print(" ► "),
                    SetForegroundColor(Color::White),
                    Print(item),
                    ResetColor
                )?;
            } else {
                execute!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print("   "),
                    Print(item),
                    ResetColor
                )?;
            }
        }

        if let Event::Key(key_event) = read()? {
            match key_event.code {
                KeyCode::Up => {
                    selected_index = if selected_index > 0 {
                        selected_index - 1
                    } else {
                        menu_items.len() - 1
                    };
                }
                KeyCode::Down => {
                    selected_index = (selected_index + 1) % menu_items.len();
                }
                KeyCode::Enter => match Method::ALL.get(selected_index) {
                    Some(&method) => run_method_screen(&mut stdout, solver, method)?,
                    None => break,
                },
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::Show,
        cursor::MoveTo(0, 0),
    )?;
    Ok(())
}

fn run_method_screen(stdout: &mut io::Stdout, solver: &Solver, method: Method) -> Result<(), Box<dyn Error>> {
    // Line input needs the terminal in cooked mode
    disable_raw_mode()?;
    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show,
        SetForegroundColor(Color::Magenta),
        Print(format!("--- {} ---\n\n", method.title())),
        ResetColor,
        Print(format!("{}\n\n", description(method))),
    )?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n = loop {
        let line = prompt(stdout, &mut lines, &format!("Number of variables ({}-{}): ", MIN_UNKNOWNS, MAX_UNKNOWNS))?;
        match line.parse::<usize>() {
            Ok(n) if (MIN_UNKNOWNS..=MAX_UNKNOWNS).contains(&n) => break n,
            _ => warn_input(stdout, "enter a whole number in range")?,
        }
    };

    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let row = read_values(stdout, &mut lines, &format!("Row {} of A ({} values): ", i + 1, n), n)?;
        rows.push(row);
    }
    let b = read_values(stdout, &mut lines, &format!("Vector b ({} values): ", n), n)?;

    let a = Matrix::from_rows(&rows)?;
    let b = Vector::new(b);
    let result = solver.solve(method, &a, &b);
    let report = SolveReport::from_result(method, &a, &b, &result);

    execute!(stdout, Print("\n"))?;
    render::print_report(stdout, &report)?;

    execute!(
        stdout,
        SetForegroundColor(Color::DarkGrey),
        Print("\nPress any key to return to the main menu..."),
        ResetColor,
        cursor::Hide
    )?;
    stdout.flush()?;

    enable_raw_mode()?;
    loop {
        if let Event::Key(_) = read()? {
            break;
        }
    }
    execute!(stdout, Clear(ClearType::All))?;
    Ok(())
}

fn prompt<B: BufRead>(
    stdout: &mut io::Stdout,
    lines: &mut io::Lines<B>,
    label: &str,
) -> Result<String, Box<dyn Error>> {
    execute!(stdout, SetForegroundColor(Color::White), Print(label), ResetColor)?;
    stdout.flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err("input closed".into()),
    }
}

/// Prompt until the line holds exactly `n` numbers.
fn read_values<B: BufRead>(
    stdout: &mut io::Stdout,
    lines: &mut io::Lines<B>,
    label: &str,
    n: usize,
) -> Result<Vec<f64>, Box<dyn Error>> {
    loop {
        let line = prompt(stdout, lines, label)?;
        match parse_row(&line, n) {
            Ok(values) => return Ok(values),
            Err(e) => warn_input(stdout, &format!("please enter matrix A and vector b correctly ({})", e))?,
        }
    }
}

fn warn_input(stdout: &mut io::Stdout, msg: &str) -> io::Result<()> {
    execute!(
        stdout,
        SetForegroundColor(Color::Red),
        Print(format!("  {}\n", msg)),
        ResetColor
    )
}
