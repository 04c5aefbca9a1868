use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

use linsys::io::SolveReport;

/// Half-width, in cells, of a bar chart (one side of the axis).
pub const CHART_HALF_WIDTH: usize = 24;

/// Horizontal bar chart, one signed bar per variable around a shared axis.
pub fn bar_chart(values: &[f64], half_width: usize) -> Vec<String> {
    let max = values
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0f64, |m, v| m.max(v.abs()));

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let label = format!("x{:<3}", i + 1);
            if !v.is_finite() {
                return format!("{}{}│ {}", label, " ".repeat(half_width), v);
            }
            let len = if max > 0.0 {
                ((v.abs() / max) * half_width as f64).round() as usize
            } else {
                0
            };
            if v < 0.0 {
                format!(
                    "{}{}{}│{} {:.4}",
                    label,
                    " ".repeat(half_width - len),
                    "█".repeat(len),
                    " ".repeat(half_width),
                    v
                )
            } else {
                format!(
                    "{}{}│{}{} {:.4}",
                    label,
                    " ".repeat(half_width),
                    "█".repeat(len),
                    " ".repeat(half_width - len),
                    v
                )
            }
        })
        .collect()
}

/// Print a solve report: solution, residual and chart, or the error message.
pub fn print_report<W: Write>(out: &mut W, report: &SolveReport) -> std::io::Result<()> {
    match (&report.solution, &report.error) {
        (Some(x), None) => {
            execute!(
                out,
                SetForegroundColor(Color::Green),
                Print("Solution found!\n"),
                ResetColor,
                Print(format!("Result ({}):\n", report.method.title())),
            )?;
            for (i, v) in x.iter().enumerate() {
                execute!(out, Print(format!("  x{} = {:.6}\n", i + 1, v)))?;
            }
            if !report.finite {
                execute!(
                    out,
                    SetForegroundColor(Color::Yellow),
                    Print("  warning: the solution holds NaN or infinite values (zero pivot)\n"),
                    ResetColor
                )?;
            }
            if let Some(r) = report.residual_norm {
                execute!(
                    out,
                    SetForegroundColor(Color::DarkGrey),
                    Print(format!("  max |A·x − b| = {:.3e}\n\n", r)),
                    ResetColor
                )?;
            }
            execute!(out, SetForegroundColor(Color::Cyan), Print("Values of the variables\n"))?;
            for line in bar_chart(x, CHART_HALF_WIDTH) {
                execute!(out, Print(format!("  {}\n", line)))?;
            }
            execute!(out, ResetColor)?;
        }
        (_, Some(msg)) => {
            execute!(
                out,
                SetForegroundColor(Color::Red),
                Print(format!("{}\n", msg)),
                ResetColor
            )?;
        }
        (None, None) => {}
    }
    out.flush()
}
