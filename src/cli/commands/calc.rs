//! Sum and Divide commands.
//!
//! Each invocation builds a fresh calculator, so the reported operation
//! count only covers the current command.

use anyhow::{Context, Result};

use crate::Calculator;
use crate::cli::Operands;

/// Build the calculator the command runs on.
pub fn build(name: &str) -> Result<Calculator> {
    Calculator::new(Some(name)).with_context(|| format!("cannot create calculator '{name}'"))
}

/// Run sum command - print `a + b`.
pub fn run_sum(calc: &mut Calculator, operands: Operands, verbose: bool) -> Result<i32> {
    let result = calc.sum(operands.a, operands.b);
    report(calc, result, verbose);
    Ok(result)
}

/// Run divide command - print `a / b`.
pub fn run_divide(calc: &mut Calculator, operands: Operands, verbose: bool) -> Result<i32> {
    let result = calc
        .divide(operands.a, operands.b)
        .context("division failed")?;
    report(calc, result, verbose);
    Ok(result)
}

fn report(calc: &Calculator, result: i32, verbose: bool) {
    println!("{result}");
    if verbose {
        println!("{calc}");
    }
}
