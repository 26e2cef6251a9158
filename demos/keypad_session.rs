//! A scripted headless calculator session.
//!
//! Runs a few key scripts through a `Calculator` and prints the two-line
//! readout after each one, the way a host UI would render it.

use tallypad::{Calculator, UnknownKey};

fn main() -> Result<(), UnknownKey> {
    let mut calc = Calculator::new();

    for script in ["1234.5", "+765.5", "=", "*2=", "<9"] {
        calc.run_script(script)?;
        let readout = calc.readout();
        println!("keys {script:>8}  |  {:>14}", readout.upper_line());
        println!("               |  {:>14}", readout.lower_line());
    }

    Ok(())
}
