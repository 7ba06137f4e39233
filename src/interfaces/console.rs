use crate::domain::cash::Cash;
use crate::domain::factory::MoneyFactory;
use crate::error::{MintError, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Asks for a country code until exactly 2 characters are entered, then
/// returns it uppercased.
pub fn prompt_country_code<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    writeln!(
        output,
        "Specify a 2-character country code for the currency to use."
    )?;
    writeln!(output, "For example, TH is country code for Thailand.")?;
    loop {
        write!(output, "Please input 2-character country code: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(MintError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no country code entered",
            )));
        }
        let code = line.trim();
        if code.chars().count() == 2 {
            return Ok(code.to_uppercase());
        }
    }
}

/// Runs the interactive minting session.
///
/// Each line holds whitespace-separated values; every value is minted
/// independently, with errors printed per item and the session continuing.
/// An empty line (or end of input) ends the session.
pub fn run<R: BufRead, W: Write>(
    factory: &dyn MoneyFactory,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "The currency is '{}'", factory.currency())?;
    writeln!(output)?;
    writeln!(output, "Input value(s) of money to create, separated by space.")?;
    writeln!(output, "Example: 1 100 0.5")?;
    loop {
        writeln!(output)?;
        write!(output, "Values to create (empty line to quit): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        writeln!(output, "Creating cash:")?;
        for token in line.split_whitespace() {
            match mint_token(factory, token) {
                Ok(cash) => writeln!(output, "{cash}")?,
                Err(e) => writeln!(output, "Error: {e}")?,
            }
        }
    }
}

/// Mints a list of raw value strings in one shot, one output line per value.
pub fn mint_values<W: Write>(
    factory: &dyn MoneyFactory,
    values: &[String],
    json: bool,
    output: &mut W,
) -> Result<()> {
    for raw in values {
        match mint_token(factory, raw) {
            Ok(cash) if json => writeln!(output, "{}", serde_json::to_string(&cash)?)?,
            Ok(cash) => writeln!(output, "{cash}")?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }
    Ok(())
}

fn mint_token(factory: &dyn MoneyFactory, token: &str) -> Result<Cash> {
    let value: Decimal = token.parse()?;
    factory.create_cash(value)
}
