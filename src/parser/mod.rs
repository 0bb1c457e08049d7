mod add;
mod delete;
mod edit;
mod export;

use log::warn;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till};
use nom::character::complete::{char, digit1};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::{delimited, pair, tuple};
use nom::{IResult, InputTakeAtPosition};

#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// ADD category amount 'description'
    Add(String, f64, String),
    /// EDIT id category amount 'description'
    Edit(u32, String, f64, String),
    /// DELETE id
    Delete(u32),
    List,
    Summary,
    /// EXPORT TO 'file_path'
    Export(String),
    Reload,
}

/// Parse one command line into a statement. A malformed amount or id fails here, before
/// anything reaches the ledger.
pub(crate) fn parse(line: &str) -> Result<Statement, String> {
    let result = alt((
        add::add,
        edit::edit,
        delete::delete,
        export::export,
        list,
        summary,
        reload,
    ))(line.trim());

    match result {
        Ok((rest, statement)) => {
            if !rest.trim().is_empty() {
                warn!("Ignoring trailing input {:?}", rest);
            }
            Ok(statement)
        }
        Err(e) => Err(e.to_string()),
    }
}

fn list(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("LIST")(input)?;
    Ok((input, Statement::List))
}

fn summary(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("SUMMARY")(input)?;
    Ok((input, Statement::Summary))
}

fn reload(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("RELOAD")(input)?;
    Ok((input, Statement::Reload))
}

/// Bare token: everything up to the next whitespace.
pub(crate) fn non_space(input: &str) -> IResult<&str, &str> {
    input.split_at_position_complete(char::is_whitespace)
}

/// Single-quoted string, e.g. 'weekly groceries'. The empty string is allowed.
pub(crate) fn quoted_string(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_till(|c| c == '\''), char('\''))(input)
}

/// Signed decimal number, e.g. -42 or 19.95
pub(crate) fn amount(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((opt(char('-')), digit1, opt(pair(char('.'), digit1))))),
        str::parse::<f64>,
    )(input)
}
