use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::{quoted_string, Statement};

/// Parse `EXPORT TO 'file_path'`.
pub(crate) fn export(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("EXPORT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, file_path) = quoted_string(input)?;
    Ok((input, Statement::Export(file_path.to_string())))
}
