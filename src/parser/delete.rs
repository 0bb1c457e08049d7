use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::Statement;

/// Parse `DELETE id`.
pub(crate) fn delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DELETE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = nom::character::complete::u32(input)?;
    Ok((input, Statement::Delete(id)))
}
