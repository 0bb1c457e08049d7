use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::{amount, non_space, quoted_string, Statement};

/// Parse `EDIT id category amount 'description'`.
pub(crate) fn edit(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("EDIT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = nom::character::complete::u32(input)?;
    let (input, _) = multispace1(input)?;
    let (input, category) = non_space(input)?;
    let (input, _) = multispace1(input)?;
    let (input, value) = amount(input)?;
    let (input, _) = multispace1(input)?;
    let (input, description) = quoted_string(input)?;
    Ok((
        input,
        Statement::Edit(id, category.to_string(), value, description.to_string()),
    ))
}
