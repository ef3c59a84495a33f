use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::{opt, value};
use nom::IResult;
use nom::sequence::terminated;
use crate::parser::Command;

/// Statements that take no argument
pub(crate) fn report(input: &str) -> IResult<&str, Command> {
    alt((
        value(Command::Types, tag_no_case("TYPES")),
        value(Command::All, tag_no_case("ALL")),
        value(Command::Average, tag_no_case("AVERAGE")),
        value(Command::Descriptions, tag_no_case("DESCRIPTIONS")),
        busiest_month,
        dominant_type,
    ))(input)
}

/// BUSIEST [DEBIT] MONTH
fn busiest_month(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("BUSIEST")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, debit) = opt(terminated(tag_no_case("DEBIT"), multispace1))(input)?;
    let (input, _) = tag_no_case("MONTH")(input)?;

    match debit {
        Some(_) => Ok((input, Command::BusiestDebitMonth)),
        None => Ok((input, Command::BusiestMonth)),
    }
}

/// DOMINANT TYPE
fn dominant_type(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("DOMINANT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TYPE")(input)?;
    Ok((input, Command::DominantType))
}
