use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, i32, multispace1, u32};
use nom::combinator::{map, opt};
use nom::IResult;
use nom::sequence::preceded;
use crate::parser::{Command, DateComponents};

/// TOTAL, TOTAL DEBIT or TOTAL ON ...
pub(crate) fn total(input: &str) -> IResult<&str, Command> {
    alt((total_on, total_debit, total_all))(input)
}

fn total_all(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("TOTAL")(input)?;
    Ok((input, Command::Total))
}

fn total_debit(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("TOTAL")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("DEBIT")(input)?;
    Ok((input, Command::TotalDebit))
}

/// TOTAL ON year[-month[-day]], each part either a number or '*'
fn total_on(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("TOTAL")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("ON")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, components) = date_components(input)?;
    Ok((input, Command::TotalOn(components)))
}

fn date_components(input: &str) -> IResult<&str, DateComponents> {
    let (input, year) = alt((wildcard::<i32>, map(i32, Some)))(input)?;
    let (input, month) = opt(preceded(char('-'), component))(input)?;
    let (input, day) = match month {
        Some(_) => opt(preceded(char('-'), component))(input)?,
        None => (input, None),
    };

    Ok((input, DateComponents {
        year,
        month: month.flatten(),
        day: day.flatten(),
    }))
}

fn component(input: &str) -> IResult<&str, Option<u32>> {
    alt((wildcard::<u32>, map(u32, Some)))(input)
}

/// '*' matches any value
fn wildcard<T>(input: &str) -> IResult<&str, Option<T>> {
    let (input, _) = char('*')(input)?;
    Ok((input, None))
}
