use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;
use nom::number::complete::double;
use crate::parser::{date_literal, quoted, Command};

/// Statements returning a subset of transactions, plus FIND
pub(crate) fn filter(input: &str) -> IResult<&str, Command> {
    alt((by_type, by_merchant, amount_between, between, before, find))(input)
}

/// TYPE '...'
fn by_type(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("TYPE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, transaction_type) = quoted(input)?;
    Ok((input, Command::Type(transaction_type.into())))
}

/// MERCHANT '...'
fn by_merchant(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("MERCHANT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, merchant) = quoted(input)?;
    Ok((input, Command::Merchant(merchant.into())))
}

/// AMOUNT BETWEEN -10 AND 99.5
fn amount_between(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("AMOUNT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("BETWEEN")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, min) = double(input)?;
    let (input, _) = and(input)?;
    let (input, max) = double(input)?;
    Ok((input, Command::AmountBetween(min, max)))
}

/// BETWEEN 2024-01-01 AND '31 Jan 2024'
fn between(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("BETWEEN")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, start) = date_literal(input)?;
    let (input, _) = and(input)?;
    let (input, end) = date_literal(input)?;
    Ok((input, Command::Between(start, end)))
}

/// BEFORE 2024-01-01
fn before(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("BEFORE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = date_literal(input)?;
    Ok((input, Command::Before(date)))
}

/// FIND 'id'
fn find(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("FIND")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, id) = quoted(input)?;
    Ok((input, Command::Find(id.into())))
}

/// ' AND '
fn and(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("AND")(input)?;
    let (input, _) = multispace1(input)?;
    Ok((input, ()))
}
