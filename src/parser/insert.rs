use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, multispace0, multispace1};
use nom::IResult;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::delimited;
use crate::parser::{comma, date_literal, quoted, Command};
use crate::transaction::Transaction;

/// INSERT VALUES ('id', date, amount, 'type', 'description', 'merchant'), (...)
pub(crate) fn insert(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag_no_case("INSERT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("VALUES")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, records) = separated_list1(comma, parse_record)(input)?;
    Ok((input, Command::Insert(records)))
}

fn parse_record(input: &str) -> IResult<&str, Transaction> {
    let (input, record) = delimited(char('('), parse_record_inner, char(')'))(input)?;
    Ok((input, record))
}

fn parse_record_inner(input: &str) -> IResult<&str, Transaction> {
    let (input, _) = multispace0(input)?;
    let (input, id) = quoted(input)?;
    let (input, _) = comma(input)?;
    let (input, date) = date_literal(input)?;
    let (input, _) = comma(input)?;
    let (input, amount) = double(input)?;
    let (input, _) = comma(input)?;
    let (input, transaction_type) = quoted(input)?;
    let (input, _) = comma(input)?;
    let (input, description) = quoted(input)?;
    let (input, _) = comma(input)?;
    let (input, merchant_name) = quoted(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, Transaction::new(id, date, amount, transaction_type, description, merchant_name)))
}
