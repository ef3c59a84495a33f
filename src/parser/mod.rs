mod filter;
mod insert;
mod report;
mod total;

use chrono::NaiveDateTime;
use nom::branch::alt;
use nom::bytes::complete::{take_till, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{all_consuming, map_opt};
use nom::IResult;
use nom::sequence::delimited;
use crate::common::Error;
use crate::reader::date::parse_date;
use crate::transaction::Transaction;

/// A console statement, each maps to one analyser operation
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// ALL
    All,
    /// TYPES
    Types,
    /// TOTAL
    Total,
    /// TOTAL ON 2024-03-*
    TotalOn(DateComponents),
    /// TOTAL DEBIT
    TotalDebit,
    /// AVERAGE
    Average,
    /// TYPE 'debit'
    Type(String),
    /// MERCHANT 'name'
    Merchant(String),
    /// BETWEEN start AND end, both inclusive
    Between(NaiveDateTime, NaiveDateTime),
    /// BEFORE date
    Before(NaiveDateTime),
    /// AMOUNT BETWEEN min AND max
    AmountBetween(f64, f64),
    /// BUSIEST MONTH
    BusiestMonth,
    /// BUSIEST DEBIT MONTH
    BusiestDebitMonth,
    /// DOMINANT TYPE
    DominantType,
    /// FIND 'id'
    Find(String),
    /// DESCRIPTIONS
    Descriptions,
    /// INSERT VALUES (...), (...)
    Insert(Vec<Transaction>),
}

/// Date parts to match on. `None` matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct DateComponents {
    pub(crate) year: Option<i32>,
    pub(crate) month: Option<u32>,
    pub(crate) day: Option<u32>,
}

/// Parse a single statement. A trailing ';' is optional.
pub(crate) fn parse(statement: &str) -> Result<Command, Error> {
    let statement = statement.trim().trim_end_matches(';').trim_end();
    let result = all_consuming(alt((
        total::total,
        report::report,
        filter::filter,
        insert::insert)))(statement);

    match result {
        Ok((_, command)) => Ok(command),
        Err(e) => Err(Error::new(format!("Unable to parse '{}': {}", statement, e)))
    }
}

/// Text between single quotes, may be empty
pub(crate) fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('\''), take_till(|c| c == '\''), char('\''))(input)
}

/// A date either quoted in any supported format, or bare like 2024-03-05 or 2024-03-05T10:00:00
pub(crate) fn date_literal(input: &str) -> IResult<&str, NaiveDateTime> {
    let bare = take_while1(|c: char| c.is_ascii_digit() || matches!(c, '-' | '/' | ':' | '.' | 'T' | 'Z' | '+'));
    map_opt(alt((quoted, bare)), |s: &str| parse_date(s, &[]))(input)
}

/// ',' with optional whitespace around it
pub(crate) fn comma(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}
