use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till},
    character::complete::char,
    combinator::{opt, rest, verify},
    error::{Error, ErrorKind},
    multi::many1,
    sequence::{delimited, preceded},
};

/// Parses a single double quoted token, which may be empty
pub fn parse_between_double_quotes(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c: char| c == '"'), char('"')).parse(input)
}

pub fn parse_not_double_quote(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '"').parse(input)
}

/// Parses every double quoted token on a line, skipping whatever separates them
pub fn parse_double_quoted_tokens(line: &str) -> IResult<&str, Vec<&str>> {
    many1(preceded(parse_not_double_quote, parse_between_double_quotes)).parse(line)
}

/// Parses a trailing double quoted token whose closing quote is missing, up to the end of the input
pub fn parse_unterminated_double_quote(input: &str) -> IResult<&str, &str> {
    preceded((parse_not_double_quote, char('"')), rest).parse(input)
}

/// For lines of the form `"key" ... "value"`, returns the last quoted token on the line. A last
/// token missing its closing quote runs to the end of the line.
///
/// Fails if the line holds no quoted token after the key.
pub fn parse_last_double_quoted_value(line: &str) -> IResult<&str, &str> {
    let (remaining, (tokens, unterminated)) =
        (parse_double_quoted_tokens, opt(parse_unterminated_double_quote)).parse(line)?;

    match (tokens.as_slice(), unterminated) {
        (_, Some(value)) => Ok((remaining, value)),
        ([_, .., value], None) => Ok((remaining, *value)),
        _ => Err(nom::Err::Error(Error::new(line, ErrorKind::Verify))),
    }
}

/// Used for checking if a file name matches `appmanifest_*.acf`, returning the part matched by
/// the wildcard
pub fn parse_manifest_file_name(file_name: &str) -> IResult<&str, &str> {
    verify(preceded(tag("appmanifest_"), rest), |r: &str| r.ends_with(".acf"))
        .parse(file_name)
        .map(|(remaining, wildcard)| (remaining, &wildcard[..wildcard.len() - ".acf".len()]))
}
