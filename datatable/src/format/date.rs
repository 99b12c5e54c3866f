//! Custom date patterns (`dd-MMM-yyyy` and friends).

use chrono::Datelike;
use chrono::NaiveDateTime;
use chrono::Timelike;

use crate::error::FormatError;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Day { width: usize },
    DayName { long: bool },
    Month { width: usize },
    MonthName { long: bool },
    Year { width: usize },
    Hour24 { width: usize },
    Hour12 { width: usize },
    Minute { width: usize },
    Second { width: usize },
    Meridiem { long: bool },
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DatePattern {
    tokens: Vec<Token>,
}

impl DatePattern {
    pub(super) fn parse(specifier: &str) -> Result<Self, FormatError> {
        let mut tokens = Vec::new();
        let mut chars = specifier.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' | '"' => {
                    let mut literal = String::new();
                    loop {
                        match chars.next() {
                            Some(q) if q == c => break,
                            Some(other) => literal.push(other),
                            None => {
                                return Err(FormatError::UnterminatedLiteral {
                                    specifier: specifier.to_string(),
                                });
                            }
                        }
                    }
                    push_literal(&mut tokens, &literal);
                }
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        push_literal(&mut tokens, &escaped.to_string());
                    }
                }
                'd' | 'M' | 'y' | 'H' | 'h' | 'm' | 's' | 't' => {
                    let mut run = 1;
                    while chars.next_if_eq(&c).is_some() {
                        run += 1;
                    }
                    tokens.push(date_token(c, run));
                }
                c if c.is_ascii_alphabetic() => {
                    return Err(FormatError::InvalidPattern {
                        specifier: specifier.to_string(),
                        token: c,
                    });
                }
                other => push_literal(&mut tokens, &other.to_string()),
            }
        }

        if !tokens.iter().any(|t| !matches!(t, Token::Literal(_))) {
            return Err(FormatError::unknown(specifier));
        }
        Ok(Self { tokens })
    }

    pub(super) fn apply(&self, dt: &NaiveDateTime) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Day { width } => push_padded(&mut out, dt.day(), *width),
                Token::DayName { long } => {
                    let name = WEEKDAYS[dt.weekday().num_days_from_monday() as usize];
                    out.push_str(if *long { name } else { &name[..3] });
                }
                Token::Month { width } => push_padded(&mut out, dt.month(), *width),
                Token::MonthName { long } => {
                    let name = MONTHS[dt.month0() as usize];
                    out.push_str(if *long { name } else { &name[..3] });
                }
                Token::Year { width } => {
                    let year = dt.year();
                    if *width <= 2 {
                        push_padded(&mut out, year.rem_euclid(100) as u32, *width);
                    } else {
                        out.push_str(&format!("{year:0width$}", width = *width));
                    }
                }
                Token::Hour24 { width } => push_padded(&mut out, dt.hour(), *width),
                Token::Hour12 { width } => push_padded(&mut out, dt.hour12().1, *width),
                Token::Minute { width } => push_padded(&mut out, dt.minute(), *width),
                Token::Second { width } => push_padded(&mut out, dt.second(), *width),
                Token::Meridiem { long } => {
                    let pm = dt.hour12().0;
                    out.push_str(match (pm, long) {
                        (false, true) => "AM",
                        (true, true) => "PM",
                        (false, false) => "A",
                        (true, false) => "P",
                    });
                }
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }
}

fn date_token(c: char, run: usize) -> Token {
    match c {
        'd' => match run {
            1 | 2 => Token::Day { width: run },
            3 => Token::DayName { long: false },
            _ => Token::DayName { long: true },
        },
        'M' => match run {
            1 | 2 => Token::Month { width: run },
            3 => Token::MonthName { long: false },
            _ => Token::MonthName { long: true },
        },
        'y' => Token::Year { width: run },
        'H' => Token::Hour24 { width: run.min(2) },
        'h' => Token::Hour12 { width: run.min(2) },
        'm' => Token::Minute { width: run.min(2) },
        's' => Token::Second { width: run.min(2) },
        _ => Token::Meridiem { long: run > 1 },
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn push_padded(out: &mut String, n: u32, width: usize) {
    out.push_str(&format!("{n:0width$}"));
}
