pub mod plural;
pub mod words;

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use self::plural::{plural, KOPECKS, RUBLES};

/// How the rouble count is rendered in an amount phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountStyle {
    /// "2500 рублей 00 копеек"
    #[default]
    Digits,
    /// "Две тысячи пятьсот рублей 00 копеек"
    Words,
}

impl AmountStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digits" => Some(AmountStyle::Digits),
            "words" => Some(AmountStyle::Words),
            _ => None,
        }
    }
}

/// A monetary amount. Kept exact while it fits in a `Decimal`; arithmetic
/// that would overflow continues in `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Exact(Decimal),
    Float(f64),
}

impl Amount {
    pub const ZERO: Amount = Amount::Exact(Decimal::ZERO);

    /// Finite floats only; anything beyond `Decimal`'s range stays a float.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(match Decimal::try_from(value) {
            Ok(exact) => Amount::Exact(exact.normalize()),
            Err(_) => Amount::Float(value),
        })
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Amount::Exact(d) => d.to_f64().unwrap_or(0.0),
            Amount::Float(f) => f,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Amount::Exact(d) => d.is_zero(),
            Amount::Float(f) => f == 0.0,
        }
    }

    pub fn plus(self, other: Amount) -> Amount {
        if let (Amount::Exact(a), Amount::Exact(b)) = (self, other) {
            if let Some(total) = a.checked_add(b) {
                return Amount::Exact(total);
            }
        }
        Amount::Float(self.to_f64() + other.to_f64())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Exact(d) => write!(f, "{d}"),
            Amount::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Interpret a raw cell value as an amount. Anything that is not a finite
/// number counts as zero.
pub fn parse_amount(raw: &str) -> Amount {
    let raw = raw.trim();
    if let Ok(exact) = Decimal::from_str(raw) {
        return Amount::Exact(exact);
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Amount::from_f64)
        .unwrap_or(Amount::ZERO)
}

pub fn sum(values: impl IntoIterator<Item = Amount>) -> Amount {
    values.into_iter().fold(Amount::ZERO, Amount::plus)
}

/// Round up to the next multiple of 1000. Zero stays zero.
pub fn round_up_to_thousand(total: Amount) -> Amount {
    if total.is_zero() {
        return Amount::ZERO;
    }
    if let Amount::Exact(d) = total {
        let thousand = Decimal::ONE_THOUSAND;
        if let Some(rounded) = (d / thousand).ceil().checked_mul(thousand) {
            return Amount::Exact(rounded);
        }
    }
    Amount::Float((total.to_f64() / 1000.0).ceil() * 1000.0)
}

/// Sign, integer roubles as digits, and kopecks in 0..100.
fn split(amount: Amount) -> (bool, String, u128) {
    match amount {
        Amount::Exact(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let magnitude = rounded.abs();
            let rubles = magnitude.trunc();
            let kopecks = ((magnitude - rubles) * Decimal::ONE_HUNDRED)
                .trunc()
                .to_u128()
                .unwrap_or_default();
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            (negative, rubles.to_u128().unwrap_or_default().to_string(), kopecks)
        }
        Amount::Float(f) => {
            let magnitude = f.abs();
            let mut rubles = magnitude.trunc();
            let mut kopecks = ((magnitude - rubles) * 100.0).round();
            if kopecks >= 100.0 {
                rubles += 1.0;
                kopecks -= 100.0;
            }
            let negative = f < 0.0 && (rubles > 0.0 || kopecks > 0.0);
            (negative, format!("{rubles:.0}"), kopecks as u128)
        }
    }
}

/// Last two digits decide the grammatical form.
fn tail(digits: &str) -> u128 {
    let start = digits.len().saturating_sub(2);
    digits[start..].parse().unwrap_or_default()
}

/// Render an amount as "<roubles> <form> <kopecks:02> <form>".
pub fn money_to_words(amount: Amount, style: AmountStyle) -> String {
    let (negative, rubles, kopecks) = split(amount);

    let rubles_text = match style {
        AmountStyle::Digits => {
            let sign = if negative { "-" } else { "" };
            format!("{sign}{rubles}")
        }
        AmountStyle::Words => {
            let spelled = match rubles.parse::<u128>() {
                Ok(n) => words::spell(n),
                Err(_) => rubles.clone(),
            };
            if negative {
                words::capitalize(&format!("минус {spelled}"))
            } else {
                words::capitalize(&spelled)
            }
        }
    };

    format!(
        "{rubles_text} {} {kopecks:02} {}",
        plural(tail(&rubles), &RUBLES),
        plural(kopecks, &KOPECKS),
    )
}
