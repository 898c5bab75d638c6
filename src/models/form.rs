use serde::{Deserialize, Serialize};

/// Maximum number of guests the report template has rows for.
pub const MAX_GUESTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default)]
    pub fio: String,
    #[serde(default)]
    pub position: String,
}

/// A filled-in expense report as posted by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub card_owner: String,
    pub assistant: String,
    pub restaurant: String,
    pub address: String,

    pub check1_number: String,
    pub check1_date: String,
    #[serde(deserialize_with = "lenient_number")]
    pub check1_time_decimal: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub check1_sum: f64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub check2_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub check2_date: String,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub check2_time_decimal: Option<f64>,
    #[serde(default, deserialize_with = "lenient_optional_number")]
    pub check2_sum: Option<f64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goal: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topic: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub totals: String,

    #[serde(default)]
    pub guests: Vec<Guest>,
}

/// One receipt line of the report. `None` leaves the template cell as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptRecord<'a> {
    pub number: Option<&'a str>,
    pub date: Option<&'a str>,
    pub time_decimal: Option<f64>,
    pub sum: Option<f64>,
}

impl FormSubmission {
    pub fn first_receipt(&self) -> ReceiptRecord<'_> {
        ReceiptRecord {
            number: Some(self.check1_number.as_str()),
            date: Some(self.check1_date.as_str()),
            time_decimal: Some(self.check1_time_decimal),
            sum: Some(self.check1_sum),
        }
    }

    pub fn second_receipt(&self) -> ReceiptRecord<'_> {
        ReceiptRecord {
            number: non_empty(&self.check2_number),
            date: non_empty(&self.check2_date),
            time_decimal: self.check2_time_decimal,
            sum: self.check2_sum,
        }
    }

    /// Exactly `MAX_GUESTS` rows: extra guests are dropped, missing ones are blank.
    pub fn guest_rows(&self) -> Vec<Guest> {
        let mut rows: Vec<Guest> = self.guests.iter().take(MAX_GUESTS).cloned().collect();
        rows.resize(MAX_GUESTS, Guest::default());
        rows
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Form clients often post numbers as text: accept `2500` and `"2500"` alike.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_number<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| E::custom(format!("invalid number: {s:?}"))),
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_number()
}

fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_number)
        .transpose()
}
