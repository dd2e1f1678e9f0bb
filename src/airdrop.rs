// src/airdrop.rs
//! Airdrop records: stored shape, request payloads, and the display shape
//! returned on every read path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_STATUS, DISPLAY_DATE_FORMAT, INPUT_DATE_FORMAT};
use crate::error::{RegistryError, RegistryResult};

/// A stored record. The deadline is kept as a date, so it is always valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Airdrop {
    pub id: u32,
    pub name: String,
    pub claim_deadline: NaiveDate,
    pub status: String,
}

impl Airdrop {
    pub fn new(id: u32, name: String, claim_deadline: NaiveDate) -> Self {
        Self { id, name, claim_deadline, status: s!(DEFAULT_STATUS) }
    }

    pub fn view(&self) -> AirdropView {
        AirdropView {
            id: self.id,
            name: self.name.clone(),
            claim_deadline: display_date(self.claim_deadline),
            status: self.status.clone(),
        }
    }
}

/// What clients see: deadline rendered as `DD Mon YYYY`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AirdropView {
    pub id: u32,
    pub name: String,
    pub claim_deadline: String,
    pub status: String,
}

/// POST body. Fields are optional so a missing one is a 400, not a rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewAirdrop {
    pub name: Option<String>,
    pub claim_deadline: Option<String>,
}

/// PUT body. Absent fields are left alone.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AirdropPatch {
    pub name: Option<String>,
    pub claim_deadline: Option<String>,
    pub status: Option<String>,
}

/// Validated create input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidNewAirdrop {
    pub name: String,
    pub claim_deadline: NaiveDate,
}

impl NewAirdrop {
    pub fn validate(self) -> RegistryResult<ValidNewAirdrop> {
        let name = self.name.ok_or_else(|| RegistryError::missing_field("name"))?;
        let deadline = self
            .claim_deadline
            .ok_or_else(|| RegistryError::missing_field("claim_deadline"))?;

        Ok(ValidNewAirdrop {
            name: non_blank_name(name)?,
            claim_deadline: parse_deadline(&deadline)?,
        })
    }
}

/// Validated update: every supplied field already checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub name: Option<String>,
    pub claim_deadline: Option<NaiveDate>,
    pub status: Option<String>,
}

impl AirdropPatch {
    pub fn validate(self) -> RegistryResult<ValidPatch> {
        Ok(ValidPatch {
            name: self.name.map(non_blank_name).transpose()?,
            claim_deadline: self.claim_deadline.as_deref().map(parse_deadline).transpose()?,
            status: self.status,
        })
    }
}

impl ValidPatch {
    pub fn apply(self, target: &mut Airdrop) {
        if let Some(name) = self.name { target.name = name; }
        if let Some(d) = self.claim_deadline { target.claim_deadline = d; }
        if let Some(status) = self.status { target.status = status; }
    }
}

/// `YYYY-MM-DD` with a four-digit, non-zero year. Only digits and `-` are
/// allowed; chrono then checks the calendar.
pub fn parse_deadline(s: &str) -> RegistryResult<NaiveDate> {
    if !has_plain_year(s) {
        return Err(RegistryError::invalid_date());
    }
    NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).map_err(|_| RegistryError::invalid_date())
}

// chrono's `%Y` takes 1-4 digits, a sign, and leading spaces.
fn has_plain_year(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() > 5
        && b.iter().all(|c| c.is_ascii_digit() || *c == b'-')
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && &b[..4] != b"0000"
}

pub fn canonical_date(d: NaiveDate) -> String {
    d.format(INPUT_DATE_FORMAT).to_string()
}

pub fn display_date(d: NaiveDate) -> String {
    d.format(DISPLAY_DATE_FORMAT).to_string()
}

fn non_blank_name(name: String) -> RegistryResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::Validation(s!("Field 'name' must not be empty")));
    }
    Ok(s!(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_form_pads_day_and_abbreviates_month() {
        let d = parse_deadline("2025-03-01").unwrap();
        assert_eq!(display_date(d), "01 Mar 2025");
        assert_eq!(canonical_date(d), "2025-03-01");
    }

    #[test]
    fn slashes_are_rejected() {
        let err = parse_deadline("2025/03/01").unwrap_err();
        assert!(err.to_string().contains("Invalid date format"));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert!(parse_deadline("2025-02-30").is_err());
        assert!(parse_deadline("").is_err());
    }

    #[test]
    fn year_must_be_four_plain_digits() {
        for bad in ["25-03-01", "+2025-03-01", "-2025-03-01", " 2025-03-01", "2025-03-01 ", "0000-01-01", "12345-01-01"] {
            assert!(parse_deadline(bad).is_err(), "{bad:?}");
        }
        assert_eq!(canonical_date(parse_deadline("0001-01-01").unwrap()), "0001-01-01");
    }

    #[test]
    fn missing_fields_are_named() {
        let err = NewAirdrop { name: Some(s!("A")), claim_deadline: None }.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: claim_deadline");

        let err = NewAirdrop { name: None, claim_deadline: Some(s!("2025-01-01")) }.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");
    }

    #[test]
    fn blank_name_is_invalid() {
        let err = NewAirdrop { name: Some(s!("   ")), claim_deadline: Some(s!("2025-01-01")) }
            .validate()
            .unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut a = Airdrop::new(1, s!("Old"), parse_deadline("2025-01-30").unwrap());
        AirdropPatch { status: Some(s!("Claimed")), ..Default::default() }
            .validate()
            .unwrap()
            .apply(&mut a);
        assert_eq!(a.name, "Old");
        assert_eq!(a.status, "Claimed");
        assert_eq!(canonical_date(a.claim_deadline), "2025-01-30");
    }
}
