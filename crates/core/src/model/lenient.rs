//! Forgiving decoders for numeric fields typed into free-form inputs.
//!
//! Browser forms store `Number(input)`, so a stored count may be fractional
//! or `null`. Such values round to the nearest whole number (saturating at the
//! type's bounds) instead of rejecting the whole blob.

use serde::{Deserialize, Deserializer};

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float to int casts saturate and map NaN to zero"
)]
pub(crate) fn rounded_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map_or(0, |v| v.round() as u32))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate and map NaN to zero"
)]
pub(crate) fn rounded_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map_or(0, |v| v.round() as i32))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Counts {
        #[serde(deserialize_with = "super::rounded_u32")]
        minutes: u32,
        #[serde(deserialize_with = "super::rounded_i32")]
        tier: i32,
    }

    fn counts(raw: &str) -> (u32, i32) {
        let c: Counts = serde_json::from_str(raw).unwrap();
        (c.minutes, c.tier)
    }

    #[test]
    fn whole_numbers_pass_through() {
        assert_eq!(counts(r#"{"minutes": 45, "tier": -2}"#), (45, -2));
    }

    #[test]
    fn fractions_round() {
        assert_eq!(counts(r#"{"minutes": 12.5, "tier": 1.2}"#), (13, 1));
    }

    #[test]
    fn null_and_negative_clamp() {
        assert_eq!(counts(r#"{"minutes": null, "tier": null}"#), (0, 0));
        assert_eq!(counts(r#"{"minutes": -5, "tier": 0}"#), (0, 0));
        assert_eq!(counts(r#"{"minutes": 1e12, "tier": 0}"#).0, u32::MAX);
    }

    #[test]
    fn text_is_still_rejected() {
        assert!(serde_json::from_str::<Counts>(r#"{"minutes": "ten", "tier": 0}"#).is_err());
    }
}
