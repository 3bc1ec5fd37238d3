use crate::constants::ID_SUFFIX_LEN;

/// Generate an id of the form `<prefix>-<suffix>` with a short random suffix.
///
/// Uniqueness is probabilistic; no collision check is made.
#[must_use]
pub fn create_id(prefix: &str) -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    let suffix = random.get(..ID_SUFFIX_LEN).unwrap_or(&random);
    format!("{prefix}-{suffix}")
}
