use serde::{Deserialize, Deserializer};

/// Join the image host with a stored file name. No validation is applied.
pub fn image_url(base: &str, file_name: &str) -> String {
    format!("{}{}", base, file_name)
}

/// Placeholder initials for an item without a usable image.
///
/// First letter of the first two words, uppercased. One word yields one letter.
pub fn initials(title: &str) -> String {
    title
        .split(' ')
        .take(2)
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Deserialize `null` as `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
