// Deserialize a `String` as the desired type, Coinbase quotes every decimal
pub fn de_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::de::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let data: &str = serde::de::Deserialize::deserialize(deserializer)?;
    data.parse::<T>().map_err(serde::de::Error::custom)
}

// Same as de_str but a missing or null field becomes None
pub fn de_opt_str<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::de::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let data: Option<&str> = serde::de::Deserialize::deserialize(deserializer)?;
    data.map(|value| value.parse::<T>().map_err(serde::de::Error::custom))
        .transpose()
}
