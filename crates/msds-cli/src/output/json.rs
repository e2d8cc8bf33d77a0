use msds_core::error::MsdsError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), MsdsError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
