use crate::cmd::Error;
use alloy_primitives::{hex, Bytes};
use std::{borrow::Cow, fs, path::Path};

/// Reads hex encoded bytes from `path` if given, otherwise from `inline`.
pub(crate) fn read_hex(inline: Option<&str>, path: Option<&Path>) -> Result<Bytes, Error> {
    let text: Cow<'_, str> = match (path, inline) {
        (Some(path), _) => {
            if !path.exists() {
                return Err(Error::PathNotExists);
            }
            fs::read_to_string(path)?.into()
        }
        (None, Some(inline)) => inline.into(),
        (None, None) => return Err(Error::MissingInput),
    };

    let bytes = hex::decode(text.trim().trim_start_matches("0x")).map_err(|_| Error::InvalidHex)?;
    Ok(bytes.into())
}
