//! `iCCP` payload: profile name, compression method and zlib-compressed profile.

use crate::{Error, Result};

pub const DEFAULT_PROFILE_NAME: &str = "ICC Profile";

/// Upper bound on the inflated profile size when reading an `iCCP` chunk.
pub const DEFAULT_INFLATE_LIMIT: usize = 64 << 20;

const COMPRESSION_DEFLATE: u8 = 0;
const MAX_NAME_LEN: usize = 79;

/// ICC profile read back from an `iCCP` chunk.
#[derive(Clone, Eq, PartialEq)]
pub struct EmbeddedProfile {
    pub name: String,
    pub profile: Vec<u8>,
}

impl std::fmt::Debug for EmbeddedProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedProfile")
            .field("name", &self.name)
            .field("profile", &format_args!("{} byte(s)", self.profile.len()))
            .finish()
    }
}

/// Encodes a profile name as a PNG keyword: 1-79 printable Latin-1 characters, with no leading,
/// trailing or consecutive spaces.
fn encode_keyword(name: &str) -> Result<Vec<u8>> {
    let bytes = name
        .chars()
        .map(|c| u8::try_from(c as u32).map_err(|_| Error::InvalidProfileName))
        .collect::<Result<Vec<_>>>()?;

    if bytes.is_empty() || bytes.len() > MAX_NAME_LEN {
        return Err(Error::InvalidProfileName);
    }
    if !bytes.iter().all(|&b| matches!(b, 0x20..=0x7e | 0xa1..=0xff)) {
        return Err(Error::InvalidProfileName);
    }
    if bytes[0] == b' ' || bytes[bytes.len() - 1] == b' ' || bytes.windows(2).any(|w| w == b"  ")
    {
        return Err(Error::InvalidProfileName);
    }
    Ok(bytes)
}

/// Builds `iCCP` chunk data for `profile`.
pub fn build_payload(name: &str, profile: &[u8]) -> Result<Vec<u8>> {
    let keyword = encode_keyword(name)?;
    let stream = iccembed_codec::wrap_zlib(profile);

    let mut data = Vec::with_capacity(keyword.len() + 2 + stream.len());
    data.extend_from_slice(&keyword);
    data.push(0);
    data.push(COMPRESSION_DEFLATE);
    data.extend_from_slice(&stream);
    Ok(data)
}

/// Parses `iCCP` chunk data and inflates the profile, producing at most `limit` bytes.
pub fn parse_payload(data: &[u8], limit: usize) -> Result<EmbeddedProfile> {
    let name_len = data
        .iter()
        .take(MAX_NAME_LEN + 1)
        .position(|&b| b == 0)
        .filter(|&len| len > 0)
        .ok_or(Error::InvalidProfileName)?;
    let name = data[..name_len].iter().map(|&b| b as char).collect();

    let Some(&method) = data.get(name_len + 1) else {
        return Err(Error::TruncatedIccpPayload { length: data.len() });
    };
    if method != COMPRESSION_DEFLATE {
        return Err(Error::UnsupportedCompressionMethod { method });
    }

    let profile =
        iccembed_codec::unwrap_zlib(&data[name_len + 2..], limit).map_err(Error::Inflate)?;
    Ok(EmbeddedProfile { name, profile })
}
