//! Print the `did:key` identity for a device private key.
//!
//! ```sh
//! cargo run --bin print_did -- <64-char hex private key>
//! ```

use anyhow::{bail, Context, Result};
use device_attest::did_from_privkey;

fn main() -> Result<()> {
    let Some(hex_key) = std::env::args().nth(1) else {
        bail!("usage: print_did <64-char hex private key>");
    };

    let bytes = hex::decode(hex_key.trim()).context("private key must be hex")?;
    let privkey: [u8; 32] =
        bytes.as_slice().try_into().context("private key must be 32 bytes")?;

    let did = did_from_privkey(&privkey)?;
    println!("{did}");
    Ok(())
}
