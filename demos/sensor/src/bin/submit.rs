//! Sign a sensor reading and submit it to an attestor.
//!
//! ```sh
//! cargo run --bin submit -- http://localhost:8001 <64-char hex private key> '{"temperature":23.4}'
//! ```

use anyhow::{bail, Context, Result};
use device_attest::{sign_and_submit, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let (Some(attestor_url), Some(hex_key), Some(payload)) =
        (args.next(), args.next(), args.next())
    else {
        bail!("usage: submit <attestor-url> <64-char hex private key> <payload-json>");
    };

    let bytes = hex::decode(hex_key.trim()).context("private key must be hex")?;
    let privkey: [u8; 32] =
        bytes.as_slice().try_into().context("private key must be 32 bytes")?;

    let transport = HttpTransport::new();
    let status = sign_and_submit(&transport, &attestor_url, &privkey, &payload).await?;
    println!("attestor responded with HTTP {status}");
    Ok(())
}
