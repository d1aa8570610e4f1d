//! `stackforge secret`

use anyhow::Result;
use clap::Args;

use stackforge_core::secret::generate_jwt_secret;

/// Generate a fresh JWT signing secret (32 random bytes, hex-encoded).
#[derive(Args, Debug)]
pub struct SecretArgs {}

impl SecretArgs {
    pub fn run(self) -> Result<()> {
        println!("{}", generate_jwt_secret());
        Ok(())
    }
}
