//! Print an argon2 hash of the access password for `settings.toml`:
//!
//! ```text
//! hash-password 'team password'
//! ```
//!
//! Paste the output into `[access] password_hash`.

use server::auth::password::{hash_password, PasswordHashError};

fn main() -> Result<(), PasswordHashError> {
    let Some(password) = std::env::args().nth(1).filter(|p| !p.is_empty()) else {
        eprintln!("usage: hash-password <password>");
        std::process::exit(2);
    };
    println!("{}", hash_password(&password)?);
    Ok(())
}
