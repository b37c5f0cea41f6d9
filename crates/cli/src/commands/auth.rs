//! Account commands: login, signup, profile, logout.
//!
//! The CLI owns credential storage between invocations: the bearer token
//! lives in `<state-dir>/token.json` and is read back into a [`Session`]
//! on every run. The library itself never stores credentials.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use bramble_client::remote::AuthClient;
use bramble_client::{ClientConfig, Session};
use bramble_core::{AccessToken, Role, SignupRequest};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

fn token_path(config: &ClientConfig) -> PathBuf {
    config.state_dir.join("token.json")
}

/// Load the stored session; anonymous when no valid token file exists.
pub fn load_session(config: &ClientConfig) -> Session {
    let Ok(raw) = fs::read_to_string(token_path(config)) else {
        return Session::anonymous();
    };

    serde_json::from_str::<StoredToken>(&raw).map_or_else(
        |_| Session::anonymous(),
        |stored| Session::authenticated(AccessToken::new(stored.token)),
    )
}

fn store_token(config: &ClientConfig, token: &AccessToken) -> CommandResult {
    fs::create_dir_all(&config.state_dir)?;
    let json = serde_json::to_string(&StoredToken {
        token: token.expose().to_string(),
    })?;
    fs::write(token_path(config), json)?;
    Ok(())
}

/// Log in and persist the bearer token.
#[allow(clippy::print_stdout)]
pub async fn login(config: &ClientConfig, email: &str, password: &str) -> CommandResult {
    let auth = AuthClient::new(&config.user_service_url);
    let token = auth.login(email, password).await?;
    store_token(config, &token)?;
    println!("Logged in as {email}");
    Ok(())
}

/// Create a new account. Logging in is a separate step.
#[allow(clippy::print_stdout)]
pub async fn signup(
    config: &ClientConfig,
    email: String,
    password: String,
    phone: String,
    role: Role,
) -> CommandResult {
    let auth = AuthClient::new(&config.user_service_url);
    auth.signup(&SignupRequest {
        email: email.clone(),
        password,
        phone,
        role,
    })
    .await?;
    println!("Account created for {email}; run `bramble login` to sign in");
    Ok(())
}

/// Show the logged-in account profile.
#[allow(clippy::print_stdout)]
pub async fn profile(config: &ClientConfig) -> CommandResult {
    let session = load_session(config);
    let auth = AuthClient::new(&config.user_service_url);
    let profile = auth.profile(&session).await?;

    println!("email: {}", profile.email);
    println!("role:  {}", profile.role);
    if let Some(phone) = &profile.phone {
        println!("phone: {phone}");
    }
    Ok(())
}

/// Forget the stored token. Persisted cart/wishlist state is untouched.
#[allow(clippy::print_stdout)]
pub fn logout(config: &ClientConfig) -> CommandResult {
    let path = token_path(config);
    match fs::remove_file(&path) {
        Ok(()) => println!("Logged out"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            println!("Not logged in");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
