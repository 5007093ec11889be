//! Validates a sign-up payload and prints the collected errors.
//!
//! Run with `RUST_LOG=verdict_validator=trace` to see each rule evaluation.

use serde_json::json;
use tracing_subscriber::EnvFilter;
use verdict_validator::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ValidatorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = json!({
        "user": {
            "name": "John Doe",
            "email": "invalid-email",
            "password": "short"
        }
    });

    let rules = RuleSet::from([
        ("user.name", "required|async"),
        ("user.email", "required|email"),
        ("user.password", "required|min:8"),
    ]);

    let messages = MessageTable::from([
        ("user.name.required", "The name field is required."),
        ("user.email.email", "The email field must be a valid email address."),
        ("user.password.min", "The password field must be at least :min characters."),
    ]);

    let mut validator = Validator::builder()
        .messages(messages)
        .rule(
            "async",
            async_rule_fn(|_args: RuleArgs| async {
                tokio::task::yield_now().await;
                true
            }),
        )
        .build();

    if validator.validate(&data, &rules).await? {
        println!("valid");
    } else {
        print!("{}", validator.errors());
        // user.email: The email field must be a valid email address.
        // user.password: The password field must be at least 8 characters.
    }

    Ok(())
}
