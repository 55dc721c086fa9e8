use anyhow::Result;
use colored::Colorize;
use wa_validation::{PasswordStrength, Rules};

pub fn execute(rules: &Rules, password: &str, json: bool) -> Result<bool> {
    let strength = rules.password_strength(password);

    if json {
        println!("{}", serde_json::to_string(&strength)?);
    } else {
        let label = match strength {
            PasswordStrength::Strong => strength.as_str().green(),
            PasswordStrength::Medium => strength.as_str().yellow(),
            PasswordStrength::Weak => strength.as_str().red(),
        };
        println!("{}", label);
    }

    Ok(strength.is_accepted())
}
