use std::collections::BTreeMap;

use anyhow::{Context, Result};
use wa_forms::FormKind;
use wa_validation::{result_to_json, Rules};

use super::format_result;

pub fn execute(rules: &Rules, kind: &str, payload: &str, json: bool) -> Result<bool> {
    let kind: FormKind = kind.parse()?;
    let payload: serde_json::Value =
        serde_json::from_str(payload).context("Form payload is not valid JSON")?;

    let results = kind
        .validate_payload(payload, rules)
        .with_context(|| format!("Cannot validate {} form", kind))?;

    if json {
        let output: BTreeMap<&str, serde_json::Value> = results
            .iter()
            .map(|(field, result)| (field.as_str(), result_to_json(result)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (field, result) in &results {
            println!("{}", format_result(*field, result));
        }
    }

    let failed = results.values().filter(|r| r.is_err()).count();
    tracing::info!(form = %kind, fields = results.len(), failed, "validated form");
    Ok(failed == 0)
}
