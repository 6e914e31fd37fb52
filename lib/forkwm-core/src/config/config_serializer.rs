use crate::config::{Config, ConfigResult};
use schemars::{schema_for, Schema};
use std::collections::HashMap;

const HEADER: &str = "# ForkWM Configuration File\n# Restart forkwm to apply changes\n\n";

/// Renders `config` as YAML with each field's doc comment above it.
pub fn serialize_config(config: &Config) -> ConfigResult<String> {
    let yaml = serde_yaml::to_string(config)?;
    let mut field_docs = HashMap::new();
    extract_field_documentation(&schema_for!(Config), "", &mut field_docs);

    let mut output = String::from(HEADER);
    output.push_str(&add_comments_to_yaml(&yaml, &field_docs));
    output.push('\n');
    Ok(output)
}

fn extract_field_documentation(
    schema: &Schema,
    prefix: &str,
    field_docs: &mut HashMap<String, String>,
) {
    let Some(properties) = schema
        .as_object()
        .and_then(|schema| schema.get("properties"))
        .and_then(|properties| properties.as_object())
    else {
        return;
    };

    for (key, value) in properties {
        let field_path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        let Some(property) = value.as_object() else {
            continue;
        };
        if let Some(description) = property.get("description").and_then(|d| d.as_str()) {
            field_docs.insert(field_path.clone(), description.to_string());
        }
        if property.contains_key("properties") {
            if let Ok(nested) = Schema::try_from(value.clone()) {
                extract_field_documentation(&nested, &field_path, field_docs);
            }
        }
    }
}

fn add_comments_to_yaml(yaml: &str, field_docs: &HashMap<String, String>) -> String {
    let mut result = Vec::new();
    let mut field_path_stack = Vec::new();

    for line in yaml.lines() {
        if let Some(colon_pos) = line.find(':') {
            let before_colon = &line[..colon_pos];
            let field_name = before_colon.trim();
            let indent_level = (before_colon.len() - before_colon.trim_start().len()) / 2;

            field_path_stack.truncate(indent_level);
            field_path_stack.push(field_name.to_string());
            let full_field_path = field_path_stack.join(".");

            let doc = field_docs
                .get(&full_field_path)
                .or_else(|| field_docs.get(field_name));
            if let Some(doc) = doc {
                if !result.is_empty() {
                    result.push(String::new());
                }
                result.push(format!("{}# {}", "  ".repeat(indent_level), doc));
            }
        }
        result.push(line.to_string());
    }

    result.join("\n")
}
