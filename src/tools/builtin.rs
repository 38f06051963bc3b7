//! Built-in demonstration tools: arithmetic and geometry.
//!
//! Trivial bodies — their purpose is to give the model something concrete
//! to call. Each is registered through the declarative descriptor builder.

use crate::tools::descriptor::ToolDescriptor;
use crate::tools::traits::{FnTool, Tool};
use crate::types::ArgMap;
use anyhow::{anyhow, Result};
use serde_json::{json, Value};

/// The default tool set wired into the CLI.
pub fn demo_tools() -> Vec<Box<dyn Tool>> {
    vec![
        add_two_numbers(),
        calculate_area_of_rectangle(),
        calculate_area_of_circle(),
    ]
}

fn int_arg(args: &ArgMap, name: &str) -> Result<i64> {
    args.get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| anyhow!("Missing '{}' argument", name))
}

fn float_arg(args: &ArgMap, name: &str) -> Result<f64> {
    args.get(name)
        .and_then(Value::as_f64)
        .ok_or_else(|| anyhow!("Missing '{}' argument", name))
}

fn add_two_numbers() -> Box<dyn Tool> {
    FnTool::boxed(
        ToolDescriptor::new("add_two_numbers")
            .description("Add two numbers together and return their sum.")
            .param("a", "int")
            .param("b", "int"),
        |args| {
            let a = int_arg(&args, "a")?;
            let b = int_arg(&args, "b")?;
            Ok(json!(a + b))
        },
    )
}

fn calculate_area_of_rectangle() -> Box<dyn Tool> {
    FnTool::boxed(
        ToolDescriptor::new("calculate_area_of_rectangle")
            .description("Calculate the area of a rectangle.")
            .param("length", "float")
            .param("width", "float"),
        |args| {
            let length = float_arg(&args, "length")?;
            let width = float_arg(&args, "width")?;
            Ok(json!(length * width))
        },
    )
}

fn calculate_area_of_circle() -> Box<dyn Tool> {
    FnTool::boxed(
        ToolDescriptor::new("calculate_area_of_circle")
            .description("Calculate the area of a circle from its radius.")
            .param("radius", "float"),
        |args| {
            let radius = float_arg(&args, "radius")?;
            Ok(json!(std::f64::consts::PI * radius * radius))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, Value)]) -> ArgMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn adds_two_integers() {
        let tool = add_two_numbers();
        let result = tool
            .execute(args(&[("a", json!(1)), ("b", json!(2))]))
            .await
            .unwrap();
        assert_eq!(result, json!(3));
    }

    #[tokio::test]
    async fn rectangle_area() {
        let tool = calculate_area_of_rectangle();
        let result = tool
            .execute(args(&[("length", json!(10.0)), ("width", json!(20.0))]))
            .await
            .unwrap();
        assert_eq!(result, json!(200.0));
    }

    #[tokio::test]
    async fn missing_argument_is_an_execution_error() {
        let tool = add_two_numbers();
        let err = tool.execute(args(&[("a", json!(1))])).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing 'b' argument");
    }

    #[test]
    fn demo_set_has_unique_names() {
        let tools = demo_tools();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tools.len());
    }
}
