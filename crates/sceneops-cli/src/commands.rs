//! Subcommand implementations
//!
//! Each command writes its user-facing output to `out` and returns whether
//! the run counts as a success.

use anyhow::Context;
use sceneops_copilot::{Copilot, OllamaClient, EXAMPLES};
use sceneops_core::{execute_plan_text, CapabilityRegistry};
use sceneops_scene::InMemoryScene;
use std::io::Write;

use crate::config::SceneopsConfig;

/// Execute plan text against a fresh in-memory scene
///
/// # Errors
/// Returns an error only if writing to `out` fails; plan problems are
/// reported in the output and as `Ok(false)`.
pub fn run_plan(text: &str, out: &mut dyn Write) -> anyhow::Result<bool> {
    let registry = CapabilityRegistry::with_defaults();
    let mut scene = InMemoryScene::new();

    match execute_plan_text(text, &registry, &mut scene) {
        Ok(report) => {
            writeln!(out, "{report}")?;
            write_scene(&scene, out)?;
            Ok(report.succeeded())
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

/// Generate a plan for a natural-language request and run it
///
/// # Errors
/// Returns an error if the generation client cannot be built or writing to
/// `out` fails.
pub fn run_prompt(text: &str, config: &SceneopsConfig, out: &mut dyn Write) -> anyhow::Result<bool> {
    let client = OllamaClient::new(config.generation.clone())
        .context("failed to create generation client")?;
    let copilot = Copilot::new(client);
    let mut scene = InMemoryScene::new();

    let outcome = copilot.run(text, &mut scene);
    writeln!(out, "{}", outcome.message())?;
    if outcome.report().is_some() {
        write_scene(&scene, out)?;
    }
    Ok(outcome.is_success())
}

/// Print the capability table
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn capabilities(json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let registry = CapabilityRegistry::with_defaults();

    if json {
        let text = serde_json::to_string_pretty(&registry.infos())
            .context("failed to serialize capability table")?;
        writeln!(out, "{text}")?;
        return Ok(());
    }

    for info in registry.infos() {
        let selection = if info.requires_active_selection {
            "  (requires active object)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<30} [{}]{}",
            info.id,
            info.allowed_params.join(", "),
            selection
        )?;
    }
    Ok(())
}

/// Print the quick example prompts
///
/// # Errors
/// Returns an error if writing fails.
pub fn examples(out: &mut dyn Write) -> anyhow::Result<()> {
    for (label, prompt) in EXAMPLES {
        writeln!(out, "{label:<10} {prompt}")?;
    }
    Ok(())
}

fn write_scene(scene: &InMemoryScene, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "Scene:")?;
    writeln!(out, "{scene}")?;
    Ok(())
}
