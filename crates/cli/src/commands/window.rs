//! `reflexion show` / `reflexion clear` — Stored reflection windows.
//!
//! A window file is a JSON array of critiques, oldest first. A missing file
//! is an empty window.

use std::path::Path;

use reflexion_agent::ReflectionWindow;

/// Load a window file, treating a missing file as an empty window.
pub fn load(path: &Path) -> Result<ReflectionWindow, Box<dyn std::error::Error>> {
    if !path.exists() {
        tracing::debug!("No window file at {}, starting empty", path.display());
        return Ok(ReflectionWindow::new());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read window file {}: {e}", path.display()))?;
    let window = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse window file {}: {e}", path.display()))?;
    Ok(window)
}

/// Write a window file, creating parent directories as needed.
pub fn save(path: &Path, window: &ReflectionWindow) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(window)?)?;
    tracing::debug!(entries = window.len(), "Saved window to {}", path.display());
    Ok(())
}

pub async fn show(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let window = load(path)?;

    if window.is_empty() {
        println!("(no reflections)");
        return Ok(());
    }

    for (i, reflection) in window.iter().enumerate() {
        println!("{}. {}", i + 1, reflection);
    }
    Ok(())
}

pub async fn clear(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    save(path, &ReflectionWindow::new())?;
    println!("✅ Cleared reflections in {}", path.display());
    Ok(())
}
