//! `reflexion status` — Show the effective configuration.

use reflexion_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    println!("Reflexion Status");
    println!("================");
    println!("  Config dir:       {}", AppConfig::config_dir().display());
    println!("  Provider:         {}", config.default_provider);
    println!("  Model:            {}", config.default_model);
    println!("  Temperature:      {}", config.default_temperature);
    println!("  Max tokens:       {}", config.default_max_tokens);
    println!("  Max reflections:  {}", config.reflection.max_reflections);
    println!("  Default strategy: {}", config.reflection.default_strategy);
    match config.reflection.scratchpad_token_limit {
        Some(limit) => println!("  Scratchpad limit: {limit} tokens"),
        None => println!("  Scratchpad limit: none"),
    }
    println!("  API key:          {}", if config.has_api_key() { "set" } else { "missing" });

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `reflexion init` first");
    }

    Ok(())
}
