use redis_seeder::{connect_with_fallback, Catalog, Seeder, SeederConfig, SeederError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), SeederError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SeederConfig::default();

    println!("Connecting to Redis...");
    let (conn, strategy) = match connect_with_fallback(&config).await {
        Ok(connected) => connected,
        Err(SeederError::Connection { attempts }) => {
            println!();
            println!("✗ Could not connect to Redis with any method");
            for attempt in &attempts {
                println!("  - {}: {}", attempt.strategy.label(), attempt.error);
            }
            println!();
            println!("Please ensure:");
            println!("  1. Redis is running");
            println!("  2. Check your Redis config for password");
            println!("  3. Check the host and port settings");
            return Ok(());
        }
        Err(other) => return Err(other),
    };
    println!(
        "✓ Connected to Redis at {}:{} ({})",
        config.host,
        config.port,
        strategy.label()
    );

    let catalog = Catalog::build()?;
    println!();
    println!("Generating {} sample Redis keys...", catalog.total_keys());

    let mut seeder = Seeder::new(conn, config.clone());
    let written = seeder.run(&catalog).await?;

    println!();
    println!("✓ Done! Created {} sample keys", written);
    println!("Redis: {}:{}", config.host, config.port);
    println!();
    println!("Example keys created:");
    for section in &catalog.sections {
        if let Some(key) = section.keys.first() {
            println!("  - {} ({})", key.name, key.value.type_name());
        }
    }
    println!();
    println!("You can now connect a Redis GUI and take screenshots!");

    Ok(())
}
