use minicache::{KeyValueStore, MemoryStore, Result};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging on stderr; the demo itself prints on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("MiniCache demo starting...");

    let mut cache = MemoryStore::new();

    // Store a few entries
    cache.set("name".to_string(), "John Doe".to_string())?;
    cache.set("age".to_string(), "30".to_string())?;
    info!("Stored {} entries", cache.len());

    // Read one back
    match cache.get("name") {
        Ok(name) => println!("Name: {}", name),
        Err(e) => println!("Error: {}", e),
    }

    // Remove it
    match cache.delete("name") {
        Ok(()) => println!("Name deleted"),
        Err(e) => println!("Error: {}", e),
    }

    // Reading a deleted key fails
    if let Err(e) = cache.get("name") {
        println!("Error: {}", e);
    }

    info!("MiniCache demo done, {} entries left", cache.len());
    Ok(())
}
