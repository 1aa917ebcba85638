//! Demo of the hypermedia recipe: loads sample data and prints a few documents in
//! every format, answering them from concurrent tasks.

use hypermedia_recipe::runtime::{setup_tracing, BlogSystem, Config};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    let system = Arc::new(BlogSystem::new(config).map_err(|e| e.to_string())?);
    system.seed().map_err(|e| e.to_string())?;

    let requests = [
        ("application/hal+json", "embedded=creator"),
        ("application/ld+json", "fields[BlogPosting]=headline,creator"),
    ];
    let mut handles = Vec::new();
    for (media_type, query) in requests {
        let system = Arc::clone(&system);
        let span = info_span!("blog_postings", media_type);
        handles.push(tokio::spawn(
            async move {
                let request = system.request(query).with_accept_language("es");
                let pagination = system.pagination(Some(1), Some(2));
                let response = system.blog_postings(Some(media_type), pagination, &request);
                info!(status = response.status, "Blog postings rendered");
                response
            }
            .instrument(span),
        ));
    }
    for handle in handles {
        let response = handle.await.map_err(|e| e.to_string())?;
        println!("{} ({})\n{}\n", response.status, response.media_type, response.body);
    }

    let request = system.request("");
    let person = system.person(Some("application/ld+json"), 1, &request);
    println!("{} ({})\n{}\n", person.status, person.media_type, person.body);

    let missing = system.blog_posting(None, 404, &request);
    println!("{} ({})\n{}\n", missing.status, missing.media_type, missing.body);

    info!("Demo completed");
    Ok(())
}
