//! Store connection diagnostic.
//!
//! Connects with the server's configuration, pings MongoDB and prints the
//! document count of every collection the API uses.

use mongodb::bson::doc;

use homelist::backend::store::MongoStore;
use homelist::shared::records::{Appointment, Inquiry, Listing, Property, Record, User};
use homelist::shared::ServerConfig;

const COLLECTIONS: [&str; 5] = [
    Property::COLLECTION,
    Listing::COLLECTION,
    Inquiry::COLLECTION,
    Appointment::COLLECTION,
    User::COLLECTION,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env()?;

    println!("DEBUGGING STORE CONNECTION");
    println!("==========================");
    println!("Database: {}", config.database_name);
    println!("Connect timeout: {:?}", config.connect_timeout);

    println!("\nConnecting and pinging...");
    let store = match MongoStore::connect(&config.mongodb_uri, &config.database_name, config.connect_timeout).await {
        Ok(store) => {
            println!("Connection successful");
            store
        }
        Err(e) => {
            println!("Connection failed: {}", e);
            println!("\nCheck that MONGODB_URI is reachable from this host");
            return Err(e.into());
        }
    };

    println!("\nCollections:");
    for name in COLLECTIONS {
        let collection = store.database().collection::<mongodb::bson::Document>(name);
        match collection.count_documents(doc! {}).await {
            Ok(count) => println!("  {:<14} {}", name, count),
            Err(e) => println!("  {:<14} error: {}", name, e),
        }
    }

    match &config.image_host {
        Some(image_host) => println!("\nImage host: Cloudinary cloud '{}'", image_host.cloud_name),
        None => println!("\nImage host: not configured (uploads disabled)"),
    }

    Ok(())
}
