use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Management CLI for the Antique Marketplace Gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all listings
    List,
    /// Read the current listing index
    Index,
    /// Check gateway and node health
    Health,
    /// List a new antique for sale
    Create {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        year: u64,
        #[arg(long)]
        condition: String,
        #[arg(long)]
        origin: String,
        #[arg(long, default_value_t = false)]
        authenticated: bool,
    },
    /// Buy a listed antique
    Buy { id: String },
    /// Soft-delete a listing
    Delete { id: String },
    /// Attach a review to a listing
    Review {
        id: String,
        #[arg(long)]
        rating: u64,
        #[arg(long)]
        comment: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let res = client.get(format!("{}/antiques", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Index => {
            let res = client
                .get(format!("{}/antique-index", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Create {
            owner,
            price,
            title,
            category,
            description,
            year,
            condition,
            origin,
            authenticated,
        } => {
            let body = serde_json::json!({
                "owner": owner,
                "price": price,
                "itemTitle": title,
                "category": category,
                "description": description,
                "yearOfOrigin": year,
                "condition": condition,
                "origin": origin,
                "isAuthenticated": authenticated,
            });
            let res = client
                .post(format!("{}/antiques", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Buy { id } => {
            let res = client
                .post(format!("{}/antiques/{}/buy", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/antiques/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Review { id, rating, comment } => {
            let body = serde_json::json!({ "rating": rating, "comment": comment });
            let res = client
                .post(format!("{}/antiques/{}/reviews", cli.url, id))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await.unwrap_or(Value::Null);
    println!("{}", status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
