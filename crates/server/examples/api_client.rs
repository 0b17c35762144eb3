//! Exercises a running Lost & Found server over HTTP
//!
//! Start the server first (`cargo run -p lostfound-server`), then
//! `cargo run -p lostfound-server --example api_client`.

use reqwest::{Client, StatusCode};
use serde_json::json;

const SERVER_URL: &str = "http://localhost:18080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();
    let mut outcomes = Vec::new();

    // Example 1: Report a lost item
    println!("1. Report Item:");
    let resp = client
        .post(format!("{SERVER_URL}/report"))
        .json(&json!({
            "id": 101,
            "description": "Test Lost Item - Black Wallet",
            "location": "Terminal A, Gate 5",
            "date": "2025-08-29",
            "isLost": true,
            "reportedBy": "John Doe",
            "contactInfo": "john.doe@example.com",
            "tags": "wallet, black, leather",
            "notes": "Contains ID cards and credit cards"
        }))
        .send()
        .await?;
    outcomes.push(("report", print_response(resp).await? == StatusCode::OK));

    // Example 2: Search by description
    println!("2. Search by Description:");
    let resp = client
        .post(format!("{SERVER_URL}/search"))
        .json(&json!({ "description": "wallet" }))
        .send()
        .await?;
    outcomes.push(("search_description", print_response(resp).await? == StatusCode::OK));

    // Example 3: Search by id
    println!("3. Search by ID:");
    let resp = client
        .post(format!("{SERVER_URL}/search"))
        .json(&json!({ "id": 101 }))
        .send()
        .await?;
    outcomes.push(("search_id", print_response(resp).await? == StatusCode::OK));

    // Example 4: Invalid JSON is rejected
    println!("4. Invalid JSON:");
    let resp = client
        .post(format!("{SERVER_URL}/report"))
        .header("Content-Type", "application/json")
        .body("This is not valid JSON")
        .send()
        .await?;
    outcomes.push(("invalid_json", print_response(resp).await? == StatusCode::BAD_REQUEST));

    println!("Summary:");
    for (name, passed) in &outcomes {
        println!("  {name}: {}", if *passed { "PASS" } else { "FAIL" });
    }
    let passed = outcomes.iter().filter(|(_, ok)| *ok).count();
    println!("{passed}/{} checks passed", outcomes.len());

    Ok(())
}

async fn print_response(resp: reqwest::Response) -> anyhow::Result<StatusCode> {
    let status = resp.status();
    println!("Status: {status}");
    println!("Body: {}", resp.text().await?);
    println!();
    Ok(status)
}
