use std::time::Duration;

use tokio::time::sleep;

use vlr_map_scraper::aggregate::team_summaries;
use vlr_map_scraper::{classify_series, VlrClient};

#[tokio::main]
async fn main() {
    let event_url = std::env::args()
        .nth(1)
        .expect("usage: scrape_event <vlr.gg event matches url>");

    let client = VlrClient::new();
    let match_urls = client.get_event_match_urls(&event_url).await.unwrap();
    println!("Found {} match pages", match_urls.len());

    let mut all_records = vec![];
    for (i, url) in match_urls.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, match_urls.len(), url);
        match client.get_match_maps(url).await {
            Ok(records) => {
                for record in &records {
                    println!(
                        "  Map {}: {} - {} {}-{} {} (winner: {})",
                        record.map_number,
                        record.map_name,
                        record.context.team_a,
                        record.team_a_score,
                        record.team_b_score,
                        record.context.team_b,
                        record.winner_name()
                    );
                }
                if let Some(classification) = classify_series(&records) {
                    println!("  {classification}");
                }
                all_records.extend(records);
            }
            Err(e) => println!("  failed: {e}"),
        }
        // Courtesy delay between pages.
        sleep(Duration::from_secs(2)).await;
    }

    println!("\nTotal maps extracted: {}", all_records.len());
    for summary in team_summaries(&all_records) {
        println!(
            "{}: {} played, {} won, {} lost ({:.1}%)",
            summary.team, summary.maps_played, summary.maps_won, summary.maps_lost, summary.win_rate
        );
    }
}
