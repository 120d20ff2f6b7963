use rgl_api::RglClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> rgl_api::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "froyo".to_string());
    let client = RglClient::new();

    let results = client.search_teams(&query, 10, 0).await?;
    println!(
        "Found {} of {} teams matching {query:?}",
        results.count, results.total_hit_count
    );

    for team_id in results.ids() {
        let team = client.get_team(team_id).await?;
        println!("[{}] {} ({})", team.tag, team.name, team.division_name);
        for player in &team.players {
            let leader = if player.is_leader { " (leader)" } else { "" };
            println!("    {}{leader}", player.name);
        }
    }

    let bans = client.get_bans(5, 0).await?;
    println!("Latest bans:");
    for ban in bans {
        println!("    {} until {}: {}", ban.alias, ban.expires_at, ban.reason);
    }
    Ok(())
}
