use routeplan_http::{RoutePlanClient, RouteQuery, StopRef, WarmupState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = RoutePlanClient::from_env().map_err(anyhow::Error::msg)?;

    let mut warmup = WarmupState::new();
    if !client.warm_up(&mut warmup).await {
        eprintln!("backend did not answer warm-up probes, trying anyway");
    }

    let query = RouteQuery::new("Stockholm Frihamnen", StopRef::name("T-Centralen"))
        .depart_at("08:00");
    let itinerary = client.plan_route(&query).await?;

    println!(
        "Total: {} min  ·  Transfers: {}",
        itinerary.total_minutes.round(),
        itinerary.transfers
    );
    for leg in &itinerary.legs {
        println!(
            "{} {}  →  {} {}  ({})",
            leg.departure_hhmm(),
            leg.from_name,
            leg.arrival_hhmm(),
            leg.to_name,
            leg.trip.as_deref().unwrap_or("walk"),
        );
    }

    Ok(())
}
