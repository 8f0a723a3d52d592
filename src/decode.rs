use crate::{
    call::CallSuccess, wire, Itinerary, RouteLeg, RoutePlanError, RouteQuery, StopRef,
};

pub(crate) fn build_route_request(query: &RouteQuery) -> wire::RouteRequest {
    let (from_id, from_name) = split_stop_ref(&query.from);
    let (to_id, to_name) = split_stop_ref(&query.to);

    wire::RouteRequest {
        from_id,
        to_id,
        from_name,
        to_name,
        depart: query.depart.clone(),
    }
}

fn split_stop_ref(stop: &StopRef) -> (Option<String>, Option<String>) {
    match stop {
        StopRef::Id(id) => (Some(id.clone()), None),
        StopRef::Name(name) => (None, Some(name.clone())),
    }
}

pub(crate) fn decode_route_response(body: &str) -> Result<Itinerary, RoutePlanError> {
    let response: wire::RouteResponse = serde_json::from_str(body).map_err(|err| {
        RoutePlanError::Decode(format!("invalid route response JSON: {err}; body: {body}"))
    })?;

    if !response.ok {
        return Err(RoutePlanError::Api(
            response.error.unwrap_or_else(|| "no route found".to_owned()),
        ));
    }
    if response.legs.is_empty() {
        return Err(RoutePlanError::Decode(
            "route response contains no legs".to_owned(),
        ));
    }

    let legs = response.legs.into_iter().map(decode_leg).collect();
    Ok(Itinerary {
        legs,
        total_minutes: response.total,
        transfers: response.transfers,
    })
}

fn decode_leg(leg: wire::Leg) -> RouteLeg {
    RouteLeg {
        trip: leg.trip,
        headsign: leg.headsign,
        departure_min: leg.dep,
        arrival_min: leg.arr,
        from_id: leg.from_id,
        from_name: leg.from_name,
        to_id: leg.to_id,
        to_name: leg.to_name,
    }
}

/// Structural check used during endpoint discovery: the body parses as a
/// JSON object carrying the route envelope's boolean `ok` flag. Semantic
/// failures (`ok: false`) still count as the right endpoint.
pub(crate) fn looks_like_route_envelope(success: &CallSuccess) -> bool {
    serde_json::from_str::<serde_json::Value>(&success.body)
        .map(|value| value.get("ok").is_some_and(serde_json::Value::is_boolean))
        .unwrap_or(false)
}
