/// Reference to a transit stop, by canonical id or by display name.
///
/// The backend resolves either; ids are exact, names go through its own
/// fuzzy matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopRef {
    Id(String),
    Name(String),
}

impl StopRef {
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }
}

impl From<&str> for StopRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for StopRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Trip request: where from, where to, when to leave.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteQuery {
    pub from: StopRef,
    pub to: StopRef,
    /// Departure time as `HH:MM`.
    pub depart: String,
}

impl RouteQuery {
    /// Creates a query departing at the default `08:00`.
    pub fn new(from: impl Into<StopRef>, to: impl Into<StopRef>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            depart: "08:00".to_owned(),
        }
    }

    /// Sets the departure time (`HH:MM`).
    pub fn depart_at(mut self, depart: impl Into<String>) -> Self {
        self.depart = depart.into();
        self
    }
}

/// One vehicle leg of a planned trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteLeg {
    pub trip: Option<String>,
    pub headsign: Option<String>,
    /// Departure, minutes since midnight.
    pub departure_min: u32,
    /// Arrival, minutes since midnight.
    pub arrival_min: u32,
    pub from_id: Option<String>,
    pub from_name: String,
    pub to_id: Option<String>,
    pub to_name: String,
}

impl RouteLeg {
    /// Departure time formatted as `HH:MM`.
    pub fn departure_hhmm(&self) -> String {
        format_hhmm(self.departure_min)
    }

    /// Arrival time formatted as `HH:MM`.
    pub fn arrival_hhmm(&self) -> String {
        format_hhmm(self.arrival_min)
    }
}

/// A planned trip returned by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    pub legs: Vec<RouteLeg>,
    /// Total travel time in minutes.
    pub total_minutes: f64,
    pub transfers: u32,
}

fn format_hhmm(total_min: u32) -> String {
    format!("{:02}:{:02}", total_min / 60, total_min % 60)
}
