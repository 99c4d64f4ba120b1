//! Line-oriented JSON protocol for driving a [`Session`].
//!
//! One `SessionCommand` per input line (tagged by `cmd`), one
//! `SessionResponse` per output line (tagged by `status`). The binary only
//! moves lines around; everything here is plain synchronous dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::page::{Page, NAV_ITEMS};
use super::state::{Screen, Session};
use crate::catalog::{parse_brand_filter, parse_fuel_filter, PriceRange, SortKey};
use crate::error::{CatalogError, CatalogResult};
use crate::format::format_price;

#[derive(Debug, Clone, Serialize)]
pub struct ReadyEvent {
    pub event: &'static str,
    pub vehicles: usize,
    pub rentals: usize,
}

impl ReadyEvent {
    pub fn for_session(session: &Session) -> Self {
        Self {
            event: "Ready",
            vehicles: session.inventory().len(),
            rentals: session.fleet().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd")]
pub enum SessionCommand {
    Login,
    Logout,
    Navigate {
        page: String,
        #[serde(default)]
        vehicle_id: Option<String>,
    },
    SetSearch {
        term: String,
    },
    /// Raw bounds; no clamping unless `slider` is set
    SetPriceRange {
        min: u64,
        max: u64,
        #[serde(default)]
        slider: bool,
    },
    SetBrand {
        #[serde(default)]
        brand: Option<String>,
    },
    SetFuelType {
        #[serde(default)]
        fuel_type: Option<String>,
    },
    SetSort {
        sort: String,
    },
    ResetFilters,
    View,
    AddToCompare {
        vehicle_id: String,
    },
    RemoveFromCompare {
        vehicle_id: String,
    },
    ClearCompare,
    Compare,
    RentalRate {
        rental_id: String,
        #[serde(default)]
        duration: Option<String>,
    },
    Route,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum SessionResponse {
    Ok { data: Option<Value> },
    Err { message: String },
}

impl SessionResponse {
    fn ok(data: Value) -> Self {
        SessionResponse::Ok { data: Some(data) }
    }

    const fn empty() -> Self {
        SessionResponse::Ok { data: None }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SessionResponse::Ok { .. })
    }
}

impl From<CatalogResult<SessionResponse>> for SessionResponse {
    fn from(result: CatalogResult<SessionResponse>) -> Self {
        result.unwrap_or_else(|e| SessionResponse::Err {
            message: e.to_string(),
        })
    }
}

/// Parse one protocol line.
pub fn parse_command(line: &str) -> CatalogResult<SessionCommand> {
    serde_json::from_str(line)
        .map_err(|e| CatalogError::Serialization(format!("invalid command: {e}")))
}

/// Apply a command to the session. Errors become `Err` responses; the
/// session is never left half-updated.
pub fn dispatch(session: &mut Session, command: SessionCommand) -> SessionResponse {
    apply(session, command).into()
}

fn apply(session: &mut Session, command: SessionCommand) -> CatalogResult<SessionResponse> {
    let response = match command {
        SessionCommand::Login => {
            session.login();
            SessionResponse::ok(json!({ "page": session.current_page() }))
        }
        SessionCommand::Logout => {
            session.logout();
            SessionResponse::ok(json!({ "page": session.current_page() }))
        }
        SessionCommand::Navigate { page, vehicle_id } => {
            let page: Page = page.parse()?;
            session.navigate(page, vehicle_id.as_deref())?;
            SessionResponse::ok(json!({ "page": session.current_page() }))
        }
        SessionCommand::SetSearch { term } => {
            session.set_search_term(term);
            view_response(session)
        }
        SessionCommand::SetPriceRange { min, max, slider } => {
            let range = if slider {
                PriceRange::from_slider(min, max)
            } else {
                PriceRange::new(min, max)
            };
            session.set_price_range(range);
            view_response(session)
        }
        SessionCommand::SetBrand { brand } => {
            session.set_brand(brand.as_deref().and_then(parse_brand_filter));
            view_response(session)
        }
        SessionCommand::SetFuelType { fuel_type } => {
            let fuel = match fuel_type.as_deref() {
                Some(value) => parse_fuel_filter(value)?,
                None => None,
            };
            session.set_fuel_type(fuel);
            view_response(session)
        }
        SessionCommand::SetSort { sort } => {
            let key: SortKey = sort.parse()?;
            session.set_sort_key(key);
            view_response(session)
        }
        SessionCommand::ResetFilters => {
            session.reset_filters();
            view_response(session)
        }
        SessionCommand::View => view_response(session),
        SessionCommand::AddToCompare { vehicle_id } => {
            let added = session.add_to_compare(&vehicle_id)?;
            selection_response(session, added)
        }
        SessionCommand::RemoveFromCompare { vehicle_id } => {
            let removed = session.remove_from_compare(&vehicle_id);
            selection_response(session, removed)
        }
        SessionCommand::ClearCompare => {
            let changed = !session.selection().is_empty();
            session.clear_compare();
            selection_response(session, changed)
        }
        SessionCommand::Compare => {
            let selection = session.selection();
            SessionResponse::ok(json!({
                "ids": selection.ids(),
                "table": selection.table(),
                "cheapest": selection.cheapest(),
                "best_mileage": selection.best_mileage(),
            }))
        }
        SessionCommand::RentalRate {
            rental_id,
            duration,
        } => {
            let rate = session.rental_rate(&rental_id, duration.as_deref())?;
            SessionResponse::ok(json!({
                "amount": rate.amount,
                "duration": rate.duration,
                "label": rate.to_string(),
            }))
        }
        SessionCommand::Route => route_response(session),
        SessionCommand::Shutdown => SessionResponse::empty(),
    };
    Ok(response)
}

fn view_response(session: &Session) -> SessionResponse {
    let view = session.view();
    let cards = view.cards(session.selection());
    SessionResponse::ok(json!({
        "ids": view.ids(),
        "shown": view.shown(),
        "total": view.total,
        "summary": view.summary(),
        "empty": view.is_empty(),
        "cards": cards,
    }))
}

fn selection_response(session: &Session, changed: bool) -> SessionResponse {
    SessionResponse::ok(json!({
        "changed": changed,
        "ids": session.selection().ids(),
        "count": session.compare_count(),
    }))
}

fn route_response(session: &Session) -> SessionResponse {
    let screen = session.route();
    let detail = match &screen {
        Screen::Login | Screen::Home | Screen::DetailsUnavailable | Screen::Static(_) => {
            Value::Null
        }
        Screen::Catalog(view) => json!({ "ids": view.ids(), "summary": view.summary() }),
        Screen::Details(vehicle) => json!({
            "vehicle": vehicle,
            "price": format_price(vehicle.price),
            "in_compare": session.selection().contains(&vehicle.id),
        }),
        Screen::Compare(selection) => json!({ "ids": selection.ids() }),
        Screen::Rentals(fleet) => json!({
            "ids": fleet.rentals().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            "locations": fleet.locations(),
            "starting_hourly_rate": fleet.starting_hourly_rate(),
        }),
    };
    let nav: Vec<&str> = NAV_ITEMS.iter().map(|item| item.label).collect();

    SessionResponse::ok(json!({
        "page": screen.page(),
        "detail": detail,
        "nav": nav,
        "compare_count": session.compare_count(),
    }))
}
