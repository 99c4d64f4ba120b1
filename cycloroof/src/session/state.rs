//! Session state and the controller operations that mutate it.
//!
//! A `Session` owns everything that changes while a user browses: the login
//! flag, the current page, the selected vehicle, the catalog query and the
//! comparison selection. The inventory and rental fleet are shared,
//! immutable data. Presentation code holds the session by value or `&mut`
//! and renders whatever [`Session::route`] returns.

use tracing::{debug, info};

use super::page::Page;
use crate::catalog::{
    CatalogView, ComparisonSelection, FuelType, Inventory, PriceRange, Query, SortKey, Vehicle,
};
use crate::error::CatalogResult;
use crate::rentals::{Rate, RentalDuration, RentalFleet};

/// What the router decided to show
#[derive(Debug)]
pub enum Screen<'a> {
    Login,
    Home,
    Catalog(CatalogView<'a>),
    Details(&'a Vehicle),
    /// Details page with no vehicle selected; renders nothing
    DetailsUnavailable,
    Compare(&'a ComparisonSelection),
    Rentals(&'a RentalFleet),
    /// Calculators, upcoming launches, warranty and about
    Static(Page),
}

impl Screen<'_> {
    pub const fn page(&self) -> Page {
        match self {
            Screen::Login => Page::Login,
            Screen::Home => Page::Home,
            Screen::Catalog(_) => Page::Catalog,
            Screen::Details(_) | Screen::DetailsUnavailable => Page::Details,
            Screen::Compare(_) => Page::Compare,
            Screen::Rentals(_) => Page::Rentals,
            Screen::Static(page) => *page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    inventory: Inventory,
    fleet: RentalFleet,
    query: Query,
    selection: ComparisonSelection,
    page: Page,
    selected_vehicle: Option<String>,
    logged_in: bool,
}

impl Session {
    /// Fresh session: logged out, default query, empty selection.
    pub fn new(inventory: Inventory, fleet: RentalFleet) -> Self {
        Self {
            inventory,
            fleet,
            query: Query::default(),
            selection: ComparisonSelection::new(),
            page: Page::Login,
            selected_vehicle: None,
            logged_in: false,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn fleet(&self) -> &RentalFleet {
        &self.fleet
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn selection(&self) -> &ComparisonSelection {
        &self.selection
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The page actually shown; everything is the login page while logged out.
    pub fn current_page(&self) -> Page {
        if self.logged_in {
            self.page
        } else {
            Page::Login
        }
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected_vehicle
            .as_deref()
            .and_then(|id| self.inventory.get(id))
    }

    /// Badge count next to the compare icon.
    pub fn compare_count(&self) -> usize {
        self.selection.len()
    }

    // ── Login gate ───────────────────────────────────────────────────

    pub fn login(&mut self) {
        self.logged_in = true;
        self.page = Page::Home;
        info!("Session logged in");
    }

    /// Back to the login page. The comparison selection is kept.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.page = Page::Login;
        info!("Session logged out");
    }

    // ── Routing ──────────────────────────────────────────────────────

    /// Switch page, optionally selecting a vehicle for the details page.
    /// An unknown vehicle id leaves the session untouched.
    pub fn navigate(&mut self, page: Page, vehicle_id: Option<&str>) -> CatalogResult<()> {
        if let Some(id) = vehicle_id {
            let vehicle = self.inventory.require(id)?;
            self.selected_vehicle = Some(vehicle.id.clone());
        }
        self.page = page;
        debug!("Navigated to {} (selected: {:?})", page, self.selected_vehicle);
        Ok(())
    }

    /// Resolve the current page into the data the view needs.
    pub fn route(&self) -> Screen<'_> {
        match self.current_page() {
            Page::Login => Screen::Login,
            Page::Home => Screen::Home,
            Page::Catalog => Screen::Catalog(self.view()),
            Page::Details => match self.selected_vehicle() {
                Some(vehicle) => Screen::Details(vehicle),
                None => Screen::DetailsUnavailable,
            },
            Page::Compare => Screen::Compare(&self.selection),
            Page::Rentals => Screen::Rentals(&self.fleet),
            page @ (Page::Calculators | Page::Upcoming | Page::Warranty | Page::About) => {
                Screen::Static(page)
            }
        }
    }

    // ── Catalog query ────────────────────────────────────────────────

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        debug!("Search term set to {:?}", self.query.search_term);
    }

    /// Set the price filter verbatim. Use [`PriceRange::from_slider`] first
    /// when the bounds come from slider thumbs.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.query.price_range = range;
        debug!("Price range set to {}..={}", range.min, range.max);
    }

    pub fn set_brand(&mut self, brand: Option<String>) {
        debug!("Brand filter set to {:?}", brand);
        self.query.brand = brand;
    }

    pub fn set_fuel_type(&mut self, fuel_type: Option<FuelType>) {
        self.query.fuel_type = fuel_type;
        debug!("Fuel filter set to {:?}", fuel_type);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.query.sort_key = sort_key;
        debug!("Sort key set to {}", sort_key);
    }

    pub fn reset_filters(&mut self) {
        self.query = Query::default();
        debug!("Catalog filters reset");
    }

    /// Recompute the catalog view for the current query.
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::new(self.inventory.vehicles(), &self.query)
    }

    // ── Comparison ───────────────────────────────────────────────────

    /// Add an inventory vehicle to the comparison. Returns `Ok(false)` when
    /// the selection is full or already holds it; unknown ids are errors.
    pub fn add_to_compare(&mut self, vehicle_id: &str) -> CatalogResult<bool> {
        let vehicle = self.inventory.require(vehicle_id)?.clone();
        let added = self.selection.add(vehicle);
        if added {
            info!(
                "Added vehicle {} to comparison ({} selected)",
                vehicle_id,
                self.selection.len()
            );
        } else {
            debug!(
                "Vehicle {} not added to comparison (full: {}, present: {})",
                vehicle_id,
                self.selection.is_full(),
                self.selection.contains(vehicle_id)
            );
        }
        Ok(added)
    }

    /// Returns whether anything was removed.
    pub fn remove_from_compare(&mut self, vehicle_id: &str) -> bool {
        let removed = self.selection.remove(vehicle_id);
        if removed {
            info!(
                "Removed vehicle {} from comparison ({} selected)",
                vehicle_id,
                self.selection.len()
            );
        }
        removed
    }

    pub fn clear_compare(&mut self) {
        self.selection.clear();
        info!("Comparison cleared");
    }

    // ── Rentals ──────────────────────────────────────────────────────

    /// Rate for a rental and an optional duration label (hourly fallback).
    pub fn rental_rate(&self, rental_id: &str, duration: Option<&str>) -> CatalogResult<Rate> {
        let rental = self.fleet.require(rental_id)?;
        Ok(rental.rate_or_hourly(duration.and_then(RentalDuration::from_label)))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Inventory::sample(), RentalFleet::sample())
    }
}
