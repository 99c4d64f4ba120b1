use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Every screen the front-end can show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Login,
    Home,
    Catalog,
    Details,
    Compare,
    Calculators,
    Upcoming,
    Rentals,
    Warranty,
    About,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Login,
        Page::Home,
        Page::Catalog,
        Page::Details,
        Page::Compare,
        Page::Calculators,
        Page::Upcoming,
        Page::Rentals,
        Page::Warranty,
        Page::About,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Details => "details",
            Page::Compare => "compare",
            Page::Calculators => "calculators",
            Page::Upcoming => "upcoming",
            Page::Rentals => "rentals",
            Page::Warranty => "warranty",
            Page::About => "about",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| CatalogError::Parse(format!("unknown page '{s}'")))
    }
}

/// Entry in the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
}

/// Menu entries in display order. Compare and logout live outside the menu.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        page: Page::Home,
        label: "Home",
    },
    NavItem {
        page: Page::Catalog,
        label: "Browse Bikes",
    },
    NavItem {
        page: Page::Calculators,
        label: "Calculators",
    },
    NavItem {
        page: Page::Upcoming,
        label: "Upcoming Launches",
    },
    NavItem {
        page: Page::Rentals,
        label: "Rentals",
    },
    NavItem {
        page: Page::Warranty,
        label: "Warranty & Support",
    },
    NavItem {
        page: Page::About,
        label: "About Cycloroof",
    },
];
