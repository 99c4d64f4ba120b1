mod catalog_view;
mod comparison;
mod edge_cases;
mod error_cases;
mod session_flow;
