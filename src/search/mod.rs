/// Photo filtering, quick search and event browsing
pub mod browse;
pub mod facets;
pub mod quick;

pub use browse::EventBrowseFilter;
pub use facets::{
    facet_options, filter_photos, stats, top_horse, FacetOption, FilterOptions, FilterState,
    ScopeStats, SearchScope, ALL,
};
pub use quick::{quick_search, QuickHit, QuickResults};
