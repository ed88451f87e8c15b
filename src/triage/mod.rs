//! Pure derivation of the board's field values from already-fetched data.
//! Nothing in this module touches the network.

mod contributor;
mod features;
mod size;

pub use contributor::{
    author_label, prior_contributions, ContributorType, FIRST_TIME_CONTRIBUTOR_LABEL,
};
pub use features::feature_string;
pub use size::SizeCategory;
