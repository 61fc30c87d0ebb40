//! Generators: search queries, clock-time lists and campaign rows

pub mod campaign;
pub mod locations;
pub mod query;
pub mod time_list;

pub use campaign::{
    CampaignCopyAction, CampaignField, CampaignLineItem, CampaignRequest, CampaignSheet,
    DEFAULT_EMAIL_CAP,
};
pub use locations::{HttpLocationSource, LocationSource, LocationUrls, Region};
pub use query::{format_queries, QueryGenerator};
pub use time_list::{generate_time_list, ClockTime, TimeSpec};
