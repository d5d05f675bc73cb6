pub mod limits;
pub mod request;
pub mod response;

pub use request::{Pagination, SearchRequest, SEARCH_PATH};
pub use response::{Envelope, SearchResponse, SearchResultItem};
