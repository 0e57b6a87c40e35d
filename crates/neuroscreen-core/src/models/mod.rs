pub mod context;
pub mod profile;
pub mod recommendation;
pub mod response;
pub mod result;
pub mod warning;
