//! Remote data source adapters. Implement RemoteDataSource for the career backend.
//!
//! Provides the HTTP adapter and a mock adapter for offline runs and testing.

pub mod http_adapter;
pub mod mapper;
pub mod mock_adapter;

pub use http_adapter::HttpDataSource;
pub use mock_adapter::MockDataSource;
