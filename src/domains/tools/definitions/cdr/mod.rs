//! Call Detail Record tools.

mod by_endpoint_group;

pub use by_endpoint_group::GetCdrsByEndpointGroupTool;
