//! Tool definitions module.
//!
//! This module exports all available tool definitions, one file per tool,
//! grouped by the dSIPRouter entity they operate on.

pub mod carrier;
pub mod cdr;
pub mod common;
pub mod endpoint;
pub mod inbound;
pub mod kamailio;
pub mod lease;

pub use carrier::{
    CreateCarrierGroupTool, DeleteCarrierGroupTool, GetCarrierGroupTool, ListCarrierGroupsTool,
    UpdateCarrierGroupTool,
};
pub use cdr::GetCdrsByEndpointGroupTool;
pub use endpoint::{
    CreateEndpointGroupTool, DeleteEndpointGroupTool, GetEndpointGroupTool,
    ListEndpointGroupsTool, UpdateEndpointGroupTool,
};
pub use inbound::{
    CreateInboundMappingTool, DeleteInboundMappingTool, GetInboundMappingTool,
    ListInboundMappingsTool, UpdateInboundMappingTool,
};
pub use kamailio::{GetKamailioStatsTool, ReloadKamailioTool};
pub use lease::{GetEndpointLeaseTool, RevokeEndpointLeaseTool};
