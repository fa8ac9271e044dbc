use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::fields::TemplateField;

/// The fixed 20 byte header at the front of every v9 export packet, plus the
/// socket endpoints the datagram travelled between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetflowHeader {
    pub version: u16,
    //count is what the exporter claims it packed into the datagram, the
    //decoder never uses it to drive parsing
    pub count: u16,
    pub sys_uptime: u32,
    pub timestamp: u32,
    pub flow_sequence: u32,
    pub source_id: u32,
    pub sender: SocketAddr,
    pub recipient: SocketAddr,
}

/// A template definition, flowset id 0 on the wire. Field order matters, it
/// is the byte layout of the data records that reference this template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFlowSet {
    pub flowset_id: u16,
    pub template_id: u16,
    pub fields: Vec<TemplateField>,
}

/// A data record. The flowset id is the template id the payload claims to be
/// laid out as. The payload is kept raw, this crate does not resolve it
/// against a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFlowSet {
    pub flowset_id: u16,
    pub data: Vec<u8>,
}

/// One record of the datagram body, picked by the u16 discriminator at the
/// front of the record. Zero means template, anything else means data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowSet {
    Template(TemplateFlowSet),
    Data(DataFlowSet),
}

impl FlowSet {
    pub fn flowset_id(&self) -> u16 {
        match self {
            FlowSet::Template(template) => template.flowset_id,
            FlowSet::Data(data) => data.flowset_id,
        }
    }
}

/// A fully decoded datagram, header fields plus the flowsets in the order
/// they appeared on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetflowMessage {
    pub version: u16,
    pub count: u16,
    pub sys_uptime: u32,
    pub timestamp: u32,
    pub flow_sequence: u32,
    pub source_id: u32,
    pub sender: SocketAddr,
    pub recipient: SocketAddr,
    pub flowsets: Vec<FlowSet>,
}

impl NetflowMessage {
    pub fn new(header: NetflowHeader, flowsets: Vec<FlowSet>) -> Self {
        NetflowMessage {
            version: header.version,
            count: header.count,
            sys_uptime: header.sys_uptime,
            timestamp: header.timestamp,
            flow_sequence: header.flow_sequence,
            source_id: header.source_id,
            sender: header.sender,
            recipient: header.recipient,
            flowsets,
        }
    }
}
