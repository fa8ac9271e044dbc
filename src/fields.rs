use serde::{Deserialize, Serialize};

/// One (type, length) pair out of a template flowset. The type code comes
/// from the NetFlow/IPFIX information element registry and is carried as an
/// opaque number, the decoder never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    pub field_type: u16,
    pub field_length: u16,
}

impl TemplateField {
    pub fn new(field_type: u16, field_length: u16) -> Self {
        TemplateField {
            field_type,
            field_length,
        }
    }
}

//type codes for the common v9 fields
//best resource for cisco flexible netflow fields
//https://www.cisco.com/en/US/technologies/tk648/tk362/technologies_white_paper09186a00800a3db9.html
pub mod field_types {
    pub const IN_BYTES: u16 = 1;
    pub const IN_PKTS: u16 = 2;
    pub const FLOWS: u16 = 3;
    pub const PROTOCOL: u16 = 4;
    pub const SRC_TOS: u16 = 5;
    pub const TCP_FLAGS: u16 = 6;
    pub const L4_SRC_PORT: u16 = 7;
    pub const IPV4_SRC_ADDR: u16 = 8;
    pub const SRC_MASK: u16 = 9;
    pub const INPUT_SNMP: u16 = 10;
    pub const L4_DST_PORT: u16 = 11;
    pub const IPV4_DST_ADDR: u16 = 12;
    pub const DST_MASK: u16 = 13;
    pub const OUTPUT_SNMP: u16 = 14;
    pub const IPV4_NEXT_HOP: u16 = 15;
}
