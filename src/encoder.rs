use crate::messages::{DataFlowSet, FlowSet, NetflowMessage, TemplateFlowSet};

/// Serializes a message back to wire bytes. The inverse of decode, handy for
/// building fixtures and for checking that a decoded datagram reproduces its
/// input byte for byte. The advisory header count is written back verbatim.
pub fn encode(message: &NetflowMessage) -> Vec<u8> {
    let mut bytes = Vec::new();

    bytes.extend_from_slice(&message.version.to_be_bytes());
    bytes.extend_from_slice(&message.count.to_be_bytes());
    bytes.extend_from_slice(&message.sys_uptime.to_be_bytes());
    bytes.extend_from_slice(&message.timestamp.to_be_bytes());
    bytes.extend_from_slice(&message.flow_sequence.to_be_bytes());
    bytes.extend_from_slice(&message.source_id.to_be_bytes());

    for flowset in &message.flowsets {
        match flowset {
            FlowSet::Template(template) => encode_template(&mut bytes, template),
            FlowSet::Data(data) => encode_data(&mut bytes, data),
        }
    }

    bytes
}

fn encode_template(bytes: &mut Vec<u8>, template: &TemplateFlowSet) {
    bytes.extend_from_slice(&template.flowset_id.to_be_bytes());

    //4 record header bytes + template id + field count + the field pairs
    let length = 8 + 4 * template.fields.len() as u16;
    bytes.extend_from_slice(&length.to_be_bytes());

    bytes.extend_from_slice(&template.template_id.to_be_bytes());
    bytes.extend_from_slice(&(template.fields.len() as u16).to_be_bytes());

    for field in &template.fields {
        bytes.extend_from_slice(&field.field_type.to_be_bytes());
        bytes.extend_from_slice(&field.field_length.to_be_bytes());
    }
}

fn encode_data(bytes: &mut Vec<u8>, data: &DataFlowSet) {
    bytes.extend_from_slice(&data.flowset_id.to_be_bytes());

    let length = (data.data.len() + 4) as u16;
    bytes.extend_from_slice(&length.to_be_bytes());

    bytes.extend_from_slice(&data.data);
}
