use std::net::SocketAddr;

use log::trace;

use crate::errors::DecodeError;
use crate::fields::TemplateField;
use crate::messages::{DataFlowSet, FlowSet, NetflowHeader, NetflowMessage, TemplateFlowSet};
use crate::reader::ByteReader;

//the fixed v9 packet header
const HEADER_LEN: usize = 20;
//discriminator plus length prefix, already consumed when a record body starts
const RECORD_HEADER_LEN: u16 = 4;

/// Decodes one complete v9 datagram into a message. The whole buffer must
/// parse, a datagram that ends mid record or carries a lying record length
/// fails as a unit and no partial message comes back.
pub fn decode(
    datagram: &[u8],
    sender: SocketAddr,
    recipient: SocketAddr,
) -> Result<NetflowMessage, DecodeError> {
    let mut reader = ByteReader::new(datagram);

    let header = decode_header(&mut reader, sender, recipient)?;
    trace!("read {HEADER_LEN} bytes for header, {} remaining", reader.remaining());

    let mut flowsets: Vec<FlowSet> = Vec::new();
    //the header count is advisory, the loop runs until the buffer is spent
    while !reader.is_empty() {
        let flowset_id = reader.read_u16()?;
        trace!("processing flowset {flowset_id}");

        if flowset_id == 0 {
            let template = decode_template(&mut reader, flowset_id)?;
            flowsets.push(FlowSet::Template(template));
        } else {
            let data = decode_data(&mut reader, flowset_id)?;
            flowsets.push(FlowSet::Data(data));
        }
    }

    Ok(NetflowMessage::new(header, flowsets))
}

fn decode_header(
    reader: &mut ByteReader,
    sender: SocketAddr,
    recipient: SocketAddr,
) -> Result<NetflowHeader, DecodeError> {
    let mut input = reader.sub_reader(HEADER_LEN)?;

    let version = input.read_u16()?;
    let count = input.read_u16()?;
    let sys_uptime = input.read_u32()?;
    let timestamp = input.read_u32()?;
    let flow_sequence = input.read_u32()?;
    let source_id = input.read_u32()?;

    trace!(
        "version = {version} count = {count} sys_uptime = {sys_uptime} \
         timestamp = {timestamp} flow_sequence = {flow_sequence} source_id = {source_id}"
    );

    check_read_fully(&input)?;
    Ok(NetflowHeader {
        version,
        count,
        sys_uptime,
        timestamp,
        flow_sequence,
        source_id,
        sender,
        recipient,
    })
}

//reads the u16 record length and hands back the record body as a bounded
//sub reader, so body parsing can never cross the record boundary
fn record_body<'a>(
    reader: &mut ByteReader<'a>,
    flowset_id: u16,
) -> Result<ByteReader<'a>, DecodeError> {
    let length = reader.read_u16()?;
    if length < RECORD_HEADER_LEN {
        return Err(DecodeError::MalformedRecord { flowset_id, length });
    }
    trace!("flowset {flowset_id}: body is {} bytes", length - RECORD_HEADER_LEN);
    reader.sub_reader(usize::from(length - RECORD_HEADER_LEN))
}

fn decode_template(
    reader: &mut ByteReader,
    flowset_id: u16,
) -> Result<TemplateFlowSet, DecodeError> {
    let mut input = record_body(reader, flowset_id)?;

    let template_id = input.read_u16()?;
    let field_count = input.read_u16()?;
    trace!("template_id = {template_id} field_count = {field_count}");

    //the rest of the body must hold exactly the declared field pairs,
    //this is what catches a field count lying about the record length
    let declared = usize::from(field_count) * 4;
    if input.remaining() != declared {
        return Err(DecodeError::FramingError {
            unconsumed: input.remaining().abs_diff(declared),
        });
    }

    let mut fields = Vec::with_capacity(usize::from(field_count));
    for n in 1..=field_count {
        let field_type = input.read_u16()?;
        let field_length = input.read_u16()?;
        trace!("field({n}/{field_count}): type = {field_type} length = {field_length}");
        fields.push(TemplateField::new(field_type, field_length));
    }

    check_read_fully(&input)?;
    Ok(TemplateFlowSet {
        flowset_id,
        template_id,
        fields,
    })
}

fn decode_data(reader: &mut ByteReader, flowset_id: u16) -> Result<DataFlowSet, DecodeError> {
    let mut input = record_body(reader, flowset_id)?;

    //the payload stays raw, resolving it against a template is not this
    //crate's job
    let data = input.read_slice(input.remaining())?.to_vec();
    Ok(DataFlowSet { flowset_id, data })
}

fn check_read_fully(input: &ByteReader) -> Result<(), DecodeError> {
    if input.remaining() > 0 {
        return Err(DecodeError::FramingError {
            unconsumed: input.remaining(),
        });
    }
    Ok(())
}
