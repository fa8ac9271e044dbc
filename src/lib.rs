pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod fields;
pub mod messages;
pub mod reader;
pub mod server;
pub mod settings;
pub mod storage;
pub mod time;

pub use decoder::decode;
pub use encoder::encode;
pub use errors::DecodeError;
pub use messages::{DataFlowSet, FlowSet, NetflowHeader, NetflowMessage, TemplateFlowSet};

/////////////////////////////////////////////
//// EXAMPLE OF DECODING A SINGLE DATAGRAM
////
//
// let message = netflow_v9::decode(&datagram, sender, recipient)?;
// for flowset in &message.flowsets {
//     match flowset {
//         FlowSet::Template(t) => println!("template {} with {} fields", t.template_id, t.fields.len()),
//         FlowSet::Data(d) => println!("data for template {}, {} bytes", d.flowset_id, d.data.len()),
//     }
// }
//
/////////////////////////////////////////////
//// EXAMPLE OF RUNNING THE LISTENER
////
//
// let server_settings = ServerSettings::new("config.ini");
// let mut netflow_server = NetflowServer::new(&server_settings.addr_and_port());
// netflow_server.run(|message| {
//     println!("{} flowsets from {}", message.flowsets.len(), message.sender);
// });
//
/////////////////////////////////////////////
